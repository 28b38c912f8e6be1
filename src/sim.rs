use crate::{runtime::AttributeSet, EntityType, PlayerId};

// ObjectClass

/// The closed set of networked object classes this federate exchanges.
///
/// Everything in the synchronization layer keys off this enum (or its stable
/// `index()`): the handle tables, the registration policy, and the NTM
/// entries. There is deliberately no open-ended class registry and no
/// downcasting anywhere downstream of it.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum ObjectClass {
    Aircraft,
    GroundVehicle,
    Human,
    Munition,
    SurfaceVessel,
}

impl ObjectClass {
    pub const COUNT: usize = 5;

    pub const ALL: [ObjectClass; Self::COUNT] = [
        ObjectClass::Aircraft,
        ObjectClass::GroundVehicle,
        ObjectClass::Human,
        ObjectClass::Munition,
        ObjectClass::SurfaceVessel,
    ];

    /// Stable index used by the registration policy and the tests.
    pub fn index(&self) -> usize {
        match self {
            ObjectClass::Aircraft => 0,
            ObjectClass::GroundVehicle => 1,
            ObjectClass::Human => 2,
            ObjectClass::Munition => 3,
            ObjectClass::SurfaceVessel => 4,
        }
    }

    /// Fully-qualified federation object class name, resolved to a handle
    /// during publish/subscribe setup.
    pub fn class_name(&self) -> &'static str {
        match self {
            ObjectClass::Aircraft => "BaseEntity.PhysicalEntity.Platform.Aircraft",
            ObjectClass::GroundVehicle => "BaseEntity.PhysicalEntity.Platform.GroundVehicle",
            ObjectClass::Human => "BaseEntity.PhysicalEntity.LifeForm.Human",
            ObjectClass::Munition => "BaseEntity.PhysicalEntity.Munition",
            ObjectClass::SurfaceVessel => "BaseEntity.PhysicalEntity.Platform.SurfaceVessel",
        }
    }
}

// SimulationObject

/// The narrow contract the synchronization layer consumes from the local
/// simulation's movable objects ("players").
///
/// Dynamics, signatures, and everything else about a player live outside this
/// crate; the core only reads the state it has to marshal and pushes received
/// attribute values back in through `reconcile`.
pub trait SimulationObject: Send {
    fn id(&self) -> PlayerId;

    fn object_class(&self) -> ObjectClass;

    fn entity_type(&self) -> EntityType;

    /// Geocentric position, meters.
    fn geocentric_position(&self) -> [f64; 3];

    /// Geocentric velocity, meters/second.
    fn geocentric_velocity(&self) -> [f32; 3];

    fn altitude_meters(&self) -> f64;

    /// Reconcile local state from the most recently received attribute
    /// values. Called once per update cycle for every bound input player.
    fn reconcile(&mut self, attributes: &AttributeSet);

    /// The player that released this munition, if this object is a munition
    /// and the launcher is known.
    fn launcher(&self) -> Option<PlayerId> {
        None
    }

    /// The munition's intended target, if known.
    fn target(&self) -> Option<PlayerId> {
        None
    }
}
