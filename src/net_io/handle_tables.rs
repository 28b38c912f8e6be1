use std::collections::HashMap;

use crate::{
    interactions::{DetonationParameter, InteractionClass, WeaponFireParameter},
    net_io::NetIoError,
    AttributeHandle, InteractionClassHandle, ObjectClassHandle, ParameterHandle,
    ObjectClass,
};

// AttributeKind

/// The attribute set exchanged for every physical-entity object class.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum AttributeKind {
    EntityType,
    EntityIdentifier,
    WorldLocation,
    VelocityVector,
    Orientation,
    DamageState,
}

impl AttributeKind {
    pub const COUNT: usize = 6;

    pub const ALL: [AttributeKind; Self::COUNT] = [
        AttributeKind::EntityType,
        AttributeKind::EntityIdentifier,
        AttributeKind::WorldLocation,
        AttributeKind::VelocityVector,
        AttributeKind::Orientation,
        AttributeKind::DamageState,
    ];

    pub fn attribute_name(&self) -> &'static str {
        match self {
            AttributeKind::EntityType => "EntityType",
            AttributeKind::EntityIdentifier => "EntityIdentifier",
            AttributeKind::WorldLocation => "WorldLocation",
            AttributeKind::VelocityVector => "VelocityVector",
            AttributeKind::Orientation => "Orientation",
            AttributeKind::DamageState => "DamageState",
        }
    }
}

// HandleTables

/// Object-class, attribute, interaction-class, and parameter handle tables.
///
/// Populated once during publish/subscribe setup and immutable thereafter;
/// reads are lock-free. An object class absent from the table is an
/// *unavailable* class (an optional class whose setup failed, silently
/// skipped by later creation attempts). Reverse lookups serve callback
/// dispatch.
pub struct HandleTables {
    object_classes: HashMap<ObjectClass, ObjectClassHandle>,
    object_class_reverse: HashMap<ObjectClassHandle, ObjectClass>,
    attributes: HashMap<(ObjectClass, AttributeKind), AttributeHandle>,
    attribute_reverse: HashMap<AttributeHandle, AttributeKind>,
    interactions: HashMap<InteractionClass, InteractionClassHandle>,
    interaction_reverse: HashMap<InteractionClassHandle, InteractionClass>,
    weapon_fire_parameters: HashMap<WeaponFireParameter, ParameterHandle>,
    weapon_fire_reverse: HashMap<ParameterHandle, WeaponFireParameter>,
    detonation_parameters: HashMap<DetonationParameter, ParameterHandle>,
    detonation_reverse: HashMap<ParameterHandle, DetonationParameter>,
}

impl HandleTables {
    pub(crate) fn new() -> Self {
        Self {
            object_classes: HashMap::new(),
            object_class_reverse: HashMap::new(),
            attributes: HashMap::new(),
            attribute_reverse: HashMap::new(),
            interactions: HashMap::new(),
            interaction_reverse: HashMap::new(),
            weapon_fire_parameters: HashMap::new(),
            weapon_fire_reverse: HashMap::new(),
            detonation_parameters: HashMap::new(),
            detonation_reverse: HashMap::new(),
        }
    }

    pub(crate) fn insert_object_class(&mut self, class: ObjectClass, handle: ObjectClassHandle) {
        self.object_classes.insert(class, handle);
        self.object_class_reverse.insert(handle, class);
    }

    pub(crate) fn insert_attribute(
        &mut self,
        class: ObjectClass,
        kind: AttributeKind,
        handle: AttributeHandle,
    ) {
        self.attributes.insert((class, kind), handle);
        self.attribute_reverse.insert(handle, kind);
    }

    pub(crate) fn insert_interaction(
        &mut self,
        class: InteractionClass,
        handle: InteractionClassHandle,
    ) {
        self.interactions.insert(class, handle);
        self.interaction_reverse.insert(handle, class);
    }

    pub(crate) fn insert_weapon_fire_parameter(
        &mut self,
        parameter: WeaponFireParameter,
        handle: ParameterHandle,
    ) {
        self.weapon_fire_parameters.insert(parameter, handle);
        self.weapon_fire_reverse.insert(handle, parameter);
    }

    pub(crate) fn insert_detonation_parameter(
        &mut self,
        parameter: DetonationParameter,
        handle: ParameterHandle,
    ) {
        self.detonation_parameters.insert(parameter, handle);
        self.detonation_reverse.insert(handle, parameter);
    }

    /// True once the class resolved its handle during setup.
    pub fn is_available(&self, class: ObjectClass) -> bool {
        self.object_classes.contains_key(&class)
    }

    pub fn object_class_handle(&self, class: ObjectClass) -> Result<ObjectClassHandle, NetIoError> {
        self.object_classes
            .get(&class)
            .copied()
            .ok_or(NetIoError::ClassUnavailable { class })
    }

    pub fn object_class_for(&self, handle: ObjectClassHandle) -> Option<ObjectClass> {
        self.object_class_reverse.get(&handle).copied()
    }

    pub fn attribute_handle(
        &self,
        class: ObjectClass,
        kind: AttributeKind,
    ) -> Option<AttributeHandle> {
        self.attributes.get(&(class, kind)).copied()
    }

    pub fn attribute_kind_for(&self, handle: AttributeHandle) -> Option<AttributeKind> {
        self.attribute_reverse.get(&handle).copied()
    }

    pub fn interaction_handle(
        &self,
        class: InteractionClass,
    ) -> Result<InteractionClassHandle, NetIoError> {
        self.interactions
            .get(&class)
            .copied()
            .ok_or(NetIoError::InteractionUnavailable { class })
    }

    pub fn interaction_for(&self, handle: InteractionClassHandle) -> Option<InteractionClass> {
        self.interaction_reverse.get(&handle).copied()
    }

    pub fn weapon_fire_parameter(
        &self,
        parameter: WeaponFireParameter,
    ) -> Result<ParameterHandle, NetIoError> {
        self.weapon_fire_parameters
            .get(&parameter)
            .copied()
            .ok_or(NetIoError::ParameterUnavailable {
                name: parameter.parameter_name(),
            })
    }

    pub fn weapon_fire_parameter_for(&self, handle: ParameterHandle) -> Option<WeaponFireParameter> {
        self.weapon_fire_reverse.get(&handle).copied()
    }

    pub fn detonation_parameter(
        &self,
        parameter: DetonationParameter,
    ) -> Result<ParameterHandle, NetIoError> {
        self.detonation_parameters
            .get(&parameter)
            .copied()
            .ok_or(NetIoError::ParameterUnavailable {
                name: parameter.parameter_name(),
            })
    }

    pub fn detonation_parameter_for(&self, handle: ParameterHandle) -> Option<DetonationParameter> {
        self.detonation_reverse.get(&handle).copied()
    }
}
