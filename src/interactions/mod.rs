//! Interaction classes and their parameter-set marshaling.

mod munition_detonation;
mod weapon_fire;

pub use munition_detonation::DetonationParameter;
pub use weapon_fire::{build_weapon_fire_parameters, WeaponFireData, WeaponFireParameter};

// InteractionClass

/// The closed set of interaction classes this federate exchanges.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum InteractionClass {
    WeaponFire,
    MunitionDetonation,
}

impl InteractionClass {
    pub const COUNT: usize = 2;

    pub const ALL: [InteractionClass; Self::COUNT] = [
        InteractionClass::WeaponFire,
        InteractionClass::MunitionDetonation,
    ];

    /// Federation interaction class name, resolved to a handle during
    /// publish/subscribe setup.
    pub fn class_name(&self) -> &'static str {
        match self {
            InteractionClass::WeaponFire => "WeaponFire",
            InteractionClass::MunitionDetonation => "MunitionDetonation",
        }
    }
}
