// DetonationParameter

/// The subset of munition-detonation parameters this federate decodes on
/// receive: enough to correlate a detonation back to the fire event and to
/// place it in the world.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum DetonationParameter {
    EventIdentifier,
    DetonationLocation,
    MunitionObjectIdentifier,
    MunitionType,
}

impl DetonationParameter {
    pub const COUNT: usize = 4;

    pub const ALL: [DetonationParameter; Self::COUNT] = [
        DetonationParameter::EventIdentifier,
        DetonationParameter::DetonationLocation,
        DetonationParameter::MunitionObjectIdentifier,
        DetonationParameter::MunitionType,
    ];

    pub fn parameter_name(&self) -> &'static str {
        match self {
            DetonationParameter::EventIdentifier => "EventIdentifier",
            DetonationParameter::DetonationLocation => "DetonationLocation",
            DetonationParameter::MunitionObjectIdentifier => "MunitionObjectIdentifier",
            DetonationParameter::MunitionType => "MunitionType",
        }
    }
}
