use crate::{
    net_io::{HandleTables, NetIoError},
    runtime::ParameterSet,
    wire::{encode_entity_type, EventIdentifier, ObjectId, VelocityVector, WorldLocation},
    EntityType, EventId,
};

// WeaponFireParameter

/// The fixed parameter layout of the weapon-fire interaction.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum WeaponFireParameter {
    EventIdentifier,
    FiringLocation,
    InitialVelocityVector,
    MunitionObjectIdentifier,
    FiringObjectIdentifier,
    TargetObjectIdentifier,
    MunitionType,
    FireControlSolutionRange,
    FireMissionIndex,
    FuseType,
    QuantityFired,
    RateOfFire,
    WarheadType,
}

impl WeaponFireParameter {
    pub const COUNT: usize = 13;

    pub const ALL: [WeaponFireParameter; Self::COUNT] = [
        WeaponFireParameter::EventIdentifier,
        WeaponFireParameter::FiringLocation,
        WeaponFireParameter::InitialVelocityVector,
        WeaponFireParameter::MunitionObjectIdentifier,
        WeaponFireParameter::FiringObjectIdentifier,
        WeaponFireParameter::TargetObjectIdentifier,
        WeaponFireParameter::MunitionType,
        WeaponFireParameter::FireControlSolutionRange,
        WeaponFireParameter::FireMissionIndex,
        WeaponFireParameter::FuseType,
        WeaponFireParameter::QuantityFired,
        WeaponFireParameter::RateOfFire,
        WeaponFireParameter::WarheadType,
    ];

    pub fn parameter_name(&self) -> &'static str {
        match self {
            WeaponFireParameter::EventIdentifier => "EventIdentifier",
            WeaponFireParameter::FiringLocation => "FiringLocation",
            WeaponFireParameter::InitialVelocityVector => "InitialVelocityVector",
            WeaponFireParameter::MunitionObjectIdentifier => "MunitionObjectIdentifier",
            WeaponFireParameter::FiringObjectIdentifier => "FiringObjectIdentifier",
            WeaponFireParameter::TargetObjectIdentifier => "TargetObjectIdentifier",
            WeaponFireParameter::MunitionType => "MunitionType",
            WeaponFireParameter::FireControlSolutionRange => "FireControlSolutionRange",
            WeaponFireParameter::FireMissionIndex => "FireMissionIndex",
            WeaponFireParameter::FuseType => "FuseType",
            WeaponFireParameter::QuantityFired => "QuantityFired",
            WeaponFireParameter::RateOfFire => "RateOfFire",
            WeaponFireParameter::WarheadType => "WarheadType",
        }
    }
}

// Fixed wire enumerants for the fields this simulation does not model.
const FUSE_TYPE_OTHER: u16 = 0;
const WARHEAD_TYPE_OTHER: u16 = 0;

// WeaponFireData

/// Everything the marshaler needs, already resolved by the coordinator:
/// the event id, the munition's state, and the object identifiers. A firing
/// or target player that could not be resolved to any NIB stays `None` and
/// its identifier parameter is simply omitted from the set.
pub struct WeaponFireData<'a> {
    pub event: EventId,
    pub munition_name: &'a str,
    pub munition_type: EntityType,
    pub position: [f64; 3],
    pub velocity: [f32; 3],
    pub firing_name: Option<&'a str>,
    pub target_name: Option<&'a str>,
}

/// Builds the weapon-fire parameter set in federation wire format.
///
/// Layout per parameter: the event identifier pairs the NIB-local event
/// count with the munition's own object name as issuing object; position and
/// velocity are geocentric; range, fire-mission index, fuse, quantity, rate
/// of fire, and warhead are fixed or zero-filled fields the wire format
/// requires but this simulation does not model.
pub fn build_weapon_fire_parameters(
    tables: &HandleTables,
    data: &WeaponFireData<'_>,
) -> Result<ParameterSet, NetIoError> {
    let mut parameters = ParameterSet::with_capacity(WeaponFireParameter::COUNT);

    let event_identifier = EventIdentifier::new(data.event, data.munition_name);
    parameters.push((
        tables.weapon_fire_parameter(WeaponFireParameter::EventIdentifier)?,
        event_identifier.encode(),
    ));

    parameters.push((
        tables.weapon_fire_parameter(WeaponFireParameter::FiringLocation)?,
        WorldLocation::new(data.position).encode(),
    ));
    parameters.push((
        tables.weapon_fire_parameter(WeaponFireParameter::InitialVelocityVector)?,
        VelocityVector::new(data.velocity).encode(),
    ));

    parameters.push((
        tables.weapon_fire_parameter(WeaponFireParameter::MunitionObjectIdentifier)?,
        ObjectId::from_name(data.munition_name).encode().to_vec(),
    ));

    if let Some(firing_name) = data.firing_name {
        parameters.push((
            tables.weapon_fire_parameter(WeaponFireParameter::FiringObjectIdentifier)?,
            ObjectId::from_name(firing_name).encode().to_vec(),
        ));
    }
    if let Some(target_name) = data.target_name {
        parameters.push((
            tables.weapon_fire_parameter(WeaponFireParameter::TargetObjectIdentifier)?,
            ObjectId::from_name(target_name).encode().to_vec(),
        ));
    }

    parameters.push((
        tables.weapon_fire_parameter(WeaponFireParameter::MunitionType)?,
        encode_entity_type(&data.munition_type).to_vec(),
    ));

    parameters.push((
        tables.weapon_fire_parameter(WeaponFireParameter::FireControlSolutionRange)?,
        0.0f32.to_be_bytes().to_vec(),
    ));
    parameters.push((
        tables.weapon_fire_parameter(WeaponFireParameter::FireMissionIndex)?,
        0u32.to_be_bytes().to_vec(),
    ));
    parameters.push((
        tables.weapon_fire_parameter(WeaponFireParameter::FuseType)?,
        FUSE_TYPE_OTHER.to_be_bytes().to_vec(),
    ));
    parameters.push((
        tables.weapon_fire_parameter(WeaponFireParameter::QuantityFired)?,
        1u16.to_be_bytes().to_vec(),
    ));
    parameters.push((
        tables.weapon_fire_parameter(WeaponFireParameter::RateOfFire)?,
        0u16.to_be_bytes().to_vec(),
    ));
    parameters.push((
        tables.weapon_fire_parameter(WeaponFireParameter::WarheadType)?,
        WARHEAD_TYPE_OTHER.to_be_bytes().to_vec(),
    ));

    Ok(parameters)
}
