//! # Fedsync
//! Entity-level network synchronization for HLA/DIS-style federated
//! simulations: entity-type classification, per-entity Network Interface
//! Blocks, and interaction marshaling, built atop an opaque federation
//! runtime.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod entity_type;
mod types;

pub mod interactions;
pub mod mapping;
pub mod net_io;
pub mod nib;
pub mod runtime;
pub mod sim;
pub mod wire;

pub use entity_type::EntityType;
pub use interactions::{
    build_weapon_fire_parameters, DetonationParameter, InteractionClass, WeaponFireData,
    WeaponFireParameter,
};
pub use mapping::{MappingError, Ntm, NtmInputNode, SimObjectFactory, TrieLevel};
pub use net_io::{
    AttributeKind, HandleTables, Inbound, InboundQueue, NetIo, NetIoError, RegistrationPolicy,
};
pub use nib::{Nib, NibDirection, NibError, NibMap, NibMode};
pub use runtime::{AttributeSet, ParameterSet, Runtime, RuntimeError};
pub use sim::{ObjectClass, SimulationObject};
pub use types::{
    AttributeHandle, EventId, InteractionClassHandle, NibId, ObjectClassHandle, ObjectHandle,
    ParameterHandle, PlayerId,
};
pub use wire::{
    decode_entity_type, encode_entity_type, EventIdentifier, ObjectId, VelocityVector, WireError,
    WorldLocation, ENTITY_TYPE_SIZE, OBJECT_ID_SIZE,
};
