//! Fixed-layout federation wire structures.
//!
//! Every multi-byte field is transmitted in network byte order regardless of
//! host endianness, and every layout is bit-exact: decode rejects a buffer of
//! the wrong length rather than guessing.

pub mod error;
mod structs;

pub use error::WireError;
pub use structs::{
    decode_entity_type, encode_entity_type, EventIdentifier, ObjectId, VelocityVector,
    WorldLocation, ENTITY_TYPE_SIZE, OBJECT_ID_SIZE,
};
