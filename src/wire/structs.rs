use std::fmt;

use crate::{wire::WireError, EntityType, EventId};

/// Size of the federate-unique object identifier field, bytes.
pub const OBJECT_ID_SIZE: usize = 64;

/// Size of the entity-type wire structure, bytes.
pub const ENTITY_TYPE_SIZE: usize = 8;

// ObjectId

/// Fixed-size, NUL-padded object identifier string; federate-unique.
#[derive(PartialEq, Eq, Hash, Clone, Copy)]
pub struct ObjectId {
    id: [u8; OBJECT_ID_SIZE],
}

impl ObjectId {
    /// Builds an identifier from an object name, truncating to the fixed
    /// field size and NUL-padding the remainder.
    pub fn from_name(name: &str) -> Self {
        let mut id = [0u8; OBJECT_ID_SIZE];
        let bytes = name.as_bytes();
        let len = bytes.len().min(OBJECT_ID_SIZE);
        id[..len].copy_from_slice(&bytes[..len]);
        Self { id }
    }

    pub fn encode(&self) -> [u8; OBJECT_ID_SIZE] {
        self.id
    }

    pub fn decode(buffer: &[u8]) -> Result<Self, WireError> {
        if buffer.len() != OBJECT_ID_SIZE {
            return Err(WireError::LengthMismatch {
                what: "ObjectId",
                expected: OBJECT_ID_SIZE,
                got: buffer.len(),
            });
        }
        let mut id = [0u8; OBJECT_ID_SIZE];
        id.copy_from_slice(buffer);
        Ok(Self { id })
    }

    /// The identifier up to (not including) its first NUL byte.
    pub fn as_name(&self) -> &str {
        let end = self
            .id
            .iter()
            .position(|byte| *byte == 0)
            .unwrap_or(OBJECT_ID_SIZE);
        std::str::from_utf8(&self.id[..end]).unwrap_or("")
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({:?})", self.as_name())
    }
}

// EventIdentifier

/// Wire structure correlating a fire event with its issuing object:
/// a 16-bit event count followed by the issuing object's identifier.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct EventIdentifier {
    pub event_count: EventId,
    pub issuing_object_id: ObjectId,
}

impl EventIdentifier {
    pub const SIZE: usize = 2 + OBJECT_ID_SIZE;

    pub fn new(event_count: EventId, issuing_object_name: &str) -> Self {
        Self {
            event_count,
            issuing_object_id: ObjectId::from_name(issuing_object_name),
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::SIZE);
        out.extend_from_slice(&self.event_count.to_be_bytes());
        out.extend_from_slice(&self.issuing_object_id.encode());
        out
    }

    pub fn decode(buffer: &[u8]) -> Result<Self, WireError> {
        if buffer.len() != Self::SIZE {
            return Err(WireError::LengthMismatch {
                what: "EventIdentifier",
                expected: Self::SIZE,
                got: buffer.len(),
            });
        }
        let event_count = u16::from_be_bytes([buffer[0], buffer[1]]);
        let issuing_object_id = ObjectId::decode(&buffer[2..])?;
        Ok(Self {
            event_count,
            issuing_object_id,
        })
    }
}

// WorldLocation

/// Geocentric world position, meters.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct WorldLocation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl WorldLocation {
    pub const SIZE: usize = 24;

    pub fn new(position: [f64; 3]) -> Self {
        Self {
            x: position[0],
            y: position[1],
            z: position[2],
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::SIZE);
        out.extend_from_slice(&self.x.to_be_bytes());
        out.extend_from_slice(&self.y.to_be_bytes());
        out.extend_from_slice(&self.z.to_be_bytes());
        out
    }

    pub fn decode(buffer: &[u8]) -> Result<Self, WireError> {
        if buffer.len() != Self::SIZE {
            return Err(WireError::LengthMismatch {
                what: "WorldLocation",
                expected: Self::SIZE,
                got: buffer.len(),
            });
        }
        let mut field = [0u8; 8];
        field.copy_from_slice(&buffer[0..8]);
        let x = f64::from_be_bytes(field);
        field.copy_from_slice(&buffer[8..16]);
        let y = f64::from_be_bytes(field);
        field.copy_from_slice(&buffer[16..24]);
        let z = f64::from_be_bytes(field);
        Ok(Self { x, y, z })
    }
}

// VelocityVector

/// Geocentric velocity, meters/second.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct VelocityVector {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl VelocityVector {
    pub const SIZE: usize = 12;

    pub fn new(velocity: [f32; 3]) -> Self {
        Self {
            x: velocity[0],
            y: velocity[1],
            z: velocity[2],
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::SIZE);
        out.extend_from_slice(&self.x.to_be_bytes());
        out.extend_from_slice(&self.y.to_be_bytes());
        out.extend_from_slice(&self.z.to_be_bytes());
        out
    }

    pub fn decode(buffer: &[u8]) -> Result<Self, WireError> {
        if buffer.len() != Self::SIZE {
            return Err(WireError::LengthMismatch {
                what: "VelocityVector",
                expected: Self::SIZE,
                got: buffer.len(),
            });
        }
        let mut field = [0u8; 4];
        field.copy_from_slice(&buffer[0..4]);
        let x = f32::from_be_bytes(field);
        field.copy_from_slice(&buffer[4..8]);
        let y = f32::from_be_bytes(field);
        field.copy_from_slice(&buffer[8..12]);
        let z = f32::from_be_bytes(field);
        Ok(Self { x, y, z })
    }
}

// EntityType codec

/// Encodes the 7-field entity type into its 8-byte wire structure; only the
/// country code is multi-byte and goes out in network order.
pub fn encode_entity_type(entity_type: &EntityType) -> [u8; ENTITY_TYPE_SIZE] {
    let country = entity_type.country.to_be_bytes();
    [
        entity_type.kind,
        entity_type.domain,
        country[0],
        country[1],
        entity_type.category,
        entity_type.subcategory,
        entity_type.specific,
        entity_type.extra,
    ]
}

pub fn decode_entity_type(buffer: &[u8]) -> Result<EntityType, WireError> {
    if buffer.len() != ENTITY_TYPE_SIZE {
        return Err(WireError::LengthMismatch {
            what: "EntityType",
            expected: ENTITY_TYPE_SIZE,
            got: buffer.len(),
        });
    }
    Ok(EntityType::new(
        buffer[0],
        buffer[1],
        u16::from_be_bytes([buffer[2], buffer[3]]),
        buffer[4],
        buffer[5],
        buffer[6],
        buffer[7],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_id_truncates_and_pads() {
        let short = ObjectId::from_name("fed.12");
        assert_eq!(short.as_name(), "fed.12");
        assert_eq!(short.encode()[6], 0);

        let long_name = "x".repeat(OBJECT_ID_SIZE + 10);
        let long = ObjectId::from_name(&long_name);
        assert_eq!(long.as_name().len(), OBJECT_ID_SIZE);
    }

    #[test]
    fn event_identifier_round_trip_is_network_order() {
        let event = EventIdentifier::new(0x0102, "fed.3");
        let bytes = event.encode();
        assert_eq!(bytes.len(), EventIdentifier::SIZE);
        assert_eq!(&bytes[0..2], &[0x01, 0x02]);

        let back = EventIdentifier::decode(&bytes).expect("decode");
        assert_eq!(back, event);
    }

    #[test]
    fn world_location_round_trip() {
        let location = WorldLocation::new([1.5, -2.5, 6_378_137.0]);
        let back = WorldLocation::decode(&location.encode()).expect("decode");
        assert_eq!(back, location);
    }

    #[test]
    fn entity_type_wire_layout() {
        let entity_type = EntityType::new(2, 1, 0x0159, 4, 5, 6, 7);
        let bytes = encode_entity_type(&entity_type);
        assert_eq!(bytes, [2, 1, 0x01, 0x59, 4, 5, 6, 7]);
        assert_eq!(decode_entity_type(&bytes).expect("decode"), entity_type);
    }

    #[test]
    fn decode_rejects_wrong_length() {
        let result = WorldLocation::decode(&[0u8; 23]);
        assert_eq!(
            result,
            Err(WireError::LengthMismatch {
                what: "WorldLocation",
                expected: 24,
                got: 23,
            })
        );
    }
}
