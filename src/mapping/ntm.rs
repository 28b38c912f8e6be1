use std::fmt;

use crate::{sim::SimulationObject, EntityType, ObjectClass, PlayerId};

/// Constructor capability for one class of simulation object. Registered with
/// an NTM during configuration load; process-wide and read-only afterwards.
pub type SimObjectFactory = Box<dyn Fn(PlayerId) -> Box<dyn SimulationObject> + Send + Sync>;

// Ntm

/// A Network Type Mapper entry: associates an entity type (possibly
/// wildcarded in its deeper fields) with the object class and factory that
/// produce the matching local player.
pub struct Ntm {
    entity_type: EntityType,
    object_class: ObjectClass,
    factory: SimObjectFactory,
}

impl Ntm {
    pub fn new(entity_type: EntityType, object_class: ObjectClass, factory: SimObjectFactory) -> Self {
        Self {
            entity_type,
            object_class,
            factory,
        }
    }

    pub fn entity_type(&self) -> EntityType {
        self.entity_type
    }

    pub fn object_class(&self) -> ObjectClass {
        self.object_class
    }

    /// Constructs a bare player of this entry's class. The federation mails
    /// attribute updates separately, so the object carries no state yet.
    pub fn create_object(&self, id: PlayerId) -> Box<dyn SimulationObject> {
        (self.factory)(id)
    }
}

impl fmt::Debug for Ntm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ntm")
            .field("entity_type", &self.entity_type)
            .field("object_class", &self.object_class)
            .finish()
    }
}
