#![cfg(test)]

use crate::{
    mapping::MappingError, runtime::AttributeSet, EntityType, Ntm, NtmInputNode, ObjectClass,
    PlayerId, SimulationObject,
};

struct StubObject {
    id: PlayerId,
    object_class: ObjectClass,
    entity_type: EntityType,
}

impl SimulationObject for StubObject {
    fn id(&self) -> PlayerId {
        self.id
    }

    fn object_class(&self) -> ObjectClass {
        self.object_class
    }

    fn entity_type(&self) -> EntityType {
        self.entity_type
    }

    fn geocentric_position(&self) -> [f64; 3] {
        [0.0; 3]
    }

    fn geocentric_velocity(&self) -> [f32; 3] {
        [0.0; 3]
    }

    fn altitude_meters(&self) -> f64 {
        0.0
    }

    fn reconcile(&mut self, _attributes: &AttributeSet) {}
}

fn ntm(entity_type: EntityType, object_class: ObjectClass) -> Ntm {
    Ntm::new(
        entity_type,
        object_class,
        Box::new(move |id| {
            Box::new(StubObject {
                id,
                object_class,
                entity_type,
            })
        }),
    )
}

#[test]
fn wildcard_insert_and_find() {
    let mut root = NtmInputNode::root();
    let wildcard = EntityType::wildcard(1, 2, 3, 4);
    root.insert(ntm(wildcard, ObjectClass::Aircraft))
        .expect("insert wildcard");

    // Any deeper fields resolve to the category-level wildcard.
    let probe = EntityType::new(1, 2, 3, 4, 9, 9, 9);
    let found = root.find(&probe).expect("wildcard fallback");
    assert_eq!(found.entity_type(), wildcard);
}

#[test]
fn duplicate_wildcard_is_rejected_first_wins() {
    let mut root = NtmInputNode::root();
    let wildcard = EntityType::wildcard(1, 2, 3, 4);
    root.insert(ntm(wildcard, ObjectClass::Aircraft))
        .expect("first insert");

    let result = root.insert(ntm(wildcard, ObjectClass::Munition));
    assert_eq!(
        result,
        Err(MappingError::DuplicateNtm {
            entity_type: wildcard
        })
    );

    // First-registered entry survives.
    let found = root.find(&wildcard).expect("still present");
    assert_eq!(found.object_class(), ObjectClass::Aircraft);
}

#[test]
fn duplicate_specific_terminal_is_rejected() {
    let mut root = NtmInputNode::root();
    let specific = EntityType::new(1, 2, 3, 4, 5, 6, 7);
    root.insert(ntm(specific, ObjectClass::Munition))
        .expect("first insert");

    let result = root.insert(ntm(specific, ObjectClass::Aircraft));
    assert_eq!(
        result,
        Err(MappingError::DuplicateNtm {
            entity_type: specific
        })
    );
}

#[test]
fn specific_match_beats_shallower_wildcard() {
    let mut root = NtmInputNode::root();
    let wildcard = EntityType::wildcard(1, 2, 3, 4);
    let specific = EntityType::new(1, 2, 3, 4, 5, 6, 7);
    root.insert(ntm(wildcard, ObjectClass::Aircraft))
        .expect("insert wildcard");
    root.insert(ntm(specific, ObjectClass::Munition))
        .expect("insert specific");

    let exact = root.find(&specific).expect("specific entry");
    assert_eq!(exact.entity_type(), specific);
    assert_eq!(exact.object_class(), ObjectClass::Munition);

    let fallback = root
        .find(&EntityType::new(1, 2, 3, 4, 9, 9, 9))
        .expect("wildcard entry");
    assert_eq!(fallback.entity_type(), wildcard);
}

#[test]
fn unmatched_category_resolves_to_none() {
    let mut root = NtmInputNode::root();
    root.insert(ntm(EntityType::wildcard(1, 2, 3, 4), ObjectClass::Aircraft))
        .expect("insert");

    // Kind/domain/country match an existing chain but the category does not;
    // the minimum resolvable precision is kind+domain+country+category.
    assert!(root.find(&EntityType::new(1, 2, 3, 9, 0, 0, 0)).is_none());
}

#[test]
fn partial_wildcard_at_subcategory_level() {
    let mut root = NtmInputNode::root();
    // Subcategory given, specific/extra zero: wildcard terminal one level
    // below category.
    let entry = EntityType::new(1, 2, 3, 4, 5, 0, 0);
    root.insert(ntm(entry, ObjectClass::GroundVehicle))
        .expect("insert");

    let found = root
        .find(&EntityType::new(1, 2, 3, 4, 5, 8, 8))
        .expect("subcategory wildcard");
    assert_eq!(found.entity_type(), entry);

    // A different subcategory does not reach it.
    assert!(root.find(&EntityType::new(1, 2, 3, 4, 6, 0, 0)).is_none());
}

#[test]
fn sibling_entries_do_not_shadow_each_other() {
    let mut root = NtmInputNode::root();
    let first = EntityType::new(1, 2, 3, 4, 5, 6, 7);
    let second = EntityType::new(1, 2, 3, 4, 5, 6, 8);
    root.insert(ntm(first, ObjectClass::Munition)).expect("first");
    root.insert(ntm(second, ObjectClass::Munition)).expect("second");

    assert_eq!(root.find(&first).expect("first").entity_type(), first);
    assert_eq!(root.find(&second).expect("second").entity_type(), second);
}

#[test]
fn factory_constructs_object_of_registered_class() {
    let mut root = NtmInputNode::root();
    let entity_type = EntityType::wildcard(1, 2, 225, 1);
    root.insert(ntm(entity_type, ObjectClass::Aircraft))
        .expect("insert");

    let entry = root.find(&entity_type).expect("entry");
    let object = entry.create_object(PlayerId::new(7));
    assert_eq!(object.id(), PlayerId::new(7));
    assert_eq!(object.object_class(), ObjectClass::Aircraft);
}
