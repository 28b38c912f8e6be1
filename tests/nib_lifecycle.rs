mod common;

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use fedsync::{
    encode_entity_type, AttributeKind, EntityType, NibDirection, ObjectClass, ObjectClassHandle,
    ObjectHandle,
};

use common::{mirrored_ntm, ready_net_io, TestPlayer};

const AIRCRAFT_TYPE: EntityType = EntityType::new(1, 2, 225, 1, 0, 0, 0);

#[test]
fn discovery_creates_one_input_nib() {
    let mut net_io = ready_net_io();
    let class = net_io
        .tables()
        .object_class_handle(ObjectClass::Aircraft)
        .expect("class handle");

    net_io.discover_object_instance(ObjectHandle::new(100), class, "remote.1");
    net_io.process_frame();

    assert_eq!(net_io.nibs().input_len(), 1);
    let nib = net_io
        .nibs()
        .nib_by_handle(ObjectHandle::new(100))
        .expect("indexed");
    assert_eq!(nib.direction(), NibDirection::Input);
    assert_eq!(nib.object_name(), "remote.1");
    assert_eq!(nib.object_class(), Some(ObjectClass::Aircraft));
    // No attribute update yet, so no mirrored player either.
    assert!(nib.player().is_none());
}

#[test]
fn duplicate_discovery_is_ignored() {
    let mut net_io = ready_net_io();
    let class = net_io
        .tables()
        .object_class_handle(ObjectClass::Aircraft)
        .expect("class handle");

    net_io.discover_object_instance(ObjectHandle::new(100), class, "remote.1");
    net_io.process_frame();
    net_io.discover_object_instance(ObjectHandle::new(100), class, "remote.1-again");
    net_io.process_frame();

    assert_eq!(net_io.nibs().input_len(), 1);
    let nib = net_io
        .nibs()
        .nib_by_handle(ObjectHandle::new(100))
        .expect("indexed");
    assert_eq!(nib.object_name(), "remote.1");
}

#[test]
fn unrecognized_class_is_skipped() {
    let mut net_io = ready_net_io();

    net_io.discover_object_instance(
        ObjectHandle::new(100),
        ObjectClassHandle::new(9999),
        "mystery",
    );
    net_io.process_frame();

    assert_eq!(net_io.nibs().input_len(), 0);
    assert!(net_io.nibs().nib_by_handle(ObjectHandle::new(100)).is_none());
}

#[test]
fn entity_type_arrival_builds_and_reconciles_player() {
    let mut net_io = ready_net_io();
    let reconciles = Arc::new(AtomicUsize::new(0));
    net_io
        .add_ntm(mirrored_ntm(
            AIRCRAFT_TYPE,
            ObjectClass::Aircraft,
            Arc::clone(&reconciles),
        ))
        .expect("ntm");

    let class = net_io
        .tables()
        .object_class_handle(ObjectClass::Aircraft)
        .expect("class handle");
    let type_attribute = net_io
        .tables()
        .attribute_handle(ObjectClass::Aircraft, AttributeKind::EntityType)
        .expect("attribute handle");

    net_io.discover_object_instance(ObjectHandle::new(100), class, "remote.1");
    net_io.reflect_attribute_values(
        ObjectHandle::new(100),
        vec![(type_attribute, encode_entity_type(&AIRCRAFT_TYPE).to_vec())],
    );
    // Both queued notifications drain before the input list is processed,
    // so one frame discovers, classifies, and reconciles.
    net_io.process_frame();

    let nib = net_io
        .nibs()
        .nib_by_handle(ObjectHandle::new(100))
        .expect("indexed");
    assert_eq!(nib.entity_type(), AIRCRAFT_TYPE);
    let player_id = nib.player().expect("player bound");
    let player = net_io.input_player(player_id).expect("player owned");
    assert_eq!(player.object_class(), ObjectClass::Aircraft);
    assert_eq!(reconciles.load(Ordering::SeqCst), 1);

    // No new attributes, no further reconciliation.
    net_io.process_frame();
    assert_eq!(reconciles.load(Ordering::SeqCst), 1);
}

#[test]
fn unresolvable_type_leaves_tracked_placeholder() {
    let mut net_io = ready_net_io();
    let class = net_io
        .tables()
        .object_class_handle(ObjectClass::Aircraft)
        .expect("class handle");
    let type_attribute = net_io
        .tables()
        .attribute_handle(ObjectClass::Aircraft, AttributeKind::EntityType)
        .expect("attribute handle");

    // No NTM registered at all: classification must fail.
    net_io.discover_object_instance(ObjectHandle::new(100), class, "remote.1");
    net_io.reflect_attribute_values(
        ObjectHandle::new(100),
        vec![(type_attribute, encode_entity_type(&AIRCRAFT_TYPE).to_vec())],
    );
    net_io.process_frame();

    let nib = net_io
        .nibs()
        .nib_by_handle(ObjectHandle::new(100))
        .expect("still tracked");
    assert!(nib.player().is_none());

    // Removal still dispatches for the placeholder.
    net_io.remove_object_instance(ObjectHandle::new(100));
    net_io.process_frame();
    assert_eq!(net_io.nibs().input_len(), 0);
}

#[test]
fn removal_tears_down_nib_and_player() {
    let mut net_io = ready_net_io();
    net_io
        .add_ntm(mirrored_ntm(
            AIRCRAFT_TYPE,
            ObjectClass::Aircraft,
            Arc::new(AtomicUsize::new(0)),
        ))
        .expect("ntm");
    let class = net_io
        .tables()
        .object_class_handle(ObjectClass::Aircraft)
        .expect("class handle");
    let type_attribute = net_io
        .tables()
        .attribute_handle(ObjectClass::Aircraft, AttributeKind::EntityType)
        .expect("attribute handle");

    net_io.discover_object_instance(ObjectHandle::new(100), class, "remote.1");
    net_io.reflect_attribute_values(
        ObjectHandle::new(100),
        vec![(type_attribute, encode_entity_type(&AIRCRAFT_TYPE).to_vec())],
    );
    net_io.process_frame();

    let player_id = net_io
        .nibs()
        .nib_by_handle(ObjectHandle::new(100))
        .and_then(|nib| nib.player())
        .expect("player bound");

    net_io.remove_object_instance(ObjectHandle::new(100));
    net_io.process_frame();

    assert_eq!(net_io.nibs().input_len(), 0);
    assert!(net_io.nibs().nib_by_handle(ObjectHandle::new(100)).is_none());
    assert!(net_io.input_player(player_id).is_none());
}

#[test]
fn disabled_class_never_reaches_the_network() {
    let mut net_io = ready_net_io();
    let player = TestPlayer::new(1, ObjectClass::Aircraft, AIRCRAFT_TYPE);

    // Disabled by policy: stays purely local.
    let mut policy = net_io.policy().clone();
    policy.set_enabled(ObjectClass::Aircraft, false);
    let mut gated = fedsync::NetIo::new(common::MockRuntime::new(), "fed", policy);
    gated.publish_and_subscribe().expect("setup");
    assert!(gated.create_new_output_nib(&player).is_none());
    assert_eq!(gated.nibs().output_len(), 0);

    // Enabled: NIB created and queued for registration.
    assert!(net_io.create_new_output_nib(&player).is_some());
    assert_eq!(net_io.nibs().output_len(), 1);
}

#[test]
fn output_registration_is_retryable() {
    let mut net_io = ready_net_io();
    net_io.runtime_mut().fail_register = true;

    let player = TestPlayer::new(1, ObjectClass::Aircraft, AIRCRAFT_TYPE);
    let nib_id = net_io.create_new_output_nib(&player).expect("output nib");

    // Registration fails; the NIB survives unregistered.
    net_io.process_frame();
    assert!(!net_io.nibs().get(nib_id).expect("nib").is_registered());

    // Next cycle the runtime recovers and the retry succeeds.
    net_io.runtime_mut().fail_register = false;
    net_io.process_frame();
    let nib = net_io.nibs().get(nib_id).expect("nib");
    assert!(nib.is_registered());
    assert!(nib.object_handle().is_some());
    assert_eq!(net_io.runtime().registered.len(), 1);
}

#[test]
fn output_removal_deregisters_from_runtime() {
    let mut net_io = ready_net_io();
    let player = TestPlayer::new(1, ObjectClass::Aircraft, AIRCRAFT_TYPE);
    let nib_id = net_io.create_new_output_nib(&player).expect("output nib");
    net_io.process_frame();

    let handle = net_io
        .nibs()
        .get(nib_id)
        .and_then(|nib| nib.object_handle())
        .expect("registered");

    net_io.remove_output_player(player.id);
    assert_eq!(net_io.nibs().output_len(), 0);
    assert_eq!(net_io.runtime().deleted, vec![handle]);
}
