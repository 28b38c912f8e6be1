use std::collections::HashMap;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use fedsync::{
    AttributeHandle, AttributeSet, EntityType, InteractionClassHandle, NetIo, Ntm, ObjectClass,
    ObjectClassHandle, ObjectHandle, ParameterHandle, ParameterSet, PlayerId, RegistrationPolicy,
    Runtime, RuntimeError, SimulationObject,
};

// MockRuntime

/// Test double for the federation runtime: hands out sequential handles,
/// records every publish/subscribe/register/send call, and can be told to
/// fail name resolution or specific calls.
pub struct MockRuntime {
    next_handle: u64,
    object_classes: HashMap<String, ObjectClassHandle>,
    attributes: HashMap<(ObjectClassHandle, String), AttributeHandle>,
    interactions: HashMap<String, InteractionClassHandle>,
    parameters: HashMap<(InteractionClassHandle, String), ParameterHandle>,
    pub published_classes: Vec<ObjectClassHandle>,
    pub subscribed_classes: Vec<ObjectClassHandle>,
    pub published_interactions: Vec<InteractionClassHandle>,
    pub registered: Vec<(ObjectClassHandle, String)>,
    pub deleted: Vec<ObjectHandle>,
    pub sent: Vec<(InteractionClassHandle, ParameterSet)>,
    pub unknown_names: Vec<String>,
    pub fail_register: bool,
    pub fail_send: bool,
}

impl MockRuntime {
    pub fn new() -> Self {
        Self {
            next_handle: 1,
            object_classes: HashMap::new(),
            attributes: HashMap::new(),
            interactions: HashMap::new(),
            parameters: HashMap::new(),
            published_classes: Vec::new(),
            subscribed_classes: Vec::new(),
            published_interactions: Vec::new(),
            registered: Vec::new(),
            deleted: Vec::new(),
            sent: Vec::new(),
            unknown_names: Vec::new(),
            fail_register: false,
            fail_send: false,
        }
    }

    fn allocate(&mut self) -> u64 {
        let handle = self.next_handle;
        self.next_handle += 1;
        handle
    }

    fn check_name(&self, name: &str) -> Result<(), RuntimeError> {
        if self.unknown_names.iter().any(|unknown| unknown == name) {
            return Err(RuntimeError::UnknownName {
                name: name.to_string(),
            });
        }
        Ok(())
    }
}

impl Runtime for MockRuntime {
    fn object_class_handle(&mut self, name: &str) -> Result<ObjectClassHandle, RuntimeError> {
        self.check_name(name)?;
        if let Some(handle) = self.object_classes.get(name) {
            return Ok(*handle);
        }
        let handle = ObjectClassHandle::new(self.allocate());
        self.object_classes.insert(name.to_string(), handle);
        Ok(handle)
    }

    fn attribute_handle(
        &mut self,
        class: ObjectClassHandle,
        name: &str,
    ) -> Result<AttributeHandle, RuntimeError> {
        self.check_name(name)?;
        let key = (class, name.to_string());
        if let Some(handle) = self.attributes.get(&key) {
            return Ok(*handle);
        }
        let handle = AttributeHandle::new(self.allocate());
        self.attributes.insert(key, handle);
        Ok(handle)
    }

    fn interaction_class_handle(
        &mut self,
        name: &str,
    ) -> Result<InteractionClassHandle, RuntimeError> {
        self.check_name(name)?;
        if let Some(handle) = self.interactions.get(name) {
            return Ok(*handle);
        }
        let handle = InteractionClassHandle::new(self.allocate());
        self.interactions.insert(name.to_string(), handle);
        Ok(handle)
    }

    fn parameter_handle(
        &mut self,
        class: InteractionClassHandle,
        name: &str,
    ) -> Result<ParameterHandle, RuntimeError> {
        self.check_name(name)?;
        let key = (class, name.to_string());
        if let Some(handle) = self.parameters.get(&key) {
            return Ok(*handle);
        }
        let handle = ParameterHandle::new(self.allocate());
        self.parameters.insert(key, handle);
        Ok(handle)
    }

    fn publish_object_class(
        &mut self,
        class: ObjectClassHandle,
        _attributes: &[AttributeHandle],
    ) -> Result<(), RuntimeError> {
        self.published_classes.push(class);
        Ok(())
    }

    fn subscribe_object_class(
        &mut self,
        class: ObjectClassHandle,
        _attributes: &[AttributeHandle],
    ) -> Result<(), RuntimeError> {
        self.subscribed_classes.push(class);
        Ok(())
    }

    fn publish_interaction(&mut self, class: InteractionClassHandle) -> Result<(), RuntimeError> {
        self.published_interactions.push(class);
        Ok(())
    }

    fn subscribe_interaction(&mut self, _class: InteractionClassHandle) -> Result<(), RuntimeError> {
        Ok(())
    }

    fn register_object(
        &mut self,
        class: ObjectClassHandle,
        name: &str,
    ) -> Result<ObjectHandle, RuntimeError> {
        if self.fail_register {
            return Err(RuntimeError::CallRejected {
                operation: "register_object",
            });
        }
        let handle = ObjectHandle::new(self.allocate());
        self.registered.push((class, name.to_string()));
        Ok(handle)
    }

    fn delete_object(&mut self, handle: ObjectHandle) -> Result<(), RuntimeError> {
        self.deleted.push(handle);
        Ok(())
    }

    fn send_interaction(
        &mut self,
        class: InteractionClassHandle,
        parameters: &ParameterSet,
    ) -> Result<(), RuntimeError> {
        if self.fail_send {
            return Err(RuntimeError::CallRejected {
                operation: "send_interaction",
            });
        }
        self.sent.push((class, parameters.clone()));
        Ok(())
    }
}

// Test players

/// Local player with a settable class, launcher, and target.
pub struct TestPlayer {
    pub id: PlayerId,
    pub object_class: ObjectClass,
    pub entity_type: EntityType,
    pub position: [f64; 3],
    pub velocity: [f32; 3],
    pub launcher: Option<PlayerId>,
    pub target: Option<PlayerId>,
}

impl TestPlayer {
    pub fn new(id: u64, object_class: ObjectClass, entity_type: EntityType) -> Self {
        Self {
            id: PlayerId::new(id),
            object_class,
            entity_type,
            position: [6_378_137.0, 0.0, 0.0],
            velocity: [100.0, 0.0, -5.0],
            launcher: None,
            target: None,
        }
    }
}

impl SimulationObject for TestPlayer {
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
        self.position
    }

    fn geocentric_velocity(&self) -> [f32; 3] {
        self.velocity
    }

    fn altitude_meters(&self) -> f64 {
        0.0
    }

    fn reconcile(&mut self, _attributes: &AttributeSet) {}

    fn launcher(&self) -> Option<PlayerId> {
        self.launcher
    }

    fn target(&self) -> Option<PlayerId> {
        self.target
    }
}

/// Player constructed by an NTM factory for a discovered remote entity;
/// counts reconcile calls through a shared counter so tests can observe the
/// per-cycle update.
pub struct MirroredPlayer {
    pub id: PlayerId,
    pub object_class: ObjectClass,
    pub entity_type: EntityType,
    pub reconciles: Arc<AtomicUsize>,
}

impl SimulationObject for MirroredPlayer {
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

    fn reconcile(&mut self, _attributes: &AttributeSet) {
        self.reconciles.fetch_add(1, Ordering::SeqCst);
    }
}

pub fn mirrored_ntm(
    entity_type: EntityType,
    object_class: ObjectClass,
    reconciles: Arc<AtomicUsize>,
) -> Ntm {
    Ntm::new(
        entity_type,
        object_class,
        Box::new(move |id| {
            Box::new(MirroredPlayer {
                id,
                object_class,
                entity_type,
                reconciles: Arc::clone(&reconciles),
            })
        }),
    )
}

/// A coordinator with publish/subscribe already completed against a
/// fully-cooperative mock runtime.
pub fn ready_net_io() -> NetIo<MockRuntime> {
    let mut net_io = NetIo::new(MockRuntime::new(), "fed", RegistrationPolicy::new());
    net_io
        .publish_and_subscribe()
        .expect("publish and subscribe");
    net_io
}
