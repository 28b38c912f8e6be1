use crate::{runtime::AttributeSet, EntityType, EventId, NibId, ObjectClass, ObjectHandle, PlayerId};

// NibDirection

/// Whether a NIB mirrors a remote entity locally or a local entity remotely.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum NibDirection {
    /// Remote entity mirrored into the local simulation.
    Input,
    /// Local entity exposed to the federation.
    Output,
}

// NibMode

/// One-shot interaction gate. A NIB starts `Inactive`; its owning event
/// (e.g. weapon release) flips it to `Active` after the first successful
/// send so the event is not re-sent every simulation tick.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum NibMode {
    Inactive,
    Active,
}

// Nib

/// A Network Interface Block: the per-entity mirror record bridging local
/// simulation state and federation identity.
///
/// The link to the player it mirrors is a `PlayerId` table key, never a raw
/// back-pointer; the [`NibMap`](crate::NibMap) owns both directions of that
/// association. An input NIB whose entity type never resolves stays an
/// unclassified placeholder: tracked (so removal still dispatches) but with
/// no player and no class.
#[derive(Debug)]
pub struct Nib {
    id: NibId,
    direction: NibDirection,
    object_class: Option<ObjectClass>,
    entity_type: EntityType,
    object_name: String,
    object_handle: Option<ObjectHandle>,
    player: Option<PlayerId>,
    registered: bool,
    mode: NibMode,
    fire_event_counter: EventId,
    last_fire_event: Option<EventId>,
    last_attributes: AttributeSet,
}

impl Nib {
    /// An input NIB as created at discovery time: handle and class are known,
    /// the entity type and player arrive later via attribute updates.
    pub(crate) fn new_input(
        id: NibId,
        object_class: Option<ObjectClass>,
        object_handle: ObjectHandle,
        object_name: &str,
    ) -> Self {
        Self {
            id,
            direction: NibDirection::Input,
            object_class,
            entity_type: EntityType::default(),
            object_name: object_name.to_string(),
            object_handle: Some(object_handle),
            player: None,
            registered: false,
            mode: NibMode::Inactive,
            fire_event_counter: 0,
            last_fire_event: None,
            last_attributes: AttributeSet::new(),
        }
    }

    /// An output NIB wrapping a local player. Runtime registration (handle
    /// assignment) is a separate, retryable step.
    pub(crate) fn new_output(
        id: NibId,
        object_class: ObjectClass,
        entity_type: EntityType,
        object_name: String,
        player: PlayerId,
    ) -> Self {
        Self {
            id,
            direction: NibDirection::Output,
            object_class: Some(object_class),
            entity_type,
            object_name,
            object_handle: None,
            player: Some(player),
            registered: false,
            mode: NibMode::Inactive,
            fire_event_counter: 0,
            last_fire_event: None,
            last_attributes: AttributeSet::new(),
        }
    }

    pub fn id(&self) -> NibId {
        self.id
    }

    pub fn direction(&self) -> NibDirection {
        self.direction
    }

    pub fn object_class(&self) -> Option<ObjectClass> {
        self.object_class
    }

    pub fn entity_type(&self) -> EntityType {
        self.entity_type
    }

    pub(crate) fn set_entity_type(&mut self, entity_type: EntityType) {
        self.entity_type = entity_type;
    }

    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    pub fn object_handle(&self) -> Option<ObjectHandle> {
        self.object_handle
    }

    pub(crate) fn set_object_handle(&mut self, handle: ObjectHandle) {
        self.object_handle = Some(handle);
    }

    pub fn player(&self) -> Option<PlayerId> {
        self.player
    }

    pub(crate) fn set_player(&mut self, player: PlayerId) {
        self.player = Some(player);
    }

    pub fn is_registered(&self) -> bool {
        self.registered
    }

    pub(crate) fn set_registered(&mut self, registered: bool) {
        self.registered = registered;
    }

    pub fn mode(&self) -> NibMode {
        self.mode
    }

    pub(crate) fn set_mode(&mut self, mode: NibMode) {
        self.mode = mode;
    }

    /// Advances and returns the NIB-local event counter, wrapping at the
    /// wire field's 16-bit width.
    pub(crate) fn next_fire_event(&mut self) -> EventId {
        self.fire_event_counter = self.fire_event_counter.wrapping_add(1);
        self.fire_event_counter
    }

    /// The event id of the last fire sent or received through this NIB,
    /// kept for fire-to-detonation correlation.
    pub fn last_fire_event(&self) -> Option<EventId> {
        self.last_fire_event
    }

    pub(crate) fn set_last_fire_event(&mut self, event: EventId) {
        self.last_fire_event = Some(event);
    }

    /// Stores the most recently received attribute values, replacing any
    /// not-yet-reconciled set.
    pub(crate) fn store_attributes(&mut self, attributes: AttributeSet) {
        self.last_attributes = attributes;
    }

    pub(crate) fn take_attributes(&mut self) -> AttributeSet {
        std::mem::take(&mut self.last_attributes)
    }

    pub fn has_pending_attributes(&self) -> bool {
        !self.last_attributes.is_empty()
    }
}
