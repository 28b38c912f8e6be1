use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, info, warn};

use crate::{
    interactions::{
        build_weapon_fire_parameters, DetonationParameter, InteractionClass, WeaponFireData,
        WeaponFireParameter,
    },
    mapping::{MappingError, Ntm, NtmInputNode},
    net_io::{AttributeKind, HandleTables, Inbound, InboundQueue, NetIoError},
    nib::{Nib, NibMap, NibMode},
    runtime::{AttributeSet, ParameterSet, Runtime, RuntimeError},
    sim::SimulationObject,
    wire::{decode_entity_type, EventIdentifier, ObjectId},
    AttributeHandle, EntityType, InteractionClassHandle, NibId, ObjectClass, ObjectClassHandle,
    ObjectHandle, PlayerId,
};

/// Discovered players are allocated ids from a reserved range so they can
/// never collide with locally assigned player ids.
const INPUT_PLAYER_ID_BASE: u64 = 1 << 48;

/// Default capacity of the pending inbound queue.
const INBOUND_QUEUE_CAPACITY: usize = 1024;

// RegistrationPolicy

/// Per-class policy controlling which local object classes are exposed to
/// the federation, and which classes are required for startup.
///
/// A disabled class keeps its objects purely local: `create_new_output_nib`
/// returns `None` and nothing ever appears on the network for them. A
/// required class that fails handle resolution makes `publish_and_subscribe`
/// fail fast; optional classes proceed best-effort.
#[derive(Clone, Debug)]
pub struct RegistrationPolicy {
    enabled: [bool; ObjectClass::COUNT],
    required: [bool; ObjectClass::COUNT],
}

impl RegistrationPolicy {
    pub fn new() -> Self {
        let mut policy = Self {
            enabled: [true; ObjectClass::COUNT],
            required: [false; ObjectClass::COUNT],
        };
        policy.set_required(ObjectClass::Aircraft, true);
        policy.set_required(ObjectClass::Munition, true);
        policy
    }

    pub fn set_enabled(&mut self, class: ObjectClass, enabled: bool) {
        self.enabled[class.index()] = enabled;
    }

    pub fn is_enabled(&self, class: ObjectClass) -> bool {
        self.enabled[class.index()]
    }

    pub fn set_required(&mut self, class: ObjectClass, required: bool) {
        self.required[class.index()] = required;
    }

    pub fn is_required(&self, class: ObjectClass) -> bool {
        self.required[class.index()]
    }
}

impl Default for RegistrationPolicy {
    fn default() -> Self {
        Self::new()
    }
}

// NetIo

/// The per-federation coordinator.
///
/// Owns the type-resolution trie, the handle tables, the NIB map, the
/// players constructed for discovered remote entities, and the pending
/// inbound queue. Runtime callbacks enqueue; the simulation cycle calls
/// [`process_frame`](NetIo::process_frame), which drains all queued inbound
/// notifications before any outbound work.
pub struct NetIo<R: Runtime> {
    runtime: R,
    federate_name: String,
    ntm_root: NtmInputNode,
    tables: HandleTables,
    policy: RegistrationPolicy,
    nibs: NibMap,
    input_players: HashMap<PlayerId, Box<dyn SimulationObject>>,
    inbound: Arc<InboundQueue>,
    next_input_player: u64,
    setup_done: bool,
}

impl<R: Runtime> NetIo<R> {
    pub fn new(runtime: R, federate_name: &str, policy: RegistrationPolicy) -> Self {
        Self {
            runtime,
            federate_name: federate_name.to_string(),
            ntm_root: NtmInputNode::root(),
            tables: HandleTables::new(),
            policy,
            nibs: NibMap::new(),
            input_players: HashMap::new(),
            inbound: Arc::new(InboundQueue::new(INBOUND_QUEUE_CAPACITY)),
            next_input_player: INPUT_PLAYER_ID_BASE,
            setup_done: false,
        }
    }

    // ---- configuration ----

    /// Registers an NTM entry into the type-resolution trie. A duplicate is
    /// discarded (first-registered wins) and reported; it is not fatal.
    pub fn add_ntm(&mut self, ntm: Ntm) -> Result<(), MappingError> {
        self.ntm_root.insert(ntm)
    }

    /// Resolves an entity type to its best-matching NTM entry.
    pub fn find_ntm_by_type_codes(&self, entity_type: &EntityType) -> Option<&Ntm> {
        self.ntm_root.find(entity_type)
    }

    pub fn policy(&self) -> &RegistrationPolicy {
        &self.policy
    }

    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut R {
        &mut self.runtime
    }

    pub fn tables(&self) -> &HandleTables {
        &self.tables
    }

    pub fn nibs(&self) -> &NibMap {
        &self.nibs
    }

    pub fn input_player(&self, id: PlayerId) -> Option<&dyn SimulationObject> {
        self.input_players.get(&id).map(|player| player.as_ref())
    }

    /// Handle for delivering runtime callbacks from another thread.
    pub fn inbound_handle(&self) -> Arc<InboundQueue> {
        Arc::clone(&self.inbound)
    }

    // ---- setup ----

    /// One-time publish/subscribe setup: resolves every class, attribute,
    /// interaction, and parameter handle into the tables, then issues the
    /// publish/subscribe registrations.
    ///
    /// Fails fast when a *required* object class or any interaction class
    /// cannot be set up; optional object classes proceed best-effort and
    /// stay unavailable, so later creation attempts skip them silently.
    pub fn publish_and_subscribe(&mut self) -> Result<(), NetIoError> {
        for class in ObjectClass::ALL {
            match self.setup_object_class(class) {
                Ok(()) => {}
                Err(source) => {
                    if self.policy.is_required(class) {
                        return Err(NetIoError::RequiredClassUnavailable { class, source });
                    }
                    warn!(
                        "object class {:?} unavailable, proceeding without it: {}",
                        class, source
                    );
                }
            }
        }

        for interaction in InteractionClass::ALL {
            self.setup_interaction(interaction).map_err(|source| {
                NetIoError::RequiredInteractionUnavailable {
                    class: interaction,
                    source,
                }
            })?;
        }

        self.setup_done = true;
        info!(
            "publish/subscribe complete for federate {}",
            self.federate_name
        );
        Ok(())
    }

    fn setup_object_class(&mut self, class: ObjectClass) -> Result<(), RuntimeError> {
        let handle = self.runtime.object_class_handle(class.class_name())?;

        let mut attributes: Vec<(AttributeKind, AttributeHandle)> =
            Vec::with_capacity(AttributeKind::COUNT);
        for kind in AttributeKind::ALL {
            let attribute = self.runtime.attribute_handle(handle, kind.attribute_name())?;
            attributes.push((kind, attribute));
        }

        let handles: Vec<AttributeHandle> =
            attributes.iter().map(|(_, attribute)| *attribute).collect();
        self.runtime.publish_object_class(handle, &handles)?;
        self.runtime.subscribe_object_class(handle, &handles)?;

        // Tables are only written once the whole class is set up, so a
        // failed class leaves no half-resolved entries behind.
        self.tables.insert_object_class(class, handle);
        for (kind, attribute) in attributes {
            self.tables.insert_attribute(class, kind, attribute);
        }
        Ok(())
    }

    fn setup_interaction(&mut self, interaction: InteractionClass) -> Result<(), RuntimeError> {
        let handle = self
            .runtime
            .interaction_class_handle(interaction.class_name())?;

        match interaction {
            InteractionClass::WeaponFire => {
                let mut parameters = Vec::with_capacity(WeaponFireParameter::COUNT);
                for parameter in WeaponFireParameter::ALL {
                    let parameter_handle = self
                        .runtime
                        .parameter_handle(handle, parameter.parameter_name())?;
                    parameters.push((parameter, parameter_handle));
                }
                self.runtime.publish_interaction(handle)?;
                self.runtime.subscribe_interaction(handle)?;
                self.tables.insert_interaction(interaction, handle);
                for (parameter, parameter_handle) in parameters {
                    self.tables
                        .insert_weapon_fire_parameter(parameter, parameter_handle);
                }
            }
            InteractionClass::MunitionDetonation => {
                let mut parameters = Vec::with_capacity(DetonationParameter::COUNT);
                for parameter in DetonationParameter::ALL {
                    let parameter_handle = self
                        .runtime
                        .parameter_handle(handle, parameter.parameter_name())?;
                    parameters.push((parameter, parameter_handle));
                }
                self.runtime.publish_interaction(handle)?;
                self.runtime.subscribe_interaction(handle)?;
                self.tables.insert_interaction(interaction, handle);
                for (parameter, parameter_handle) in parameters {
                    self.tables
                        .insert_detonation_parameter(parameter, parameter_handle);
                }
            }
        }
        Ok(())
    }

    // ---- output side ----

    /// Wraps a local player that newly qualifies for network representation
    /// in an output NIB.
    ///
    /// Returns `None` when the class's registration policy is disabled or
    /// the class never resolved a handle: the object stays purely local.
    /// Runtime registration happens separately in the next cycle.
    pub fn create_new_output_nib(&mut self, player: &dyn SimulationObject) -> Option<NibId> {
        let class = player.object_class();
        if !self.policy.is_enabled(class) {
            return None;
        }
        if !self.tables.is_available(class) {
            return None;
        }
        if self.nibs.find_output_by_player(player.id()).is_some() {
            warn!(
                "player {:?} already has an output NIB, not creating another",
                player.id()
            );
            return None;
        }

        let id = self.nibs.allocate_id();
        let object_name = format!("{}.{}", self.federate_name, id.to_u64());
        let nib = Nib::new_output(id, class, player.entity_type(), object_name, player.id());
        match self.nibs.insert_output(nib) {
            Ok(id) => Some(id),
            Err(error) => {
                warn!("output NIB insert failed: {error}");
                None
            }
        }
    }

    /// Registers every not-yet-registered output NIB with the runtime. A
    /// failed call leaves the NIB unregistered for retry next cycle; it
    /// never crashes the update loop.
    pub fn register_output_nibs(&mut self) -> usize {
        let mut registered = 0;
        for id in self.nibs.output_ids() {
            let Some(nib) = self.nibs.get(id) else {
                continue;
            };
            if nib.is_registered() {
                continue;
            }
            let Some(class) = nib.object_class() else {
                continue;
            };
            let Ok(class_handle) = self.tables.object_class_handle(class) else {
                continue;
            };
            let object_name = nib.object_name().to_string();

            match self.runtime.register_object(class_handle, &object_name) {
                Ok(object_handle) => {
                    if let Err(error) = self.nibs.bind_object_handle(id, object_handle) {
                        warn!("could not index registered object {object_name}: {error}");
                        continue;
                    }
                    debug!("registered {object_name} as {object_handle:?}");
                    registered += 1;
                }
                Err(error) => {
                    warn!("object registration failed for {object_name}, will retry: {error}");
                }
            }
        }
        registered
    }

    /// Tears down the output NIB of a player that left the simulation,
    /// deregistering it from the federation if registration had succeeded.
    pub fn remove_output_player(&mut self, player: PlayerId) {
        let Some(nib) = self.nibs.remove_output_by_player(player) else {
            return;
        };
        if nib.is_registered() {
            if let Some(handle) = nib.object_handle() {
                if let Err(error) = self.runtime.delete_object(handle) {
                    warn!("deregistration of {:?} failed: {error}", handle);
                }
            }
        }
    }

    // ---- runtime callbacks (any thread) ----

    pub fn discover_object_instance(
        &self,
        handle: ObjectHandle,
        class: ObjectClassHandle,
        name: &str,
    ) {
        self.inbound.push(Inbound::DiscoverObject {
            handle,
            class,
            name: name.to_string(),
        });
    }

    pub fn remove_object_instance(&self, handle: ObjectHandle) {
        self.inbound.push(Inbound::RemoveObject { handle });
    }

    pub fn reflect_attribute_values(&self, handle: ObjectHandle, attributes: AttributeSet) {
        self.inbound.push(Inbound::ReflectAttributes { handle, attributes });
    }

    pub fn receive_interaction(&self, class: InteractionClassHandle, parameters: ParameterSet) {
        self.inbound.push(Inbound::Interaction { class, parameters });
    }

    // ---- update cycle ----

    /// One update cycle: drain all queued inbound notifications, reconcile
    /// the input players, then perform the cycle's outbound registration
    /// work.
    pub fn process_frame(&mut self) {
        for item in self.inbound.drain() {
            match item {
                Inbound::DiscoverObject {
                    handle,
                    class,
                    name,
                } => self.handle_discover(handle, class, &name),
                Inbound::RemoveObject { handle } => self.handle_remove(handle),
                Inbound::ReflectAttributes { handle, attributes } => {
                    self.handle_reflect(handle, attributes)
                }
                Inbound::Interaction { class, parameters } => {
                    self.handle_interaction(class, &parameters)
                }
            }
        }

        self.process_input_list();
        self.register_output_nibs();
    }

    fn handle_discover(&mut self, handle: ObjectHandle, class: ObjectClassHandle, name: &str) {
        if self.nibs.contains_handle(handle) {
            warn!("object {handle:?} already discovered, duplicate ignored");
            return;
        }
        // Objects of classes this federate does not understand are skipped
        // entirely; the local simulation has nothing to do with them.
        let Some(object_class) = self.tables.object_class_for(class) else {
            debug!("discovery for unrecognized class handle {class:?}, skipped");
            return;
        };

        let id = self.nibs.allocate_id();
        let nib = Nib::new_input(id, Some(object_class), handle, name);
        match self.nibs.insert_input(nib) {
            Ok(_) => debug!("discovered {name} ({object_class:?}) as {handle:?}"),
            Err(error) => warn!("input NIB insert failed for {name}: {error}"),
        }
    }

    fn handle_remove(&mut self, handle: ObjectHandle) {
        let Some(nib) = self.nibs.remove_by_handle(handle) else {
            debug!("remove for unknown object {handle:?}, ignored");
            return;
        };
        if let Some(player) = nib.player() {
            self.input_players.remove(&player);
        }
        debug!("removed input NIB for {}", nib.object_name());
    }

    fn handle_reflect(&mut self, handle: ObjectHandle, attributes: AttributeSet) {
        let Some(id) = self.nibs.nib_id_by_handle(handle) else {
            debug!("attribute update for unknown object {handle:?}, ignored");
            return;
        };

        // First arrival of the entity type resolves the NTM and constructs
        // the mirrored player. A trie miss leaves the NIB as a tracked,
        // unclassified placeholder.
        let needs_player = self
            .nibs
            .get(id)
            .map(|nib| nib.player().is_none())
            .unwrap_or(false);
        if needs_player {
            if let Some(entity_type) = self.decode_entity_type_attribute(&attributes) {
                if let Some(nib) = self.nibs.get_mut(id) {
                    nib.set_entity_type(entity_type);
                }
                match self.ntm_root.find(&entity_type) {
                    Some(ntm) => {
                        let player_id = PlayerId::new(self.next_input_player);
                        self.next_input_player += 1;
                        let player = ntm.create_object(player_id);
                        match self.nibs.bind_input_player(id, player_id) {
                            Ok(()) => {
                                self.input_players.insert(player_id, player);
                            }
                            Err(error) => warn!("could not link input player: {error}"),
                        }
                    }
                    None => {
                        debug!(
                            "no NTM for entity type {entity_type:?}; NIB stays unclassified"
                        );
                    }
                }
            }
        }

        if let Some(nib) = self.nibs.get_mut(id) {
            nib.store_attributes(attributes);
        }
    }

    fn decode_entity_type_attribute(&self, attributes: &AttributeSet) -> Option<EntityType> {
        for (attribute, value) in attributes {
            if self.tables.attribute_kind_for(*attribute) == Some(AttributeKind::EntityType) {
                match decode_entity_type(value) {
                    Ok(entity_type) => return Some(entity_type),
                    Err(error) => {
                        warn!("malformed EntityType attribute: {error}");
                        return None;
                    }
                }
            }
        }
        None
    }

    fn handle_interaction(&mut self, class: InteractionClassHandle, parameters: &ParameterSet) {
        match self.tables.interaction_for(class) {
            Some(InteractionClass::WeaponFire) => self.receive_weapon_fire(parameters),
            Some(InteractionClass::MunitionDetonation) => {
                self.receive_munition_detonation(parameters)
            }
            None => debug!("unknown interaction handle {class:?}, ignored"),
        }
    }

    fn receive_weapon_fire(&mut self, parameters: &ParameterSet) {
        let mut event: Option<EventIdentifier> = None;
        let mut munition: Option<ObjectId> = None;

        for (parameter, value) in parameters {
            match self.tables.weapon_fire_parameter_for(*parameter) {
                Some(WeaponFireParameter::EventIdentifier) => {
                    match EventIdentifier::decode(value) {
                        Ok(decoded) => event = Some(decoded),
                        Err(error) => {
                            warn!("malformed EventIdentifier in weapon fire: {error}");
                            return;
                        }
                    }
                }
                Some(WeaponFireParameter::MunitionObjectIdentifier) => {
                    match ObjectId::decode(value) {
                        Ok(decoded) => munition = Some(decoded),
                        Err(error) => {
                            warn!("malformed MunitionObjectIdentifier in weapon fire: {error}");
                            return;
                        }
                    }
                }
                // Position, velocity, and type also arrive as attribute
                // updates on the munition itself.
                Some(_) => {}
                // Unknown parameter handles within a known interaction are
                // skipped.
                None => {}
            }
        }

        let Some(event) = event else {
            debug!("weapon fire without event identifier, ignored");
            return;
        };

        // Correlate the fire event to the munition's input NIB when we
        // already mirror it, for the detonation that follows.
        if let Some(munition_id) = munition {
            if let Some(nib_id) = self.find_input_by_name(munition_id.as_name()) {
                if let Some(nib) = self.nibs.get_mut(nib_id) {
                    nib.set_last_fire_event(event.event_count);
                }
            }
        }
        debug!(
            "weapon fire event {} from {}",
            event.event_count,
            event.issuing_object_id.as_name()
        );
    }

    fn receive_munition_detonation(&mut self, parameters: &ParameterSet) {
        let mut event: Option<EventIdentifier> = None;

        for (parameter, value) in parameters {
            if self.tables.detonation_parameter_for(*parameter)
                == Some(DetonationParameter::EventIdentifier)
            {
                match EventIdentifier::decode(value) {
                    Ok(decoded) => event = Some(decoded),
                    Err(error) => {
                        warn!("malformed EventIdentifier in detonation: {error}");
                        return;
                    }
                }
            }
        }

        let Some(event) = event else {
            debug!("detonation without event identifier, ignored");
            return;
        };

        let correlated = self.nibs.input_ids().into_iter().find(|id| {
            self.nibs
                .get(*id)
                .map(|nib| nib.last_fire_event() == Some(event.event_count))
                .unwrap_or(false)
        });
        match correlated {
            Some(id) => info!(
                "detonation correlated to fire event {} on NIB {id:?}",
                event.event_count
            ),
            None => debug!(
                "detonation event {} has no matching fire event",
                event.event_count
            ),
        }
    }

    /// Once per cycle: hand each bound input player its most recently
    /// received attribute values for reconciliation.
    pub fn process_input_list(&mut self) {
        for id in self.nibs.input_ids() {
            let Some(nib) = self.nibs.get_mut(id) else {
                continue;
            };
            if !nib.has_pending_attributes() {
                continue;
            }
            let Some(player_id) = nib.player() else {
                // Unclassified placeholder: attributes are kept until the
                // entity type resolves.
                continue;
            };
            let attributes = nib.take_attributes();
            if let Some(player) = self.input_players.get_mut(&player_id) {
                player.reconcile(&attributes);
            }
        }
    }

    fn find_input_by_name(&self, name: &str) -> Option<NibId> {
        self.nibs.input_ids().into_iter().find(|id| {
            self.nibs
                .get(*id)
                .map(|nib| nib.object_name() == name)
                .unwrap_or(false)
        })
    }

    // ---- outbound interactions ----

    /// Marshals and sends the weapon-fire interaction for a just-released
    /// munition.
    ///
    /// Returns `Ok(true)` when the interaction went out, `Ok(false)` when it
    /// was gated (NIB unregistered, already fired, or the player is not a
    /// munition) or when the runtime refused the send; a refused send is
    /// retryable next cycle because the mode only flips to Active on
    /// success.
    pub fn send_weapon_fire(
        &mut self,
        nib_id: NibId,
        munition: &dyn SimulationObject,
    ) -> Result<bool, NetIoError> {
        let Some(nib) = self.nibs.get(nib_id) else {
            return Err(NetIoError::UnknownNib { id: nib_id });
        };
        if nib.player() != Some(munition.id()) {
            return Err(NetIoError::PlayerMismatch {
                id: nib_id,
                player: munition.id(),
            });
        }
        if !nib.is_registered() {
            return Ok(false);
        }
        if nib.mode() == NibMode::Active {
            return Ok(false);
        }
        if munition.object_class() != ObjectClass::Munition {
            return Ok(false);
        }

        let munition_name = nib.object_name().to_string();

        // Firing and target identifiers: a remote-origin player already has
        // an input NIB, otherwise search the output list; an unresolvable
        // identifier is omitted from the parameter set, not an error.
        let firing_name = munition
            .launcher()
            .and_then(|player| self.nibs.find_by_player(player))
            .map(|nib| nib.object_name().to_string());
        let target_name = munition
            .target()
            .and_then(|player| self.nibs.find_by_player(player))
            .map(|nib| nib.object_name().to_string());

        let Some(nib) = self.nibs.get_mut(nib_id) else {
            return Err(NetIoError::UnknownNib { id: nib_id });
        };
        let event = nib.next_fire_event();

        let data = WeaponFireData {
            event,
            munition_name: &munition_name,
            munition_type: munition.entity_type(),
            position: munition.geocentric_position(),
            velocity: munition.geocentric_velocity(),
            firing_name: firing_name.as_deref(),
            target_name: target_name.as_deref(),
        };
        let parameters = build_weapon_fire_parameters(&self.tables, &data)?;
        let interaction = self.tables.interaction_handle(InteractionClass::WeaponFire)?;

        match self.runtime.send_interaction(interaction, &parameters) {
            Ok(()) => {
                if let Some(nib) = self.nibs.get_mut(nib_id) {
                    nib.set_mode(NibMode::Active);
                    nib.set_last_fire_event(event);
                }
                Ok(true)
            }
            Err(error) => {
                warn!("weapon fire send failed, dropped for this tick: {error}");
                Ok(false)
            }
        }
    }

    pub fn is_setup_done(&self) -> bool {
        self.setup_done
    }
}
