use std::collections::HashMap;

use crate::{
    nib::{Nib, NibDirection, NibError},
    NibId, ObjectHandle, PlayerId,
};

// NibMap

/// Canonical NIB table plus the lookup indexes that drive dispatch:
/// object handle to NIB for discovery/update/remove callbacks, and player to
/// NIB (per direction) for marshaling-time identifier resolution.
///
/// The input and output lists preserve insertion order, so the per-cycle
/// walks visit NIBs in discovery/creation order. Removal is symmetric: no
/// index entry survives its NIB.
pub struct NibMap {
    next_id: u64,
    nibs: HashMap<NibId, Nib>,
    handle_to_nib: HashMap<ObjectHandle, NibId>,
    input_player_to_nib: HashMap<PlayerId, NibId>,
    output_player_to_nib: HashMap<PlayerId, NibId>,
    input_list: Vec<NibId>,
    output_list: Vec<NibId>,
}

impl NibMap {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            nibs: HashMap::new(),
            handle_to_nib: HashMap::new(),
            input_player_to_nib: HashMap::new(),
            output_player_to_nib: HashMap::new(),
            input_list: Vec::new(),
            output_list: Vec::new(),
        }
    }

    pub(crate) fn allocate_id(&mut self) -> NibId {
        let id = NibId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Inserts an input NIB, indexing it by its object handle.
    pub(crate) fn insert_input(&mut self, nib: Nib) -> Result<NibId, NibError> {
        let id = nib.id();
        let Some(handle) = nib.object_handle() else {
            return Err(NibError::UnknownNib { id });
        };
        if self.handle_to_nib.contains_key(&handle) {
            return Err(NibError::DuplicateObjectHandle { handle });
        }

        self.handle_to_nib.insert(handle, id);
        self.input_list.push(id);
        self.nibs.insert(id, nib);
        Ok(id)
    }

    /// Inserts an output NIB, indexing it by the local player it mirrors.
    /// The object-handle index entry is added later, once runtime
    /// registration succeeds.
    pub(crate) fn insert_output(&mut self, nib: Nib) -> Result<NibId, NibError> {
        let id = nib.id();
        let Some(player) = nib.player() else {
            return Err(NibError::UnknownNib { id });
        };
        if self.output_player_to_nib.contains_key(&player) {
            return Err(NibError::DuplicatePlayer { player });
        }

        self.output_player_to_nib.insert(player, id);
        self.output_list.push(id);
        self.nibs.insert(id, nib);
        Ok(id)
    }

    /// Links an input NIB to the player constructed for it once its entity
    /// type has resolved.
    pub(crate) fn bind_input_player(
        &mut self,
        id: NibId,
        player: PlayerId,
    ) -> Result<(), NibError> {
        if self.input_player_to_nib.contains_key(&player) {
            return Err(NibError::DuplicatePlayer { player });
        }
        let Some(nib) = self.nibs.get_mut(&id) else {
            return Err(NibError::UnknownNib { id });
        };

        nib.set_player(player);
        self.input_player_to_nib.insert(player, id);
        Ok(())
    }

    /// Indexes an output NIB under its runtime-assigned object handle.
    pub(crate) fn bind_object_handle(
        &mut self,
        id: NibId,
        handle: ObjectHandle,
    ) -> Result<(), NibError> {
        if self.handle_to_nib.contains_key(&handle) {
            return Err(NibError::DuplicateObjectHandle { handle });
        }
        let Some(nib) = self.nibs.get_mut(&id) else {
            return Err(NibError::UnknownNib { id });
        };

        nib.set_object_handle(handle);
        nib.set_registered(true);
        self.handle_to_nib.insert(handle, id);
        Ok(())
    }

    pub fn get(&self, id: NibId) -> Option<&Nib> {
        self.nibs.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: NibId) -> Option<&mut Nib> {
        self.nibs.get_mut(&id)
    }

    pub fn contains_handle(&self, handle: ObjectHandle) -> bool {
        self.handle_to_nib.contains_key(&handle)
    }

    pub fn nib_id_by_handle(&self, handle: ObjectHandle) -> Option<NibId> {
        self.handle_to_nib.get(&handle).copied()
    }

    pub fn nib_by_handle(&self, handle: ObjectHandle) -> Option<&Nib> {
        self.handle_to_nib
            .get(&handle)
            .and_then(|id| self.nibs.get(id))
    }

    /// NIB mirroring the given player, checking the input direction first
    /// (a remote-origin player already has one), then the output list.
    pub fn find_by_player(&self, player: PlayerId) -> Option<&Nib> {
        self.input_player_to_nib
            .get(&player)
            .or_else(|| self.output_player_to_nib.get(&player))
            .and_then(|id| self.nibs.get(id))
    }

    pub fn find_output_by_player(&self, player: PlayerId) -> Option<&Nib> {
        self.output_player_to_nib
            .get(&player)
            .and_then(|id| self.nibs.get(id))
    }

    pub fn input_ids(&self) -> Vec<NibId> {
        self.input_list.clone()
    }

    pub fn output_ids(&self) -> Vec<NibId> {
        self.output_list.clone()
    }

    pub fn input_len(&self) -> usize {
        self.input_list.len()
    }

    pub fn output_len(&self) -> usize {
        self.output_list.len()
    }

    /// Removes the NIB indexed under an object handle, tearing down every
    /// index entry with it.
    pub(crate) fn remove_by_handle(&mut self, handle: ObjectHandle) -> Option<Nib> {
        let id = self.handle_to_nib.remove(&handle)?;
        self.remove_indexed(id)
    }

    /// Removes the output NIB mirroring a local player that has left the
    /// simulation.
    pub(crate) fn remove_output_by_player(&mut self, player: PlayerId) -> Option<Nib> {
        let id = self.output_player_to_nib.get(&player).copied()?;
        if let Some(inner_handle) = self.nibs.get(&id).and_then(|nib| nib.object_handle()) {
            self.handle_to_nib.remove(&inner_handle);
        }
        self.remove_indexed(id)
    }

    fn remove_indexed(&mut self, id: NibId) -> Option<Nib> {
        let nib = self.nibs.remove(&id)?;
        if let Some(player) = nib.player() {
            match nib.direction() {
                NibDirection::Input => self.input_player_to_nib.remove(&player),
                NibDirection::Output => self.output_player_to_nib.remove(&player),
            };
        }
        match nib.direction() {
            NibDirection::Input => self.input_list.retain(|entry| *entry != id),
            NibDirection::Output => self.output_list.retain(|entry| *entry != id),
        }
        Some(nib)
    }
}

impl Default for NibMap {
    fn default() -> Self {
        Self::new()
    }
}
