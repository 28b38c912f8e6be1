use std::collections::VecDeque;
use std::sync::Mutex;

use log::warn;

use crate::{
    runtime::{AttributeSet, ParameterSet},
    InteractionClassHandle, ObjectClassHandle, ObjectHandle,
};

// Inbound

/// One notification delivered by the federation runtime, queued for
/// processing at the top of the next update cycle.
#[derive(Debug)]
pub enum Inbound {
    DiscoverObject {
        handle: ObjectHandle,
        class: ObjectClassHandle,
        name: String,
    },
    RemoveObject {
        handle: ObjectHandle,
    },
    ReflectAttributes {
        handle: ObjectHandle,
        attributes: AttributeSet,
    },
    Interaction {
        class: InteractionClassHandle,
        parameters: ParameterSet,
    },
}

impl Inbound {
    fn kind(&self) -> &'static str {
        match self {
            Inbound::DiscoverObject { .. } => "DiscoverObject",
            Inbound::RemoveObject { .. } => "RemoveObject",
            Inbound::ReflectAttributes { .. } => "ReflectAttributes",
            Inbound::Interaction { .. } => "Interaction",
        }
    }
}

// InboundQueue

/// Bounded FIFO hand-off between the runtime's callback context and the
/// simulation cycle.
///
/// Producers (runtime callbacks, potentially on another thread) push; the
/// cycle drains everything before any outbound work, giving a consistent
/// "read remote state, then act" ordering per tick. The critical section is
/// a short push/drain around the deque. On overflow the newest item is
/// dropped with a warning rather than blocking the callback.
pub struct InboundQueue {
    items: Mutex<VecDeque<Inbound>>,
    capacity: usize,
}

impl InboundQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    pub fn push(&self, item: Inbound) {
        // A poisoned lock still guards a structurally valid deque.
        let mut items = self.items.lock().unwrap_or_else(|poison| poison.into_inner());
        if items.len() >= self.capacity {
            warn!("inbound queue full, dropping {} notification", item.kind());
            return;
        }
        items.push_back(item);
    }

    pub fn drain(&self) -> Vec<Inbound> {
        let mut items = self.items.lock().unwrap_or_else(|poison| poison.into_inner());
        items.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        let items = self.items.lock().unwrap_or_else(|poison| poison.into_inner());
        items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
