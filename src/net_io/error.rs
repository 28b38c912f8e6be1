use thiserror::Error;

use crate::{
    interactions::InteractionClass, nib::NibError, runtime::RuntimeError, NibId, ObjectClass,
    PlayerId,
};

/// Errors surfaced by the coordinator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetIoError {
    /// A required object class failed handle resolution or registration
    /// during setup; startup cannot proceed
    #[error("Required object class {class:?} is unavailable")]
    RequiredClassUnavailable {
        class: ObjectClass,
        #[source]
        source: RuntimeError,
    },

    /// A required interaction class failed handle resolution or registration
    /// during setup
    #[error("Required interaction class {class:?} is unavailable")]
    RequiredInteractionUnavailable {
        class: InteractionClass,
        #[source]
        source: RuntimeError,
    },

    /// The object class has no resolved handle (optional class that failed
    /// setup, or setup has not run)
    #[error("Object class {class:?} has no resolved handle")]
    ClassUnavailable { class: ObjectClass },

    /// The interaction class has no resolved handle
    #[error("Interaction class {class:?} has no resolved handle")]
    InteractionUnavailable { class: InteractionClass },

    /// An interaction parameter has no resolved handle
    #[error("Interaction parameter {name} has no resolved handle")]
    ParameterUnavailable { name: &'static str },

    /// The NIB id is not present in the canonical table
    #[error("No NIB with id {id:?}")]
    UnknownNib { id: NibId },

    /// The NIB is not linked to the player passed alongside it
    #[error("NIB {id:?} does not mirror player {player:?}")]
    PlayerMismatch { id: NibId, player: PlayerId },

    /// NIB table mutation failed
    #[error(transparent)]
    Nib(#[from] NibError),
}
