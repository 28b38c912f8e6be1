use thiserror::Error;

use crate::{NibId, ObjectHandle, PlayerId};

/// Errors that can occur while mutating the NIB map
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NibError {
    /// Exactly one NIB may exist per federation object handle
    #[error("A NIB is already indexed under object handle {handle:?}")]
    DuplicateObjectHandle { handle: ObjectHandle },

    /// A player may back at most one NIB per direction
    #[error("A NIB is already linked to player {player:?}")]
    DuplicatePlayer { player: PlayerId },

    /// The NIB id is not present in the canonical table
    #[error("No NIB with id {id:?}")]
    UnknownNib { id: NibId },
}
