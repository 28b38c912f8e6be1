use thiserror::Error;

use crate::EntityType;

/// Errors that can occur while registering NTM entries
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// A second entry resolved to an already occupied trie position;
    /// first-registered wins and the duplicate is discarded
    #[error("Duplicate incoming NTM {entity_type:?}, second ignored")]
    DuplicateNtm { entity_type: EntityType },

    /// An entry was handed to a node whose code does not match it; the trie
    /// only descends along matching codes, so this indicates a corrupted tree
    #[error("NTM {entity_type:?} does not match trie node at level {level:?} (code {code})")]
    CodeMismatch {
        entity_type: EntityType,
        level: crate::mapping::TrieLevel,
        code: u16,
    },
}
