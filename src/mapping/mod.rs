//! Entity-type classification: NTM entries and the resolution trie.

pub mod error;
mod input_node;
mod ntm;

mod tests;

pub use error::MappingError;
pub use input_node::{NtmInputNode, TrieLevel};
pub use ntm::{Ntm, SimObjectFactory};
