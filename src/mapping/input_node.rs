use log::warn;

use crate::{mapping::MappingError, EntityType, Ntm};

// TrieLevel

/// Levels of the type-resolution trie, one per entity-type field. The root
/// carries no field and matches unconditionally.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub enum TrieLevel {
    Root,
    Kind,
    Domain,
    Country,
    Category,
    Subcategory,
    Specific,
    Extra,
}

impl TrieLevel {
    fn next(self) -> Option<TrieLevel> {
        match self {
            TrieLevel::Root => Some(TrieLevel::Kind),
            TrieLevel::Kind => Some(TrieLevel::Domain),
            TrieLevel::Domain => Some(TrieLevel::Country),
            TrieLevel::Country => Some(TrieLevel::Category),
            TrieLevel::Category => Some(TrieLevel::Subcategory),
            TrieLevel::Subcategory => Some(TrieLevel::Specific),
            TrieLevel::Specific => Some(TrieLevel::Extra),
            TrieLevel::Extra => None,
        }
    }

    /// The entity-type code a node at this level matches against. Codes are
    /// widened to u16, the width of the country field.
    fn code_of(self, entity_type: &EntityType) -> u16 {
        match self {
            TrieLevel::Root => 0,
            TrieLevel::Kind => u16::from(entity_type.kind),
            TrieLevel::Domain => u16::from(entity_type.domain),
            TrieLevel::Country => entity_type.country,
            TrieLevel::Category => u16::from(entity_type.category),
            TrieLevel::Subcategory => u16::from(entity_type.subcategory),
            TrieLevel::Specific => u16::from(entity_type.specific),
            TrieLevel::Extra => u16::from(entity_type.extra),
        }
    }
}

// NtmInputNode

/// One node of the incoming-type resolution trie.
///
/// The tree is keyed by successive entity-type fields: a node's subnodes all
/// sit one level deeper, and an entry may terminate either at a wildcard slot
/// (category level or deeper, all remaining fields zero) or at a specific
/// terminal subnode below the specific level. Lookup is depth-first with the
/// wildcard slot as fallback, so a deep exact match always beats a shallower
/// wildcard.
#[derive(Debug)]
pub struct NtmInputNode {
    level: TrieLevel,
    code: u16,
    ntm: Option<Ntm>,
    subnodes: Vec<NtmInputNode>,
}

impl NtmInputNode {
    pub fn root() -> Self {
        Self::new(TrieLevel::Root, 0)
    }

    fn new(level: TrieLevel, code: u16) -> Self {
        Self {
            level,
            code,
            ntm: None,
            subnodes: Vec::new(),
        }
    }

    fn terminal(level: TrieLevel, code: u16, ntm: Ntm) -> Self {
        Self {
            level,
            code,
            ntm: Some(ntm),
            subnodes: Vec::new(),
        }
    }

    /// Registers an NTM entry, creating intermediate nodes on demand.
    ///
    /// A second entry landing on an occupied position is a warning-level
    /// condition: it is discarded, first-registered wins, and the duplicate
    /// is reported to the caller.
    pub fn insert(&mut self, ntm: Ntm) -> Result<(), MappingError> {
        let entity_type = ntm.entity_type();

        // The root matches everything; below it we only ever descend along
        // matching codes.
        if self.level != TrieLevel::Root && self.code != self.level.code_of(&entity_type) {
            return Err(MappingError::CodeMismatch {
                entity_type,
                level: self.level,
                code: self.code,
            });
        }

        // Case 1: at the category level or deeper, an entry whose remaining
        // fields are all zero is a wildcard terminal on this node.
        let mut wild = self.level >= TrieLevel::Category;
        if wild && self.level < TrieLevel::Extra {
            wild = entity_type.extra == 0;
        }
        if wild && self.level < TrieLevel::Specific {
            wild = entity_type.specific == 0;
        }
        if wild && self.level < TrieLevel::Subcategory {
            wild = entity_type.subcategory == 0;
        }
        if wild {
            if self.ntm.is_none() {
                self.ntm = Some(ntm);
                return Ok(());
            }
            warn!("duplicate incoming NTM {:?}, second ignored", entity_type);
            return Err(MappingError::DuplicateNtm { entity_type });
        }

        // Not a wildcard, so at least one deeper field is non-zero and there
        // is a level below us to descend into.
        let Some(next_level) = self.level.next() else {
            return Err(MappingError::CodeMismatch {
                entity_type,
                level: self.level,
                code: self.code,
            });
        };
        let next_code = next_level.code_of(&entity_type);

        // Case 2: at the specific level the entry becomes a terminal subnode
        // at the extra level.
        if self.level == TrieLevel::Specific {
            if self.subnodes.iter().any(|subnode| subnode.code == next_code) {
                warn!("duplicate incoming NTM {:?}, second ignored", entity_type);
                return Err(MappingError::DuplicateNtm { entity_type });
            }
            self.subnodes
                .push(Self::terminal(next_level, next_code, ntm));
            return Ok(());
        }

        // Case 3: descend into the existing subnode with the matching code.
        if let Some(subnode) = self
            .subnodes
            .iter_mut()
            .find(|subnode| subnode.code == next_code)
        {
            return subnode.insert(ntm);
        }

        // Case 4: no such subnode yet, create it and descend.
        let mut subnode = Self::new(next_level, next_code);
        let result = subnode.insert(ntm);
        self.subnodes.push(subnode);
        result
    }

    /// Resolves an entity type to the best-matching NTM entry.
    ///
    /// Depth-first: subnodes are searched in registration order before this
    /// node's own wildcard entry is considered, and a wildcard entry is only
    /// legal at the category level or deeper. Below that minimum precision a
    /// lookup can never resolve, which is "no local representation" rather
    /// than an error.
    pub fn find(&self, entity_type: &EntityType) -> Option<&Ntm> {
        let matches =
            self.level == TrieLevel::Root || self.code == self.level.code_of(entity_type);
        if !matches {
            return None;
        }

        if self.level < TrieLevel::Extra {
            for subnode in &self.subnodes {
                if let Some(found) = subnode.find(entity_type) {
                    return Some(found);
                }
            }
        }

        if self.level >= TrieLevel::Category {
            return self.ntm.as_ref();
        }

        None
    }
}
