// EntityType

/// The 7-field entity classification key used by the federation's entity-type
/// standard: kind, domain, country, category, subcategory, specific, extra.
///
/// Discriminating power follows field order, so the derived ordering and
/// field-wise equality are exactly the standard's. Immutable once built.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Default)]
pub struct EntityType {
    pub kind: u8,
    pub domain: u8,
    pub country: u16,
    pub category: u8,
    pub subcategory: u8,
    pub specific: u8,
    pub extra: u8,
}

impl EntityType {
    pub const fn new(
        kind: u8,
        domain: u8,
        country: u16,
        category: u8,
        subcategory: u8,
        specific: u8,
        extra: u8,
    ) -> Self {
        Self {
            kind,
            domain,
            country,
            category,
            subcategory,
            specific,
            extra,
        }
    }

    /// A wildcard entry for "any entity of this kind/domain/country/category".
    pub const fn wildcard(kind: u8, domain: u8, country: u16, category: u8) -> Self {
        Self::new(kind, domain, country, category, 0, 0, 0)
    }

    /// True when every field is zero, i.e. the type has not been received yet.
    pub fn is_unset(&self) -> bool {
        *self == Self::default()
    }
}
