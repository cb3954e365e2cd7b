use super::RawEntity;

/// Descriptive fields from the species lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesDetail {
    /// First English flavor text, with line breaks collapsed to spaces
    pub flavor_text: String,

    /// First English genus, e.g. "Seed Pokémon"
    pub category: String,

    /// Generation label, e.g. "I"
    pub generation: String,
}

/// A primary record together with the outcome of its detail lookup
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedEntity {
    pub raw: RawEntity,

    /// `None` when the species lookup failed
    pub detail: Option<SpeciesDetail>,
}

impl EnrichedEntity {
    pub fn id(&self) -> u32 {
        self.raw.id
    }

    pub fn name(&self) -> &str {
        &self.raw.name
    }

    pub fn has_detail(&self) -> bool {
        self.detail.is_some()
    }

    pub fn flavor_text(&self) -> Option<&str> {
        self.detail.as_ref().map(|d| d.flavor_text.as_str())
    }

    pub fn category(&self) -> Option<&str> {
        self.detail.as_ref().map(|d| d.category.as_str())
    }

    pub fn generation(&self) -> Option<&str> {
        self.detail.as_ref().map(|d| d.generation.as_str())
    }
}
