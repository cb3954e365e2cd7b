/// The six base stats, in the order the data source lists them
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BaseStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

/// Output of the primary fetch for one identifier
#[derive(Debug, Clone, PartialEq)]
pub struct RawEntity {
    /// Positive identifier, stable across both fetch phases
    pub id: u32,

    /// Display name after normalization
    pub name: String,

    /// Type tags in slot order
    pub types: Vec<String>,

    /// Height in decimetres
    pub height: u32,

    /// Weight in hectograms
    pub weight: u32,

    pub stats: BaseStats,

    /// Small sprite, or the official artwork when the sprite is missing
    pub sprite: Option<String>,

    /// High-resolution official artwork
    pub artwork: Option<String>,

    /// Reference wiki page derived from the display name
    pub reference_url: String,
}

impl RawEntity {
    /// Attaches the result of the detail phase
    pub fn enrich(self, detail: Option<super::SpeciesDetail>) -> super::EnrichedEntity {
        super::EnrichedEntity { raw: self, detail }
    }
}
