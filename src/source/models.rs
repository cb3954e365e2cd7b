//! PokeAPI response models
//!
//! Only the fields the pipeline reads are modeled; everything else in the
//! (large) responses is ignored by serde.

use crate::entity::{BaseStats, RawEntity, SpeciesDetail};
use crate::normalize::{collapse_flavor_text, generation_label, normalize_name, reference_url};
use crate::FetchError;
use serde::Deserialize;

/// Language tag used for flavor text and genus selection
pub const ENGLISH: &str = "en";

/// A `{ name, url }` reference to another resource
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Body of `GET /pokemon/{id}`
#[derive(Debug, Deserialize)]
pub struct PokemonResponse {
    pub id: u32,
    pub species: NamedResource,
    pub types: Vec<TypeSlot>,
    pub height: u32,
    pub weight: u32,
    pub stats: Vec<StatEntry>,
    pub sprites: Sprites,
}

#[derive(Debug, Deserialize)]
pub struct TypeSlot {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Debug, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<ArtworkSprites>,
}

#[derive(Debug, Deserialize)]
pub struct ArtworkSprites {
    pub front_default: Option<String>,
}

/// Body of `GET /pokemon-species/{id}`
#[derive(Debug, Deserialize)]
pub struct SpeciesResponse {
    pub flavor_text_entries: Vec<FlavorTextEntry>,
    pub genera: Vec<Genus>,
    pub generation: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct Genus {
    pub genus: String,
    pub language: NamedResource,
}

impl PokemonResponse {
    /// Looks up a base stat by its PokeAPI name (`hp`, `special-attack`, ...)
    fn stat(&self, name: &str) -> Result<u32, FetchError> {
        self.stats
            .iter()
            .find(|entry| entry.stat.name == name)
            .map(|entry| entry.base_stat)
            .ok_or_else(|| FetchError::MissingField {
                id: self.id,
                field: format!("stat '{}'", name),
            })
    }

    fn artwork(&self) -> Option<String> {
        self.sprites
            .other
            .official_artwork
            .as_ref()
            .and_then(|art| art.front_default.clone())
    }

    /// Converts the response into a primary record
    ///
    /// The sprite falls back to the official artwork only when the default
    /// sprite is missing.
    pub fn into_raw_entity(self) -> Result<RawEntity, FetchError> {
        let stats = BaseStats {
            hp: self.stat("hp")?,
            attack: self.stat("attack")?,
            defense: self.stat("defense")?,
            special_attack: self.stat("special-attack")?,
            special_defense: self.stat("special-defense")?,
            speed: self.stat("speed")?,
        };

        let artwork = self.artwork();
        let sprite = self.sprites.front_default.clone().or_else(|| artwork.clone());
        let name = normalize_name(&self.species.name);
        let reference_url = reference_url(&name);

        Ok(RawEntity {
            id: self.id,
            types: self.types.into_iter().map(|slot| slot.kind.name).collect(),
            height: self.height,
            weight: self.weight,
            stats,
            sprite,
            artwork,
            reference_url,
            name,
        })
    }
}

impl SpeciesResponse {
    /// Extracts the English flavor text and genus plus the generation label
    pub fn into_detail(self, id: u32) -> Result<SpeciesDetail, FetchError> {
        let flavor_text = self
            .flavor_text_entries
            .iter()
            .find(|entry| entry.language.name == ENGLISH)
            .map(|entry| collapse_flavor_text(&entry.flavor_text))
            .ok_or_else(|| FetchError::MissingField {
                id,
                field: "English flavor text".to_string(),
            })?;

        let category = self
            .genera
            .iter()
            .find(|genus| genus.language.name == ENGLISH)
            .map(|genus| genus.genus.clone())
            .ok_or_else(|| FetchError::MissingField {
                id,
                field: "English genus".to_string(),
            })?;

        Ok(SpeciesDetail {
            flavor_text,
            category,
            generation: generation_label(&self.generation.name),
        })
    }
}
