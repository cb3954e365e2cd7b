//! Schema mapping from enriched entities to Notion page-creation requests
//!
//! `schema` models the subset of the Notion request body this pipeline
//! writes; `page` fills it from an `EnrichedEntity`. Mapping is a pure
//! function: the same entity always serializes to the same bytes.

mod page;
pub mod schema;

pub use page::{map_entity, REFERENCE_CAPTION, SPRITE_FILE_NAME};
pub use schema::PageRequest;
