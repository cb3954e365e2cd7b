//! In-memory records flowing through a run
//!
//! The primary fetch produces a `RawEntity`. The detail phase consumes it and
//! yields an `EnrichedEntity`, which either carries a `SpeciesDetail` or records
//! that the lookup failed. Neither record is mutated after construction.

mod enriched;
mod raw;

pub use enriched::{EnrichedEntity, SpeciesDetail};
pub use raw::{BaseStats, RawEntity};
