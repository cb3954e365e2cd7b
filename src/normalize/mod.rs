//! Text normalization for display names and descriptive fields
//!
//! Everything in this module is a pure function of its input, so the rules
//! can be checked directly against literal names.

mod name;
mod text;

pub use name::{normalize_name, title_case_segments, Anchor, NameRule, NAME_RULES};
pub use text::{collapse_flavor_text, generation_label, reference_url, REFERENCE_BASE};
