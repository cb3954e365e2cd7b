//! Flavor text, generation labels, and reference links

/// Wiki page prefix for per-species reference links
pub const REFERENCE_BASE: &str = "https://bulbapedia.bulbagarden.net/wiki/";

/// Replaces every line feed, form feed, and carriage return with a single space
///
/// Flavor text is stored with the line breaks of the original game text box;
/// each break becomes one space, so `"a\nb"` reads `"a b"`.
pub fn collapse_flavor_text(raw: &str) -> String {
    raw.chars()
        .map(|c| match c {
            '\n' | '\u{000C}' | '\r' => ' ',
            other => other,
        })
        .collect()
}

/// Derives the short generation label from a slug like `generation-iv`
pub fn generation_label(slug: &str) -> String {
    slug.rsplit('-').next().unwrap_or(slug).to_uppercase()
}

/// Builds the reference page URL for a display name
///
/// The first space becomes an underscore, matching the wiki's page titles
/// for two-word names (`Mr. Mime` -> `Mr._Mime_(Pokémon)`).
pub fn reference_url(display_name: &str) -> String {
    format!(
        "{}{}_(Pokémon)",
        REFERENCE_BASE,
        display_name.replacen(' ', "_", 1)
    )
}
