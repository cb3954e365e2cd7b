//! Display-name normalization
//!
//! Raw species names arrive as lowercase, hyphen-separated slugs (`mr-mime`,
//! `nidoran-f`). The generic pass title-cases each segment and joins them with
//! spaces. A fixed list of rewrite rules then restores the punctuation and
//! symbols that the generic pass loses.

/// Where a rule's pattern may match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Only at the very beginning of the name
    Start,
    /// First occurrence anywhere in the name
    Anywhere,
}

/// A single literal rewrite rule
#[derive(Debug, Clone, Copy)]
pub struct NameRule {
    pub pattern: &'static str,
    pub replacement: &'static str,
    pub anchor: Anchor,
}

const fn rule(pattern: &'static str, replacement: &'static str, anchor: Anchor) -> NameRule {
    NameRule {
        pattern,
        replacement,
        anchor,
    }
}

/// Rewrite rules, applied in order. Each rule sees the output of the previous one.
pub const NAME_RULES: &[NameRule] = &[
    rule("Mr M", "Mr. M", Anchor::Start),
    rule("Mime Jr", "Mime Jr.", Anchor::Start),
    rule("Mr R", "Mr. R", Anchor::Start),
    rule("mo O", "mo-o", Anchor::Anywhere),
    rule("Porygon Z", "Porygon-Z", Anchor::Anywhere),
    rule("Type Null", "Type: Null", Anchor::Anywhere),
    rule("Ho Oh", "Ho-Oh", Anchor::Anywhere),
    rule("Nidoran F", "Nidoran♀", Anchor::Anywhere),
    rule("Nidoran M", "Nidoran♂", Anchor::Anywhere),
    rule("Flabebe", "Flabébé", Anchor::Anywhere),
];

impl NameRule {
    /// Rewrites the first match of this rule, if any
    ///
    /// When the replacement starts with the pattern (`Mime Jr` -> `Mime Jr.`), a
    /// match already followed by the rest of the replacement is left alone so
    /// that re-normalizing a display name does not grow it.
    pub fn apply(&self, input: &str) -> String {
        let position = match self.anchor {
            Anchor::Start => input.starts_with(self.pattern).then_some(0),
            Anchor::Anywhere => input.find(self.pattern),
        };

        match position {
            Some(pos) if !input[pos..].starts_with(self.replacement) => {
                let mut out = String::with_capacity(input.len() + self.replacement.len());
                out.push_str(&input[..pos]);
                out.push_str(self.replacement);
                out.push_str(&input[pos + self.pattern.len()..]);
                out
            }
            _ => input.to_string(),
        }
    }
}

/// Splits on `-`, upper-cases the first character of each segment, and joins with a space
///
/// Only the first character changes; the rest of each segment is kept as-is.
pub fn title_case_segments(raw: &str) -> String {
    raw.split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Converts a raw species slug into its display name
///
/// # Example
///
/// ```
/// use pokedex_notion::normalize::normalize_name;
///
/// assert_eq!(normalize_name("mr-mime"), "Mr. Mime");
/// assert_eq!(normalize_name("nidoran-f"), "Nidoran♀");
/// ```
pub fn normalize_name(raw: &str) -> String {
    NAME_RULES
        .iter()
        .fold(title_case_segments(raw), |name, rule| rule.apply(&name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_segments() {
        assert_eq!(title_case_segments("bulbasaur"), "Bulbasaur");
        assert_eq!(title_case_segments("tapu-koko"), "Tapu Koko");
        assert_eq!(title_case_segments("a--b"), "A  B");
        assert_eq!(title_case_segments(""), "");
        // Rest of the segment is not lowercased
        assert_eq!(title_case_segments("mIME"), "MIME");
    }

    #[test]
    fn test_known_special_names() {
        let cases = [
            ("mr-mime", "Mr. Mime"),
            ("mime-jr", "Mime Jr."),
            ("mr-rime", "Mr. Rime"),
            ("jangmo-o", "Jangmo-o"),
            ("hakamo-o", "Hakamo-o"),
            ("kommo-o", "Kommo-o"),
            ("porygon-z", "Porygon-Z"),
            ("type-null", "Type: Null"),
            ("ho-oh", "Ho-Oh"),
            ("nidoran-f", "Nidoran♀"),
            ("nidoran-m", "Nidoran♂"),
            ("flabebe", "Flabébé"),
        ];

        for (raw, expected) in cases {
            assert_eq!(normalize_name(raw), expected, "normalizing {}", raw);
        }
    }

    #[test]
    fn test_ordinary_names() {
        assert_eq!(normalize_name("bulbasaur"), "Bulbasaur");
        assert_eq!(normalize_name("tapu-koko"), "Tapu Koko");
        assert_eq!(normalize_name("porygon2"), "Porygon2");
    }

    #[test]
    fn test_start_anchor_only_matches_prefix() {
        // "Mr M" in the middle of a name is not a title
        assert_eq!(normalize_name("xmr-m"), "Xmr M");
    }

    #[test]
    fn test_idempotent_on_display_names() {
        let names = [
            "bulbasaur",
            "mr-mime",
            "mime-jr",
            "mr-rime",
            "jangmo-o",
            "porygon-z",
            "type-null",
            "ho-oh",
            "nidoran-f",
            "nidoran-m",
            "flabebe",
            "tapu-koko",
        ];

        for raw in names {
            let once = normalize_name(raw);
            let twice = normalize_name(&once);
            assert_eq!(once, twice, "re-normalizing {}", raw);
        }
    }

    #[test]
    fn test_rule_skips_when_already_applied() {
        let rule = NAME_RULES[1];
        assert_eq!(rule.apply("Mime Jr"), "Mime Jr.");
        assert_eq!(rule.apply("Mime Jr."), "Mime Jr.");
    }
}
