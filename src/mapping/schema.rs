//! Notion page-creation request body
//!
//! Field order in these structs is the serialized order, so output is stable.

use serde::Serialize;

/// Body of `POST /v1/pages`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageRequest {
    pub parent: Parent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<ExternalFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<ExternalFile>,
    pub properties: PageProperties,
    pub children: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parent {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub database_id: String,
}

impl Parent {
    pub fn database(database_id: impl Into<String>) -> Self {
        Self {
            kind: "database_id",
            database_id: database_id.into(),
        }
    }
}

/// An externally hosted image or file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExternalFile {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub external: ExternalUrl,
}

impl ExternalFile {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            kind: "external",
            name: None,
            external: ExternalUrl { url: url.into() },
        }
    }

    pub fn named(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(url)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExternalUrl {
    pub url: String,
}

/// A plain-text rich text segment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RichText {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: TextContent,
}

impl RichText {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            kind: "text",
            text: TextContent {
                content: content.into(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextContent {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleProperty {
    pub title: Vec<RichText>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RichTextProperty {
    pub rich_text: Vec<RichText>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumberProperty {
    pub number: u32,
}

impl From<u32> for NumberProperty {
    fn from(number: u32) -> Self {
        Self { number }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiSelectProperty {
    pub multi_select: Vec<SelectOption>,
}

/// A select property; `None` serializes as `null`, which leaves it empty
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectProperty {
    pub select: Option<SelectOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilesProperty {
    pub files: Vec<ExternalFile>,
}

/// The fixed database schema, one field per column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageProperties {
    #[serde(rename = "Name")]
    pub name: TitleProperty,
    #[serde(rename = "Category")]
    pub category: RichTextProperty,
    #[serde(rename = "No")]
    pub number: NumberProperty,
    #[serde(rename = "Type")]
    pub types: MultiSelectProperty,
    #[serde(rename = "Generation")]
    pub generation: SelectProperty,
    #[serde(rename = "Sprite")]
    pub sprite: FilesProperty,
    #[serde(rename = "Height")]
    pub height: NumberProperty,
    #[serde(rename = "Weight")]
    pub weight: NumberProperty,
    #[serde(rename = "HP")]
    pub hp: NumberProperty,
    #[serde(rename = "Attack")]
    pub attack: NumberProperty,
    #[serde(rename = "Defense")]
    pub defense: NumberProperty,
    #[serde(rename = "Sp. Attack")]
    pub special_attack: NumberProperty,
    #[serde(rename = "Sp. Defense")]
    pub special_defense: NumberProperty,
    #[serde(rename = "Speed")]
    pub speed: NumberProperty,
}

/// A child block of the page body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub object: &'static str,
    #[serde(flatten)]
    pub content: BlockContent,
}

/// Block payloads, tagged by `type` with the payload under the same key
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockContent {
    Quote { quote: RichTextBlock },
    Paragraph { paragraph: RichTextBlock },
    Bookmark { bookmark: Bookmark },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RichTextBlock {
    pub rich_text: Vec<RichText>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bookmark {
    pub url: String,
    pub caption: Vec<RichText>,
}

impl Block {
    fn new(content: BlockContent) -> Self {
        Self {
            object: "block",
            content,
        }
    }

    pub fn quote(rich_text: Vec<RichText>) -> Self {
        Self::new(BlockContent::Quote {
            quote: RichTextBlock { rich_text },
        })
    }

    pub fn paragraph(rich_text: Vec<RichText>) -> Self {
        Self::new(BlockContent::Paragraph {
            paragraph: RichTextBlock { rich_text },
        })
    }

    pub fn bookmark(url: impl Into<String>, caption: Vec<RichText>) -> Self {
        Self::new(BlockContent::Bookmark {
            bookmark: Bookmark {
                url: url.into(),
                caption,
            },
        })
    }
}
