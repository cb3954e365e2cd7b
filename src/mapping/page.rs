use crate::entity::EnrichedEntity;
use crate::mapping::schema::{
    Block, ExternalFile, FilesProperty, MultiSelectProperty, PageProperties, PageRequest, Parent,
    RichText, RichTextProperty, SelectOption, SelectProperty, TitleProperty,
};

/// Name shown for the file in the `Sprite` column
pub const SPRITE_FILE_NAME: &str = "Pokemon Sprite";

/// Caption on the reference bookmark block
pub const REFERENCE_CAPTION: &str = "View This Pokémon's Entry on Bulbapedia:";

/// Rich text holding `content`, or an empty list when there is nothing to show
fn optional_text(content: Option<&str>) -> Vec<RichText> {
    content.map(RichText::plain).into_iter().collect()
}

/// Maps one enriched entity onto the page-creation request for `database_id`
///
/// Entities without species detail still map: the category and quote are
/// left empty and the generation select is cleared.
///
/// # Example
///
/// ```
/// use pokedex_notion::entity::{BaseStats, RawEntity};
/// use pokedex_notion::mapping::map_entity;
///
/// let entity = RawEntity {
///     id: 25,
///     name: "Pikachu".to_string(),
///     types: vec!["electric".to_string()],
///     height: 4,
///     weight: 60,
///     stats: BaseStats::default(),
///     sprite: None,
///     artwork: None,
///     reference_url: "https://bulbapedia.bulbagarden.net/wiki/Pikachu_(Pokémon)".to_string(),
/// }
/// .enrich(None);
///
/// let page = map_entity(&entity, "db-id");
/// assert_eq!(page.properties.number.number, 25);
/// assert_eq!(page.children.len(), 3);
/// ```
pub fn map_entity(entity: &EnrichedEntity, database_id: &str) -> PageRequest {
    let raw = &entity.raw;
    let stats = &raw.stats;

    let properties = PageProperties {
        name: TitleProperty {
            title: vec![RichText::plain(raw.name.as_str())],
        },
        category: RichTextProperty {
            rich_text: optional_text(entity.category()),
        },
        number: raw.id.into(),
        types: MultiSelectProperty {
            multi_select: raw
                .types
                .iter()
                .map(|name| SelectOption { name: name.clone() })
                .collect(),
        },
        generation: SelectProperty {
            select: entity.generation().map(|name| SelectOption {
                name: name.to_string(),
            }),
        },
        sprite: FilesProperty {
            files: raw
                .sprite
                .iter()
                .map(|url| ExternalFile::named(SPRITE_FILE_NAME, url.as_str()))
                .collect(),
        },
        height: raw.height.into(),
        weight: raw.weight.into(),
        hp: stats.hp.into(),
        attack: stats.attack.into(),
        defense: stats.defense.into(),
        special_attack: stats.special_attack.into(),
        special_defense: stats.special_defense.into(),
        speed: stats.speed.into(),
    };

    let children = vec![
        Block::quote(optional_text(entity.flavor_text())),
        Block::paragraph(Vec::new()),
        Block::bookmark(
            raw.reference_url.as_str(),
            vec![RichText::plain(REFERENCE_CAPTION)],
        ),
    ];

    PageRequest {
        parent: Parent::database(database_id),
        icon: raw.sprite.as_deref().map(ExternalFile::new),
        cover: raw.artwork.as_deref().map(ExternalFile::new),
        properties,
        children,
    }
}
