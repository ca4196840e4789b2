//! The standard content type set.
//!
//! Pages, blocks, dialogs, presets, and the site singletons. The block
//! object schemas mirror the shapes the query layer projects.

use serde_json::json;

use crate::document::{DocumentSchema, InitialValue, Ordering, PreviewConfig};
use crate::field::{Condition, FieldDef, Rule};
use crate::registry::SchemaRegistry;

/// Fields shared by every page document.
fn page_base_fields() -> Vec<FieldDef> {
    vec![
        FieldDef::string("title", "Title").required(),
        FieldDef::slug("path", "Path")
            .required()
            .describe("Site-relative path, including the language prefix."),
        FieldDef::string("language", "Language").required(),
        FieldDef::array("hero", "Hero", &["hero.basic"]),
        FieldDef::array(
            "blocks",
            "Blocks",
            &[
                "block.textmedia",
                "block.cardgrid",
                "block.article",
                "block.richtext",
                "block.resourcelist",
            ],
        ),
        FieldDef::object(
            "seo",
            "SEO",
            vec![
                FieldDef::string("title", "Title"),
                FieldDef::new("description", "Description", crate::field::FieldKind::Text),
                FieldDef::image("image", "Share image"),
                FieldDef::new(
                    "excludeFromSitemap",
                    "Exclude from sitemap",
                    crate::field::FieldKind::Boolean,
                )
                .describe("Hide this page from the generated sitemap."),
            ],
        ),
    ]
}

/// Fields for dated, taggable content pages.
fn dated_page_fields() -> Vec<FieldDef> {
    let mut fields = page_base_fields();
    fields.push(FieldDef::array("tags", "Tags", &["page.tag"]));
    fields.push(FieldDef::reference("author", "Author", &["person.author"]));
    fields.push(
        FieldDef::new("publishedAt", "Published at", crate::field::FieldKind::Date).required(),
    );
    fields
}

fn content_page_preview() -> PreviewConfig {
    PreviewConfig::title_from("title").with_subtitle("path", "path")
}

/// A dated content page type seeded under a fixed parent listing page.
fn dated_page(name: &str, title: &str, parent_type: &str, parent_id: &str) -> DocumentSchema {
    let mut fields = vec![
        FieldDef::reference("parent", "Parent", &[parent_type]).required(),
    ];
    fields.extend(dated_page_fields());
    DocumentSchema::document(name, title, fields)
        .preview(content_page_preview())
        .ordering(Ordering::published_desc())
        .initial_value(InitialValue::ParentReference {
            field: "parent".to_string(),
            document_id: parent_id.to_string(),
        })
}

fn blog_page() -> DocumentSchema {
    dated_page("page.blog", "Blog", "page.blogs", "page_blogs")
}

fn blogs_page() -> DocumentSchema {
    DocumentSchema::document("page.blogs", "Blogs", page_base_fields())
        .preview(content_page_preview())
}

fn content_page() -> DocumentSchema {
    DocumentSchema::document("page.content", "Content page", page_base_fields())
        .preview(content_page_preview())
}

fn event_page() -> DocumentSchema {
    dated_page("page.event", "Event", "page.events", "page_events")
}

fn casestudy_page() -> DocumentSchema {
    dated_page(
        "page.casestudy",
        "Case study",
        "page.casestudies",
        "page_casestudies",
    )
}

fn media_page() -> DocumentSchema {
    dated_page("page.media", "Media", "page.medialibrary", "page_medialibrary")
}

fn tag_page() -> DocumentSchema {
    DocumentSchema::document(
        "page.tag",
        "Tag",
        vec![
            FieldDef::string("title", "Title").required(),
            FieldDef::slug("path", "Path").required(),
            FieldDef::string("language", "Language").required(),
        ],
    )
    .preview(PreviewConfig::title_from("title"))
}

fn author() -> DocumentSchema {
    DocumentSchema::document(
        "person.author",
        "Author",
        vec![
            FieldDef::string("name", "Name").required(),
            FieldDef::image("image", "Portrait"),
        ],
    )
    .preview(PreviewConfig::title_from("name"))
}

fn richtext_dialog() -> DocumentSchema {
    DocumentSchema::document(
        "dialog.richtext",
        "Rich Text Dialog",
        vec![
            FieldDef::slug("slug", "Identifier").required().describe(
                "Unique identifier used to link to this dialog from a button. \
                 Only lowercase and no special characters except -",
            ),
            FieldDef::portable_text("content", "Content"),
        ],
    )
    .preview(PreviewConfig::rich_text_title("content"))
}

/// One responsive slot of a decoration: an image or an HTML snippet,
/// never both.
fn decoration_slot() -> DocumentSchema {
    DocumentSchema::object(
        "decoration",
        "Decoration",
        vec![
            FieldDef::image("image", "Image"),
            FieldDef::new("html", "HTML", crate::field::FieldKind::Text)
                .describe("Raw HTML rendered in place of an image.")
                .hidden_unless(Condition::NotDefined {
                    field: "image".to_string(),
                }),
            FieldDef::string("background", "Background"),
        ],
    )
}

fn decoration_preset() -> DocumentSchema {
    DocumentSchema::document(
        "preset.decoration",
        "Decoration preset",
        vec![
            FieldDef::string("title", "Title")
                .describe("A descriptive title for this decoration, used in the CMS."),
            FieldDef::string("location", "Location")
                .describe("Position the decoration inside or outside the block."),
            FieldDef::new("breakout", "Breakout", crate::field::FieldKind::Boolean).describe(
                "Stay inside the bounding box of the block or allow the \
                 decoration to break outside.",
            ),
            FieldDef::new(
                "mobile",
                "Mobile",
                crate::field::FieldKind::Object {
                    fields: decoration_slot().fields,
                },
            )
            .describe("The base decoration, used on \"mobile\" breakpoints and higher."),
            FieldDef::new(
                "tablet",
                "Tablet",
                crate::field::FieldKind::Object {
                    fields: decoration_slot().fields,
                },
            )
            .describe("Override the base decoration for \"tablet\" breakpoints and higher."),
            FieldDef::new(
                "desktop",
                "Desktop",
                crate::field::FieldKind::Object {
                    fields: decoration_slot().fields,
                },
            )
            .describe("Override the base decoration for \"desktop\" breakpoints and higher."),
        ],
    )
    .preview(PreviewConfig::title_from("title"))
}

fn button() -> DocumentSchema {
    DocumentSchema::object(
        "button",
        "Button",
        vec![
            FieldDef::string("label", "Label").required(),
            FieldDef::string("external", "External link"),
            FieldDef::reference(
                "internal",
                "Internal link",
                &["page.content", "page.blog", "page.blogs"],
            )
            .hidden_unless(Condition::NotDefined {
                field: "external".to_string(),
            }),
            FieldDef::reference("dialog", "Dialog", &["dialog.richtext"]),
        ],
    )
}

fn hero_basic() -> DocumentSchema {
    DocumentSchema::object(
        "hero.basic",
        "Basic hero",
        vec![
            FieldDef::string("title", "Title").required(),
            FieldDef::string("eyebrow", "Eyebrow"),
            FieldDef::portable_text("text", "Text"),
            FieldDef::image("image", "Image"),
            FieldDef::array("buttons", "Buttons", &["button"]),
        ],
    )
    .preview(PreviewConfig::title_from("title"))
}

fn block_textmedia() -> DocumentSchema {
    DocumentSchema::object(
        "block.textmedia",
        "Text and media",
        vec![
            FieldDef::string("title", "Title"),
            FieldDef::portable_text("text", "Text"),
            FieldDef::image("image", "Image"),
            FieldDef::string("layout", "Layout"),
            FieldDef::array("buttons", "Buttons", &["button"]),
        ],
    )
    .preview(PreviewConfig::title_from("title"))
}

fn block_cardgrid() -> DocumentSchema {
    DocumentSchema::object(
        "block.cardgrid",
        "Card grid",
        vec![
            FieldDef::string("title", "Title"),
            FieldDef::array("cards", "Cards", &["card"]),
        ],
    )
    .preview(PreviewConfig::title_from("title"))
}

fn card() -> DocumentSchema {
    DocumentSchema::object(
        "card",
        "Card",
        vec![
            FieldDef::string("title", "Title").required(),
            FieldDef::portable_text("text", "Text"),
            FieldDef::image("image", "Image"),
            FieldDef::array("buttons", "Buttons", &["button"]),
        ],
    )
    .preview(PreviewConfig::title_from("title"))
}

fn block_article() -> DocumentSchema {
    DocumentSchema::object(
        "block.article",
        "Article",
        vec![
            FieldDef::portable_text("body", "Body").required(),
            FieldDef::new(
                "showRelated",
                "Show related articles",
                crate::field::FieldKind::Boolean,
            ),
        ],
    )
    .preview(PreviewConfig::rich_text_title("body"))
}

fn block_richtext() -> DocumentSchema {
    DocumentSchema::object(
        "block.richtext",
        "Rich text",
        vec![FieldDef::portable_text("content", "Content").required()],
    )
    .preview(PreviewConfig::rich_text_title("content"))
}

fn block_resourcelist() -> DocumentSchema {
    DocumentSchema::object(
        "block.resourcelist",
        "Resource list",
        vec![
            FieldDef::string("title", "Title"),
            FieldDef::object(
                "filter",
                "Filter",
                vec![
                    FieldDef::array("types", "Content types", &["string"]).describe(
                        "Restrict the list to these content types. Leave empty \
                         to include all taggable types.",
                    ),
                    FieldDef::array("tags", "Tags", &["page.tag"])
                        .describe("Only include content sharing at least one of these tags."),
                ],
            ),
            FieldDef::new(
                "limit",
                "Maximum items",
                crate::field::FieldKind::Number,
            )
            .rule(Rule::Min { value: 1.0 })
            .rule(Rule::Max { value: 100.0 }),
        ],
    )
    .preview(PreviewConfig::title_from("title"))
}

fn navigation() -> DocumentSchema {
    let item_fields = vec![
        FieldDef::string("label", "Label").required(),
        FieldDef::object(
            "button",
            "Link",
            vec![
                FieldDef::string("label", "Label"),
                FieldDef::string("external", "External link"),
                FieldDef::reference("internal", "Internal link", &["page.content"]),
            ],
        ),
        FieldDef::array("children", "Children", &["navigation.item"]),
    ];
    DocumentSchema::document(
        "navigation",
        "Navigation",
        vec![
            FieldDef::string("language", "Language").required(),
            FieldDef::array("items", "Items", &["navigation.item"]),
            FieldDef::array("buttons", "Buttons", &["button"]),
            FieldDef::object("item", "Item", item_fields),
        ],
    )
}

fn footer() -> DocumentSchema {
    DocumentSchema::document(
        "footer",
        "Footer",
        vec![
            FieldDef::string("language", "Language").required(),
            FieldDef::string("copyright", "Copyright"),
            FieldDef::array("links", "Link groups", &["footer.group"]),
            FieldDef::array("socials", "Social links", &["footer.social"]),
        ],
    )
}

fn footer_group() -> DocumentSchema {
    DocumentSchema::object(
        "footer.group",
        "Footer link group",
        vec![
            FieldDef::string("title", "Title"),
            FieldDef::array("items", "Links", &["button"]),
        ],
    )
}

fn footer_social() -> DocumentSchema {
    DocumentSchema::object(
        "footer.social",
        "Social link",
        vec![
            FieldDef::string("label", "Label").required(),
            FieldDef::string("href", "URL").required(),
            FieldDef::image("icon", "Icon"),
        ],
    )
}

fn site_config() -> DocumentSchema {
    DocumentSchema::document(
        "config.general",
        "Site configuration",
        vec![
            FieldDef::string("language", "Language").required(),
            FieldDef::string("name", "Site name").required(),
            FieldDef::string("domain", "Domain"),
            FieldDef::object(
                "seo",
                "Default SEO",
                vec![
                    FieldDef::string("title", "Title"),
                    FieldDef::new("description", "Description", crate::field::FieldKind::Text),
                    FieldDef::image("image", "Share image"),
                ],
            ),
        ],
    )
    .initial_value(InitialValue::Literal {
        field: "language".to_string(),
        value: json!("en"),
    })
}

fn theme_config() -> DocumentSchema {
    let named_value = |name: &str, title: &str| {
        FieldDef::array(name, title, &["theme.value"])
    };
    DocumentSchema::document(
        "config.theme",
        "Theme",
        vec![
            named_value("colors", "Colors"),
            named_value("fontFamily", "Font families"),
            named_value("fontWeight", "Font weights"),
            FieldDef::array("fontSize", "Font sizes", &["theme.fontsize"]),
            FieldDef::array("stylesheets", "Stylesheets", &["text"]),
            FieldDef::object(
                "value",
                "Named value",
                vec![
                    FieldDef::string("name", "Name").required(),
                    FieldDef::string("value", "Value").required(),
                ],
            ),
        ],
    )
}

/// Build the registry holding every standard content type.
pub fn standard_registry() -> SchemaRegistry {
    let mut registry = SchemaRegistry::new();
    for schema in [
        content_page(),
        blog_page(),
        blogs_page(),
        event_page(),
        casestudy_page(),
        media_page(),
        tag_page(),
        author(),
        richtext_dialog(),
        decoration_slot(),
        decoration_preset(),
        button(),
        card(),
        hero_basic(),
        block_textmedia(),
        block_cardgrid(),
        block_article(),
        block_richtext(),
        block_resourcelist(),
        navigation(),
        footer(),
        footer_group(),
        footer_social(),
        site_config(),
        theme_config(),
    ] {
        registry.register(schema);
    }
    registry
}
