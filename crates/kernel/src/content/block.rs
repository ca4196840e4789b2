//! The tagged block variant type.
//!
//! Pages are ordered sequences of block instances, each tagged with a
//! `_type` discriminator and carrying a stable `_key` for list rendering.
//! Blocks decode to a closed enum so render code matches exhaustively; a
//! block of a type this build does not know decodes to `Unknown` instead
//! of failing the whole page.

use serde::{Deserialize, Serialize};

use super::types::{Author, Button, Image, ListItem};

/// One block instance on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type")]
pub enum Block {
    #[serde(rename = "hero.basic", rename_all = "camelCase")]
    HeroBasic {
        #[serde(rename = "_key", default)]
        key: String,
        #[serde(default)]
        eyebrow: Option<String>,
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        text: Option<String>,
        #[serde(default)]
        image: Option<Image>,
        #[serde(default)]
        buttons: Vec<Button>,
    },

    #[serde(rename = "block.textmedia", rename_all = "camelCase")]
    TextMedia {
        #[serde(rename = "_key", default)]
        key: String,
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        intro: Option<String>,
        #[serde(default)]
        body: Option<String>,
        #[serde(default)]
        image: Option<Image>,
        #[serde(default)]
        buttons: Vec<Button>,
    },

    #[serde(rename = "block.cardgrid", rename_all = "camelCase")]
    CardGrid {
        #[serde(rename = "_key", default)]
        key: String,
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        intro: Option<String>,
        #[serde(default)]
        items: Vec<Card>,
    },

    #[serde(rename = "block.resourcelist", rename_all = "camelCase")]
    ResourceList {
        #[serde(rename = "_key", default)]
        key: String,
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        intro: Option<String>,
        #[serde(default)]
        items: Vec<ListItem>,
    },

    #[serde(rename = "block.article", rename_all = "camelCase")]
    Article {
        #[serde(rename = "_key", default)]
        key: String,
        #[serde(default)]
        image: Option<Image>,
        #[serde(default)]
        body: Option<String>,
        #[serde(default)]
        tags: Option<Vec<String>>,
        #[serde(default)]
        authors: Option<Vec<Author>>,
        #[serde(default)]
        published_at: Option<String>,
        #[serde(default)]
        related: Vec<RelatedItem>,
    },

    #[serde(rename = "block.richtext", rename_all = "camelCase")]
    RichText {
        #[serde(rename = "_key", default)]
        key: String,
        #[serde(default)]
        content: Option<String>,
    },

    /// A block type this build does not know how to render.
    #[serde(other)]
    Unknown,
}

impl Block {
    /// The block's stable list-rendering key, when it has one.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::HeroBasic { key, .. }
            | Self::TextMedia { key, .. }
            | Self::CardGrid { key, .. }
            | Self::ResourceList { key, .. }
            | Self::Article { key, .. }
            | Self::RichText { key, .. } => Some(key),
            Self::Unknown => None,
        }
    }
}

/// A card within a card-grid block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Card {
    #[serde(rename = "_key")]
    pub key: String,
    pub title: Option<String>,
    pub text: Option<String>,
    pub image: Option<Image>,
    pub buttons: Vec<Button>,
}

/// A related-article teaser within an article block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelatedItem {
    pub id: Option<String>,
    pub title: Option<String>,
    pub href: Option<String>,
    pub image: Option<Image>,
}
