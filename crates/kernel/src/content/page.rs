//! Page content: an ordered sequence of block instances.

use serde::{Deserialize, Serialize};

use super::block::Block;
use super::types::{Seo, sort_list_items};

/// A page document shaped for rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageContent {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    pub title: Option<String>,
    pub path: Option<String>,
    pub hero: Option<Block>,
    pub blocks: Vec<Block>,
    pub seo: Option<Seo>,
}

impl PageContent {
    /// Re-sort every curated-list block by publish date descending with
    /// creation-date fallback, making the ordering guarantee local
    /// rather than delegated to the backend.
    pub fn normalize(&mut self) {
        for block in &mut self.blocks {
            if let Block::ResourceList { items, .. } = block {
                sort_list_items(items);
            }
        }
    }

    /// Block keys that appear more than once within this page. Keys must
    /// be unique per page for stable list rendering.
    pub fn duplicate_block_keys(&self) -> Vec<String> {
        let mut seen = std::collections::BTreeMap::new();
        for block in &self.blocks {
            if let Some(key) = block.key() {
                *seen.entry(key.to_string()).or_insert(0u32) += 1;
            }
        }
        seen.into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(key, _)| key)
            .collect()
    }
}
