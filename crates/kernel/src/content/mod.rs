//! Content transfer shapes and route metadata.
//!
//! This module provides:
//! - `types`: decoded transfer shapes (buttons, images, singletons, list items)
//! - `block`: the tagged block variant type
//! - `page`: page content and block-key invariants
//! - `sitemap`: sitemap grouping and route lookup

mod block;
mod page;
mod sitemap;
pub mod types;

pub use block::{Block, Card, RelatedItem};
pub use page::PageContent;
pub use sitemap::{SitemapItem, SitemapRow, find_route, group_sitemap};
pub use types::{
    Author, Button, FooterContent, FooterGroup, Image, ListItem, NavigationItem, NavigationTree,
    Seo, SiteConfig, SocialLink, sort_list_items,
};
