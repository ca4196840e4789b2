//! Declarative content type definitions for the studio editor.
//!
//! Describes the editable shape of every content type: fields with
//! validation and conditional visibility, list previews (including
//! rich-text flattening for titles), default orderings, and seeded
//! initial values. The runtime query path never consumes these; they
//! exist to be exported as JSON for the authoring tool.

pub mod document;
pub mod field;
pub mod registry;
pub mod standard;

pub use document::{
    DocumentSchema, Direction, InitialValue, Ordering, PreviewConfig, SchemaKind, blocks_to_text,
};
pub use field::{Condition, FieldDef, FieldKind, Rule};
pub use registry::SchemaRegistry;
pub use standard::standard_registry;
