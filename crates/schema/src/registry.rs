//! Schema registry.

use std::collections::BTreeMap;

use crate::document::DocumentSchema;

/// Holds every registered content type, keyed by schema name.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: BTreeMap<String, DocumentSchema>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a schema. Re-registering a name replaces the previous
    /// definition.
    pub fn register(&mut self, schema: DocumentSchema) {
        self.schemas.insert(schema.name.clone(), schema);
    }

    pub fn get(&self, name: &str) -> Option<&DocumentSchema> {
        self.schemas.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// All registered schema names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.schemas.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DocumentSchema> {
        self.schemas.values()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Export every schema as a pretty-printed JSON array.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let all: Vec<&DocumentSchema> = self.schemas.values().collect();
        serde_json::to_string_pretty(&all)
    }
}
