// src/processing/registry.rs
use std::collections::HashMap;

use crate::error::{IndexError, Result};
use crate::processing::indices::{standard_definitions, IndexDefinition, IndexGroup};

/// Immutable name -> formula lookup table.
///
/// Listing order is the order definitions were registered in. Registering
/// the same name twice is an error, so every name resolves to exactly one
/// formula.
#[derive(Debug, Clone)]
pub struct IndexRegistry {
    entries: Vec<&'static IndexDefinition>,
    by_name: HashMap<&'static str, usize>,
}

impl IndexRegistry {
    /// Registry holding every built-in VNIR, SWIR and miscellaneous index.
    pub fn standard() -> Result<Self> {
        Self::from_definitions(standard_definitions())
    }

    pub fn from_definitions<I>(definitions: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'static IndexDefinition>,
    {
        let mut entries = Vec::new();
        let mut by_name = HashMap::new();

        for definition in definitions {
            if by_name.insert(definition.name, entries.len()).is_some() {
                return Err(IndexError::DuplicateIndex(definition.name));
            }
            entries.push(definition);
        }

        Ok(Self { entries, by_name })
    }

    pub fn get(&self, name: &str) -> Option<&'static IndexDefinition> {
        self.by_name.get(name).map(|&i| self.entries[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|definition| definition.name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static IndexDefinition> + '_ {
        self.entries.iter().copied()
    }

    pub fn group(&self, group: IndexGroup) -> impl Iterator<Item = &'static IndexDefinition> + '_ {
        self.iter().filter(move |definition| definition.group == group)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// JSON array of `{name, group, expression, reference}` objects.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.entries)
    }
}
