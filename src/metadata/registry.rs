//! Named provider registry.
//!
//! Embedders register one provider per configured database and resolve them
//! by name at tool-call time.

use std::collections::HashMap;
use std::sync::Arc;

use super::provider::{ProviderError, ProviderResult, SchemaProvider};

/// Registry of configured database providers, keyed by name.
#[derive(Default, Clone)]
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn SchemaProvider>>,
}

impl ProviderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider under its own name.
    ///
    /// A later registration under the same name replaces the earlier one.
    pub fn register(&mut self, provider: Arc<dyn SchemaProvider>) {
        self.providers
            .insert(provider.name().to_lowercase(), provider);
    }

    /// Resolve a provider by name, case-insensitively.
    pub fn get(&self, name: &str) -> ProviderResult<Arc<dyn SchemaProvider>> {
        self.providers
            .get(&name.to_lowercase())
            .cloned()
            .ok_or_else(|| ProviderError::UnknownDatabase {
                name: name.to_string(),
                available: self.names().join(", "),
            })
    }

    /// Registered names, sorted for stable listings.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .providers
            .values()
            .map(|p| p.name().to_string())
            .collect();
        names.sort();
        names
    }

    /// Number of registered providers.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
