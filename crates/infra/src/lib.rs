//! Infrastructure layer: in-memory implementations of the collaborators
//! quick forms consume (assets, terms, logs, access policy, measures).

pub mod access;
pub mod assets;
pub mod logs;
pub mod measures;
pub mod store;
pub mod terms;


use std::sync::Arc;

use farmlog_log::{LogTypeRegistry, RegistrySchemaValidator};
use farmlog_quick::InventoryServices;

pub use access::PermissionLogTypeFilter;
pub use assets::InMemoryAssetStore;
pub use logs::{InMemoryLogStore, StoredLog};
pub use measures::StandardMeasures;
pub use terms::InMemoryTermStore;

/// Shared handles to an in-memory backend, plus the services view a form needs.
pub struct InMemoryBackend {
    pub assets: Arc<InMemoryAssetStore>,
    pub terms: Arc<InMemoryTermStore>,
    pub logs: Arc<InMemoryLogStore>,
    pub registry: LogTypeRegistry,
}

impl InMemoryBackend {
    pub fn new(registry: LogTypeRegistry) -> Self {
        let validator = Arc::new(RegistrySchemaValidator::new(registry.clone()));
        Self {
            assets: Arc::new(InMemoryAssetStore::new()),
            terms: Arc::new(InMemoryTermStore::new()),
            logs: Arc::new(InMemoryLogStore::with_validator(validator)),
            registry,
        }
    }

    pub fn services(&self) -> InventoryServices {
        InventoryServices {
            assets: self.assets.clone(),
            terms: self.terms.clone(),
            log_types: Arc::new(PermissionLogTypeFilter::new(self.registry.clone())),
            schema: Arc::new(RegistrySchemaValidator::new(self.registry.clone())),
            logs: self.logs.clone(),
            measures: Arc::new(StandardMeasures),
        }
    }
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new(LogTypeRegistry::standard())
    }
}
