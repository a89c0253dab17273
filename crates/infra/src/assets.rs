use farmlog_core::AssetId;
use farmlog_log::Asset;
use farmlog_quick::AssetLookup;

use crate::store::{InMemoryStore, KeyedStore};

/// In-memory asset storage.
#[derive(Debug, Default)]
pub struct InMemoryAssetStore {
    assets: InMemoryStore<AssetId, Asset>,
}

impl InMemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, asset: Asset) {
        self.assets.upsert(asset.id, asset);
    }

    /// Assets whose name contains `input` (case-insensitive), active first,
    /// then by name.
    pub fn autocomplete(&self, input: &str) -> Vec<Asset> {
        let needle = input.trim().to_lowercase();
        let mut matches: Vec<Asset> = self
            .assets
            .list()
            .into_iter()
            .filter(|a| a.name.to_lowercase().contains(&needle))
            .collect();
        matches.sort_by(|a, b| a.status.cmp(&b.status).then_with(|| a.name.cmp(&b.name)));
        matches
    }
}

impl AssetLookup for InMemoryAssetStore {
    fn by_id(&self, id: AssetId) -> Option<Asset> {
        self.assets.get(&id)
    }
}
