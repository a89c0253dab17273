//! Entities a log can reference: assets and taxonomy terms.
//!
//! Both live in the host platform's storage; this crate only needs their
//! identity and label.

use serde::{Deserialize, Serialize};

use farmlog_core::{AssetId, Entity, TermId};

/// Asset lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetStatus {
    Active,
    Archived,
}

/// A trackable real-world thing (animal, equipment, land, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    pub name: String,
    /// Asset bundle, e.g. "animal" or "equipment".
    pub asset_type: String,
    pub status: AssetStatus,
}

impl Asset {
    pub fn new(id: AssetId, name: impl Into<String>, asset_type: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            asset_type: asset_type.into(),
            status: AssetStatus::Active,
        }
    }

    pub fn archived(mut self) -> Self {
        self.status = AssetStatus::Archived;
        self
    }
}

impl Entity for Asset {
    type Id = AssetId;

    fn id(&self) -> &AssetId {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

/// Vocabulary holding units of measure.
pub const UNIT_VOCABULARY: &str = "unit";

/// Vocabulary holding laboratories.
pub const LAB_VOCABULARY: &str = "lab";

/// A taxonomy term (a unit such as "kg", a laboratory, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub id: TermId,
    pub vocabulary: String,
    pub name: String,
}

impl Term {
    pub fn new(id: TermId, vocabulary: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            vocabulary: vocabulary.into(),
            name: name.into(),
        }
    }

    pub fn unit(id: TermId, name: impl Into<String>) -> Self {
        Self::new(id, UNIT_VOCABULARY, name)
    }
}

impl Entity for Term {
    type Id = TermId;

    fn id(&self) -> &TermId {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}
