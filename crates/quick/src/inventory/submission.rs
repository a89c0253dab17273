use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use farmlog_core::{AssetId, TermId};
use farmlog_log::{AdjustmentKind, Asset, Notes};

/// What the asset element submitted.
///
/// Autocomplete widgets hand back either a loaded asset or the raw text the
/// user typed (normally a numeric id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AssetRef {
    Asset(Asset),
    Id(AssetId),
    Raw(String),
}

impl AssetRef {
    /// Nothing was entered.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Raw(raw) if raw.trim().is_empty())
    }
}

impl From<AssetId> for AssetRef {
    fn from(id: AssetId) -> Self {
        Self::Id(id)
    }
}

impl From<Asset> for AssetRef {
    fn from(asset: Asset) -> Self {
        Self::Asset(asset)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuantityInput {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub units: Option<TermId>,
    #[serde(default)]
    pub measure: String,
}

/// Snapshot of the inventory form's submitted values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySubmission {
    /// Already resolved to the account's timezone.
    pub date: DateTime<FixedOffset>,
    #[serde(default)]
    pub asset: Option<AssetRef>,
    #[serde(default)]
    pub quantity: QuantityInput,
    pub adjustment_kind: AdjustmentKind,
    pub log_type: String,
    pub notes: Notes,
    pub done: bool,
    #[serde(default)]
    pub custom_name: bool,
    #[serde(default)]
    pub name: Option<String>,
}

impl InventorySubmission {
    /// The override name, when custom naming is on and one was typed.
    pub fn name_override(&self) -> Option<&str> {
        if !self.custom_name {
            return None;
        }
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}
