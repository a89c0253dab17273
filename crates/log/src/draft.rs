//! Draft logs: what a quick form hands to the write path.

use serde::{Deserialize, Serialize};
use serde_json::json;

use farmlog_core::ValueObject;

use crate::quantity::Quantity;
use crate::schema::LogInstance;

/// Rich text with an explicit text format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notes {
    pub value: String,
    pub format: String,
}

impl Notes {
    pub fn new(value: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            format: format.into(),
        }
    }

    /// Empty notes in the given format.
    pub fn empty(format: impl Into<String>) -> Self {
        Self::new(String::new(), format)
    }
}

impl ValueObject for Notes {}

/// Log status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogStatus {
    Pending,
    Done,
}

impl LogStatus {
    pub fn from_done(done: bool) -> Self {
        if done { Self::Done } else { Self::Pending }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Done => "done",
        }
    }
}

impl From<bool> for LogStatus {
    fn from(done: bool) -> Self {
        Self::from_done(done)
    }
}

impl core::fmt::Display for LogStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully composed, not yet persisted log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftLog {
    pub log_type: String,
    /// Seconds since the Unix epoch.
    pub timestamp: i64,
    pub quantities: Vec<Quantity>,
    pub notes: Notes,
    pub status: LogStatus,
    pub name: String,
}

impl DraftLog {
    /// Field values of this draft, keyed by field name.
    pub fn to_instance(&self) -> LogInstance {
        let mut instance = LogInstance::minimal(&self.log_type)
            .with_value("name", json!(self.name))
            .with_value("timestamp", json!(self.timestamp))
            .with_value("status", json!(self.status.as_str()))
            .with_value("notes", json!(self.notes));

        if !self.quantities.is_empty() {
            instance = instance.with_value("quantity", json!(self.quantities));
            let assets: Vec<_> = self.quantities.iter().filter_map(|q| q.asset).collect();
            if !assets.is_empty() {
                instance = instance.with_value("asset", json!(assets));
            }
        }
        instance
    }
}
