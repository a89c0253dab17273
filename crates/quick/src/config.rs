//! Inventory quick form configuration.
//!
//! Defaults match the stock form. Hosts may load overrides from JSON and
//! from `FARMLOG_INVENTORY_*` environment variables.

use serde::{Deserialize, Serialize};

use farmlog_core::{DomainError, DomainResult};
use farmlog_log::AdjustmentKind;

pub const ENV_DEFAULT_LOG_TYPE: &str = "FARMLOG_INVENTORY_DEFAULT_LOG_TYPE";
pub const ENV_DEFAULT_ADJUSTMENT: &str = "FARMLOG_INVENTORY_DEFAULT_ADJUSTMENT";
pub const ENV_NOTES_FORMAT: &str = "FARMLOG_INVENTORY_NOTES_FORMAT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryFormConfig {
    pub default_log_type: String,
    pub default_adjustment: AdjustmentKind,
    pub default_done: bool,
    pub notes_format: String,
    pub name_max_length: usize,
    pub asset_max_length: usize,
    pub quantity_field_size: u32,
}

impl Default for InventoryFormConfig {
    fn default() -> Self {
        Self {
            default_log_type: "observation".to_string(),
            default_adjustment: AdjustmentKind::Reset,
            default_done: true,
            notes_format: "default".to_string(),
            name_max_length: 255,
            asset_max_length: 1024,
            quantity_field_size: 16,
        }
    }
}

impl InventoryFormConfig {
    /// Parse a JSON document; missing keys keep their defaults.
    pub fn from_json_str(json: &str) -> DomainResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("inventory form config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by the process environment.
    pub fn from_env() -> DomainResult<Self> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `FARMLOG_INVENTORY_*` overrides from `lookup`.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        if let Some(log_type) = lookup(ENV_DEFAULT_LOG_TYPE) {
            self.default_log_type = log_type;
        }
        if let Some(adjustment) = lookup(ENV_DEFAULT_ADJUSTMENT) {
            self.default_adjustment = AdjustmentKind::parse(adjustment.trim());
        }
        if let Some(format) = lookup(ENV_NOTES_FORMAT) {
            self.notes_format = format;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.default_log_type.trim().is_empty() {
            return Err(DomainError::validation("default_log_type cannot be empty"));
        }
        if !self.default_adjustment.is_known() {
            return Err(DomainError::validation(format!(
                "default_adjustment '{}' is not one of increment, decrement, reset",
                self.default_adjustment
            )));
        }
        if self.notes_format.trim().is_empty() {
            return Err(DomainError::validation("notes_format cannot be empty"));
        }
        if self.name_max_length == 0 || self.asset_max_length == 0 {
            return Err(DomainError::validation("maximum lengths must be positive"));
        }
        Ok(())
    }
}
