//! Strongly-typed identifiers used across the domain.
//!
//! Assets and taxonomy terms are addressed by the numeric ids the host
//! platform assigns them. Logs created through quick forms get a
//! time-ordered UUID.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of an asset (animal, equipment, land, ...).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(u64);

/// Identifier of a taxonomy term (units, labs, ...).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermId(u64);

/// Identifier of a persisted log.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogId(Uuid);

macro_rules! impl_numeric_id {
    ($t:ty, $name:literal) => {
        impl $t {
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            pub fn get(&self) -> u64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<u64> for $t {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let id = s
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(id))
            }
        }
    };
}

impl_numeric_id!(AssetId, "AssetId");
impl_numeric_id!(TermId, "TermId");

impl LogId {
    /// Create a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
    /// for determinism.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for LogId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for LogId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for LogId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::from_str(s).map_err(|e| DomainError::invalid_id(format!("LogId: {e}")))?;
        Ok(Self(uuid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_ids_parse_from_strings() {
        assert_eq!("7".parse::<AssetId>().unwrap(), AssetId::new(7));
        assert_eq!(" 12 ".parse::<TermId>().unwrap(), TermId::new(12));
    }

    #[test]
    fn non_numeric_ids_are_rejected() {
        let err = "cow".parse::<AssetId>().unwrap_err();
        match err {
            DomainError::InvalidId(msg) => assert!(msg.starts_with("AssetId")),
            other => panic!("expected InvalidId, got {other:?}"),
        }
        assert!("-1".parse::<TermId>().is_err());
    }

    #[test]
    fn numeric_ids_serialize_transparently() {
        let json = serde_json::to_string(&AssetId::new(42)).unwrap();
        assert_eq!(json, "42");
    }

    #[test]
    fn log_ids_round_trip_through_display() {
        let id = LogId::new();
        assert_eq!(id.to_string().parse::<LogId>().unwrap(), id);
    }
}
