//! Collaborators a quick form consumes from the host platform.
//!
//! Each concern is a narrow trait so the form can run against real storage
//! or the in-memory implementations in `farmlog-infra`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use farmlog_auth::Account;
use farmlog_core::{AssetId, LogId, TermId};
use farmlog_log::{Asset, DraftLog, MeasureOption, SchemaValidator, Term};

use crate::error::PersistError;

pub trait AssetLookup: Send + Sync {
    fn by_id(&self, id: AssetId) -> Option<Asset>;
}

pub trait TermLookup: Send + Sync {
    fn by_id(&self, id: TermId) -> Option<Term>;
}

/// A log type the current account may create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogTypeOption {
    pub id: String,
    pub label: String,
}

impl LogTypeOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Decides which log types an account may create.
pub trait LogTypeAccessFilter: Send + Sync {
    fn allowed_types_for(&self, account: &Account) -> Vec<LogTypeOption>;
}

/// The write path for composed logs.
pub trait LogPersister: Send + Sync {
    fn create(&self, draft: DraftLog) -> Result<LogId, PersistError>;
}

pub trait MeasureOptionSource: Send + Sync {
    fn options(&self) -> Vec<MeasureOption>;
}

impl<S> AssetLookup for Arc<S>
where
    S: AssetLookup + ?Sized,
{
    fn by_id(&self, id: AssetId) -> Option<Asset> {
        (**self).by_id(id)
    }
}

impl<S> TermLookup for Arc<S>
where
    S: TermLookup + ?Sized,
{
    fn by_id(&self, id: TermId) -> Option<Term> {
        (**self).by_id(id)
    }
}

impl<S> LogPersister for Arc<S>
where
    S: LogPersister + ?Sized,
{
    fn create(&self, draft: DraftLog) -> Result<LogId, PersistError> {
        (**self).create(draft)
    }
}

/// Everything the inventory quick form talks to.
#[derive(Clone)]
pub struct InventoryServices {
    pub assets: Arc<dyn AssetLookup>,
    pub terms: Arc<dyn TermLookup>,
    pub log_types: Arc<dyn LogTypeAccessFilter>,
    pub schema: Arc<dyn SchemaValidator>,
    pub logs: Arc<dyn LogPersister>,
    pub measures: Arc<dyn MeasureOptionSource>,
}
