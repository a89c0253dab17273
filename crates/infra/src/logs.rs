use std::sync::{Arc, RwLock};

use farmlog_core::LogId;
use farmlog_log::{DraftLog, SchemaValidator};
use farmlog_quick::{LogPersister, PersistError};

/// A log as the store keeps it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredLog {
    pub id: LogId,
    pub log: DraftLog,
}

/// In-memory log storage, in creation order.
///
/// With a validator attached, drafts that fail schema validation are
/// rejected instead of stored.
#[derive(Default)]
pub struct InMemoryLogStore {
    logs: RwLock<Vec<StoredLog>>,
    validator: Option<Arc<dyn SchemaValidator>>,
}

impl InMemoryLogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_validator(validator: Arc<dyn SchemaValidator>) -> Self {
        Self {
            logs: RwLock::new(Vec::new()),
            validator: Some(validator),
        }
    }

    pub fn get(&self, id: LogId) -> Option<StoredLog> {
        let logs = self.logs.read().ok()?;
        logs.iter().find(|l| l.id == id).cloned()
    }

    pub fn list(&self) -> Vec<StoredLog> {
        match self.logs.read() {
            Ok(logs) => logs.clone(),
            Err(_) => vec![],
        }
    }

    pub fn len(&self) -> usize {
        self.logs.read().map(|logs| logs.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LogPersister for InMemoryLogStore {
    fn create(&self, draft: DraftLog) -> Result<LogId, PersistError> {
        if let Some(validator) = &self.validator {
            let violations = validator.validate(&draft.to_instance());
            if let Some(first) = violations.first() {
                return Err(PersistError::Rejected(first.message.clone()));
            }
        }

        let mut logs = self.logs.write().map_err(|_| PersistError::Unavailable)?;
        let id = LogId::new();
        logs.push(StoredLog { id, log: draft });
        Ok(id)
    }
}
