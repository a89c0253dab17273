//! Quick form contract.

use serde::Serialize;

use farmlog_auth::{Account, AuthzError, Permission, authorize_all};

/// Static metadata of a quick form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickFormInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub help_text: &'static str,
    /// Every one of these is required to use the form.
    pub permissions: Vec<Permission>,
}

/// A guided data-entry form that produces logs.
pub trait QuickForm {
    fn info(&self) -> &QuickFormInfo;

    fn id(&self) -> &'static str {
        self.info().id
    }

    /// Checks the account holds all of the form's permissions.
    fn access(&self, account: &Account) -> Result<(), AuthzError> {
        authorize_all(account, &self.info().permissions)
    }
}
