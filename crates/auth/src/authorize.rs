use thiserror::Error;

use crate::{Account, Permission};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("forbidden: missing permission '{0}'")]
    Forbidden(String),
}

/// Returns true when the account holds `required` (or the wildcard).
pub fn is_granted(account: &Account, required: &Permission) -> bool {
    account
        .permissions
        .iter()
        .any(|p| p.is_wildcard() || p.as_str() == required.as_str())
}

/// Authorize an account for a single permission.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy check)
pub fn authorize(account: &Account, required: &Permission) -> Result<(), AuthzError> {
    if is_granted(account, required) {
        Ok(())
    } else {
        tracing::debug!(account = %account.id, permission = %required, "permission denied");
        Err(AuthzError::Forbidden(required.as_str().to_string()))
    }
}

/// Authorize an account for every permission in `required`.
///
/// Reports the first missing permission.
pub fn authorize_all(account: &Account, required: &[Permission]) -> Result<(), AuthzError> {
    required.iter().try_for_each(|p| authorize(account, p))
}
