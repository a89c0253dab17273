use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Permission identifier.
///
/// Permissions are opaque strings in the host platform's wording (e.g.
/// "create observation log"). The wildcard permission `"*"` grants
/// everything and is what administrator accounts carry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(Cow<'static, str>);

impl Permission {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Permission to create logs of the given type.
    pub fn create_log(log_type: &str) -> Self {
        Self(Cow::Owned(format!("create {log_type} log")))
    }

    pub fn wildcard() -> Self {
        Self(Cow::Borrowed("*"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_wildcard(&self) -> bool {
        self.as_str() == "*"
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
