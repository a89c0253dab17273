//! `farmlog-auth`: pure authorization boundary for quick forms and log types.
//!
//! Decoupled from HTTP and storage.

pub mod account;
pub mod authorize;
pub mod permissions;

pub use account::{Account, AccountId};
pub use authorize::{AuthzError, authorize, authorize_all, is_granted};
pub use permissions::Permission;
