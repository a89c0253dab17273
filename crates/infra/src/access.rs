use farmlog_auth::{Account, Permission, is_granted};
use farmlog_log::LogTypeRegistry;
use farmlog_quick::{LogTypeAccessFilter, LogTypeOption};

/// Offers the registered log types the account holds
/// `create <type> log` for, in registration order.
#[derive(Debug, Clone)]
pub struct PermissionLogTypeFilter {
    registry: LogTypeRegistry,
}

impl PermissionLogTypeFilter {
    pub fn new(registry: LogTypeRegistry) -> Self {
        Self { registry }
    }
}

impl LogTypeAccessFilter for PermissionLogTypeFilter {
    fn allowed_types_for(&self, account: &Account) -> Vec<LogTypeOption> {
        self.registry
            .iter()
            .filter(|t| is_granted(account, &Permission::create_log(&t.id)))
            .map(|t| LogTypeOption::new(t.id.clone(), t.label.clone()))
            .collect()
    }
}
