// ABOUTME: Defines GrantTable - users group ids mapped to granted operation ids.
// ABOUTME: Built from permission records; answers flat membership queries.

use std::collections::{BTreeSet, HashMap};

use crate::model::{OperationId, Permission, UsersGroupId};

/// Which operations each users group holds, keyed by group id.
///
/// A grant covers exactly one operation. Nothing is implied for the
/// operation's ancestors or descendants.
#[derive(Debug, Clone, Default)]
pub struct GrantTable {
    grants: HashMap<UsersGroupId, BTreeSet<OperationId>>,
}

impl GrantTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from permission records.
    pub fn from_permissions<'a>(permissions: impl IntoIterator<Item = &'a Permission>) -> Self {
        let mut table = Self::new();
        for permission in permissions {
            table.grant(permission.users_group, permission.operation);
        }
        table
    }

    /// Record that `group` holds `operation`. Returns false if it already did.
    pub fn grant(&mut self, group: UsersGroupId, operation: OperationId) -> bool {
        self.grants.entry(group).or_default().insert(operation)
    }

    /// Union of the operations held by any of the given groups.
    pub fn granted_to_any(&self, groups: &[UsersGroupId]) -> BTreeSet<OperationId> {
        groups
            .iter()
            .filter_map(|g| self.grants.get(g))
            .flatten()
            .copied()
            .collect()
    }
}
