// ABOUTME: Implements MemoryStore - a thread-safe in-memory Store.
// ABOUTME: Enforces unique operation paths and permission references.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::Store;
use crate::error::StoreError;
use crate::model::{
    Operation, OperationId, Permission, PermissionId, UsersGroup, UsersGroupId,
};

#[derive(Default)]
struct Tables {
    operations: HashMap<OperationId, Operation>,
    paths: HashMap<String, OperationId>,
    groups: HashMap<UsersGroupId, UsersGroup>,
    permissions: HashMap<PermissionId, Permission>,
}

/// An in-memory store shared between clones.
#[derive(Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a users group. Names are not required to be unique.
    pub async fn insert_users_group(&self, name: impl Into<String>) -> UsersGroup {
        let group = UsersGroup::new(name);
        let mut tables = self.tables.write().await;
        tables.groups.insert(group.id, group.clone());
        debug!(target: "opauth::store", group = %group.name, id = %group.id, "users group inserted");
        group
    }

    /// Grant an operation to a users group.
    ///
    /// Both referenced entities must already exist.
    pub async fn insert_permission(
        &self,
        users_group: UsersGroupId,
        operation: OperationId,
    ) -> Result<Permission, StoreError> {
        let mut tables = self.tables.write().await;
        if !tables.groups.contains_key(&users_group) {
            return Err(StoreError::ConstraintViolation(format!(
                "unknown users group {users_group}"
            )));
        }
        if !tables.operations.contains_key(&operation) {
            return Err(StoreError::ConstraintViolation(format!(
                "unknown operation {operation}"
            )));
        }
        let permission = Permission::new(users_group, operation);
        tables.permissions.insert(permission.id, permission);
        debug!(target: "opauth::store", %users_group, %operation, "permission inserted");
        Ok(permission)
    }

    /// Number of stored operations.
    pub async fn operation_count(&self) -> usize {
        self.tables.read().await.operations.len()
    }
}

impl Clone for MemoryStore {
    fn clone(&self) -> Self {
        Self {
            tables: Arc::clone(&self.tables),
        }
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn find_operation_by_path(&self, path: &str) -> Result<Option<Operation>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .paths
            .get(path)
            .and_then(|id| tables.operations.get(id))
            .cloned())
    }

    async fn find_operation_by_id(
        &self,
        id: OperationId,
    ) -> Result<Option<Operation>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.operations.get(&id).cloned())
    }

    async fn find_operations_by_parent(
        &self,
        parent: OperationId,
    ) -> Result<Vec<Operation>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .operations
            .values()
            .filter(|op| op.parent == Some(parent))
            .cloned()
            .collect())
    }

    async fn list_operations(&self) -> Result<Vec<Operation>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.operations.values().cloned().collect())
    }

    async fn find_users_groups_by_name(&self, name: &str) -> Result<Vec<UsersGroup>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .groups
            .values()
            .filter(|g| g.name == name)
            .cloned()
            .collect())
    }

    async fn find_users_group_by_id(
        &self,
        id: UsersGroupId,
    ) -> Result<Option<UsersGroup>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.groups.get(&id).cloned())
    }

    async fn list_users_groups(&self) -> Result<Vec<UsersGroup>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.groups.values().cloned().collect())
    }

    async fn find_permissions_by_users_group_ids(
        &self,
        ids: &[UsersGroupId],
    ) -> Result<Vec<Permission>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .permissions
            .values()
            .filter(|p| ids.contains(&p.users_group))
            .copied()
            .collect())
    }

    async fn find_permission_by_id(
        &self,
        id: PermissionId,
    ) -> Result<Option<Permission>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.permissions.get(&id).copied())
    }

    async fn list_permissions(&self) -> Result<Vec<Permission>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.permissions.values().copied().collect())
    }

    async fn save_operation(&self, operation: &Operation) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;

        if let Some(owner) = tables.paths.get(&operation.name) {
            if *owner != operation.id {
                return Err(StoreError::ConstraintViolation(format!(
                    "an operation named '{}' already exists",
                    operation.name
                )));
            }
        }

        // A rename releases the old path.
        let previous = tables.operations.get(&operation.id).map(|op| op.name.clone());
        if let Some(previous) = previous {
            if previous != operation.name {
                tables.paths.remove(&previous);
            }
        }

        tables.paths.insert(operation.name.clone(), operation.id);
        tables.operations.insert(operation.id, operation.clone());
        debug!(target: "opauth::store", name = %operation.name, id = %operation.id, "operation saved");
        Ok(())
    }
}
