// ABOUTME: Defines the Store trait - the abstract persistence boundary.
// ABOUTME: Implemented by the surrounding system; MemoryStore ships for tests.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::model::{
    Operation, OperationId, Permission, PermissionId, UsersGroup, UsersGroupId,
};

/// Read and write access to operations, users groups and permissions.
///
/// Lookups that find nothing return `Ok(None)` or an empty vector. Errors are
/// reserved for backend failures and constraint violations, which callers
/// receive unchanged.
#[async_trait]
pub trait Store: Send + Sync {
    /// Find an operation by its exact path.
    async fn find_operation_by_path(&self, path: &str) -> Result<Option<Operation>, StoreError>;

    /// Find an operation by id.
    async fn find_operation_by_id(&self, id: OperationId)
        -> Result<Option<Operation>, StoreError>;

    /// All operations whose parent is `parent`.
    async fn find_operations_by_parent(
        &self,
        parent: OperationId,
    ) -> Result<Vec<Operation>, StoreError>;

    /// Every operation in the store.
    async fn list_operations(&self) -> Result<Vec<Operation>, StoreError>;

    /// All users groups with the given name. Usually zero or one.
    async fn find_users_groups_by_name(&self, name: &str) -> Result<Vec<UsersGroup>, StoreError>;

    /// Find a users group by id.
    async fn find_users_group_by_id(
        &self,
        id: UsersGroupId,
    ) -> Result<Option<UsersGroup>, StoreError>;

    /// Every users group in the store.
    async fn list_users_groups(&self) -> Result<Vec<UsersGroup>, StoreError>;

    /// Permissions held by any of the given users groups.
    async fn find_permissions_by_users_group_ids(
        &self,
        ids: &[UsersGroupId],
    ) -> Result<Vec<Permission>, StoreError>;

    /// Find a permission by id.
    async fn find_permission_by_id(
        &self,
        id: PermissionId,
    ) -> Result<Option<Permission>, StoreError>;

    /// Every permission in the store.
    async fn list_permissions(&self) -> Result<Vec<Permission>, StoreError>;

    /// Persist a new or mutated operation.
    ///
    /// Must fail with [`StoreError::ConstraintViolation`] if a different
    /// operation already holds the same path.
    async fn save_operation(&self, operation: &Operation) -> Result<(), StoreError>;
}
