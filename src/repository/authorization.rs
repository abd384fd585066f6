// ABOUTME: Implements AuthorizationRepository - the facade callers use per unit of work.
// ABOUTME: Delegates edits to OperationHierarchy and queries to ResolutionEngine.

use crate::error::AuthzError;
use crate::hierarchy::{HierarchyConfig, OperationHierarchy};
use crate::model::{
    Operation, OperationId, Permission, PermissionId, UsersGroup, UsersGroupId,
};
use crate::resolution::ResolutionEngine;
use crate::store::Store;

/// Reads and edits the security model through one borrowed store handle.
///
/// Create one per logical unit of work. The store decides isolation and
/// atomicity; this type adds none.
pub struct AuthorizationRepository<'s, S: Store + ?Sized> {
    store: &'s S,
    hierarchy: OperationHierarchy<'s, S>,
    resolution: ResolutionEngine<'s, S>,
}

impl<'s, S: Store + ?Sized> AuthorizationRepository<'s, S> {
    /// Create a repository with default hierarchy settings.
    pub fn new(store: &'s S) -> Self {
        Self::with_config(store, HierarchyConfig::default())
    }

    /// Create a repository with explicit hierarchy settings.
    pub fn with_config(store: &'s S, config: HierarchyConfig) -> Self {
        Self {
            store,
            hierarchy: OperationHierarchy::with_config(store, config),
            resolution: ResolutionEngine::new(store),
        }
    }

    /// The underlying operation hierarchy.
    pub fn hierarchy(&self) -> &OperationHierarchy<'s, S> {
        &self.hierarchy
    }

    /// All users groups, sorted by name.
    pub async fn get_users_groups(&self) -> Result<Vec<UsersGroup>, AuthzError> {
        let mut groups = self.store.list_users_groups().await?;
        groups.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(groups)
    }

    /// All operations, sorted by path.
    pub async fn get_operations(&self) -> Result<Vec<Operation>, AuthzError> {
        self.hierarchy.get_all().await
    }

    /// All permissions.
    pub async fn get_permissions(&self) -> Result<Vec<Permission>, AuthzError> {
        Ok(self.store.list_permissions().await?)
    }

    /// Look up a users group by id.
    pub async fn get_users_group_by_id(
        &self,
        id: UsersGroupId,
    ) -> Result<Option<UsersGroup>, AuthzError> {
        Ok(self.store.find_users_group_by_id(id).await?)
    }

    /// Look up an operation by id.
    pub async fn get_operation_by_id(
        &self,
        id: OperationId,
    ) -> Result<Option<Operation>, AuthzError> {
        self.hierarchy.get_by_id(id).await
    }

    /// Look up an operation by its exact path.
    pub async fn get_operation_by_name(&self, name: &str) -> Result<Option<Operation>, AuthzError> {
        self.hierarchy.get_by_name(name).await
    }

    /// Look up a permission by id.
    pub async fn get_permission_by_id(
        &self,
        id: PermissionId,
    ) -> Result<Option<Permission>, AuthzError> {
        Ok(self.store.find_permission_by_id(id).await?)
    }

    /// Operations granted to the users group called `name`.
    pub async fn get_operations_by_users_group(
        &self,
        name: &str,
    ) -> Result<Vec<Operation>, AuthzError> {
        self.resolution.get_operations_by_users_group(name).await
    }

    /// Create an operation and any missing ancestors.
    pub async fn create_operation(
        &self,
        name: &str,
        comment: &str,
    ) -> Result<Operation, AuthzError> {
        self.hierarchy.create(name, comment).await
    }

    /// Update an operation according to the configured update mode.
    pub async fn update_operation(
        &self,
        id: OperationId,
        name: &str,
        comment: &str,
    ) -> Result<Option<Operation>, AuthzError> {
        self.hierarchy.update(id, name, comment).await
    }
}
