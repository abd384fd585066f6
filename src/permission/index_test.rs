// ABOUTME: Tests for PermissionIndex - flat resolution of granted operations.
// ABOUTME: Seeds a MemoryStore through the hierarchy, then queries by group name.

use async_trait::async_trait;

use super::*;
use crate::error::StoreError;
use crate::hierarchy::OperationHierarchy;
use crate::model::{Operation, OperationId, Permission, PermissionId, UsersGroup, UsersGroupId};
use crate::store::{MemoryStore, Store};

/// A store that forgets one operation on lookup by id, leaving its
/// permissions pointing at nothing.
struct MissingOperationStore {
    inner: MemoryStore,
    missing: OperationId,
}

#[async_trait]
impl Store for MissingOperationStore {
    async fn find_operation_by_path(&self, path: &str) -> Result<Option<Operation>, StoreError> {
        self.inner.find_operation_by_path(path).await
    }

    async fn find_operation_by_id(
        &self,
        id: OperationId,
    ) -> Result<Option<Operation>, StoreError> {
        if id == self.missing {
            return Ok(None);
        }
        self.inner.find_operation_by_id(id).await
    }

    async fn find_operations_by_parent(
        &self,
        parent: OperationId,
    ) -> Result<Vec<Operation>, StoreError> {
        self.inner.find_operations_by_parent(parent).await
    }

    async fn list_operations(&self) -> Result<Vec<Operation>, StoreError> {
        self.inner.list_operations().await
    }

    async fn find_users_groups_by_name(&self, name: &str) -> Result<Vec<UsersGroup>, StoreError> {
        self.inner.find_users_groups_by_name(name).await
    }

    async fn find_users_group_by_id(
        &self,
        id: UsersGroupId,
    ) -> Result<Option<UsersGroup>, StoreError> {
        self.inner.find_users_group_by_id(id).await
    }

    async fn list_users_groups(&self) -> Result<Vec<UsersGroup>, StoreError> {
        self.inner.list_users_groups().await
    }

    async fn find_permissions_by_users_group_ids(
        &self,
        ids: &[UsersGroupId],
    ) -> Result<Vec<Permission>, StoreError> {
        self.inner.find_permissions_by_users_group_ids(ids).await
    }

    async fn find_permission_by_id(
        &self,
        id: PermissionId,
    ) -> Result<Option<Permission>, StoreError> {
        self.inner.find_permission_by_id(id).await
    }

    async fn list_permissions(&self) -> Result<Vec<Permission>, StoreError> {
        self.inner.list_permissions().await
    }

    async fn save_operation(&self, operation: &Operation) -> Result<(), StoreError> {
        self.inner.save_operation(operation).await
    }
}

#[tokio::test]
async fn test_single_permission_resolves_exactly_that_operation() {
    let store = MemoryStore::new();
    let hierarchy = OperationHierarchy::new(&store);
    let report = hierarchy.create("/Sales/Report", "view report").await.unwrap();
    let admins = store.insert_users_group("Admins").await;
    store.insert_permission(admins.id, report.id).await.unwrap();

    let index = PermissionIndex::new(&store);
    let granted = index.operations_granted_to("Admins").await.unwrap();

    let names: Vec<_> = granted.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["/Sales/Report"]);
}

#[tokio::test]
async fn test_no_ancestor_or_descendant_implication() {
    let store = MemoryStore::new();
    let hierarchy = OperationHierarchy::new(&store);
    let b = hierarchy.create("/A/B", "b").await.unwrap();
    hierarchy.create("/A/B/C", "c").await.unwrap();
    let group = store.insert_users_group("Editors").await;
    store.insert_permission(group.id, b.id).await.unwrap();

    let index = PermissionIndex::new(&store);
    let ids = index.granted_operation_ids("Editors").await.unwrap();

    assert_eq!(ids.len(), 1);
    assert!(ids.contains(&b.id));
}

#[tokio::test]
async fn test_unknown_group_is_empty() {
    let store = MemoryStore::new();
    let index = PermissionIndex::new(&store);

    assert!(index.operations_granted_to("Nobody").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_group_without_permissions_is_empty() {
    let store = MemoryStore::new();
    store.insert_users_group("Idle").await;
    let index = PermissionIndex::new(&store);

    assert!(index.operations_granted_to("Idle").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_duplicate_group_names_are_joined_and_deduplicated() {
    let store = MemoryStore::new();
    let hierarchy = OperationHierarchy::new(&store);
    let report = hierarchy.create("/Sales/Report", "view report").await.unwrap();
    let export = hierarchy.create("/Sales/Export", "export").await.unwrap();

    let first = store.insert_users_group("Admins").await;
    let second = store.insert_users_group("Admins").await;
    store.insert_permission(first.id, report.id).await.unwrap();
    store.insert_permission(second.id, report.id).await.unwrap();
    store.insert_permission(second.id, export.id).await.unwrap();

    let index = PermissionIndex::new(&store);
    let names: Vec<_> = index
        .operations_granted_to("Admins")
        .await
        .unwrap()
        .into_iter()
        .map(|o| o.name)
        .collect();

    assert_eq!(names, vec!["/Sales/Export", "/Sales/Report"]);
}

#[tokio::test]
async fn test_other_groups_do_not_leak() {
    let store = MemoryStore::new();
    let hierarchy = OperationHierarchy::new(&store);
    let report = hierarchy.create("/Sales/Report", "view report").await.unwrap();
    let export = hierarchy.create("/Sales/Export", "export").await.unwrap();

    let admins = store.insert_users_group("Admins").await;
    let guests = store.insert_users_group("Guests").await;
    store.insert_permission(admins.id, report.id).await.unwrap();
    store.insert_permission(guests.id, export.id).await.unwrap();

    let index = PermissionIndex::new(&store);
    let ids = index.granted_operation_ids("Guests").await.unwrap();

    assert_eq!(ids.len(), 1);
    assert!(ids.contains(&export.id));
    assert!(!ids.contains(&report.id));
}

#[tokio::test]
async fn test_permission_on_missing_operation_is_skipped() {
    let inner = MemoryStore::new();
    let hierarchy = OperationHierarchy::new(&inner);
    let a = hierarchy.create("/X/A", "a").await.unwrap();
    let b = hierarchy.create("/X/B", "b").await.unwrap();
    let group = inner.insert_users_group("G").await;
    inner.insert_permission(group.id, a.id).await.unwrap();
    inner.insert_permission(group.id, b.id).await.unwrap();

    let store = MissingOperationStore {
        inner,
        missing: a.id,
    };
    let index = PermissionIndex::new(&store);

    // The dangling id is still granted, but only live operations come back.
    assert_eq!(index.granted_operation_ids("G").await.unwrap().len(), 2);
    let names: Vec<_> = index
        .operations_granted_to("G")
        .await
        .unwrap()
        .into_iter()
        .map(|o| o.name)
        .collect();
    assert_eq!(names, vec!["/X/B"]);
}
