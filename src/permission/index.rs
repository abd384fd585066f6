// ABOUTME: Implements PermissionIndex - resolves a group name to granted operations.
// ABOUTME: A flat join of groups, permissions and operations through the store.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use super::GrantTable;
use crate::error::AuthzError;
use crate::model::{Operation, OperationId, UsersGroupId};
use crate::store::Store;

/// Answers "which operations does this group hold" against a borrowed store.
pub struct PermissionIndex<'s, S: Store + ?Sized> {
    store: &'s S,
}

impl<'s, S: Store + ?Sized> PermissionIndex<'s, S> {
    /// Create an index over `store`.
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Ids of the operations held by groups named `group_name`.
    ///
    /// Names are expected to be unique, but all matches are joined.
    pub async fn granted_operation_ids(
        &self,
        group_name: &str,
    ) -> Result<BTreeSet<OperationId>, AuthzError> {
        let group_ids: Vec<UsersGroupId> = self
            .store
            .find_users_groups_by_name(group_name)
            .await?
            .into_iter()
            .map(|g| g.id)
            .collect();

        if group_ids.is_empty() {
            debug!(target: "opauth::permission", group = group_name, "no users group with this name");
            return Ok(BTreeSet::new());
        }

        let permissions = self
            .store
            .find_permissions_by_users_group_ids(&group_ids)
            .await?;
        Ok(GrantTable::from_permissions(&permissions).granted_to_any(&group_ids))
    }

    /// Distinct operations held by groups named `group_name`, sorted by path.
    ///
    /// Holding `/A/B` does not imply `/A` or `/A/B/C`. An unknown group or a
    /// group without permissions yields an empty list.
    pub async fn operations_granted_to(
        &self,
        group_name: &str,
    ) -> Result<Vec<Operation>, AuthzError> {
        let ids = self.granted_operation_ids(group_name).await?;

        let mut operations = Vec::with_capacity(ids.len());
        for id in ids {
            match self.store.find_operation_by_id(id).await? {
                Some(operation) => operations.push(operation),
                None => {
                    warn!(target: "opauth::permission", %id, group = group_name, "permission references a missing operation")
                }
            }
        }
        operations.sort_by(|a, b| a.name.cmp(&b.name));

        debug!(target: "opauth::permission", group = group_name, count = operations.len(), "resolved granted operations");
        Ok(operations)
    }
}
