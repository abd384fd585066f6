// ABOUTME: Resolution module - the query surface for granted operations.
// ABOUTME: Composes PermissionIndex results into the answer returned to callers.

use crate::error::AuthzError;
use crate::model::Operation;
use crate::permission::PermissionIndex;
use crate::store::Store;

/// Resolves which operations a users group holds.
pub struct ResolutionEngine<'s, S: Store + ?Sized> {
    index: PermissionIndex<'s, S>,
}

impl<'s, S: Store + ?Sized> ResolutionEngine<'s, S> {
    /// Create an engine over `store`.
    pub fn new(store: &'s S) -> Self {
        Self {
            index: PermissionIndex::new(store),
        }
    }

    /// Operations granted to the users group called `name`, sorted by path.
    pub async fn get_operations_by_users_group(
        &self,
        name: &str,
    ) -> Result<Vec<Operation>, AuthzError> {
        self.index.operations_granted_to(name).await
    }
}
