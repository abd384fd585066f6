// ABOUTME: Implements OperationHierarchy - lookups and inserts on the operation tree.
// ABOUTME: Missing ancestors are created on demand, top-down, before the target.

use tracing::{debug, info};

use super::{HierarchyConfig, UpdateMode};
use crate::error::{AuthzError, OperationError};
use crate::model::{Operation, OperationId};
use crate::path;
use crate::store::Store;

/// The operation tree, backed by a borrowed store handle.
///
/// Parent links are stored as ids on each [`Operation`]. Children are never
/// held in memory; [`children`](Self::children) asks the store for them.
pub struct OperationHierarchy<'s, S: Store + ?Sized> {
    store: &'s S,
    config: HierarchyConfig,
}

impl<'s, S: Store + ?Sized> OperationHierarchy<'s, S> {
    /// Create a hierarchy over `store` with default settings.
    pub fn new(store: &'s S) -> Self {
        Self::with_config(store, HierarchyConfig::default())
    }

    /// Create a hierarchy over `store` with explicit settings.
    pub fn with_config(store: &'s S, config: HierarchyConfig) -> Self {
        Self { store, config }
    }

    /// The settings this hierarchy runs with.
    pub fn config(&self) -> &HierarchyConfig {
        &self.config
    }

    /// Look up an operation by its exact path.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<Operation>, AuthzError> {
        Ok(self.store.find_operation_by_path(name).await?)
    }

    /// Look up an operation by id.
    pub async fn get_by_id(&self, id: OperationId) -> Result<Option<Operation>, AuthzError> {
        Ok(self.store.find_operation_by_id(id).await?)
    }

    /// All operations, sorted by path.
    pub async fn get_all(&self) -> Result<Vec<Operation>, AuthzError> {
        let mut operations = self.store.list_operations().await?;
        operations.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(operations)
    }

    /// Direct children of an operation, sorted by path.
    pub async fn children(&self, id: OperationId) -> Result<Vec<Operation>, AuthzError> {
        let mut children = self.store.find_operations_by_parent(id).await?;
        children.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(children)
    }

    /// Create an operation, creating any missing ancestors first.
    ///
    /// Implicit ancestors get a comment built from their path, such as
    /// `"Sales operations"` for `/Sales`. When the nearest existing ancestor
    /// has an empty comment it takes the comment of the operation created
    /// directly beneath it.
    ///
    /// The target itself is not checked for existence. Creating a path twice
    /// fails with whatever constraint violation the store reports.
    pub async fn create(&self, name: &str, comment: &str) -> Result<Operation, AuthzError> {
        path::validate(name)?;
        require_comment(comment)?;

        let parent = self.materialize_parent(name, comment).await?;
        let operation = Operation::new(name, comment, parent);
        self.store.save_operation(&operation).await?;

        info!(target: "opauth::hierarchy", name, id = %operation.id, "operation created");
        Ok(operation)
    }

    /// Update an operation by id. Returns `Ok(None)` if the id is unknown.
    ///
    /// With [`UpdateMode::Repersist`] the stored record is saved again as is
    /// and `name` and `comment` are ignored. With [`UpdateMode::Apply`] the new
    /// comment is applied, and a new name moves the operation under its new
    /// parent. Operations with children cannot be renamed.
    pub async fn update(
        &self,
        id: OperationId,
        name: &str,
        comment: &str,
    ) -> Result<Option<Operation>, AuthzError> {
        let Some(mut operation) = self.store.find_operation_by_id(id).await? else {
            debug!(target: "opauth::hierarchy", %id, "update of unknown operation");
            return Ok(None);
        };

        match self.config.update_mode {
            UpdateMode::Repersist => {
                debug!(target: "opauth::hierarchy", %id, "re-persisting operation unchanged");
            }
            UpdateMode::Apply => {
                path::validate(name)?;
                require_comment(comment)?;

                if name != operation.name {
                    if path::is_descendant(name, &operation.name) {
                        return Err(OperationError::InvalidArgument(format!(
                            "cannot move '{}' beneath itself",
                            operation.name
                        ))
                        .into());
                    }
                    if !self.store.find_operations_by_parent(id).await?.is_empty() {
                        return Err(OperationError::InvalidArgument(format!(
                            "cannot rename '{}' while it has children",
                            operation.name
                        ))
                        .into());
                    }
                    operation.parent = self.materialize_parent(name, comment).await?;
                    info!(target: "opauth::hierarchy", from = %operation.name, to = name, "operation renamed");
                    operation.name = name.to_string();
                }
                operation.comment = comment.to_string();
            }
        }

        self.store.save_operation(&operation).await?;
        Ok(Some(operation))
    }

    /// Make sure every ancestor of `name` exists and return the parent's id.
    ///
    /// Walks up to the nearest stored ancestor, then creates the missing
    /// levels top-down so each new node can link to an already saved parent.
    async fn materialize_parent(
        &self,
        name: &str,
        comment: &str,
    ) -> Result<Option<OperationId>, AuthzError> {
        let mut missing = Vec::with_capacity(path::depth(name));
        let mut anchor = None;
        let mut cursor = path::parent_path(name);
        while !cursor.is_empty() {
            if let Some(existing) = self.store.find_operation_by_path(cursor).await? {
                anchor = Some(existing);
                break;
            }
            missing.push(cursor);
            cursor = path::parent_path(cursor);
        }

        let mut parent = None;
        if let Some(mut anchor) = anchor {
            if anchor.comment.is_empty() {
                anchor.comment = match missing.last() {
                    Some(top) => self.config.ancestor_comment(top),
                    None => comment.to_string(),
                };
                debug!(target: "opauth::hierarchy", name = %anchor.name, comment = %anchor.comment, "filled empty ancestor comment");
                self.store.save_operation(&anchor).await?;
            }
            parent = Some(anchor.id);
        }

        for ancestor in missing.into_iter().rev() {
            let operation = Operation::new(ancestor, self.config.ancestor_comment(ancestor), parent);
            self.store.save_operation(&operation).await?;
            debug!(target: "opauth::hierarchy", name = ancestor, id = %operation.id, "ancestor created");
            parent = Some(operation.id);
        }

        Ok(parent)
    }
}

fn require_comment(comment: &str) -> Result<(), OperationError> {
    if comment.is_empty() {
        return Err(OperationError::InvalidArgument(
            "comment must have a value".into(),
        ));
    }
    Ok(())
}
