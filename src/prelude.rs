// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use opauth::prelude::*;` to get started quickly.

pub use crate::error::{AuthzError, ConfigError, OperationError, StoreError};
pub use crate::hierarchy::{HierarchyConfig, OperationHierarchy, UpdateMode};
pub use crate::model::{
    Operation, OperationId, Permission, PermissionId, UsersGroup, UsersGroupId,
};
pub use crate::permission::{GrantTable, PermissionIndex};
pub use crate::repository::AuthorizationRepository;
pub use crate::resolution::ResolutionEngine;
pub use crate::store::{MemoryStore, Store};
