// ABOUTME: Defines the authorization entities and their identifiers.
// ABOUTME: Operation, UsersGroup and Permission, all serializable for stores.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Generate a fresh random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

entity_id!(
    /// Identifier of an [`Operation`].
    OperationId
);
entity_id!(
    /// Identifier of a [`UsersGroup`].
    UsersGroupId
);
entity_id!(
    /// Identifier of a [`Permission`].
    PermissionId
);

/// A named, hierarchically pathed permission target such as `/Sales/Report`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    pub id: OperationId,

    /// Full path of the operation. Unique across the store.
    pub name: String,

    /// Human-readable description.
    pub comment: String,

    /// The operation one level up, or None for a root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<OperationId>,
}

impl Operation {
    /// Create a new operation with a fresh id.
    pub fn new(
        name: impl Into<String>,
        comment: impl Into<String>,
        parent: Option<OperationId>,
    ) -> Self {
        Self {
            id: OperationId::new(),
            name: name.into(),
            comment: comment.into(),
            parent,
        }
    }

    /// Returns true if this operation has no parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// A named collection of users that permissions are granted to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersGroup {
    pub id: UsersGroupId,
    pub name: String,
}

impl UsersGroup {
    /// Create a new users group with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: UsersGroupId::new(),
            name: name.into(),
        }
    }
}

/// Binds one users group to one exact operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permission {
    pub id: PermissionId,
    pub users_group: UsersGroupId,
    pub operation: OperationId,
}

impl Permission {
    /// Create a new permission with a fresh id.
    pub fn new(users_group: UsersGroupId, operation: OperationId) -> Self {
        Self {
            id: PermissionId::new(),
            users_group,
            operation,
        }
    }
}
