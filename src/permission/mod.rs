// ABOUTME: Permission module - which operations a users group holds.
// ABOUTME: GrantTable for in-memory grants, PermissionIndex for store lookups.

mod grant;
mod index;

pub use grant::*;
pub use index::*;

#[cfg(test)]
mod index_test;
