// ABOUTME: Model module - operations, users groups and permissions.
// ABOUTME: Entities reference each other by typed ids, never by pointer.

mod types;

pub use types::*;
