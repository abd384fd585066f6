// ABOUTME: Hierarchy module - the operation tree and how it grows.
// ABOUTME: Creates operations with their missing ancestors and handles updates.

mod config;
mod operations;

pub use config::*;
pub use operations::*;
