// ABOUTME: Root module for opauth - operation hierarchies and permission resolution.
// ABOUTME: Re-exports the public types from submodules.

pub mod error;
pub mod hierarchy;
pub mod model;
pub mod path;
pub mod permission;
pub mod prelude;
pub mod repository;
pub mod resolution;
pub mod store;

pub use error::AuthzError;
