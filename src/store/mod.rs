// ABOUTME: Store module - the storage boundary the authorization core talks to.
// ABOUTME: Defines the Store trait and an in-memory implementation.

mod memory;
mod traits;

pub use memory::*;
pub use traits::*;
