// ABOUTME: Repository module - one facade over the whole authorization model.
// ABOUTME: Listing, lookups, operation edits and group resolution in one place.

mod authorization;

pub use authorization::*;
