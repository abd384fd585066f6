// ABOUTME: Path module - parsing and validation of operation paths.
// ABOUTME: Operation names are '/'-separated hierarchies like "/Sales/Report".

mod operation_path;

pub use operation_path::*;

#[cfg(test)]
mod operation_path_test;
