#![warn(missing_docs)]
//! Crate-private helpers shared by the collections and their tests.

#[cfg(test)]
pub mod alloc;
pub mod error;
pub mod panic;
pub mod result;
