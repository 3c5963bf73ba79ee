//! Error types shared between collections.

use derive_more::{Display, Error};

/// The error produced when an index falls outside of `0..len` for a collection.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    /// The index that was requested.
    pub index: usize,
    /// The number of elements in the collection at the time of the access.
    pub len: usize,
}

/// The error produced when the memory layout of a collection would exceed [`isize::MAX`] bytes.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;
