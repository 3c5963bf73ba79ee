//! Contiguous collection types. At the moment that is only [`Array`], a collection sized once at
//! runtime.
#![warn(missing_docs)]

pub mod array;

#[doc(inline)]
pub use array::{Array, IndexOutOfBounds};
