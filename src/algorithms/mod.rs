//! Free-standing generic functions that work for any type meeting their trait bounds.
//!
//! [`cmp`] holds the exchange and ordering helpers, [`traverse`] applies an operation to each element
//! of a sequence. Everything is re-exported here.

pub mod cmp;
pub mod traverse;

#[doc(inline)]
pub use cmp::{exchange, greater, lesser};
#[doc(inline)]
pub use traverse::{for_each, for_each_mut, for_each_ptr};
