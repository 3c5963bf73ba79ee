//! A module containing [`Array`] and associated types.
//!
//! Besides [`Array`] itself, this includes [`IntoIter`] for owned iteration and the
//! [`IndexOutOfBounds`] error returned by checked access. [`IterMut`](std::slice::IterMut) and
//! [`Iter`](std::slice::Iter) from [`std::slice`] are used for borrowed iteration.
//!
//! [`Array`] is also re-exported under the parent module.

mod array;
mod iter;
mod tests;

pub use array::*;
pub use iter::*;
