//! Generic collection types.
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! saves me from writing some of the more repetitive functionality. Checked access is still
//! provided on the types themselves, because the slice versions don't report why they failed.

#[cfg(feature = "contiguous")]
pub mod contiguous;
