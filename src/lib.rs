//! This crate is a small collection of generic building blocks, written to practice the basics of
//! generic programming in Rust.
//!
//! # Purpose
//! Each piece here is deliberately simple: a couple of comparison helpers, a traversal function and
//! a runtime-sized [`Array`](collections::contiguous::Array). The interesting part isn't what they
//! do, but how they stay generic over the element type while still getting ownership and bounds
//! right.
//!
//! # Contents
//! - [`algorithms`]: [`exchange`](algorithms::exchange), [`lesser`](algorithms::lesser),
//!   [`greater`](algorithms::greater) and the [`for_each`](algorithms::for_each) family.
//! - [`collections`]: [`Array<T>`](collections::contiguous::Array), an owned buffer of exactly
//!   `size` elements with checked access and deep-copy semantics.
//!
//! # Error Handling
//! Checked access returns a [`Result`] with a strongly typed error
//! ([`IndexOutOfBounds`](collections::contiguous::IndexOutOfBounds)) that implements
//! [`Error`](std::error::Error). Indexing with `[]` is the panicking shorthand for the same check,
//! and panics with the error's message. Allocation failure and capacity overflow aren't treated as
//! recoverable errors at all.
//!
//! # Dependencies
//! I'm not going to go and use [`Vec`] to write [`Array`](collections::contiguous::Array). It
//! manages its own allocation through [`std::alloc`]. The crate depends on `derive_more` for its
//! error types, because the derives remove some very repetitive programming.
//!
//! # Features
//! - `algorithms`: the free-standing generic functions.
//! - `contiguous` (implies `collections`): [`Array`](collections::contiguous::Array).
//! - `collections-all`: every collection, currently just `contiguous`.
//!
//! Both `algorithms` and `collections-all` are enabled by default.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "algorithms")]
pub mod algorithms;
#[cfg(feature = "collections")]
pub mod collections;

#[cfg(feature = "collections")]
pub(crate) mod util;
