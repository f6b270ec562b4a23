//! Growable contiguous-storage sequence container.
//!
//! This crate provides [`DynArray`], a generic, resizable sequence with
//! value-semantics ownership, amortized O(1) append, random-element access,
//! and explicit capacity control separate from logical size.
//!
//! # Core Concepts
//!
//! ## Size vs. capacity
//!
//! A `DynArray` tracks a logical element count (`len`) independently of the
//! allocated slot count (`capacity`), with `len <= capacity` at all times.
//! Slots beyond `len` are allocated but dead; they are never observable
//! through the public API.
//!
//! ## Growth policy
//!
//! Two distinct reallocation formulas, never unified:
//!
//! * Organic growth - a push or insert into a full array doubles the
//!   capacity (or allocates one slot from empty), which amortizes a long
//!   run of appends to O(1) per element.
//! * Explicit requests - [`DynArray::reserve`], [`DynArray::resize`] and
//!   [`DynArray::shrink_to_fit`] reallocate to exactly the requested slot
//!   count.
//!
//! ## Storage
//!
//! Storage is a [`contig_buffer::RawBuffer`] - one exclusively owned,
//! fixed-size contiguous allocation. Reallocation builds a new buffer,
//! moves the live prefix across, and swaps ownership in O(1).

pub mod array;
pub mod capacity;
pub mod error;

pub use array::DynArray;
pub use capacity::CapacityHint;
pub use error::{Error, Result};
