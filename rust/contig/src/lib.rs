//! # Contig: growable contiguous sequence containers
//!
//! Contig provides a generic, resizable, contiguous-storage sequence
//! container with value-semantics ownership, amortized O(1) append, and
//! explicit capacity control separate from logical size.
//!
//! ## Module Organization
//!
//! This main crate is a convenient entry point that re-exports the
//! component crates:
//!
//! * [`array`] - the core container: [`DynArray`], the [`CapacityHint`]
//!   construction directive, checked and unchecked element access,
//!   order-preserving insertion and removal, and the two-formula
//!   reallocation policy (organic doubling vs. exact explicit requests).
//! * [`buffer`] - the allocation primitive: [`RawBuffer`], an exclusive
//!   owner of one fixed-size contiguous allocation with O(1) ownership
//!   swap.
//!
//! ## Example
//!
//! ```
//! use contig::DynArray;
//!
//! let mut values: DynArray<u32> = (1..=3).collect();
//! values.insert(1, 9);
//! assert_eq!(values.as_slice(), &[1, 9, 2, 3]);
//! ```

pub use contig_array as array;
pub use contig_buffer as buffer;

pub use contig_array::{CapacityHint, DynArray, Error, Result};
pub use contig_buffer::RawBuffer;
