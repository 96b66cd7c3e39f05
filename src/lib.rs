// NB: We avoid using closures to map `Result` and `Option`s in various places because they result in less readable assembly output.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(
    clippy::pedantic,
    clippy::cargo,
    clippy::correctness,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    missing_docs,
    rustdoc::missing_crate_level_docs
)]
#![allow(
    clippy::inline_always,
    clippy::module_name_repetitions,
    clippy::partialeq_ne_impl,
    clippy::collapsible_else_if,
    clippy::items_after_statements
)]
#![doc(test(attr(warn(dead_code))))]
//! A growable list backed by a single, exclusively owned buffer, with bounds-checked access.
//!
//! [`GrowList<T>`] tracks a length and a capacity. It starts out without an allocation,
//! grows to [`INITIAL_CAPACITY`] slots on the first insertion and doubles its capacity
//! every time it runs full.
//!
//! ```
//! use grow_list::GrowList;
//!
//! let mut list = GrowList::new();
//! list.append(3).append(7).prepend(1);
//!
//! assert_eq!(list, [1, 3, 7]);
//! assert_eq!(list.to_string(), "<list> size: 3 allocationSize: 10 [ 1, 3, 7 ]");
//! ```
//!
//! # Bounds checking
//! Every element access goes through the same check. [`get`](GrowList::get) and
//! [`get_mut`](GrowList::get_mut) return a [`BoundsError`] for an index past the end,
//! indexing with `list[index]` panics with the same message.
//!
//! ```
//! # use grow_list::GrowList;
//! let list = GrowList::from([1, 3, 7]);
//! let error = list.get(5).unwrap_err();
//! assert_eq!(error.to_string(), "illegal bounds access, list size: 3 tried to access index address: 5");
//! ```
//!
//! # Copies
//! Cloning a list always allocates a new buffer of the same capacity, and
//! [`concatenate`](GrowList::concatenate) always produces a new list that owns its buffer.
//! No two lists ever share memory.
//!
//! # Allocation failure
//! Methods that allocate panic when the allocation fails. Each of them has a
//! `try_`-prefixed counterpart that returns an [`AllocError`] instead.
//!
//! # Feature Flags
//! * **`std`** *(enabled by default)* — Adds an implementation of `std::io::Write` for `GrowList<u8>`.
//! * **`panic-on-alloc`** *(enabled by default)* — Adds functions and trait implementations that will panic when allocations fail.
//!   Without this feature, allocation failures cannot cause panics, and only `try_`-prefixed allocating methods will be available.
//! * **`serde`** — Adds `Serialize` and `Deserialize` implementations for `GrowList`.

#[doc(hidden)]
extern crate alloc;

mod bounds_error;
mod error_behavior;
mod features;
mod grow_list;
mod partial_eq;
mod raw_buffer;

#[cfg(feature = "panic-on-alloc")]
use core::convert::Infallible;
use core::mem;

pub use allocator_api2::alloc::AllocError;
#[cfg(feature = "panic-on-alloc")]
use allocator_api2::alloc::handle_alloc_error;
pub use bounds_error::BoundsError;
pub use grow_list::{GrowList, INITIAL_CAPACITY};

#[cold]
#[inline(never)]
#[cfg(feature = "panic-on-alloc")]
const fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}

#[cold]
#[inline(never)]
fn exact_size_iterator_bad_len() -> ! {
    panic!("ExactSizeIterator returned more items than promised")
}

// this is just `Result::into_ok` but with a name to match our use case
#[inline(always)]
#[cfg(feature = "panic-on-alloc")]
fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

trait SizedTypeProperties: Sized {
    const SIZE: usize = mem::size_of::<Self>();
    const ALIGN: usize = mem::align_of::<Self>();
}

impl<T> SizedTypeProperties for T {}

#[cfg(test)]
mod tests;
