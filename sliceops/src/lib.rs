#![no_std]

//! `sliceops`: generic helpers for slice-shaped sequences.
//!
//! A flat set of free functions over sequences of any element type:
//! equality, lexicographic comparison, linear search, insertion, deletion,
//! adjacent dedup, and capacity management. No function holds state; each
//! call is independent.
//!
//! This crate is `no_std` compatible (it requires `alloc`). Enable the
//! `std` feature (default) for `std::error::Error` on the error type.
//!
//! Read-only operations ([`equal`], [`compare`], [`index`], [`contains`]
//! and their `_by` variants) are generic over the [`bounds::Slice`] shape
//! constraint, so they accept vectors, arrays, and borrowed slices alike:
//!
//! ```
//! let v = vec![10, 20, 30];
//! assert!(sliceops::equal(&v, &[10, 20, 30]));
//! assert_eq!(sliceops::index(&v, &20), Some(1));
//! ```
//!
//! Editing operations take the `Vec` by value and return it, so the usual
//! shape of a call is a rebind, and the backing storage is reused wherever
//! the operation does not have to grow:
//!
//! ```
//! let mut v = vec![1, 1, 2, 2, 2, 3, 1];
//! v = sliceops::compact(v);
//! assert_eq!(v, [1, 2, 3, 1]);
//!
//! v = sliceops::insert(v, 1, &[8, 9]);
//! assert_eq!(v, [1, 8, 9, 2, 3, 1]);
//!
//! v = sliceops::delete(v, 2, 4);
//! assert_eq!(v, [1, 8, 3, 1]);
//! ```
//!
//! # Contract violations
//!
//! A bad index, bad range, or unsatisfiable capacity request is a caller
//! bug, and the operations panic rather than clamp it away. Where an index
//! comes from untrusted input, the `try_` variants report the violation as
//! a [`SliceOpsError`] instead:
//!
//! ```
//! let v = vec![1, 2, 3];
//! assert!(sliceops::try_delete(v, 2, 1).is_err());
//! ```
//!
//! "Not found" is not a violation: [`index`] and [`index_by`] return
//! `None` for it.
//!
//! # Aliasing and threads
//!
//! Every operation documents whether it mutates the input's storage or
//! allocates fresh storage. There is no internal synchronization; the
//! borrow checker already prevents two threads from editing the same
//! `Vec` at once.

extern crate alloc;

mod error;
mod ops;

pub use error::SliceOpsError;
pub use ops::{
    clip, clone_of, compact, compact_by, compare, compare_by, contains, delete, equal, equal_by,
    grow, index, index_by, insert, try_delete, try_grow, try_insert,
};
