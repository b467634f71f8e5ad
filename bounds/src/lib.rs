#![no_std]

//! `bounds`: a named constraint vocabulary for generic code.
//!
//! Generic functions want to say "any signed integer", "anything with a total
//! order", or "anything shaped like a slice of `T`" without re-listing the
//! concrete types at every call site. This crate names those classifications
//! once, as marker traits, so that downstream crates can write
//! `T: Ordered` or `S: Slice<T>` and get the check at instantiation time.
//!
//! None of the traits here have runtime behavior. A bound that is not
//! satisfied is a compile error, not a panic:
//!
//! ```compile_fail
//! fn smallest<T: bounds::Ordered>(a: T, b: T) -> T {
//!     if a < b { a } else { b }
//! }
//!
//! // Vec<u8> has no total order classification; this does not compile.
//! smallest(vec![1u8], vec![2u8]);
//! ```
//!
//! The traits are deliberately not sealed. A newtype over a classified type
//! can opt back in with a one-line impl, which is the closest Rust analog to
//! classifying by underlying representation:
//!
//! ```
//! #[derive(PartialEq, PartialOrd)]
//! struct Celsius(f64);
//!
//! impl bounds::Ordered for Celsius {}
//! ```
//!
//! # Feature flags
//!
//! - `alloc`: impls for `Vec`, `Box<[T]>`, `String`, and `BTreeMap`.
//! - `std` (default, implies `alloc`): impls for `HashMap` and the
//!   `std::sync::mpsc` channel halves.
//! - `complex`: the [`Complex`] classification for `num_complex::Complex`.

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

/// Marker for any fixed-width signed integer type.
pub trait Signed {}

/// Marker for any fixed-width unsigned integer type.
pub trait Unsigned {}

/// Marker for any integer type, signed or unsigned.
///
/// Implemented per concrete type rather than blanket-derived from [`Signed`]
/// and [`Unsigned`]: two blanket impls over unsealed traits would be
/// rejected as potentially overlapping.
pub trait Integer {}

/// Marker for any floating-point type.
pub trait Float {}

/// Marker for any complex numeric type.
///
/// Rust has no built-in complex primitives; with the `complex` feature this
/// is implemented for `num_complex::Complex<T>` over any [`Float`] part.
/// Unused by the sliceops crate, retained so the vocabulary covers the full
/// numeric kind set.
pub trait Complex {}

/// Marker for any type with a total-order comparison: `<`, `<=`, `>=`, `>`.
///
/// Satisfied by all integer and float types plus the text types. Note that
/// the float impls keep IEEE semantics: `NaN` compares as unordered, exactly
/// as it does through `PartialOrd`.
pub trait Ordered: PartialOrd {}

macro_rules! impl_marker {
    ($name:ident for $($t:ty),+ $(,)?) => {
        $(impl $name for $t {})+
    };
}

impl_marker!(Signed for i8, i16, i32, i64, i128, isize);
impl_marker!(Unsigned for u8, u16, u32, u64, u128, usize);
impl_marker!(Integer for i8, i16, i32, i64, i128, isize);
impl_marker!(Integer for u8, u16, u32, u64, u128, usize);
impl_marker!(Float for f32, f64);

impl_marker!(Ordered for i8, i16, i32, i64, i128, isize);
impl_marker!(Ordered for u8, u16, u32, u64, u128, usize);
impl_marker!(Ordered for f32, f64);
impl_marker!(Ordered for char, str);

impl Ordered for &str {}

#[cfg(feature = "alloc")]
impl Ordered for alloc::string::String {}

#[cfg(feature = "complex")]
impl<T: Float> Complex for num_complex::Complex<T> {}

/// Shape constraint: anything viewable as a contiguous sequence of `Elem`.
///
/// This is the one trait in the vocabulary with a method, because generic
/// sequence code needs an actual `&[Elem]` to walk. Covers owning containers
/// and borrowed views alike, so a function bounded on `Slice<T>` accepts a
/// `Vec`, an array, or a plain slice without adapters.
pub trait Slice<Elem> {
    fn as_slice(&self) -> &[Elem];
}

impl<Elem> Slice<Elem> for [Elem] {
    fn as_slice(&self) -> &[Elem] {
        self
    }
}

impl<Elem, const N: usize> Slice<Elem> for [Elem; N] {
    fn as_slice(&self) -> &[Elem] {
        self
    }
}

impl<Elem> Slice<Elem> for &[Elem] {
    fn as_slice(&self) -> &[Elem] {
        self
    }
}

impl<Elem> Slice<Elem> for &mut [Elem] {
    fn as_slice(&self) -> &[Elem] {
        self
    }
}

#[cfg(feature = "alloc")]
impl<Elem> Slice<Elem> for alloc::vec::Vec<Elem> {
    fn as_slice(&self) -> &[Elem] {
        self
    }
}

#[cfg(feature = "alloc")]
impl<Elem> Slice<Elem> for alloc::boxed::Box<[Elem]> {
    fn as_slice(&self) -> &[Elem] {
        self
    }
}

/// Shape marker: any associative container keyed by `Key` with values `Val`.
///
/// Keys must at least support equality; individual containers may require
/// more (`BTreeMap` needs `Ord`, `HashMap` needs `Hash`).
pub trait Map<Key: Eq, Val> {}

#[cfg(feature = "alloc")]
impl<Key: Ord, Val> Map<Key, Val> for alloc::collections::BTreeMap<Key, Val> {}

#[cfg(feature = "std")]
impl<Key, Val, S> Map<Key, Val> for std::collections::HashMap<Key, Val, S>
where
    Key: Eq + core::hash::Hash,
    S: core::hash::BuildHasher,
{
}

/// Shape marker: any communication-queue endpoint carrying `Elem`.
///
/// Covers both halves of a channel; sending and receiving capability is not
/// distinguished at this level.
pub trait Chan<Elem> {}

#[cfg(feature = "std")]
impl<Elem> Chan<Elem> for std::sync::mpsc::Sender<Elem> {}
#[cfg(feature = "std")]
impl<Elem> Chan<Elem> for std::sync::mpsc::SyncSender<Elem> {}
#[cfg(feature = "std")]
impl<Elem> Chan<Elem> for std::sync::mpsc::Receiver<Elem> {}
