//! Compile-time branch selection.
//!
//! [`Select<C, T, F>`] picks `T` when the type-level condition `C` is true and `F` otherwise. Selection is plain
//! impl dispatch on the condition type: there is one [`Branch`] impl for "true" and one for "false", so the compiler
//! only ever looks at the impl that matches.
//!
//! Candidates are usually *deferred* computations. A [`Thunk`] is a type whose result (`Thunk::Output`) is only
//! computed when something asks for it, and a [`Constant`] is a type whose value (`Constant::VALUE`) is only
//! evaluated when referenced. Selecting between two deferred computations and then forcing the winner means the loser
//! is named but never elaborated: its trait bounds are not checked and its constants are not evaluated. Recursive
//! type-level algorithms such as [`Euclid`](crate::Euclid) rely on this to stop without expanding one more step.
//!
//! ```rust
//! use scaled_core::{Cond, Constant, Literal, Select};
//!
//! struct Explodes<const N: u64>;
//! impl<const N: u64> Constant for Explodes<N> {
//!     type Type = u64;
//!     const VALUE: u64 = panic!("never selected");
//! }
//!
//! assert_eq!(<Select<Cond<true>, Literal<7>, Explodes<0>> as Constant>::VALUE, 7);
//! ```
//!
//! Forcing the rejected candidate directly is a compile-time error:
//!
//! ```compile_fail
//! use scaled_core::{Cond, Constant, Literal, Select};
//!
//! struct Explodes<const N: u64>;
//! impl<const N: u64> Constant for Explodes<N> {
//!     type Type = u64;
//!     const VALUE: u64 = panic!("selected");
//! }
//!
//! let _ = <Select<Cond<false>, Literal<7>, Explodes<0>> as Constant>::VALUE;
//! ```

use core::marker::PhantomData;
use typenum::{B0, B1};

/// Two-way selection keyed on a type-level boolean.
///
/// Implemented for `typenum`'s [`B1`]/[`B0`] (the result of `typenum` comparisons) and for [`Cond<true>`]/
/// [`Cond<false>`] (literal conditions).
pub trait Branch<T, F> {
    /// The selected candidate.
    type Output;
}

impl<T, F> Branch<T, F> for B1 {
    type Output = T;
}

impl<T, F> Branch<T, F> for B0 {
    type Output = F;
}

/// A literal boolean lifted to the type level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cond<const C: bool>;

impl<T, F> Branch<T, F> for Cond<true> {
    type Output = T;
}

impl<T, F> Branch<T, F> for Cond<false> {
    type Output = F;
}

/// `T` if `C` is true, `F` otherwise.
pub type Select<C, T, F> = <C as Branch<T, F>>::Output;

/// A deferred type-level computation.
pub trait Thunk {
    /// Result of the computation.
    type Output;
}

/// Result of forcing a [`Thunk`].
pub type Force<T> = <T as Thunk>::Output;

/// A thunk that is already evaluated.
pub struct Ready<T>(PhantomData<T>);

impl<T> Thunk for Ready<T> {
    type Output = T;
}

/// A deferred constant value.
pub trait Constant {
    /// Type of the value.
    type Type;
    /// The value; evaluated only when referenced.
    const VALUE: Self::Type;
}

/// A `u64` literal as a [`Constant`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Literal<const N: u64>;

impl<const N: u64> Constant for Literal<N> {
    type Type = u64;
    const VALUE: u64 = N;
}
