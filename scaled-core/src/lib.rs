//! Core type system for values scaled by compile-time rational units.
//!
//! `scaled-core` provides a zero-cost model of *scaled quantities*:
//!
//! - A *unit* is a zero-sized type implementing [`Unit`]: the size of one tick as a fraction of the base unit. Any
//!   fraction is available as [`Ratio<N, D>`]; named units are declared with `#[derive(Unit)]`.
//! - A value counted in ticks of a unit is a [`Quantity<V, U>`], backed by any [`Scalar`] element type.
//! - Adding or subtracting quantities in different units yields a quantity in their finest common tick
//!   ([`Common`]), in the promoted element type ([`Promoted`]). Everything about the result type, and every rescale
//!   factor, is decided by the compiler.
//!
//! Most users should depend on `scaled` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Mixing tick sizes (`1/1000`, `2/3`, `60`, …) without losing precision: every rescale is an exact integer
//!   multiplication.
//! - Zero runtime overhead for unit tags and unit algebra (phantom types, `typenum` integers, associated consts).
//! - Rejecting ill-formed units and lossy conversions at compile time.
//!
//! # What this crate does not try to solve
//!
//! - Dimensions: a unit is a pure scale factor, so seconds and metres are not told apart.
//! - Units chosen at run time, or parsed from strings.
//! - Arbitrary-precision arithmetic of the element values.
//!
//! # Quick start
//!
//! ```rust
//! use scaled_core::time::{Milliseconds, Seconds};
//!
//! let total = Seconds::new(2) + Milliseconds::new(250);
//! assert_eq!(total.value(), 2250);
//! assert_eq!(total.ratio(), (1, 1000));
//! ```
//!
//! Arbitrary ratios mix the same way:
//!
//! ```rust
//! use scaled_core::{ratio, Quantity};
//!
//! let a = Quantity::<i32, ratio!(1 / 1000)>::new(42);
//! let b = Quantity::<i32, ratio!(2 / 3)>::new(77);
//! let sum = a + b;
//! assert_eq!((sum.value(), sum.ratio()), (154_126, (1, 3000)));
//! ```
//!
//! # Compile-time errors
//!
//! A zero denominator, a lossy [`Quantity::to`], a rescale factor that the element type cannot hold exactly, and a
//! pair of element types without a lossless common type are all rejected by the compiler:
//!
//! ```compile_fail
//! use scaled_core::{ratio, Quantity};
//!
//! // 1/1000 and 1 combine into 1/1000, so the `i8` operand is multiplied by 1000.
//! let _ = Quantity::<i8, ratio!(1 / 1000)>::new(1) + Quantity::<i8>::new(1);
//! ```
//!
//! ```compile_fail
//! use scaled_core::Quantity;
//!
//! let _ = Quantity::<i64>::new(1) + Quantity::<f64>::new(1.0);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `scaled-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! scaled-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support for `Quantity<V, U>`; serialization is the raw value only, or the value plus
//!   its tick through [`serde_with_unit`].
//!
//! # Panics and errors
//!
//! The `+`, `-`, `*` and `/` operators follow the element type: integer overflow panics in debug builds and wraps in
//! release builds, floats follow IEEE-754. The `checked_*` methods return [`QuantityError`] instead and log the
//! rejected operation at `debug` level through the `log` facade.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![recursion_limit = "256"]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod combine;
mod error;
mod macros;
mod quantity;
mod ratio;
mod reduce;
mod scalar;
mod select;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use combine::{Combine, Common};
pub use error::{QuantityError, QuantityResult};
pub use quantity::{Combined, Quantity};
pub use ratio::Ratio;
pub use reduce::{Descend, Euclid, GcdOf, Halt, Reduce, Reduced};
pub use scalar::{Promote, Promoted, Scalar};
pub use select::{Branch, Cond, Constant, Force, Literal, Ready, Select, Thunk};
pub use unit::{Base, Unit};

/// Derive macro for named units; see [`Unit`].
pub use scaled_derive::Unit;

/// The type-level integers used for unit ratios.
pub use typenum;

#[cfg(feature = "serde")]
pub use quantity::serde_with_unit;

#[doc(hidden)]
pub mod __private {
    pub use scaled_derive::uint;
}

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined units.
///
/// These are defined in `scaled-core` so that `#[derive(Unit)]` can name the crate root as `crate`.
pub mod units;

pub use units::prefix;
pub use units::time;
