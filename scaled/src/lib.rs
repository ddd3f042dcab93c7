//! Quantities whose scale is a compile-time fraction of a base unit.
//!
//! `scaled` is the user-facing crate in this workspace. It re-exports the full API from `scaled-core` plus the
//! predefined units (SI prefixes, time units).
//!
//! The core idea is: a value is always a `Quantity<V, U>`, where `V` is a plain number and `U` is a zero-sized type
//! describing the size of one tick as a reduced fraction of the base unit. Adding quantities with different ticks
//! produces a quantity in their finest common tick, and every rescale factor is an integer constant the compiler
//! works out.
//!
//! # What this crate solves
//!
//! - Exact mixed-scale integer arithmetic: `42 ms + 77 × (2/3 s)` is `154126 × (1/3000 s)`, with no rounding.
//! - Unit tags and unit algebra at zero run-time cost: a `Quantity<i32, U>` is an `i32`.
//! - Compile-time rejection of malformed units, lossy conversions and element types without a lossless common type.
//!
//! # What this crate does not try to solve
//!
//! - Dimension tracking: a unit is a scale factor only.
//! - Units selected or parsed at run time.
//! - Arbitrary-precision arithmetic of the element values.
//!
//! # Quick start
//!
//! ```rust
//! use scaled::{ratio, Quantity};
//!
//! let a = Quantity::<i32, ratio!(1 / 1000)>::new(42);
//! let b = Quantity::<i32, ratio!(2 / 3)>::new(77);
//!
//! let sum = a + b;
//! assert_eq!(sum.value(), 154_126);
//! assert_eq!(sum.ratio(), (1, 3000));
//! ```
//!
//! With named units:
//!
//! ```rust
//! use scaled::{Milliseconds, Minutes, Second};
//!
//! let t = Minutes::new(2) + Milliseconds::new(500);
//! assert_eq!(t.value(), 120_500);
//! assert_eq!(t.cast::<Second>().value(), 120);
//! ```
//!
//! # Incorrect usage (compile errors)
//!
//! A zero denominator:
//!
//! ```compile_fail
//! use scaled::{ratio, Quantity};
//!
//! let _ = Quantity::<i32, ratio!(1 / 0)>::new(1);
//! ```
//!
//! Element types without a lossless common type:
//!
//! ```compile_fail
//! use scaled::Quantity;
//!
//! let _ = Quantity::<u128>::new(1) + Quantity::<i8>::new(1);
//! ```
//!
//! A lossy exact conversion:
//!
//! ```compile_fail
//! use scaled::{Milliseconds, Second};
//!
//! let _ = Milliseconds::new(1500).to::<Second>();
//! ```
//!
//! # Custom named units
//!
//! `#[derive(Unit)]` expands in terms of `crate::Unit` and `crate::typenum`, so the crate root of the defining crate
//! must bring both into scope:
//!
//! ```rust
//! use scaled::{typenum, Quantity, Unit};
//!
//! #[derive(Clone, Copy, Debug, Unit)]
//! #[unit(symbol = "fr", ratio = 1 / 24)]
//! struct Frame;
//!
//! fn main() {
//!     let clip = Quantity::<u32, Frame>::new(36);
//!     assert_eq!(clip.to_string(), "36 fr");
//!     assert_eq!(clip.to::<scaled::ratio!(1 / 48)>().value(), 72);
//! }
//! ```
//!
//! # Large ratios
//!
//! The common tick of two units is worked out by the trait solver in the crate that adds them. Components up to
//! about `2^32` fit in the compiler's default recursion limit; larger ones, such as [`prefix::Atto`] against
//! [`prefix::Nano`], need a higher limit at the root of the using crate:
//!
//! ```rust
//! #![recursion_limit = "256"]
//! use scaled::{prefix, Quantity};
//!
//! fn main() {
//!     let sum = Quantity::<u64, prefix::Atto>::new(1) + Quantity::<u64, prefix::Nano>::new(1);
//!     assert_eq!(sum.value(), 1_000_000_001);
//! }
//! ```
//!
//! # Modules
//!
//! - `scaled::prefix` (`Milli`, `Kilo`, … as ratios)
//! - `scaled::time` (nanoseconds to weeks; also re-exported at the crate root)
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `scaled-core`.
//! - `serde`: enables `serde` support for `Quantity<V, U>`; serialization is the raw value only, or value plus tick
//!   through `serde_with_unit`.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! scaled = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! Operators follow the element type (integer overflow panics in debug builds). The `checked_*` methods return
//! [`QuantityError`] instead.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use scaled_core::*;

pub use scaled_core::units::prefix;
pub use scaled_core::units::time;

pub use scaled_core::units::time::*;
