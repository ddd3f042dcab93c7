//! SI prefixes as unit ratios.
//!
//! Each prefix is a [`Ratio`](crate::Ratio) relative to the base unit, so `Quantity<i64, Milli>` counts thousandths
//! of whatever the base unit stands for. Prefixes carry no symbol and display as `[n/d]`.
//!
//! ```rust
//! use scaled_core::prefix::{Kilo, Milli};
//! use scaled_core::Quantity;
//!
//! let sum = Quantity::<i64, Kilo>::new(2) + Quantity::<i64, Milli>::new(5);
//! assert_eq!(sum.value(), 2_000_005);
//! assert_eq!(sum.to_string(), "2000005 [1/1000]");
//! ```

use crate::ratio;

/// `10^-18`.
pub type Atto = ratio!(1 / 1_000_000_000_000_000_000);
/// `10^-15`.
pub type Femto = ratio!(1 / 1_000_000_000_000_000);
/// `10^-12`.
pub type Pico = ratio!(1 / 1_000_000_000_000);
/// `10^-9`.
pub type Nano = ratio!(1 / 1_000_000_000);
/// `10^-6`.
pub type Micro = ratio!(1 / 1_000_000);
/// `10^-3`.
pub type Milli = ratio!(1 / 1_000);
/// `10^-2`.
pub type Centi = ratio!(1 / 100);
/// `10^-1`.
pub type Deci = ratio!(1 / 10);
/// `10^1`.
pub type Deca = ratio!(10);
/// `10^2`.
pub type Hecto = ratio!(100);
/// `10^3`.
pub type Kilo = ratio!(1_000);
/// `10^6`.
pub type Mega = ratio!(1_000_000);
/// `10^9`.
pub type Giga = ratio!(1_000_000_000);
/// `10^12`.
pub type Tera = ratio!(1_000_000_000_000);
/// `10^15`.
pub type Peta = ratio!(1_000_000_000_000_000);
/// `10^18`.
pub type Exa = ratio!(1_000_000_000_000_000_000);
