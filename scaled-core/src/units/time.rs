//! Time units.
//!
//! The base unit for this module is [`Second`] (`1/1`). Every other unit is an exact integer fraction of a second.
//!
//! ## Conventions
//!
//! - The **SI second** is the base unit.
//! - Civil units such as [`Day`] use the conventional mapping `1 day = 86_400 s` (leap seconds ignored).
//! - Calendar months and years have no fixed length and are not provided.
//!
//! ```rust
//! use scaled_core::time::{Hours, Minutes, Second};
//!
//! let elapsed = Hours::new(1) + Minutes::new(30);
//! assert_eq!(elapsed.value(), 90);
//! assert_eq!(elapsed.to::<Second>().value(), 5400);
//! ```

use crate::{Quantity, Unit};

/// Conventional civil mapping used by this module: seconds per day.
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Nanoseconds (`1 ns = 10^-9 s`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "ns", ratio = 1 / 1_000_000_000)]
pub struct Nanosecond;
/// A quantity measured in nanoseconds.
pub type Nanoseconds<V> = Quantity<V, Nanosecond>;

/// Microseconds (`1 µs = 10^-6 s`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "µs", ratio = 1 / 1_000_000)]
pub struct Microsecond;
/// A quantity measured in microseconds.
pub type Microseconds<V> = Quantity<V, Microsecond>;

/// Milliseconds (`1 ms = 10^-3 s`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "ms", ratio = 1 / 1_000)]
pub struct Millisecond;
/// A quantity measured in milliseconds.
pub type Milliseconds<V> = Quantity<V, Millisecond>;

/// Seconds (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "s", ratio = 1)]
pub struct Second;
/// A quantity measured in seconds.
pub type Seconds<V> = Quantity<V, Second>;

/// Minutes (`60 s`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "min", ratio = 60)]
pub struct Minute;
/// A quantity measured in minutes.
pub type Minutes<V> = Quantity<V, Minute>;

/// Hours (`3_600 s`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "h", ratio = 3_600)]
pub struct Hour;
/// A quantity measured in hours.
pub type Hours<V> = Quantity<V, Hour>;

/// Days (`86_400 s`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "d", ratio = 86_400)]
pub struct Day;
/// A quantity measured in days.
pub type Days<V> = Quantity<V, Day>;

/// Weeks (`7 d = 604_800 s`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "wk", ratio = 604_800)]
pub struct Week;
/// A quantity measured in weeks.
pub type Weeks<V> = Quantity<V, Week>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Common;
    use approx::assert_abs_diff_eq;
    use core::any::TypeId;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Unit constants
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn unit_ratios() {
        assert_eq!((Nanosecond::NUM, Nanosecond::DEN), (1, 1_000_000_000));
        assert_eq!((Second::NUM, Second::DEN), (1, 1));
        assert_eq!((Day::NUM, Day::DEN), (SECONDS_PER_DAY, 1));
        assert_eq!(Week::NUM, 7 * SECONDS_PER_DAY);
    }

    #[test]
    fn unit_symbols() {
        assert_eq!(Microsecond::SYMBOL, "µs");
        assert_eq!(Minute::SYMBOL, "min");
        assert_eq!(Weeks::new(2).to_string(), "2 wk");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Exact conversions
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn minutes_to_seconds() {
        assert_eq!(Minutes::new(3).to::<Second>().value(), 180);
    }

    #[test]
    fn day_to_seconds() {
        assert_eq!(Days::new(1u32).to::<Second>().value(), 86_400);
    }

    #[test]
    fn week_to_nanoseconds() {
        assert_eq!(Weeks::new(1i64).to::<Nanosecond>().value(), 604_800_000_000_000);
    }

    #[test]
    fn float_conversions() {
        let hr = Hours::new(0.5).to::<Second>();
        assert_abs_diff_eq!(hr.value(), 1800.0, epsilon = 1e-12);
        let days = Seconds::new(43_200.0).cast::<Day>();
        assert_abs_diff_eq!(days.value(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn truncating_casts() {
        assert_eq!(Seconds::new(86_399).cast::<Day>().value(), 0);
        assert_eq!(Minutes::new(150).cast::<Hour>().value(), 2);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Mixed-unit arithmetic
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn common_unit_is_the_finer_one() {
        assert_eq!(TypeId::of::<Common<Hour, Minute>>(), TypeId::of::<Common<Minute, Minute>>());
        let sum = Hours::new(1) + Milliseconds::new(1);
        assert_eq!(sum.value(), 3_600_001);
        assert_eq!(sum.ratio(), (1, 1000));
    }

    #[test]
    fn mixed_comparisons() {
        assert_eq!(Days::new(7), Weeks::new(1));
        assert!(Hours::new(1) < Minutes::new(61));
        assert!(Milliseconds::new(1_000_001i64) > Seconds::new(1_000i64));
    }

    #[test]
    fn mixed_element_types() {
        let sum = Seconds::new(1u8) + Milliseconds::new(-1i16);
        assert_eq!(sum.value(), 999i16);
    }

    proptest! {
        #[test]
        fn prop_roundtrip_h_s(h in -1_000_000i64..1_000_000) {
            let original = Hours::new(h);
            let back = original.to::<Second>().cast::<Hour>();
            prop_assert_eq!(back.value(), h);
        }

        #[test]
        fn prop_sum_matches_seconds(d in 0i64..10_000, s in 0i64..86_400) {
            let total = Days::new(d) + Seconds::new(s);
            prop_assert_eq!(total.value(), d * 86_400 + s);
            prop_assert_eq!(total.cast::<Day>().value(), d);
        }
    }
}
