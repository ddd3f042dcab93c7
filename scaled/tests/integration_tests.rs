//! Integration-level tests for the `scaled` facade crate.

// Attosecond-scale ticks need more trait-solver depth than the default.
#![recursion_limit = "256"]

use scaled::*;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use core::any::TypeId;
use proptest::prelude::*;

fn same<A: 'static, B: 'static>() -> bool {
    TypeId::of::<A>() == TypeId::of::<B>()
}

// A unit defined outside the workspace; the glob import above provides `crate::Unit` and `crate::typenum`.
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "fr", ratio = 1 / 24)]
pub struct Frame;

#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "smp", ratio = 1 / 48_000)]
pub struct Sample;

type Frames = Quantity<i64, Frame>;
type Samples = Quantity<i64, Sample>;

// ─────────────────────────────────────────────────────────────────────────────
// Smoke tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn smoke_test_time() {
    let day = Days::new(1);
    let sec: Seconds<i32> = day.to();
    assert_eq!(sec.value(), 86_400);
}

#[test]
fn smoke_test_prefix() {
    let km = Quantity::<i64, prefix::Kilo>::new(3);
    let mm: Quantity<i64, prefix::Milli> = km.to();
    assert_eq!(mm.value(), 3_000_000);
}

#[test]
fn smoke_test_large_prefixes() {
    let sum = Quantity::<u64, prefix::Atto>::new(1) + Quantity::<u64, prefix::Nano>::new(1);
    assert_eq!(sum.ratio(), (1, 1_000_000_000_000_000_000));
    assert_eq!(sum.value(), 1_000_000_001);
    assert!(same::<Common<prefix::Atto, prefix::Nano>, prefix::Atto>());
}

#[test]
fn smoke_test_ratio_macro() {
    assert!(same::<ratio!(2 / 3), Ratio<typenum::U2, typenum::U3>>());
    assert_eq!(<ratio!(1 / 3000) as Unit>::DEN, 3000);
}

// ─────────────────────────────────────────────────────────────────────────────
// Mixed-scale arithmetic
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn milli_plus_two_thirds() {
    let a = Quantity::<i32, ratio!(1 / 1000)>::new(42);
    let b = Quantity::<i32, ratio!(2 / 3)>::new(77);
    let sum = a + b;

    assert!(same::<Common<ratio!(1 / 1000), ratio!(2 / 3)>, ratio!(1 / 3000)>());
    assert_eq!(sum.value(), 154_126);
    assert_eq!(sum.to_string(), "154126 [1/3000]");
}

#[test]
fn video_and_audio_clocks() {
    // 1/24 and 1/48000 share the 1/48000 tick: one frame is 2000 samples.
    let offset = Frames::new(3) - Samples::new(500);
    assert_eq!(offset.value(), 5_500);
    assert!(same::<Common<Frame, Sample>, ratio!(1 / 48_000)>());
    assert_eq!(offset.to::<Sample>(), Samples::new(5_500));
}

#[test]
fn frames_and_ntsc_ticks() {
    // 1/24 = 1250/30000 and 1001/30000 share the 1/30000 tick.
    type Ntsc = ratio!(1001 / 30_000);
    let sum = Frames::new(1) + Quantity::<i64, Ntsc>::new(1);
    assert_eq!(sum.ratio(), (1, 30_000));
    assert_eq!(sum.value(), 1_250 + 1_001);
}

#[test]
fn time_units_mix() {
    let total = Weeks::new(1) + Days::new(2) + Hours::new(3);
    assert_eq!(total.value(), 9 * 24 + 3);
    assert_eq!(total.to::<Second>().value(), (9 * 24 + 3) * 3_600);
    assert_eq!(total.cast::<Day>().value(), 9);
}

#[test]
fn float_quantities() {
    let a = Quantity::<f64, ratio!(1 / 1000)>::new(1.5);
    let b = Quantity::<f32, ratio!(2 / 3)>::new(0.25);
    let sum = a + b;
    assert_abs_diff_eq!(sum.value(), 1.5 * 3.0 + 0.25 * 2000.0, epsilon = 1e-9);
    assert_relative_eq!(sum.cast::<Base>().value(), 0.0015 + 0.25 * 2.0 / 3.0, max_relative = 1e-12);
}

#[test]
fn promotion_through_operators() {
    // u32 and i32 meet in i64.
    let sum = Seconds::new(1u32) + Milliseconds::new(-1i32);
    let value: i64 = sum.value();
    assert_eq!(value, 999);
}

// ─────────────────────────────────────────────────────────────────────────────
// Checked arithmetic
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn checked_operations_report_errors() {
    let big = Quantity::<i32, ratio!(60)>::new(i32::MAX / 30);
    assert_eq!(
        big.checked_add(Quantity::<i32>::new(0)),
        Err(QuantityError::RescaleOverflow { factor: 60 })
    );

    let err = Quantity::<u16>::new(3).checked_sub(Quantity::<u16>::new(4)).unwrap_err();
    assert_eq!(err, QuantityError::Underflow);
    assert_eq!(err.to_string(), "arithmetic underflow");

    assert_eq!(Seconds::new(1).checked_div(0), Err(QuantityError::DivisionByZero));
}

#[test]
fn checked_operations_succeed() -> QuantityResult<()> {
    let total = Hours::new(2i64).checked_add(Minutes::new(15i64))?;
    let doubled = total.checked_mul(2)?;
    assert_eq!(doubled.value(), 270);
    assert_eq!(doubled.checked_to::<Second>()?.value(), 16_200);
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Derived units
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn derive_macro_produces_correct_symbol() {
    assert_eq!(Frame::SYMBOL, "fr");
    assert_eq!(Second::SYMBOL, "s");
    assert_eq!(Millisecond::SYMBOL, "ms");
    assert_eq!(Day::SYMBOL, "d");
}

#[test]
fn derive_macro_produces_correct_ratio() {
    assert_eq!((Frame::NUM, Frame::DEN), (1, 24));
    assert_eq!((Sample::NUM, Sample::DEN), (1, 48_000));
    assert_eq!((Hour::NUM, Hour::DEN), (3_600, 1));
}

#[test]
fn derive_macro_display_formatting() {
    assert_eq!(Frames::new(12).to_string(), "12 fr");
    assert_eq!(format!("{:.2}", Milliseconds::new(2.25)), "2.25 ms");
    assert_eq!(Quantity::<i32>::new(-4).to_string(), "-4");
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparison and aggregation
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn comparisons_across_units() {
    assert_eq!(Frames::new(1), Samples::new(2_000));
    assert!(Frames::new(1) < Samples::new(2_001));
    assert!(Minutes::new(1) > Seconds::new(59));
}

#[test]
fn comparisons_near_the_element_range() {
    assert_ne!(Seconds::new(i64::MAX / 2), Milliseconds::new(0i64));
    assert!(Seconds::new(i64::MAX / 2) > Milliseconds::new(i64::MAX));
    assert!(Frames::new(i64::MIN) < Samples::new(i64::MIN));
}

#[test]
fn summing_quantities() {
    let clips = [Frames::new(24), Frames::new(48), Frames::new(12)];
    let total: Frames = clips.iter().copied().sum();
    assert_eq!(total.value(), 84);
    assert_eq!(total.cast::<Second>().value(), 3);
}

// ─────────────────────────────────────────────────────────────────────────────
// Property tests
// ─────────────────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_frames_and_samples_agree(frames in -1_000_000i64..1_000_000, samples in -1_000_000i64..1_000_000) {
        let sum = Frames::new(frames) + Samples::new(samples);
        prop_assert_eq!(sum.value(), frames * 2_000 + samples);
        prop_assert_eq!(sum, Samples::new(frames * 2_000 + samples));
        prop_assert_eq!(Frames::new(frames) < Samples::new(samples), frames * 2_000 < samples);
    }

    #[test]
    fn prop_comparison_matches_wide_arithmetic(a in any::<i64>(), b in any::<i64>()) {
        // Common tick 1/3000: milliseconds scale by 3, thirds of two seconds by 2000.
        let lhs = Milliseconds::new(a);
        let rhs = Quantity::<i64, ratio!(2 / 3)>::new(b);
        let expected = (i128::from(a) * 3).cmp(&(i128::from(b) * 2_000));
        prop_assert_eq!(lhs.partial_cmp(&rhs), Some(expected));
        prop_assert_eq!(lhs == rhs, expected.is_eq());
    }
}
