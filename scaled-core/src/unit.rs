//! Unit types and traits.

use crate::ratio::{narrow, Ratio};
use core::fmt::Debug;
use typenum::{Len, Length, NonZero, Unsigned};

/// Trait implemented by every **unit** type.
///
/// A unit is the size of one *tick* of a [`Quantity`](crate::Quantity), written as the fraction `Num / Den` of the
/// base unit. `Ratio<N, D>` is the anonymous unit for any fraction; named units such as
/// [`Millisecond`](crate::time::Millisecond) are declared with `#[derive(Unit)]` and carry a display symbol.
///
/// * `Num`/`Den` are the fraction as `typenum` integers; unit arithmetic works on these at compile time.
/// * `NUM`/`DEN` are the same fraction as `u64` constants, for rescale factors and formatting.
/// * `SYMBOL` is the printable string (e.g. `"ms"`), empty for anonymous ratios.
///
/// # Invariants
///
/// - `Num` and `Den` are non-zero (enforced by the bounds).
/// - `NUM == Num::U64` and `DEN == Den::U64`; both fit in 64 bits.
pub trait Unit: Copy + Debug + 'static {
    /// Numerator of the tick size.
    type Num: Unsigned + NonZero;
    /// Denominator of the tick size.
    type Den: Unsigned + NonZero;

    /// `Num` as an integer.
    const NUM: u64;
    /// `Den` as an integer.
    const DEN: u64;

    /// Printable symbol, shown by [`core::fmt::Display`]; empty for anonymous ratios.
    const SYMBOL: &'static str;
}

impl<N, D> Unit for Ratio<N, D>
where
    N: Unsigned + NonZero + Len,
    D: Unsigned + NonZero + Len,
    Length<N>: Unsigned,
    Length<D>: Unsigned,
{
    type Num = N;
    type Den = D;

    const NUM: u64 = narrow::<N>();
    const DEN: u64 = narrow::<D>();

    const SYMBOL: &'static str = "";
}

/// The base unit, `1 / 1`.
pub type Base = Ratio;

#[cfg(test)]
mod tests {
    use super::*;
    use typenum::{U1, U1000, U2, U3, U60};

    #[test]
    fn ratio_unit_constants() {
        assert_eq!(<Ratio<U2, U3> as Unit>::NUM, 2);
        assert_eq!(<Ratio<U2, U3> as Unit>::DEN, 3);
        assert_eq!(<Ratio<U1, U1000> as Unit>::DEN, 1000);
        assert_eq!(<Ratio<U60> as Unit>::NUM, 60);
        assert_eq!(<Ratio<U60> as Unit>::DEN, 1);
    }

    #[test]
    fn ratio_unit_has_no_symbol() {
        assert_eq!(<Ratio<U2, U3> as Unit>::SYMBOL, "");
        assert_eq!(<Base as Unit>::SYMBOL, "");
    }

    #[test]
    fn base_is_one() {
        assert_eq!((<Base as Unit>::NUM, <Base as Unit>::DEN), (1, 1));
    }
}
