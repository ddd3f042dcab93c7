//! Type-level fractions.

use core::fmt::{Debug, Formatter, Result};
use core::marker::PhantomData;
use typenum::{Len, Length, NonZero, Unsigned, U1};

/// The fraction `N / D` as a zero-sized type.
///
/// `N` and `D` are `typenum` unsigned integers. `D` must be non-zero: `Ratio<N, U0>` is not a well-formed type, so a
/// zero denominator is rejected wherever it is written down. Both parameters default to `U1`, so `Ratio` alone is the
/// base unit.
///
/// A `Ratio` is never constructed at run time by this crate; it only appears as the unit parameter of a
/// [`Quantity`](crate::Quantity). Write small ones with `typenum` constants and larger ones with [`ratio!`]:
///
/// ```rust
/// use scaled_core::typenum::{U1, U1000};
/// use scaled_core::{ratio, Ratio, Unit};
///
/// type Milli = Ratio<U1, U1000>;
/// type Tick = ratio!(1 / 3000);
///
/// assert_eq!((Milli::NUM, Milli::DEN), (1, 1000));
/// assert_eq!((Tick::NUM, Tick::DEN), (1, 3000));
/// ```
///
/// A zero denominator does not compile:
///
/// ```compile_fail
/// use scaled_core::{ratio, Quantity};
///
/// let _ = Quantity::<i32, ratio!(1 / 0)>::new(1);
/// ```
///
/// [`ratio!`]: crate::ratio!
pub struct Ratio<N: Unsigned = U1, D: Unsigned + NonZero = U1>(PhantomData<(N, D)>);

impl<N, D> Ratio<N, D>
where
    N: Unsigned + Len,
    D: Unsigned + NonZero + Len,
    Length<N>: Unsigned,
    Length<D>: Unsigned,
{
    /// Numerator as an integer. Referencing it fails to compile if the numerator needs more than 64 bits.
    pub const NUMERATOR: u64 = narrow::<N>();
    /// Denominator as an integer. Referencing it fails to compile if the denominator needs more than 64 bits.
    pub const DENOMINATOR: u64 = narrow::<D>();
}

impl<N: Unsigned, D: Unsigned + NonZero> Clone for Ratio<N, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N: Unsigned, D: Unsigned + NonZero> Copy for Ratio<N, D> {}

impl<N: Unsigned, D: Unsigned + NonZero> Default for Ratio<N, D> {
    fn default() -> Self {
        Ratio(PhantomData)
    }
}

impl<N: Unsigned, D: Unsigned + NonZero> PartialEq for Ratio<N, D> {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<N: Unsigned, D: Unsigned + NonZero> Eq for Ratio<N, D> {}

impl<N: Unsigned, D: Unsigned + NonZero> Debug for Ratio<N, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "Ratio<{}/{}>", N::U64, D::U64)
    }
}

/// Value of a type-level integer as a `u64`.
///
/// Fails const evaluation (and therefore compilation) when `N` needs more than 64 bits, instead of truncating.
pub(crate) const fn narrow<N>() -> u64
where
    N: Unsigned + Len,
    Length<N>: Unsigned,
{
    assert!(
        <Length<N> as Unsigned>::USIZE <= 64,
        "ratio component does not fit in 64 bits"
    );
    N::U64
}

#[cfg(test)]
mod tests {
    use super::*;
    use typenum::{Prod, U0, U1000, U2, U3, U4294967296};

    #[test]
    fn ratio_reflects_components() {
        assert_eq!(Ratio::<U2, U3>::NUMERATOR, 2);
        assert_eq!(Ratio::<U2, U3>::DENOMINATOR, 3);
        assert_eq!(Ratio::<U0, U1>::NUMERATOR, 0);
    }

    #[test]
    fn ratio_defaults_to_base() {
        assert_eq!(Ratio::<U1, U1>::NUMERATOR, Ratio::<U1>::DENOMINATOR);
        assert_eq!(<Ratio>::NUMERATOR, 1);
        assert_eq!(<Ratio>::DENOMINATOR, 1);
    }

    #[test]
    fn ratio_debug() {
        assert_eq!(format!("{:?}", Ratio::<U2, U1000>::default()), "Ratio<2/1000>");
    }

    #[test]
    fn narrow_small_values() {
        assert_eq!(narrow::<U0>(), 0);
        assert_eq!(narrow::<U1000>(), 1000);
        assert_eq!(narrow::<U4294967296>(), 1 << 32);
    }

    #[test]
    fn narrow_full_width() {
        // 2^63 is 64 bits wide.
        type Big = Prod<U4294967296, typenum::U2147483648>;
        assert_eq!(narrow::<Big>(), 1 << 63);
    }
}
