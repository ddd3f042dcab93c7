//! Common tick of two units and rescaling into it.

use crate::ratio::Ratio;
use crate::reduce::{Euclid, GcdOf, Reduce, Reduced};
use crate::scalar::Scalar;
use crate::unit::Unit;
use core::marker::PhantomData;
use core::ops::Mul;
use typenum::{NonZero, Prod, Unsigned};

/// Finest common tick of two units.
///
/// For `L = n1/d1` and `R = n2/d2` the combined unit is `gcd(n1·d2, n2·d1) / (d1·d2)`, reduced. Both `L` and `R` are
/// whole multiples of it, so values in either unit convert into it exactly with an integer factor, and no coarser
/// unit has that property. Combining a unit with itself yields the same (reduced) unit.
///
/// ```rust
/// use scaled_core::typenum::{U1, U1000, U2, U3};
/// use scaled_core::{Common, Ratio, Unit};
///
/// type Milli = Ratio<U1, U1000>;
/// type TwoThirds = Ratio<U2, U3>;
///
/// assert_eq!(<Common<Milli, TwoThirds> as Unit>::NUM, 1);
/// assert_eq!(<Common<Milli, TwoThirds> as Unit>::DEN, 3000);
/// ```
///
/// A common tick whose components do not fit in 64 bits is a compile-time error. Two large primes as denominators
/// need their product:
///
/// ```compile_fail
/// #![recursion_limit = "512"]
/// use scaled_core::{ratio, Quantity};
///
/// let a = Quantity::<u64, ratio!(1 / 18_446_744_073_709_551_557)>::new(1);
/// let b = Quantity::<u64, ratio!(1 / 18_446_744_073_709_551_533)>::new(1);
/// let _ = a + b;
/// ```
pub trait Combine<Rhs: Unit>: Unit {
    /// The common unit.
    type Output: Unit;
}

/// The finest unit that both `L` and `R` are whole multiples of.
pub type Common<L, R> = <L as Combine<R>>::Output;

type CrossLeft<L, R> = Prod<<L as Unit>::Num, <R as Unit>::Den>;
type CrossRight<L, R> = Prod<<R as Unit>::Num, <L as Unit>::Den>;
type DenProduct<L, R> = Prod<<L as Unit>::Den, <R as Unit>::Den>;
type Unreduced<L, R> = Ratio<GcdOf<CrossLeft<L, R>, CrossRight<L, R>>, DenProduct<L, R>>;

impl<L: Unit, R: Unit> Combine<R> for L
where
    L::Num: Mul<R::Den>,
    R::Num: Mul<L::Den>,
    L::Den: Mul<R::Den>,
    CrossLeft<L, R>: Euclid<CrossRight<L, R>>,
    DenProduct<L, R>: Unsigned + NonZero,
    Unreduced<L, R>: Reduce,
    Reduced<Unreduced<L, R>>: Unit,
{
    type Output = Reduced<Unreduced<L, R>>;
}

/// Number of `to` ticks in one `from` tick.
///
/// Fails const evaluation if that number is not a whole number or does not fit in 64 bits.
pub(crate) const fn tick_factor(from_num: u64, from_den: u64, to_num: u64, to_den: u64) -> u64 {
    let num = from_num as u128 * to_den as u128;
    let den = from_den as u128 * to_num as u128;
    assert!(num % den == 0, "source tick is not a whole number of target ticks");
    let factor = num / den;
    assert!(factor <= u64::MAX as u128, "rescale factor does not fit in 64 bits");
    factor as u64
}

/// Rescaling of `V` values from unit `F` into unit `T`, with the factor fixed at compile time.
pub(crate) struct Rescale<V, F, T>(PhantomData<(V, F, T)>);

impl<V: Scalar, F: Unit, T: Unit> Rescale<V, F, T> {
    pub(crate) const FACTOR: u64 = {
        let factor = tick_factor(F::NUM, F::DEN, T::NUM, T::DEN);
        assert!(
            factor <= V::MAX_FACTOR,
            "rescale factor is not exactly representable in the element type"
        );
        factor
    };

    #[inline]
    pub(crate) fn factor() -> V {
        V::from_factor(Self::FACTOR)
    }

    #[inline]
    pub(crate) fn apply(value: V) -> V {
        if Self::FACTOR == 1 {
            value
        } else {
            value * V::from_factor(Self::FACTOR)
        }
    }

    #[inline]
    pub(crate) fn checked_apply(value: V) -> Option<V> {
        if Self::FACTOR == 1 {
            Some(value)
        } else {
            value.checked_mul(V::from_factor(Self::FACTOR))
        }
    }
}
