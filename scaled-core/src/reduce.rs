//! Greatest common divisor and fraction reduction at the type level.
//!
//! [`Euclid`] is the Euclidean algorithm over `typenum` unsigned integers: `gcd(a, 0) = a`,
//! `gcd(a, b) = gcd(b, a % b)`. Each step selects between "halt" and "descend" with [`Select`], keyed on
//! `b == 0`. Both candidates are thunks, and only the selected one is forced, so the final step never asks for
//! `a % 0` and the number of trait obligations grows with the number of steps, not with the number of branches.
//!
//! [`Reduce`] divides a [`Ratio`] by the gcd of its components.

use crate::ratio::Ratio;
use crate::select::{Branch, Force, Select, Thunk};
use core::marker::PhantomData;
use core::ops::{Div, Rem};
use typenum::{IsEqual, Mod, NonZero, Quot, Unsigned, U0};

/// `gcd(Self, B)` over type-level unsigned integers.
///
/// `gcd(0, b) = b` and `gcd(a, 0) = a`.
///
/// ```rust
/// use scaled_core::typenum::{Unsigned, U12, U18, U6};
/// use scaled_core::GcdOf;
///
/// assert_eq!(<GcdOf<U12, U18> as Unsigned>::U64, 6);
/// ```
pub trait Euclid<B> {
    /// The greatest common divisor.
    type Output: Unsigned;
}

/// `gcd(A, B)`.
pub type GcdOf<A, B> = <A as Euclid<B>>::Output;

/// Final Euclid step: the remainder reached zero, the answer is `A`.
pub struct Halt<A>(PhantomData<A>);

/// Next Euclid step: `gcd(B, A % B)`.
pub struct Descend<A, B>(PhantomData<(A, B)>);

impl<A: Unsigned> Thunk for Halt<A> {
    type Output = A;
}

impl<A, B> Thunk for Descend<A, B>
where
    A: Rem<B>,
    B: Euclid<Mod<A, B>>,
{
    type Output = GcdOf<B, Mod<A, B>>;
}

type Step<A, B> = Select<typenum::Eq<B, U0>, Halt<A>, Descend<A, B>>;

impl<A, B> Euclid<B> for A
where
    A: Unsigned,
    B: Unsigned + IsEqual<U0>,
    typenum::Eq<B, U0>: Branch<Halt<A>, Descend<A, B>>,
    Step<A, B>: Thunk,
    Force<Step<A, B>>: Unsigned,
{
    type Output = Force<Step<A, B>>;
}

/// Reduction of a fraction to lowest terms.
///
/// `Ratio<N, D>` reduces to `Ratio<N / g, D / g>` with `g = gcd(N, D)`; `Ratio<U0, D>` reduces to `Ratio<U0, U1>`.
/// Reducing an already reduced ratio yields the same type.
pub trait Reduce {
    /// The reduced fraction.
    type Output;
}

/// The reduced form of `R`.
pub type Reduced<R> = <R as Reduce>::Output;

impl<N, D> Reduce for Ratio<N, D>
where
    N: Unsigned + Euclid<D> + Div<GcdOf<N, D>>,
    D: Unsigned + NonZero + Div<GcdOf<N, D>>,
    Quot<N, GcdOf<N, D>>: Unsigned,
    Quot<D, GcdOf<N, D>>: Unsigned + NonZero,
{
    type Output = Ratio<Quot<N, GcdOf<N, D>>, Quot<D, GcdOf<N, D>>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::any::TypeId;
    use typenum::{
        U1, U10, U100, U1000, U1024, U12, U125, U128, U13, U144, U17, U18, U2, U21, U3, U30, U34, U360, U4, U45, U5,
        U55, U6, U60, U7, U8, U89, U9,
    };

    fn same<A: 'static, B: 'static>() -> bool {
        TypeId::of::<A>() == TypeId::of::<B>()
    }

    macro_rules! gcd_cases {
        ($($a:ty, $b:ty => $g:literal;)+) => {
            $(
                assert_eq!(<GcdOf<$a, $b> as Unsigned>::U64, $g, "gcd({}, {})", stringify!($a), stringify!($b));
            )+
        };
    }

    macro_rules! reduce_cases {
        ($($n:ty, $d:ty => $rn:ty, $rd:ty;)+) => {
            $(
                assert!(
                    same::<Reduced<Ratio<$n, $d>>, Ratio<$rn, $rd>>(),
                    "{}/{}",
                    stringify!($n),
                    stringify!($d)
                );
            )+
        };
    }

    #[test]
    fn euclid_known_values() {
        gcd_cases! {
            U12, U18 => 6;
            U18, U12 => 6;
            U7, U13 => 1;
            U1024, U1000 => 8;
            U60, U45 => 15;
            U3, U3 => 3;
            U1, U1000 => 1;
        }
    }

    #[test]
    fn euclid_zero_operands() {
        gcd_cases! {
            U0, U5 => 5;
            U5, U0 => 5;
            U0, U0 => 0;
        }
    }

    #[test]
    fn euclid_fibonacci_worst_case() {
        // Consecutive Fibonacci numbers take the most steps for their size.
        gcd_cases! {
            U89, U55 => 1;
            U144, U89 => 1;
            U34, U21 => 1;
        }
    }

    #[test]
    fn reduce_to_lowest_terms() {
        reduce_cases! {
            U6, U8 => U3, U4;
            U10, U1000 => U1, U100;
            U144, U12 => U12, U1;
            U30, U45 => U2, U3;
            U17, U17 => U1, U1;
            U360, U1024 => U45, U128;
        }
    }

    #[test]
    fn reduce_zero_numerator() {
        reduce_cases! {
            U0, U7 => U0, U1;
            U0, U1 => U0, U1;
        }
    }

    #[test]
    fn reduce_is_idempotent() {
        assert!(same::<Reduced<Reduced<Ratio<U6, U8>>>, Reduced<Ratio<U6, U8>>>());
        assert!(same::<Reduced<Reduced<Ratio<U1000, U1024>>>, Ratio<U125, U128>>());
        reduce_cases! {
            U3, U4 => U3, U4;
            U2, U9 => U2, U9;
            U1, U1 => U1, U1;
        }
    }

    #[test]
    fn reduced_components_are_coprime() {
        gcd_cases! {
            U45, U128 => 1;
            U125, U128 => 1;
            U3, U4 => 1;
        }
    }
}
