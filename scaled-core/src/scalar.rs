//! Element types of a [`Quantity`](crate::Quantity) and binary promotion between them.

use core::cmp::Ordering;
use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Rem, Sub};
use num_traits::{AsPrimitive, CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, PrimInt, Zero};

/// A numeric type that can be stored in a [`Quantity`](crate::Quantity).
///
/// Implemented for every primitive integer and for `f32`/`f64`. A user type can implement it too; the only
/// non-arithmetic requirement is [`MAX_FACTOR`](Scalar::MAX_FACTOR), the largest integer the type holds exactly.
pub trait Scalar:
    Copy
    + Debug
    + PartialEq
    + PartialOrd
    + Zero
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + 'static
{
    /// Largest rescale factor that converts into `Self` without rounding.
    ///
    /// Rescaling a value by a larger factor is rejected at compile time.
    const MAX_FACTOR: u64;

    /// Converts a rescale factor into `Self`. Only called with `factor <= MAX_FACTOR`.
    fn from_factor(factor: u64) -> Self;

    /// `self + rhs`, or `None` if the result is not representable.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// `self - rhs`, or `None` if the result is not representable.
    fn checked_sub(self, rhs: Self) -> Option<Self>;

    /// `self * rhs`, or `None` if the result is not representable.
    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// `self / rhs`, or `None` if `rhs` is zero or the result is not representable.
    fn checked_div(self, rhs: Self) -> Option<Self>;

    /// Orders `self · k1` against `rhs · k2`, where `k1` and `k2` are rescale factors (at least 1).
    ///
    /// The default multiplies directly. Primitive types override it so that operands whose products leave the
    /// type's range still compare correctly.
    fn cmp_scaled(self, k1: Self, rhs: Self, k2: Self) -> Option<Ordering> {
        (self * k1).partial_cmp(&(rhs * k2))
    }
}

/// `a · k1` against `b · k2` for integers, falling back to division when a product overflows.
fn cmp_scaled_int<T: PrimInt>(a: T, k1: T, b: T, k2: T) -> Ordering {
    let zero = T::zero();
    let (sign_a, sign_b) = (a.cmp(&zero), b.cmp(&zero));
    if sign_a != sign_b || sign_a == Ordering::Equal {
        return sign_a.cmp(&sign_b);
    }
    if let (Some(x), Some(y)) = (a.checked_mul(&k1), b.checked_mul(&k2)) {
        return x.cmp(&y);
    }
    // a·k1 against b·k2 is a/k2 against b/k1; truncation keeps a strict order of the quotients.
    let (qa, qb) = (a / k2, b / k1);
    if qa != qb {
        return qa.cmp(&qb);
    }
    let (ra, rb) = (a % k2, b % k1);
    if sign_a == Ordering::Less {
        // |ra| < k2 and |rb| < k1, so negating cannot overflow.
        cmp_fractions(zero - rb, k1, zero - ra, k2)
    } else {
        cmp_fractions(ra, k2, rb, k1)
    }
}

/// `p1/q1` against `p2/q2` for `p >= 0`, `q > 0`, by comparing continued-fraction terms.
fn cmp_fractions<T: PrimInt>(mut p1: T, mut q1: T, mut p2: T, mut q2: T) -> Ordering {
    loop {
        let (i1, i2) = (p1 / q1, p2 / q2);
        if i1 != i2 {
            return i1.cmp(&i2);
        }
        let (r1, r2) = (p1 % q1, p2 % q2);
        match (r1.is_zero(), r2.is_zero()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            // r1/q1 against r2/q2 is q2/r2 against q1/r1.
            (false, false) => (p1, q1, p2, q2) = (q2, r2, q1, r1),
        }
    }
}

macro_rules! impl_scalar_int {
    ($($t:ty => $max:expr),+ $(,)?) => {
        $(
            impl Scalar for $t {
                const MAX_FACTOR: u64 = $max;

                #[inline]
                fn from_factor(factor: u64) -> Self {
                    factor.as_()
                }

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &rhs)
                }

                #[inline]
                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    CheckedSub::checked_sub(&self, &rhs)
                }

                #[inline]
                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    CheckedMul::checked_mul(&self, &rhs)
                }

                #[inline]
                fn checked_div(self, rhs: Self) -> Option<Self> {
                    CheckedDiv::checked_div(&self, &rhs)
                }

                #[inline]
                fn cmp_scaled(self, k1: Self, rhs: Self, k2: Self) -> Option<Ordering> {
                    Some(cmp_scaled_int(self, k1, rhs, k2))
                }
            }
        )+
    };
}

impl_scalar_int! {
    i8 => i8::MAX as u64,
    i16 => i16::MAX as u64,
    i32 => i32::MAX as u64,
    i64 => i64::MAX as u64,
    i128 => u64::MAX,
    isize => isize::MAX as u64,
    u8 => u8::MAX as u64,
    u16 => u16::MAX as u64,
    u32 => u32::MAX as u64,
    u64 => u64::MAX,
    u128 => u64::MAX,
    usize => usize::MAX as u64,
}

/// `Some(result)` unless a finite computation produced an infinity or NaN.
#[inline]
fn finite<T>(lhs_finite: bool, rhs_finite: bool, result: T, result_finite: bool) -> Option<T> {
    if lhs_finite && rhs_finite && !result_finite {
        None
    } else {
        Some(result)
    }
}

macro_rules! impl_scalar_float {
    ($($t:ty => $mantissa:literal),+ $(,)?) => {
        $(
            impl Scalar for $t {
                const MAX_FACTOR: u64 = 1 << $mantissa;

                #[inline]
                fn from_factor(factor: u64) -> Self {
                    factor.as_()
                }

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    let result = self + rhs;
                    finite(self.is_finite(), rhs.is_finite(), result, result.is_finite())
                }

                #[inline]
                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    let result = self - rhs;
                    finite(self.is_finite(), rhs.is_finite(), result, result.is_finite())
                }

                #[inline]
                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    let result = self * rhs;
                    finite(self.is_finite(), rhs.is_finite(), result, result.is_finite())
                }

                #[inline]
                fn checked_div(self, rhs: Self) -> Option<Self> {
                    if rhs == 0.0 {
                        return None;
                    }
                    let result = self / rhs;
                    finite(self.is_finite(), rhs.is_finite(), result, result.is_finite())
                }

                #[inline]
                fn cmp_scaled(self, k1: Self, rhs: Self, k2: Self) -> Option<Ordering> {
                    let (x, y) = (self * k1, rhs * k2);
                    if (x.is_infinite() && self.is_finite()) || (y.is_infinite() && rhs.is_finite()) {
                        (self / k2).partial_cmp(&(rhs / k1))
                    } else {
                        x.partial_cmp(&y)
                    }
                }
            }
        )+
    };
}

impl_scalar_float! {
    f32 => 24,
    f64 => 53,
}

/// Binary promotion of element types.
///
/// `Promoted<L, R>` is the narrowest primitive that both `L` and `R` convert into losslessly (through `From`).
/// Equal types promote to themselves. A pair with no such type, like `(u128, i8)` or `(i64, f64)`, has no impl, so
/// adding quantities with those element types does not compile.
///
/// ```rust
/// use scaled_core::Promote;
///
/// assert_eq!(3u8.promote(-1i8), (3i16, -1i16));
/// assert_eq!(2i32.promote(0.5f32), (2.0f64, 0.5f64));
/// ```
pub trait Promote<Rhs: Scalar>: Scalar {
    /// The common element type.
    type Output: Scalar;

    /// Converts both operands into the common element type.
    fn promote(self, rhs: Rhs) -> (<Self as Promote<Rhs>>::Output, <Self as Promote<Rhs>>::Output);
}

/// Common element type of `L` and `R`.
pub type Promoted<L, R> = <L as Promote<R>>::Output;

impl<T: Scalar> Promote<T> for T {
    type Output = T;

    #[inline]
    fn promote(self, rhs: T) -> (T, T) {
        (self, rhs)
    }
}

macro_rules! promote {
    ($($a:ty, $b:ty => $out:ty;)+) => {
        $(
            impl Promote<$b> for $a {
                type Output = $out;

                #[inline]
                fn promote(self, rhs: $b) -> ($out, $out) {
                    (<$out>::from(self), <$out>::from(rhs))
                }
            }

            impl Promote<$a> for $b {
                type Output = $out;

                #[inline]
                fn promote(self, rhs: $a) -> ($out, $out) {
                    (<$out>::from(self), <$out>::from(rhs))
                }
            }
        )+
    };
}

// Signed widening.
promote! {
    i8, i16 => i16;
    i8, i32 => i32;
    i8, i64 => i64;
    i8, i128 => i128;
    i16, i32 => i32;
    i16, i64 => i64;
    i16, i128 => i128;
    i32, i64 => i64;
    i32, i128 => i128;
    i64, i128 => i128;
}

// Unsigned widening.
promote! {
    u8, u16 => u16;
    u8, u32 => u32;
    u8, u64 => u64;
    u8, u128 => u128;
    u16, u32 => u32;
    u16, u64 => u64;
    u16, u128 => u128;
    u32, u64 => u64;
    u32, u128 => u128;
    u64, u128 => u128;
}

// Mixed sign: the next signed type wide enough for the unsigned operand.
promote! {
    u8, i8 => i16;
    u8, i16 => i16;
    u8, i32 => i32;
    u8, i64 => i64;
    u8, i128 => i128;
    u16, i8 => i32;
    u16, i16 => i32;
    u16, i32 => i32;
    u16, i64 => i64;
    u16, i128 => i128;
    u32, i8 => i64;
    u32, i16 => i64;
    u32, i32 => i64;
    u32, i64 => i64;
    u32, i128 => i128;
    u64, i8 => i128;
    u64, i16 => i128;
    u64, i32 => i128;
    u64, i64 => i128;
    u64, i128 => i128;
}

// Floating point.
promote! {
    f32, f64 => f64;
    i8, f32 => f32;
    i16, f32 => f32;
    u8, f32 => f32;
    u16, f32 => f32;
    i32, f32 => f64;
    u32, f32 => f64;
    i8, f64 => f64;
    i16, f64 => f64;
    i32, f64 => f64;
    u8, f64 => f64;
    u16, f64 => f64;
    u32, f64 => f64;
}
