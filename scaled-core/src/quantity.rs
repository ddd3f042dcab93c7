//! Quantity type and its implementations.

use crate::combine::{Combine, Common, Rescale};
use crate::error::{QuantityError, QuantityResult};
use crate::scalar::{Promote, Promoted, Scalar};
use crate::unit::{Base, Unit};
use core::cmp::Ordering;
use core::fmt::{self, Debug, Display, Formatter};
use core::iter::Sum;
use core::marker::PhantomData;
use core::ops::*;
use log::debug;
use num_traits::Zero;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A value of element type `V` counted in ticks of the unit `U`.
///
/// `Quantity<V, U>` stores only the `V`; the unit is a phantom type, so a quantity has the size and alignment of its
/// element type. `U` defaults to the base unit.
///
/// Adding or subtracting two quantities works for any pair of units and any pair of element types that promote (see
/// [`Promote`]). The result is counted in the finest common tick of the two units ([`Common`]) and stored in the
/// promoted element type; both operands are rescaled into it with integer factors fixed at compile time.
///
/// # Examples
///
/// ```rust
/// use scaled_core::typenum::{U1, U1000, U2, U3};
/// use scaled_core::{Quantity, Ratio, Unit};
///
/// let a = Quantity::<i32, Ratio<U1, U1000>>::new(42);
/// let b = Quantity::<i32, Ratio<U2, U3>>::new(77);
///
/// let sum = a + b;
/// assert_eq!(sum.value(), 154_126);
/// assert_eq!(sum.ratio(), (1, 3000));
/// ```
pub struct Quantity<V, U: Unit = Base> {
    value: V,
    unit: PhantomData<U>,
}

/// The quantity produced by adding or subtracting `Quantity<V1, U1>` and `Quantity<V2, U2>`.
pub type Combined<V1, U1, V2, U2> = Quantity<Promoted<V1, V2>, Common<U1, U2>>;

impl<V, U: Unit> Quantity<V, U> {
    /// Creates a quantity of `value` ticks of `U`.
    ///
    /// ```rust
    /// use scaled_core::time::Milliseconds;
    /// let t = Milliseconds::new(250);
    /// assert_eq!(t.value(), 250);
    /// ```
    #[inline]
    pub const fn new(value: V) -> Self {
        Self {
            value,
            unit: PhantomData,
        }
    }

    /// Consumes the quantity and returns the raw tick count.
    #[inline]
    pub fn into_value(self) -> V {
        self.value
    }
}

impl<V: Scalar, U: Unit> Quantity<V, U> {
    /// Returns the raw tick count.
    #[inline]
    pub fn value(self) -> V {
        self.value
    }

    /// Zero ticks.
    #[inline]
    pub fn zero() -> Self {
        Self::new(V::zero())
    }

    /// The unit's tick size as `(numerator, denominator)` of the base unit.
    #[inline]
    pub fn ratio(self) -> (u64, u64) {
        (U::NUM, U::DEN)
    }

    /// Converts into a finer (or equal) unit `T`.
    ///
    /// One tick of `U` must be a whole number of ticks of `T`; otherwise, or if that number exceeds what `V` holds
    /// exactly, the conversion does not compile. Use [`cast`](Self::cast) for conversions that may truncate.
    ///
    /// ```rust
    /// use scaled_core::time::{Millisecond, Seconds};
    ///
    /// let ms = Seconds::new(3).to::<Millisecond>();
    /// assert_eq!(ms.value(), 3000);
    /// ```
    ///
    /// ```compile_fail
    /// use scaled_core::time::{Milliseconds, Second};
    ///
    /// let _ = Milliseconds::new(3000).to::<Second>();
    /// ```
    #[inline]
    pub fn to<T: Unit>(self) -> Quantity<V, T> {
        Quantity::new(Rescale::<V, U, T>::apply(self.value))
    }

    /// Like [`to`](Self::to), but reports overflow of the rescaled value instead of wrapping or panicking.
    pub fn checked_to<T: Unit>(self) -> QuantityResult<Quantity<V, T>> {
        rescale_checked::<V, U, T>(self.value).map(Quantity::new)
    }

    /// Converts into any unit `T`.
    ///
    /// The value is first rescaled into `Common<U, T>` and then divided by the number of common ticks in one `T`.
    /// Integer element types truncate toward zero.
    ///
    /// ```rust
    /// use scaled_core::time::{Milliseconds, Second};
    ///
    /// assert_eq!(Milliseconds::new(2500).cast::<Second>().value(), 2);
    /// assert_eq!(Milliseconds::new(2500.0).cast::<Second>().value(), 2.5);
    /// ```
    pub fn cast<T: Unit>(self) -> Quantity<V, T>
    where
        U: Combine<T>,
    {
        let common = Rescale::<V, U, Common<U, T>>::apply(self.value);
        let divisor = Rescale::<V, T, Common<U, T>>::FACTOR;
        if divisor == 1 {
            Quantity::new(common)
        } else {
            Quantity::new(common / V::from_factor(divisor))
        }
    }

    /// `self + rhs`, reporting overflow of the rescaled operands or the sum.
    ///
    /// ```rust
    /// use scaled_core::time::{Milliseconds, Seconds};
    /// use scaled_core::QuantityError;
    ///
    /// let sum = Seconds::new(1i16).checked_add(Milliseconds::new(500i16));
    /// assert_eq!(sum.map(|q| q.value()), Ok(1500));
    ///
    /// let err = Seconds::new(40i16).checked_add(Milliseconds::new(0i16));
    /// assert_eq!(err.map(|q| q.value()), Err(QuantityError::RescaleOverflow { factor: 1000 }));
    /// ```
    pub fn checked_add<V2, U2>(self, rhs: Quantity<V2, U2>) -> QuantityResult<Combined<V, U, V2, U2>>
    where
        V: Promote<V2>,
        V2: Scalar,
        U: Combine<U2>,
        U2: Unit,
    {
        let (a, b) = self.value.promote(rhs.value);
        let a = rescale_checked::<_, U, Common<U, U2>>(a)?;
        let b = rescale_checked::<_, U2, Common<U, U2>>(b)?;
        match a.checked_add(b) {
            Some(sum) => Ok(Quantity::new(sum)),
            None => {
                let err = if b < <Promoted<V, V2> as Zero>::zero() {
                    QuantityError::Underflow
                } else {
                    QuantityError::Overflow
                };
                debug!("rejected {a:?} + {b:?}: {err}");
                Err(err)
            }
        }
    }

    /// `self - rhs`, reporting overflow of the rescaled operands or the difference.
    pub fn checked_sub<V2, U2>(self, rhs: Quantity<V2, U2>) -> QuantityResult<Combined<V, U, V2, U2>>
    where
        V: Promote<V2>,
        V2: Scalar,
        U: Combine<U2>,
        U2: Unit,
    {
        let (a, b) = self.value.promote(rhs.value);
        let a = rescale_checked::<_, U, Common<U, U2>>(a)?;
        let b = rescale_checked::<_, U2, Common<U, U2>>(b)?;
        match a.checked_sub(b) {
            Some(difference) => Ok(Quantity::new(difference)),
            None => {
                let err = if b > <Promoted<V, V2> as Zero>::zero() {
                    QuantityError::Underflow
                } else {
                    QuantityError::Overflow
                };
                debug!("rejected {a:?} - {b:?}: {err}");
                Err(err)
            }
        }
    }

    /// `self * rhs` for a scalar `rhs`, reporting overflow.
    pub fn checked_mul(self, rhs: V) -> QuantityResult<Self> {
        match self.value.checked_mul(rhs) {
            Some(product) => Ok(Self::new(product)),
            None => {
                let zero = V::zero();
                let err = if (self.value < zero) != (rhs < zero) {
                    QuantityError::Underflow
                } else {
                    QuantityError::Overflow
                };
                debug!("rejected {:?} * {rhs:?}: {err}", self.value);
                Err(err)
            }
        }
    }

    /// `self / rhs` for a scalar `rhs`, reporting division by zero and overflow.
    pub fn checked_div(self, rhs: V) -> QuantityResult<Self> {
        if rhs == V::zero() {
            debug!("rejected {:?} / 0", self.value);
            return Err(QuantityError::DivisionByZero);
        }
        self.value.checked_div(rhs).map(Self::new).ok_or_else(|| {
            debug!("rejected {:?} / {rhs:?}: overflow", self.value);
            QuantityError::Overflow
        })
    }
}

fn rescale_checked<V: Scalar, F: Unit, T: Unit>(value: V) -> QuantityResult<V> {
    Rescale::<V, F, T>::checked_apply(value).ok_or_else(|| {
        let factor = Rescale::<V, F, T>::FACTOR;
        debug!("rescaling {value:?} by {factor} overflows");
        QuantityError::RescaleOverflow { factor }
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Value semantics
// ─────────────────────────────────────────────────────────────────────────────

impl<V: Clone, U: Unit> Clone for Quantity<V, U> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<V: Copy, U: Unit> Copy for Quantity<V, U> {}

impl<V: Scalar, U: Unit> Default for Quantity<V, U> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<V: Debug, U: Unit> Debug for Quantity<V, U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quantity")
            .field("value", &self.value)
            .field("num", &U::NUM)
            .field("den", &U::DEN)
            .finish()
    }
}

impl<V: Display, U: Unit> Display for Quantity<V, U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value, f)?;
        if !U::SYMBOL.is_empty() {
            write!(f, " {}", U::SYMBOL)
        } else if U::NUM == 1 && U::DEN == 1 {
            Ok(())
        } else {
            write!(f, " [{}/{}]", U::NUM, U::DEN)
        }
    }
}

impl<V: Scalar, U: Unit> From<V> for Quantity<V, U> {
    #[inline]
    fn from(value: V) -> Self {
        Self::new(value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparison across units
// ─────────────────────────────────────────────────────────────────────────────

impl<V1, U1, V2, U2> PartialEq<Quantity<V2, U2>> for Quantity<V1, U1>
where
    V1: Promote<V2>,
    V2: Scalar,
    U1: Combine<U2>,
    U2: Unit,
{
    #[inline]
    fn eq(&self, other: &Quantity<V2, U2>) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl<V: Scalar + Eq, U: Combine<U>> Eq for Quantity<V, U> {}

impl<V1, U1, V2, U2> PartialOrd<Quantity<V2, U2>> for Quantity<V1, U1>
where
    V1: Promote<V2>,
    V2: Scalar,
    U1: Combine<U2>,
    U2: Unit,
{
    #[inline]
    fn partial_cmp(&self, other: &Quantity<V2, U2>) -> Option<Ordering> {
        let (a, b) = self.value.promote(other.value);
        a.cmp_scaled(Rescale::<_, U1, Common<U1, U2>>::factor(), b, Rescale::<_, U2, Common<U1, U2>>::factor())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<V1, U1, V2, U2> Add<Quantity<V2, U2>> for Quantity<V1, U1>
where
    V1: Promote<V2>,
    V2: Scalar,
    U1: Combine<U2>,
    U2: Unit,
{
    type Output = Combined<V1, U1, V2, U2>;

    #[inline]
    fn add(self, rhs: Quantity<V2, U2>) -> Self::Output {
        let (a, b) = self.value.promote(rhs.value);
        Quantity::new(Rescale::<_, U1, Common<U1, U2>>::apply(a) + Rescale::<_, U2, Common<U1, U2>>::apply(b))
    }
}

impl<V1, U1, V2, U2> Sub<Quantity<V2, U2>> for Quantity<V1, U1>
where
    V1: Promote<V2>,
    V2: Scalar,
    U1: Combine<U2>,
    U2: Unit,
{
    type Output = Combined<V1, U1, V2, U2>;

    #[inline]
    fn sub(self, rhs: Quantity<V2, U2>) -> Self::Output {
        let (a, b) = self.value.promote(rhs.value);
        Quantity::new(Rescale::<_, U1, Common<U1, U2>>::apply(a) - Rescale::<_, U2, Common<U1, U2>>::apply(b))
    }
}

impl<V: Scalar, U: Unit> AddAssign for Quantity<V, U> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.value = self.value + rhs.value;
    }
}

impl<V: Scalar, U: Unit> SubAssign for Quantity<V, U> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.value = self.value - rhs.value;
    }
}

impl<V: Scalar, U: Unit> Mul<V> for Quantity<V, U> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: V) -> Self {
        Self::new(self.value * rhs)
    }
}

impl<V: Scalar, U: Unit> MulAssign<V> for Quantity<V, U> {
    #[inline]
    fn mul_assign(&mut self, rhs: V) {
        self.value = self.value * rhs;
    }
}

impl<V: Scalar, U: Unit> Div<V> for Quantity<V, U> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: V) -> Self {
        Self::new(self.value / rhs)
    }
}

impl<V: Scalar, U: Unit> DivAssign<V> for Quantity<V, U> {
    #[inline]
    fn div_assign(&mut self, rhs: V) {
        self.value = self.value / rhs;
    }
}

impl<V: Scalar, U: Unit> Rem<V> for Quantity<V, U> {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: V) -> Self {
        Self::new(self.value % rhs)
    }
}

impl<V: Scalar + Neg<Output = V>, U: Unit> Neg for Quantity<V, U> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.value)
    }
}

impl<V: Scalar, U: Unit> Sum for Quantity<V, U> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self::new(iter.fold(V::zero(), |acc, q| acc + q.value))
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),+ $(,)?) => {
        $(
            impl<U: Unit> Mul<Quantity<$t, U>> for $t {
                type Output = Quantity<$t, U>;
                #[inline]
                fn mul(self, rhs: Quantity<$t, U>) -> Self::Output {
                    rhs * self
                }
            }
        )+
    };
}

impl_scalar_lhs_mul!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<V: Serialize, U: Unit> Serialize for Quantity<V, U> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, V: Deserialize<'de>, U: Unit> Deserialize<'de> for Quantity<V, U> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        V::deserialize(deserializer).map(Quantity::new)
    }
}

/// Serde helper module for serializing quantities together with their tick size.
///
/// Use this with the `#[serde(with = "...")]` attribute when the serialized data must be self-describing. The unit is
/// written as its reduced-or-not `num`/`den` pair; on the way back in, a pair that denotes a different tick size than
/// the target unit is rejected (an equivalent, unreduced pair is accepted).
///
/// # Examples
///
/// ```rust
/// use scaled_core::time::Milliseconds;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Config {
///     #[serde(with = "scaled_core::serde_with_unit")]
///     timeout: Milliseconds<i64>, // {"value": 250, "num": 1, "den": 1000}
///
///     retry_delay: Milliseconds<i64>, // 50
/// }
///
/// let json = r#"{"timeout":{"value":250,"num":2,"den":2000},"retry_delay":50}"#;
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.timeout.value(), 250);
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_unit {
    use super::*;
    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeStruct;

    /// Serializes a `Quantity<V, U>` as a struct with `value`, `num` and `den` fields.
    ///
    /// # Example JSON Output
    /// ```json
    /// {"value": 42, "num": 1, "den": 1000}
    /// ```
    pub fn serialize<V, U, S>(quantity: &Quantity<V, U>, serializer: S) -> Result<S::Ok, S::Error>
    where
        V: Serialize,
        U: Unit,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 3)?;
        state.serialize_field("value", &quantity.value)?;
        state.serialize_field("num", &U::NUM)?;
        state.serialize_field("den", &U::DEN)?;
        state.end()
    }

    /// Deserializes a `Quantity<V, U>` from a struct with a `value` field and an optional `num`/`den` pair.
    ///
    /// `num` and `den` must appear together. When present they must describe the same tick size as `U`.
    pub fn deserialize<'de, V, U, D>(deserializer: D) -> Result<Quantity<V, U>, D::Error>
    where
        V: Deserialize<'de>,
        U: Unit,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Num,
            Den,
        }

        struct QuantityVisitor<V, U>(PhantomData<(V, U)>);

        impl<'de, V: Deserialize<'de>, U: Unit> Visitor<'de> for QuantityVisitor<V, U> {
            type Value = Quantity<V, U>;

            fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
                formatter.write_str("struct Quantity with value, num and den fields")
            }

            fn visit_map<M>(self, mut map: M) -> Result<Quantity<V, U>, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut value: Option<V> = None;
                let mut num: Option<u64> = None;
                let mut den: Option<u64> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Num => {
                            if num.is_some() {
                                return Err(de::Error::duplicate_field("num"));
                            }
                            num = Some(map.next_value()?);
                        }
                        Field::Den => {
                            if den.is_some() {
                                return Err(de::Error::duplicate_field("den"));
                            }
                            den = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;

                match (num, den) {
                    (None, None) => {}
                    (Some(_), None) => return Err(de::Error::missing_field("den")),
                    (None, Some(_)) => return Err(de::Error::missing_field("num")),
                    (Some(n), Some(d)) => {
                        // n/d == NUM/DEN, cross-multiplied; a zero denominator never matches.
                        let same = d != 0 && n as u128 * U::DEN as u128 == U::NUM as u128 * d as u128;
                        if !same {
                            return Err(de::Error::custom(format_args!(
                                "unit mismatch: expected {}/{}, found {}/{}",
                                U::NUM,
                                U::DEN,
                                n,
                                d
                            )));
                        }
                    }
                }

                Ok(Quantity::new(value))
            }
        }

        deserializer.deserialize_struct(
            "Quantity",
            &["value", "num", "den"],
            QuantityVisitor(PhantomData),
        )
    }
}
