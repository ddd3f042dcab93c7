//! Macros for writing unit ratios.

/// Turns integer literals into a [`Ratio`](crate::Ratio) type.
///
/// `ratio!(n / d)` is `Ratio<Un, Ud>` and `ratio!(n)` is `Ratio<Un>`, for any `u64` literals. The ratio is used as
/// written; it is not reduced.
///
/// ```rust
/// use scaled_core::typenum::{U1, U1000};
/// use scaled_core::{ratio, Ratio, Unit};
///
/// type Milli = ratio!(1 / 1000);
/// type Day = ratio!(86_400);
///
/// assert_eq!(core::any::TypeId::of::<Milli>(), core::any::TypeId::of::<Ratio<U1, U1000>>());
/// assert_eq!((Day::NUM, Day::DEN), (86_400, 1));
/// ```
#[macro_export]
macro_rules! ratio {
    ($num:tt / $den:tt) => {
        $crate::Ratio<$crate::__private::uint!($crate; $num), $crate::__private::uint!($crate; $den)>
    };
    ($num:tt) => {
        $crate::Ratio<$crate::__private::uint!($crate; $num)>
    };
}
