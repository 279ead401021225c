//! Numeric element types storable in a fragmented array.
//!
//! [`Element`] is sealed: it is implemented for every primitive integer
//! and floating-point type and cannot be implemented downstream. Fragments
//! are zero-filled at allocation, so every element type must provide a
//! [`Element::ZERO`] value.

use std::fmt;

mod sealed {
    pub trait Sealed {}
}

/// A primitive numeric type that can be stored in a fragment.
pub trait Element:
    sealed::Sealed + Copy + Default + PartialEq + PartialOrd + fmt::Debug + Send + Sync + 'static
{
    /// The additive identity, used to fill freshly allocated fragments.
    const ZERO: Self;

    /// Human-readable type name (e.g. `"f32"`), used in metrics and messages.
    const NAME: &'static str;
}

macro_rules! impl_element {
    ($zero:expr; $($ty:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Element for $ty {
                const ZERO: Self = $zero;
                const NAME: &'static str = stringify!($ty);
            }
        )+
    };
}

impl_element!(0; i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_element!(0.0; f32, f64);
