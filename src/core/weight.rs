use std::{fmt::Debug, ops::Add};

/// Edge weight and cumulative path weight.
///
/// Besides the additive identity, a weight type provides two sentinel values
/// standing for positive and negative infinity. Labels that hold a sentinel
/// denote vertices for which no finite path is known yet. For integers, the
/// sentinels are the extreme values of the type, for floats they are the IEEE
/// infinities.
pub trait Weight: PartialOrd + Add<Self, Output = Self> + Clone + Debug + Sized {
    fn zero() -> Self;
    fn inf() -> Self;
    fn neg_inf() -> Self;

    /// Adds an edge weight to a label.
    ///
    /// Returns `None` if the sum is not representable as a finite label. For
    /// integers, that is when it overflows or lands on a sentinel.
    fn combine(&self, other: &Self) -> Option<Self>;
}

macro_rules! impl_int_weight {
    ($ty:ty) => {
        impl Weight for $ty {
            fn zero() -> Self {
                0
            }

            fn inf() -> Self {
                <$ty>::MAX
            }

            fn neg_inf() -> Self {
                <$ty>::MIN
            }

            fn combine(&self, other: &Self) -> Option<Self> {
                self.checked_add(*other)
                    .filter(|sum| *sum != <$ty>::MAX && *sum != <$ty>::MIN)
            }
        }
    };
}

impl_int_weight!(i8);
impl_int_weight!(i16);
impl_int_weight!(i32);
impl_int_weight!(i64);
impl_int_weight!(isize);

macro_rules! impl_float_weight {
    ($ty:ty) => {
        impl Weight for $ty {
            fn zero() -> Self {
                <$ty>::default()
            }

            fn inf() -> Self {
                <$ty>::INFINITY
            }

            fn neg_inf() -> Self {
                <$ty>::NEG_INFINITY
            }

            fn combine(&self, other: &Self) -> Option<Self> {
                Some(*self + *other)
            }
        }
    };
}

impl_float_weight!(f32);
impl_float_weight!(f64);
