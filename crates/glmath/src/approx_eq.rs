//! [`approx`] comparisons for vectors and matrices.
//!
//! Every component is compared with the same epsilon, so matrices compare
//! column by column with the tolerance of their scalar type.
use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{
    matrices::{Mat2, Mat3, Mat4},
    vectors::{Vec2, Vec3, Vec4},
};

macro_rules! impl_approx {
    ($ty:ident, [$($field:ident),+]) => {
        impl<T: AbsDiffEq> AbsDiffEq for $ty<T>
        where
            T::Epsilon: Copy,
        {
            type Epsilon = T::Epsilon;

            fn default_epsilon() -> T::Epsilon {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
                $(self.$field.abs_diff_eq(&other.$field, epsilon))&&+
            }
        }

        impl<T: RelativeEq> RelativeEq for $ty<T>
        where
            T::Epsilon: Copy,
        {
            fn default_max_relative() -> T::Epsilon {
                T::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
                $(self.$field.relative_eq(&other.$field, epsilon, max_relative))&&+
            }
        }

        impl<T: UlpsEq> UlpsEq for $ty<T>
        where
            T::Epsilon: Copy,
        {
            fn default_max_ulps() -> u32 {
                T::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: T::Epsilon, max_ulps: u32) -> bool {
                $(self.$field.ulps_eq(&other.$field, epsilon, max_ulps))&&+
            }
        }
    };
}

impl_approx!(Vec2, [x, y]);
impl_approx!(Vec3, [x, y, z]);
impl_approx!(Vec4, [x, y, z, w]);
impl_approx!(Mat2, [x_axis, y_axis]);
impl_approx!(Mat3, [x_axis, y_axis, z_axis]);
impl_approx!(Mat4, [x_axis, y_axis, z_axis, w_axis]);
