//! Operator implementations for the vector types.
//!
//! Arithmetic is componentwise between two vectors, and broadcast between a
//! vector and a scalar on either side. Float vectors use IEEE arithmetic.
//! Integer vectors wrap on overflow like GLSL integers do, and shifts use the
//! low five bits of the shift amount.
use std::ops::*;

use super::{Vec2, Vec3, Vec4};

/// Implements one binary operator, with its assigning form, for a vector of
/// a concrete scalar. `$f` computes one component.
macro_rules! impl_binary_op {
    (
        $vec:ident,
        [$($field:ident),+],
        $scalar:ident,
        $op:ident :: $method:ident,
        $op_assign:ident :: $method_assign:ident,
        $f:expr
    ) => {
        impl $op for $vec<$scalar> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                let f: fn($scalar, $scalar) -> $scalar = $f;
                $vec { $($field: f(self.$field, rhs.$field)),+ }
            }
        }

        impl $op<$scalar> for $vec<$scalar> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: $scalar) -> Self {
                let f: fn($scalar, $scalar) -> $scalar = $f;
                $vec { $($field: f(self.$field, rhs)),+ }
            }
        }

        impl $op<$vec<$scalar>> for $scalar {
            type Output = $vec<$scalar>;

            #[inline]
            fn $method(self, rhs: $vec<$scalar>) -> $vec<$scalar> {
                let f: fn($scalar, $scalar) -> $scalar = $f;
                $vec { $($field: f(self, rhs.$field)),+ }
            }
        }

        impl $op_assign for $vec<$scalar> {
            #[inline]
            fn $method_assign(&mut self, rhs: Self) {
                *self = $op::$method(*self, rhs);
            }
        }

        impl $op_assign<$scalar> for $vec<$scalar> {
            #[inline]
            fn $method_assign(&mut self, rhs: $scalar) {
                *self = $op::$method(*self, rhs);
            }
        }
    };
}

/// Implements arithmetic and negation for a float vector.
macro_rules! impl_float_ops {
    ($vec:ident, [$($field:ident),+], $scalar:ident) => {
        impl_binary_op!($vec, [$($field),+], $scalar, Add::add, AddAssign::add_assign, |a, b| a + b);
        impl_binary_op!($vec, [$($field),+], $scalar, Sub::sub, SubAssign::sub_assign, |a, b| a - b);
        impl_binary_op!($vec, [$($field),+], $scalar, Mul::mul, MulAssign::mul_assign, |a, b| a * b);
        impl_binary_op!($vec, [$($field),+], $scalar, Div::div, DivAssign::div_assign, |a, b| a / b);
        impl_binary_op!($vec, [$($field),+], $scalar, Rem::rem, RemAssign::rem_assign, |a, b| a % b);

        impl Neg for $vec<$scalar> {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                $vec { $($field: -self.$field),+ }
            }
        }
    };
}

/// Implements wrapping arithmetic and the bit operators for an integer
/// vector.
macro_rules! impl_int_ops {
    ($vec:ident, [$($field:ident),+], $scalar:ident) => {
        impl_binary_op!($vec, [$($field),+], $scalar, Add::add, AddAssign::add_assign, $scalar::wrapping_add);
        impl_binary_op!($vec, [$($field),+], $scalar, Sub::sub, SubAssign::sub_assign, $scalar::wrapping_sub);
        impl_binary_op!($vec, [$($field),+], $scalar, Mul::mul, MulAssign::mul_assign, $scalar::wrapping_mul);
        impl_binary_op!($vec, [$($field),+], $scalar, Div::div, DivAssign::div_assign, $scalar::wrapping_div);
        impl_binary_op!($vec, [$($field),+], $scalar, Rem::rem, RemAssign::rem_assign, $scalar::wrapping_rem);
        impl_binary_op!($vec, [$($field),+], $scalar, BitAnd::bitand, BitAndAssign::bitand_assign, |a, b| a & b);
        impl_binary_op!($vec, [$($field),+], $scalar, BitOr::bitor, BitOrAssign::bitor_assign, |a, b| a | b);
        impl_binary_op!($vec, [$($field),+], $scalar, BitXor::bitxor, BitXorAssign::bitxor_assign, |a, b| a ^ b);

        impl Not for $vec<$scalar> {
            type Output = Self;

            #[inline]
            fn not(self) -> Self {
                $vec { $($field: !self.$field),+ }
            }
        }

        impl Shl<u32> for $vec<$scalar> {
            type Output = Self;

            #[inline]
            fn shl(self, rhs: u32) -> Self {
                $vec { $($field: self.$field.wrapping_shl(rhs)),+ }
            }
        }

        impl Shr<u32> for $vec<$scalar> {
            type Output = Self;

            #[inline]
            fn shr(self, rhs: u32) -> Self {
                $vec { $($field: self.$field.wrapping_shr(rhs)),+ }
            }
        }

        impl ShlAssign<u32> for $vec<$scalar> {
            #[inline]
            fn shl_assign(&mut self, rhs: u32) {
                *self = *self << rhs;
            }
        }

        impl ShrAssign<u32> for $vec<$scalar> {
            #[inline]
            fn shr_assign(&mut self, rhs: u32) {
                *self = *self >> rhs;
            }
        }
    };
}

/// Implements the logical operators for a bool vector.
macro_rules! impl_bool_ops {
    ($vec:ident, [$($field:ident),+]) => {
        impl Not for $vec<bool> {
            type Output = Self;

            #[inline]
            fn not(self) -> Self {
                $vec { $($field: !self.$field),+ }
            }
        }

        impl BitAnd for $vec<bool> {
            type Output = Self;

            #[inline]
            fn bitand(self, rhs: Self) -> Self {
                $vec { $($field: self.$field & rhs.$field),+ }
            }
        }

        impl BitOr for $vec<bool> {
            type Output = Self;

            #[inline]
            fn bitor(self, rhs: Self) -> Self {
                $vec { $($field: self.$field | rhs.$field),+ }
            }
        }
    };
}

macro_rules! impl_ops {
    ($vec:ident, [$($field:ident),+]) => {
        impl_float_ops!($vec, [$($field),+], f32);
        impl_float_ops!($vec, [$($field),+], f64);
        impl_int_ops!($vec, [$($field),+], i32);
        impl_int_ops!($vec, [$($field),+], u32);
        impl_bool_ops!($vec, [$($field),+]);

        impl Neg for $vec<i32> {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                $vec { $($field: self.$field.wrapping_neg()),+ }
            }
        }
    };
}

impl_ops!(Vec2, [x, y]);
impl_ops!(Vec3, [x, y, z]);
impl_ops!(Vec4, [x, y, z, w]);
