//! Scalar number traits.
//!
//! Every component type a numeric vector can hold implements [`Number`]:
//! `f32`, `f64`, `i32` and `u32`. Floats and `i32` also implement
//! [`SignedNumber`], floats implement [`BaseFloat`] and the two integer types
//! implement [`BaseInt`].
use std::{
    fmt::Debug,
    ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Rem, Shl, Shr, Sub},
};

use crate::bits;

/// Additive identity.
pub trait Zero: Sized + Add<Output = Self> + PartialEq {
    const ZERO: Self;

    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Multiplicative identity.
pub trait One: Sized + Mul<Output = Self> + PartialEq {
    const ONE: Self;

    fn is_one(&self) -> bool {
        *self == Self::ONE
    }
}

/// A scalar that vectors can do arithmetic with.
pub trait Number:
    Copy
    + Debug
    + Default
    + PartialOrd
    + Zero
    + One
    + Sub<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Returns `other` if `other < self`, otherwise `self`.
    fn partial_min(self, other: Self) -> Self {
        if other < self { other } else { self }
    }

    /// Returns `other` if `self < other`, otherwise `self`.
    fn partial_max(self, other: Self) -> Self {
        if self < other { other } else { self }
    }

    /// `min(max(self, low), high)`.
    fn clamp_to(self, low: Self, high: Self) -> Self {
        self.partial_max(low).partial_min(high)
    }

    /// Converts with the semantics of an `as` cast.
    fn from_f64(value: f64) -> Self;

    /// Converts with the semantics of an `as` cast.
    fn to_f64(self) -> f64;
}

/// A number with a negation.
pub trait SignedNumber: Number + Neg<Output = Self> {
    /// Absolute value. For integers the most negative value maps to itself.
    fn abs(self) -> Self;

    /// Exactly one of `-1`, `0` or `1`.
    ///
    /// Unlike [`f32::signum`] both zeros give `0`. NaN also gives `0`.
    fn signum(self) -> Self {
        if self > Self::ZERO {
            Self::ONE
        } else if self < Self::ZERO {
            -Self::ONE
        } else {
            Self::ZERO
        }
    }
}

/// A floating point scalar.
///
/// Most methods forward to the inherent method of the same name on `f32` and
/// `f64`, so their accuracy is whatever the platform's libm provides.
pub trait BaseFloat: SignedNumber {
    /// The difference between `1.0` and the next representable value.
    const EPSILON: Self;
    const PI: Self;
    const TAU: Self;
    const FRAC_PI_2: Self;
    const FRAC_PI_4: Self;
    const E: Self;
    const SQRT_2: Self;
    const LN_2: Self;
    const INFINITY: Self;
    const NAN: Self;

    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    fn trunc(self) -> Self;
    /// Rounds half-way cases away from zero.
    fn round(self) -> Self;
    /// Rounds half-way cases to the nearest even integer.
    fn round_even(self) -> Self;
    fn sqrt(self) -> Self;
    fn exp(self) -> Self;
    fn exp2(self) -> Self;
    fn ln(self) -> Self;
    fn log2(self) -> Self;
    fn powf(self, exponent: Self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    /// The angle of the point `(x, self)`, in `[-π, π]`.
    fn atan2(self, x: Self) -> Self;
    fn sinh(self) -> Self;
    fn cosh(self) -> Self;
    fn tanh(self) -> Self;
    fn asinh(self) -> Self;
    fn acosh(self) -> Self;
    fn atanh(self) -> Self;
    /// `self * a + b`, with a single rounding where the platform fuses it.
    fn mul_add(self, a: Self, b: Self) -> Self;
    fn is_nan(self) -> bool;
    fn is_infinite(self) -> bool;
    /// Splits into a significand in `[0.5, 1)` and a power of two.
    fn frexp(self) -> (Self, i32);
    /// `self * 2^exponent`.
    fn ldexp(self, exponent: i32) -> Self;

    /// `self - floor(self)`.
    fn fract(self) -> Self {
        self - self.floor()
    }

    fn recip(self) -> Self {
        Self::ONE / self
    }

    /// `1 / sqrt(self)`.
    fn inverse_sqrt(self) -> Self {
        self.sqrt().recip()
    }

    fn to_radians(self) -> Self {
        self * (Self::PI / Self::from_f64(180.0))
    }

    fn to_degrees(self) -> Self {
        self * (Self::from_f64(180.0) / Self::PI)
    }

    /// Relative comparison, or absolute when `other` is zero.
    ///
    /// Equal values are always close, including equal infinities.
    fn is_close(self, other: Self, tolerance: Self) -> bool {
        if self == other {
            true
        } else if other.is_zero() {
            self.abs() <= tolerance
        } else {
            (self - other).abs() <= self.abs().partial_max(other.abs()) * tolerance
        }
    }
}

/// A 32-bit integer scalar.
///
/// Bit operations work on the 32-bit two's complement pattern, so `i32` and
/// `u32` share one implementation.
pub trait BaseInt:
    Number
    + Eq
    + Ord
    + Not<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    const SIGNED: bool;

    fn to_bits(self) -> u32;
    fn from_bits(bits: u32) -> Self;

    /// Smallest power of two greater than or equal to `self`.
    ///
    /// Signed values round their magnitude and keep their sign. Zero, and
    /// results the type cannot hold, give zero.
    fn next_pow2(self) -> Self {
        let bits = self.to_bits();
        if !Self::SIGNED {
            return Self::from_bits(bits::next_power_of_two(bits));
        }
        let value = bits as i32;
        let magnitude = bits::next_power_of_two(value.unsigned_abs());
        let rounded = i32::try_from(magnitude as i64 * value.signum() as i64).unwrap_or(0);
        Self::from_bits(rounded as u32)
    }

    fn is_pow2(self) -> bool {
        let bits = self.to_bits();
        if Self::SIGNED && (bits as i32) < 0 {
            return false;
        }
        bits != 0 && bits & (bits - 1) == 0
    }

    /// 32 for zero.
    fn leading_zeros(self) -> u32 {
        bits::leading_zeros(self.to_bits())
    }

    /// 32 for zero.
    fn trailing_zeros(self) -> u32 {
        bits::trailing_zeros(self.to_bits())
    }

    fn bit_count(self) -> u32 {
        bits::bit_count(self.to_bits())
    }

    fn bitfield_reverse(self) -> Self {
        Self::from_bits(bits::reverse(self.to_bits()))
    }

    /// Index of the lowest set bit, -1 for zero.
    fn find_lsb(self) -> i32 {
        bits::find_lsb(self.to_bits())
    }

    /// Index of the highest bit that differs from the sign bit.
    ///
    /// -1 for zero, and for -1 when signed.
    fn find_msb(self) -> i32 {
        let bits = self.to_bits();
        if Self::SIGNED && (bits as i32) < 0 {
            bits::find_msb(!bits)
        } else {
            bits::find_msb(bits)
        }
    }

    /// Bits `[offset, offset + bits)` moved to the bottom, sign extended when
    /// signed. Zero when `bits` is zero or the field leaves the 32 bits.
    fn bitfield_extract(self, offset: u32, bits: u32) -> Self {
        Self::from_bits(bits::extract(self.to_bits(), offset, bits, Self::SIGNED))
    }

    /// `self` with bits `[offset, offset + bits)` replaced by the low bits of
    /// `insert`. Unchanged when `bits` is zero or the field leaves the 32 bits.
    fn bitfield_insert(self, insert: Self, offset: u32, bits: u32) -> Self {
        Self::from_bits(bits::insert(self.to_bits(), insert.to_bits(), offset, bits))
    }
}

macro_rules! impl_number {
    ($ty:ty, $zero:literal, $one:literal) => {
        impl Zero for $ty {
            const ZERO: Self = $zero;
        }

        impl One for $ty {
            const ONE: Self = $one;
        }

        impl Number for $ty {
            fn from_f64(value: f64) -> Self {
                value as $ty
            }

            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_number!(f32, 0.0, 1.0);
impl_number!(f64, 0.0, 1.0);
impl_number!(i32, 0, 1);
impl_number!(u32, 0, 1);

impl SignedNumber for i32 {
    fn abs(self) -> Self {
        self.wrapping_abs()
    }
}

impl BaseInt for i32 {
    const SIGNED: bool = true;

    fn to_bits(self) -> u32 {
        self as u32
    }

    fn from_bits(bits: u32) -> Self {
        bits as i32
    }
}

impl BaseInt for u32 {
    const SIGNED: bool = false;

    fn to_bits(self) -> u32 {
        self
    }

    fn from_bits(bits: u32) -> Self {
        bits
    }
}

macro_rules! impl_base_float {
    ($ty:ident, $frexp:path, $ldexp:path) => {
        impl SignedNumber for $ty {
            fn abs(self) -> Self {
                $ty::abs(self)
            }
        }

        impl BaseFloat for $ty {
            const EPSILON: Self = $ty::EPSILON;
            const PI: Self = std::$ty::consts::PI;
            const TAU: Self = std::$ty::consts::TAU;
            const FRAC_PI_2: Self = std::$ty::consts::FRAC_PI_2;
            const FRAC_PI_4: Self = std::$ty::consts::FRAC_PI_4;
            const E: Self = std::$ty::consts::E;
            const SQRT_2: Self = std::$ty::consts::SQRT_2;
            const LN_2: Self = std::$ty::consts::LN_2;
            const INFINITY: Self = $ty::INFINITY;
            const NAN: Self = $ty::NAN;

            fn floor(self) -> Self {
                $ty::floor(self)
            }

            fn ceil(self) -> Self {
                $ty::ceil(self)
            }

            fn trunc(self) -> Self {
                $ty::trunc(self)
            }

            fn round(self) -> Self {
                $ty::round(self)
            }

            fn round_even(self) -> Self {
                $ty::round_ties_even(self)
            }

            fn sqrt(self) -> Self {
                $ty::sqrt(self)
            }

            fn exp(self) -> Self {
                $ty::exp(self)
            }

            fn exp2(self) -> Self {
                $ty::exp2(self)
            }

            fn ln(self) -> Self {
                $ty::ln(self)
            }

            fn log2(self) -> Self {
                $ty::log2(self)
            }

            fn powf(self, exponent: Self) -> Self {
                $ty::powf(self, exponent)
            }

            fn sin(self) -> Self {
                $ty::sin(self)
            }

            fn cos(self) -> Self {
                $ty::cos(self)
            }

            fn tan(self) -> Self {
                $ty::tan(self)
            }

            fn asin(self) -> Self {
                $ty::asin(self)
            }

            fn acos(self) -> Self {
                $ty::acos(self)
            }

            fn atan(self) -> Self {
                $ty::atan(self)
            }

            fn atan2(self, x: Self) -> Self {
                $ty::atan2(self, x)
            }

            fn sinh(self) -> Self {
                $ty::sinh(self)
            }

            fn cosh(self) -> Self {
                $ty::cosh(self)
            }

            fn tanh(self) -> Self {
                $ty::tanh(self)
            }

            fn asinh(self) -> Self {
                $ty::asinh(self)
            }

            fn acosh(self) -> Self {
                $ty::acosh(self)
            }

            fn atanh(self) -> Self {
                $ty::atanh(self)
            }

            fn mul_add(self, a: Self, b: Self) -> Self {
                $ty::mul_add(self, a, b)
            }

            fn is_nan(self) -> bool {
                $ty::is_nan(self)
            }

            fn is_infinite(self) -> bool {
                $ty::is_infinite(self)
            }

            fn frexp(self) -> (Self, i32) {
                $frexp(self)
            }

            fn ldexp(self, exponent: i32) -> Self {
                $ldexp(self, exponent)
            }

            fn to_radians(self) -> Self {
                $ty::to_radians(self)
            }

            fn to_degrees(self) -> Self {
                $ty::to_degrees(self)
            }
        }
    };
}

impl_base_float!(f32, libm::frexpf, libm::ldexpf);
impl_base_float!(f64, libm::frexp, libm::ldexp);
