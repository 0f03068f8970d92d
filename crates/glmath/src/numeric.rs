//! Arithmetic specializations of [`Vector`].
//!
//! Each trait here is blanket implemented for every vector that has the
//! required component type and operators, so `Vec3<f32>` is a
//! [`FloatVector`] and `Vec2<u32>` an [`IntVector`] without any per type
//! impls.
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::{
    scalar::{BaseFloat, BaseInt, Number, One, SignedNumber, Zero},
    vector::{BoolVector, Vector},
};

/// A vector with componentwise arithmetic, and arithmetic with a scalar that
/// is broadcast to every component.
pub trait NumericVector:
    Vector<Component: Number>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
where
    Self: Add<<Self as Vector>::Component, Output = Self>
        + Sub<<Self as Vector>::Component, Output = Self>
        + Mul<<Self as Vector>::Component, Output = Self>
        + Div<<Self as Vector>::Component, Output = Self>,
{
    /// One for every `true` component and zero for every `false` one.
    fn from_bools(mask: Self::Cast<bool>) -> Self {
        Self::from_fn(|index| {
            if mask[index] {
                Self::Component::ONE
            } else {
                Self::Component::ZERO
            }
        })
    }

    fn sum(self) -> Self::Component {
        self.fold(Self::Component::ZERO, |sum, component| sum + component)
    }

    fn product(self) -> Self::Component {
        self.fold(Self::Component::ONE, |product, component| product * component)
    }

    /// The smallest component.
    fn min_element(self) -> Self::Component {
        self.reduce(Number::partial_min)
    }

    /// The largest component.
    fn max_element(self) -> Self::Component {
        self.reduce(Number::partial_max)
    }
}

impl<V> NumericVector for V where
    V: Vector<Component: Number>
        + Add<Output = V>
        + Sub<Output = V>
        + Mul<Output = V>
        + Div<Output = V>
        + Add<<V as Vector>::Component, Output = V>
        + Sub<<V as Vector>::Component, Output = V>
        + Mul<<V as Vector>::Component, Output = V>
        + Div<<V as Vector>::Component, Output = V>
{
}

/// A numeric vector that can be negated.
pub trait SignedVector: NumericVector<Component: SignedNumber> + Neg<Output = Self> {
    fn abs(self) -> Self {
        self.map(SignedNumber::abs)
    }

    /// Componentwise `-1`, `0` or `1`.
    fn signum(self) -> Self {
        self.map(SignedNumber::signum)
    }
}

impl<V: NumericVector<Component: SignedNumber> + Neg<Output = V>> SignedVector for V {}

/// A vector of floats: the geometric operations.
pub trait FloatVector: SignedVector<Component: BaseFloat> {
    fn dot(self, other: Self) -> Self::Component {
        (self * other).sum()
    }

    /// `|self . other|`
    fn abs_dot(self, other: Self) -> Self::Component {
        self.dot(other).abs()
    }

    fn length_squared(self) -> Self::Component {
        self.dot(self)
    }

    fn length(self) -> Self::Component {
        self.length_squared().sqrt()
    }

    fn distance_squared(self, other: Self) -> Self::Component {
        (self - other).length_squared()
    }

    fn distance(self, other: Self) -> Self::Component {
        (self - other).length()
    }

    /// The unit vector in the direction of `self`.
    ///
    /// A vector of length zero normalizes to the zero vector.
    fn normalize(self) -> Self {
        let length_squared = self.length_squared();
        if length_squared.is_zero() {
            log::trace!("normalizing zero length vector {self:?}");
            return Self::splat(Self::Component::ZERO);
        }
        self / length_squared.sqrt()
    }

    /// `self` scaled to `length`.
    fn normalize_to(self, length: Self::Component) -> Self {
        self.normalize() * length
    }

    /// Componentwise `1 / x`.
    fn recip(self) -> Self {
        self.map(BaseFloat::recip)
    }

    /// Componentwise `self * (1 - t) + other * t`.
    ///
    /// Gives exactly `self` at `t = 0` and exactly `other` at `t = 1`.
    fn mix(self, other: Self, t: Self) -> Self {
        self * (Self::splat(Self::Component::ONE) - t) + other * t
    }

    /// [`FloatVector::mix`] with the same `t` for every component.
    fn interpolate(self, other: Self, t: Self::Component) -> Self {
        self.mix(other, Self::splat(t))
    }

    /// Componentwise `0` where `self < edge`, otherwise `1`.
    fn step(self, edge: Self) -> Self {
        self.zip(edge, |x, edge| {
            if x < edge {
                Self::Component::ZERO
            } else {
                Self::Component::ONE
            }
        })
    }

    /// Hermite interpolation of `self` between `edge0` and `edge1`.
    ///
    /// Requires `edge0 < edge1` in every component, which is checked in debug
    /// builds.
    fn smoothstep(self, edge0: Self, edge1: Self) -> Self {
        debug_assert!(
            edge0.zip_to(edge1, |low, high| low < high).all(),
            "smoothstep requires edge0 < edge1, got {edge0:?} and {edge1:?}"
        );
        let zero = Self::Component::ZERO;
        let one = Self::Component::ONE;
        let t = ((self - edge0) / (edge1 - edge0)).map(|t| t.clamp_to(zero, one));
        let two = Self::Component::from_f64(2.0);
        let three = Self::Component::from_f64(3.0);
        t * t * (Self::splat(three) - t * two)
    }

    /// Spherical interpolation between two unit vectors.
    ///
    /// Falls back to linear interpolation when the vectors are parallel or
    /// opposite.
    fn slerp(self, other: Self, t: Self::Component) -> Self {
        let epsilon = Self::Component::EPSILON;
        let theta = self.angle(other);
        if theta.is_close(Self::Component::ZERO, epsilon)
            || theta.is_close(Self::Component::PI, epsilon)
        {
            log::trace!("slerp between parallel vectors, interpolating linearly");
            return self.interpolate(other, t);
        }
        let sin_theta = theta.sin();
        let from = ((Self::Component::ONE - t) * theta).sin() / sin_theta;
        let to = (t * theta).sin() / sin_theta;
        self * from + other * to
    }

    /// The component of `self` along `onto`.
    ///
    /// Zero when `onto` has zero length.
    fn projection(self, onto: Self) -> Self {
        let length_squared = onto.length_squared();
        if length_squared.is_zero() {
            log::trace!("projecting onto zero length vector {onto:?}");
            return Self::splat(Self::Component::ZERO);
        }
        onto * (self.dot(onto) / length_squared)
    }

    /// Whether the dot product vanishes relative to the lengths of both
    /// vectors.
    fn is_perpendicular(self, other: Self) -> bool {
        let tolerance = Self::Component::EPSILON * self.length() * other.length();
        self.dot(other).abs() <= tolerance
    }

    /// The unsigned angle between two vectors, in radians, within `[0, π]`.
    ///
    /// Gives zero when either vector has zero length, and exactly `0` or `π`
    /// for vectors that are parallel up to rounding.
    fn angle(self, other: Self) -> Self::Component {
        let zero = Self::Component::ZERO;
        let one = Self::Component::ONE;
        let epsilon = Self::Component::EPSILON;
        let lengths = self.length() * other.length();
        if lengths.is_zero() {
            log::trace!("angle with a zero length vector");
            return zero;
        }
        let cos = self.dot(other) / lengths;
        if cos.abs().is_close(one, epsilon) {
            return if cos > zero { zero } else { Self::Component::PI };
        }
        cos.clamp_to(-one, one).acos()
    }

    /// Whether every component is within `tolerance` of `other`'s, see
    /// [`BaseFloat::is_close`].
    fn is_close(self, other: Self, tolerance: Self::Component) -> bool {
        self.zip_to(other, |a, b| a.is_close(b, tolerance)).all()
    }
}

impl<V: SignedVector<Component: BaseFloat>> FloatVector for V {}

/// The cross product of three dimensional vectors.
pub trait Cross: FloatVector {
    fn cross(self, other: Self) -> Self;
}

/// A vector of 32-bit integers: componentwise bit operations.
pub trait IntVector: NumericVector<Component: BaseInt> {
    fn next_pow2(self) -> Self {
        self.map(BaseInt::next_pow2)
    }

    fn is_pow2(self) -> Self::Cast<bool> {
        self.map_to(BaseInt::is_pow2)
    }

    fn leading_zeros(self) -> Self::Cast<u32> {
        self.map_to(BaseInt::leading_zeros)
    }

    fn trailing_zeros(self) -> Self::Cast<u32> {
        self.map_to(BaseInt::trailing_zeros)
    }

    fn bit_count(self) -> Self::Cast<i32> {
        self.map_to(|component| component.bit_count() as i32)
    }

    fn bitfield_reverse(self) -> Self {
        self.map(BaseInt::bitfield_reverse)
    }

    fn find_lsb(self) -> Self::Cast<i32> {
        self.map_to(BaseInt::find_lsb)
    }

    fn find_msb(self) -> Self::Cast<i32> {
        self.map_to(BaseInt::find_msb)
    }
}

impl<V: NumericVector<Component: BaseInt>> IntVector for V {}
