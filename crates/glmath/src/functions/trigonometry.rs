//! Angle and trigonometry functions.
//!
//! Angles are in radians. Results outside a function's domain are NaN.
use crate::{gen_type::GenFloat, scalar::BaseFloat};

/// Degrees to radians.
pub fn radians<T: GenFloat>(degrees: T) -> T {
    degrees.apply(BaseFloat::to_radians)
}

/// Radians to degrees.
pub fn degrees<T: GenFloat>(radians: T) -> T {
    radians.apply(BaseFloat::to_degrees)
}

pub fn sin<T: GenFloat>(angle: T) -> T {
    angle.apply(BaseFloat::sin)
}

pub fn cos<T: GenFloat>(angle: T) -> T {
    angle.apply(BaseFloat::cos)
}

pub fn tan<T: GenFloat>(angle: T) -> T {
    angle.apply(BaseFloat::tan)
}

/// Within `[-π/2, π/2]`.
pub fn asin<T: GenFloat>(x: T) -> T {
    x.apply(BaseFloat::asin)
}

/// Within `[0, π]`.
pub fn acos<T: GenFloat>(x: T) -> T {
    x.apply(BaseFloat::acos)
}

/// Within `[-π/2, π/2]`.
pub fn atan<T: GenFloat>(y_over_x: T) -> T {
    y_over_x.apply(BaseFloat::atan)
}

/// The angle of the point `(x, y)`, within `[-π, π]`.
pub fn atan2<T: GenFloat>(y: T, x: T) -> T {
    y.apply2(x, BaseFloat::atan2)
}

pub fn sinh<T: GenFloat>(x: T) -> T {
    x.apply(BaseFloat::sinh)
}

pub fn cosh<T: GenFloat>(x: T) -> T {
    x.apply(BaseFloat::cosh)
}

pub fn tanh<T: GenFloat>(x: T) -> T {
    x.apply(BaseFloat::tanh)
}

pub fn asinh<T: GenFloat>(x: T) -> T {
    x.apply(BaseFloat::asinh)
}

pub fn acosh<T: GenFloat>(x: T) -> T {
    x.apply(BaseFloat::acosh)
}

pub fn atanh<T: GenFloat>(x: T) -> T {
    x.apply(BaseFloat::atanh)
}

#[cfg(test)]
mod test {
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use approx::assert_relative_eq;

    use crate::vectors::*;

    use super::*;

    #[test]
    fn sanity_conversions() {
        assert_relative_eq!(vec2f(PI, FRAC_PI_2), radians(vec2f(180.0, 90.0)), epsilon = 1e-6);
        assert_relative_eq!(90.0, degrees(FRAC_PI_2), epsilon = 1e-4);
    }

    #[test]
    fn sanity_trigonometry() {
        assert_relative_eq!(vec3f(0.0, 1.0, 0.0), sin(vec3f(0.0, FRAC_PI_2, PI)), epsilon = 1e-6);
        assert_relative_eq!(1.0, tan(FRAC_PI_4), epsilon = 1e-6);
        assert_relative_eq!(FRAC_PI_2, asin(1.0f32));
        assert_relative_eq!(PI, acos(-1.0f32));
        assert!(acos(2.0f32).is_nan());
    }

    #[test]
    fn sanity_atan2_quadrants() {
        let angles = atan2(vec4f(1.0, 1.0, -1.0, -1.0), vec4f(1.0, -1.0, -1.0, 1.0));
        assert_relative_eq!(
            vec4f(FRAC_PI_4, 3.0 * FRAC_PI_4, -3.0 * FRAC_PI_4, -FRAC_PI_4),
            angles
        );
    }

    #[test]
    fn sanity_hyperbolic() {
        let x = vec3d(-0.5, 0.25, 2.0);
        assert_relative_eq!(x, asinh(sinh(x)), epsilon = 1e-12);
        assert_relative_eq!(x, atanh(tanh(x)), epsilon = 1e-12);
        assert_relative_eq!(vec2d(0.25, 2.0), acosh(cosh(vec2d(0.25, 2.0))), epsilon = 1e-12);
        assert_relative_eq!(1.0, cosh(0.0f64));
    }
}
