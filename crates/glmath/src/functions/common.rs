//! Common functions: rounding, ranges, interpolation and float bits.
use crate::{
    gen_type::{GenFloat, GenSigned, GenType},
    scalar::{BaseFloat, Number, One, SignedNumber, Zero},
};

/// Absolute value. For `i32` the most negative value maps to itself.
pub fn abs<T: GenSigned>(x: T) -> T {
    x.apply(SignedNumber::abs)
}

/// `-1`, `0` or `1` by the sign of each component.
pub fn sign<T: GenSigned>(x: T) -> T {
    x.apply(SignedNumber::signum)
}

pub fn floor<T: GenFloat>(x: T) -> T {
    x.apply(BaseFloat::floor)
}

/// Rounds toward zero.
pub fn trunc<T: GenFloat>(x: T) -> T {
    x.apply(BaseFloat::trunc)
}

pub fn ceil<T: GenFloat>(x: T) -> T {
    x.apply(BaseFloat::ceil)
}

/// Rounds to the nearest whole number, halves away from zero.
pub fn round<T: GenFloat>(x: T) -> T {
    x.apply(BaseFloat::round)
}

/// Rounds to the nearest whole number, halves to the even one.
pub fn round_even<T: GenFloat>(x: T) -> T {
    x.apply(BaseFloat::round_even)
}

/// `x - floor(x)`.
pub fn fract<T: GenFloat>(x: T) -> T {
    x.apply(BaseFloat::fract)
}

/// GLSL `mod`: `x - y * floor(x / y)`, which takes the sign of `y`.
pub fn modulo<T: GenFloat>(x: T, y: impl Into<T>) -> T {
    x.apply2(y.into(), |x, y| x - y * (x / y).floor())
}

/// Splits `x` into its whole part and its fractional part, both with the
/// sign of `x`.
pub fn modf<T: GenFloat>(x: T) -> (T, T) {
    x.apply_split(|x| {
        let whole = x.trunc();
        (whole, x - whole)
    })
}

/// `y` where `y < x`, otherwise `x`.
pub fn min<T: GenType>(x: T, y: impl Into<T>) -> T {
    x.apply2(y.into(), Number::partial_min)
}

/// `y` where `x < y`, otherwise `x`.
pub fn max<T: GenType>(x: T, y: impl Into<T>) -> T {
    x.apply2(y.into(), Number::partial_max)
}

/// `min(max(x, min_val), max_val)`.
pub fn clamp<T: GenType>(x: T, min_val: impl Into<T>, max_val: impl Into<T>) -> T {
    x.apply3(min_val.into(), max_val.into(), Number::clamp_to)
}

/// Linear blend `x * (1 - a) + y * a`.
///
/// Gives exactly `x` at `a = 0` and exactly `y` at `a = 1`.
pub fn mix<T: GenFloat>(x: T, y: T, a: impl Into<T>) -> T {
    x.apply3(y, a.into(), |x, y, a| x * (T::Scalar::ONE - a) + y * a)
}

/// `y`'s components where `a` is `true`, `x`'s elsewhere.
pub fn mix_bool<T: GenType>(x: T, y: T, a: T::Cast<bool>) -> T {
    x.select(y, a)
}

/// `0` where `x < edge`, otherwise `1`.
pub fn step<T: GenFloat>(edge: impl Into<T>, x: T) -> T {
    let edge: T = edge.into();
    edge.apply2(x, |edge, x| {
        if x < edge {
            T::Scalar::ZERO
        } else {
            T::Scalar::ONE
        }
    })
}

/// Hermite interpolation between `0` at `edge0` and `1` at `edge1`.
///
/// Requires `edge0 < edge1`, which is checked in debug builds.
pub fn smoothstep<T: GenFloat>(edge0: impl Into<T>, edge1: impl Into<T>, x: T) -> T {
    let edge0 = edge0.into();
    let edge1 = edge1.into();
    debug_assert!(
        edge0.all2(edge1, |low, high| low < high),
        "smoothstep requires edge0 < edge1, got {edge0:?} and {edge1:?}"
    );
    let two = T::Scalar::from_f64(2.0);
    let three = T::Scalar::from_f64(3.0);
    x.apply3(edge0, edge1, |x, edge0, edge1| {
        let t = ((x - edge0) / (edge1 - edge0)).clamp_to(T::Scalar::ZERO, T::Scalar::ONE);
        t * t * (three - two * t)
    })
}

pub fn isnan<T: GenFloat>(x: T) -> T::Cast<bool> {
    x.apply_to(BaseFloat::is_nan)
}

/// `true` for positive and negative infinity.
pub fn isinf<T: GenFloat>(x: T) -> T::Cast<bool> {
    x.apply_to(BaseFloat::is_infinite)
}

/// The bits of each `f32` component, as `i32`.
pub fn float_bits_to_int<T: GenType<Scalar = f32>>(x: T) -> T::Cast<i32> {
    x.apply_to(|x| x.to_bits() as i32)
}

/// The bits of each `f32` component, as `u32`.
pub fn float_bits_to_uint<T: GenType<Scalar = f32>>(x: T) -> T::Cast<u32> {
    x.apply_to(f32::to_bits)
}

/// Each `i32` component's bits, as `f32`.
pub fn int_bits_to_float<T: GenType<Scalar = i32>>(x: T) -> T::Cast<f32> {
    x.apply_to(|x| f32::from_bits(x as u32))
}

/// Each `u32` component's bits, as `f32`.
pub fn uint_bits_to_float<T: GenType<Scalar = u32>>(x: T) -> T::Cast<f32> {
    x.apply_to(f32::from_bits)
}

/// `a * b + c` with a single rounding.
pub fn fma<T: GenFloat>(a: T, b: T, c: T) -> T {
    a.apply3(b, c, BaseFloat::mul_add)
}

/// Splits `x` into a significand in `[0.5, 1)` and a power of two exponent,
/// with `x = significand * 2^exponent`. Zero gives `(0, 0)`.
pub fn frexp<T: GenFloat>(x: T) -> (T, T::Cast<i32>) {
    (
        x.apply(|x| x.frexp().0),
        x.apply_to(|x| x.frexp().1),
    )
}

/// `x * 2^exponent`.
pub fn ldexp<T: GenFloat>(x: T, exponent: T::Cast<i32>) -> T {
    x.apply_with(exponent, BaseFloat::ldexp)
}

#[cfg(test)]
mod test {
    use crate::vectors::*;

    use super::*;

    #[test]
    fn sanity_abs_sign() {
        assert_eq!(vec3f(1.5, 0.0, 2.0), abs(vec3f(-1.5, 0.0, 2.0)));
        assert_eq!(vec3i(-1, 0, 1), sign(vec3i(-7, 0, 3)));
        assert_eq!(vec3f(-1.0, 0.0, 1.0), sign(vec3f(-0.5, -0.0, 8.0)));
        assert_eq!(i32::MIN, abs(i32::MIN));
    }

    #[test]
    fn sanity_rounding() {
        let x = vec4f(-1.5, -0.5, 0.5, 2.5);
        assert_eq!(vec4f(-2.0, -1.0, 0.0, 2.0), floor(x));
        assert_eq!(vec4f(-1.0, 0.0, 1.0, 3.0), ceil(x));
        assert_eq!(vec4f(-1.0, 0.0, 0.0, 2.0), trunc(x));
        assert_eq!(vec4f(-2.0, -1.0, 1.0, 3.0), round(x));
        assert_eq!(vec4f(-2.0, 0.0, 0.0, 2.0), round_even(x));
        assert_eq!(vec4f(0.5, 0.5, 0.5, 0.5), fract(x));
    }

    #[test]
    fn sanity_modulo() {
        assert_eq!(vec3f(0.5, 1.5, 0.5), modulo(vec3f(-1.5, 1.5, 10.5), 2.0));
        assert_eq!(-0.5, modulo(1.5f32, -2.0));
        let (whole, fraction) = modf(vec3f(0.0, -1.25, 3.75));
        assert_eq!(vec3f(0.0, -1.0, 3.0), whole);
        assert_eq!(vec3f(0.0, -0.25, 0.75), fraction);
    }

    #[test]
    fn sanity_ranges() {
        let x = vec3i(-5, 3, 12);
        assert_eq!(vec3i(-5, 3, 4), min(x, 4));
        assert_eq!(vec3i(4, 4, 12), max(x, 4));
        assert_eq!(vec3i(0, 3, 10), clamp(x, 0, 10));
        assert_eq!(vec3i(0, 3, 5), clamp(x, 0, vec3i(10, 10, 5)));
        assert_eq!(2u32, clamp(7u32, 0u32, 2u32));
        assert_eq!(0.5, clamp(0.5f64, 0.0, 1.0));
    }

    #[test]
    fn sanity_mix() {
        let x = vec3f(1.0, -3.0, 100.0);
        let y = vec3f(0.25, 7.0, -20.0);
        assert_eq!(x, mix(x, y, 0.0));
        assert_eq!(y, mix(x, y, 1.0));
        assert_eq!(vec3f(0.625, 2.0, 40.0), mix(x, y, 0.5));
        assert_eq!(vec3f(1.0, 7.0, 100.0), mix(x, y, vec3f(0.0, 1.0, 0.0)));
        assert_eq!(
            vec3f(0.25, -3.0, -20.0),
            mix_bool(x, y, vec3b(true, false, true))
        );
        assert_eq!(2.0, mix_bool(1.0f32, 2.0, true));
    }

    #[test]
    fn sanity_step() {
        assert_eq!(vec3f(0.0, 1.0, 1.0), step(1.0, vec3f(0.5, 1.0, 1.5)));
        assert_eq!(vec2f(1.0, 0.0), step(vec2f(0.0, 2.0), vec2f(0.0, 1.0)));
    }

    #[test]
    fn sanity_smoothstep() {
        assert_eq!(
            vec3f(0.0, 0.84375, 1.0),
            smoothstep(-100.0, 100.0, vec3f(-100.0, 50.0, 150.0))
        );
        assert_eq!(0.5, smoothstep(0.0, 1.0, 0.5f32));
        assert_eq!(0.0, smoothstep(0.0, 1.0, -3.0f64));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "smoothstep requires edge0 < edge1")]
    fn smoothstep_rejects_reversed_edges() {
        smoothstep(1.0, 0.0, 0.5f32);
    }

    #[test]
    fn sanity_classification() {
        let x = vec4f(1.0, f32::NAN, f32::INFINITY, f32::NEG_INFINITY);
        assert_eq!(vec4b(false, true, false, false), isnan(x));
        assert_eq!(vec4b(false, false, true, true), isinf(x));
    }

    #[test]
    fn sanity_float_bits() {
        let x = vec2f(1.0, -2.0);
        assert_eq!(vec2u(0x3F80_0000, 0xC000_0000), float_bits_to_uint(x));
        assert_eq!(vec2i(0x3F80_0000, 0xC000_0000u32 as i32), float_bits_to_int(x));
        assert_eq!(x, uint_bits_to_float(float_bits_to_uint(x)));
        assert_eq!(x, int_bits_to_float(float_bits_to_int(x)));
        assert_eq!(1.0, uint_bits_to_float(0x3F80_0000u32));
    }

    #[test]
    fn sanity_fma() {
        assert_eq!(vec2f(7.0, -1.0), fma(vec2f(2.0, 1.0), vec2f(3.0, -2.0), vec2f(1.0, 1.0)));
    }

    #[test]
    fn sanity_frexp_ldexp() {
        let x = vec4d(8.0, 0.75, -3.0, 0.0);
        let (significand, exponent) = frexp(x);
        assert_eq!(vec4d(0.5, 0.75, -0.75, 0.0), significand);
        assert_eq!(vec4i(4, 0, 2, 0), exponent);
        assert_eq!(x, ldexp(significand, exponent));
        assert_eq!(12.0, ldexp(0.75f32, 4));
    }
}
