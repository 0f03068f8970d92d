//! Exponential functions.
use crate::{gen_type::GenFloat, scalar::BaseFloat};

/// `x` raised to `y`. NaN for `x < 0`.
pub fn pow<T: GenFloat>(x: T, y: impl Into<T>) -> T {
    x.apply2(y.into(), BaseFloat::powf)
}

/// `e^x`.
pub fn exp<T: GenFloat>(x: T) -> T {
    x.apply(BaseFloat::exp)
}

/// Natural logarithm.
pub fn log<T: GenFloat>(x: T) -> T {
    x.apply(BaseFloat::ln)
}

/// `2^x`.
pub fn exp2<T: GenFloat>(x: T) -> T {
    x.apply(BaseFloat::exp2)
}

pub fn log2<T: GenFloat>(x: T) -> T {
    x.apply(BaseFloat::log2)
}

pub fn sqrt<T: GenFloat>(x: T) -> T {
    x.apply(BaseFloat::sqrt)
}

/// `1 / sqrt(x)`.
pub fn inversesqrt<T: GenFloat>(x: T) -> T {
    x.apply(BaseFloat::inverse_sqrt)
}
