//! Componentwise comparisons, which produce `bool` vectors.
use crate::{
    numeric::NumericVector,
    vector::{BoolVector, Vector},
};

pub fn less_than<V: NumericVector>(x: V, y: V) -> V::Cast<bool> {
    x.zip_to(y, |x, y| x < y)
}

pub fn less_than_equal<V: NumericVector>(x: V, y: V) -> V::Cast<bool> {
    x.zip_to(y, |x, y| x <= y)
}

pub fn greater_than<V: NumericVector>(x: V, y: V) -> V::Cast<bool> {
    x.zip_to(y, |x, y| x > y)
}

pub fn greater_than_equal<V: NumericVector>(x: V, y: V) -> V::Cast<bool> {
    x.zip_to(y, |x, y| x >= y)
}

pub fn equal<V: Vector>(x: V, y: V) -> V::Cast<bool> {
    x.zip_to(y, |x, y| x == y)
}

pub fn not_equal<V: Vector>(x: V, y: V) -> V::Cast<bool> {
    x.zip_to(y, |x, y| x != y)
}

/// Whether any component of `x` is `true`.
pub fn any<V: BoolVector>(x: V) -> bool {
    x.any()
}

/// Whether every component of `x` is `true`.
pub fn all<V: BoolVector>(x: V) -> bool {
    x.all()
}

/// Componentwise logical complement.
pub fn not<V: BoolVector>(x: V) -> V {
    x.map(|x| !x)
}
