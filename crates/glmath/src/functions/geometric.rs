//! Geometric functions on float vectors.
use crate::{
    numeric::{Cross, FloatVector},
    scalar::{BaseFloat, Number, One, Zero},
};

pub fn length<V: FloatVector>(x: V) -> V::Component {
    x.length()
}

pub fn distance<V: FloatVector>(p0: V, p1: V) -> V::Component {
    p0.distance(p1)
}

pub fn dot<V: FloatVector>(x: V, y: V) -> V::Component {
    x.dot(y)
}

pub fn cross<V: Cross>(x: V, y: V) -> V {
    x.cross(y)
}

/// `x` scaled to length one. The zero vector stays zero.
pub fn normalize<V: FloatVector>(x: V) -> V {
    x.normalize()
}

/// `n` if `nref` faces against `i`, otherwise `-n`.
pub fn faceforward<V: FloatVector>(n: V, i: V, nref: V) -> V {
    if nref.dot(i) < V::Component::ZERO { n } else { -n }
}

/// The reflection of incident vector `i` off a surface with normal `n`.
///
/// `n` should be normalized.
pub fn reflect<V: FloatVector>(i: V, n: V) -> V {
    i - n * (V::Component::from_f64(2.0) * n.dot(i))
}

/// The refraction of incident vector `i` through a surface with normal `n`
/// and ratio of indices of refraction `eta`.
///
/// `i` and `n` should be normalized. Total internal reflection gives the zero
/// vector.
pub fn refract<V: FloatVector>(i: V, n: V, eta: V::Component) -> V {
    let one = V::Component::ONE;
    let d = n.dot(i);
    let k = one - eta * eta * (one - d * d);
    if k < V::Component::ZERO {
        V::splat(V::Component::ZERO)
    } else {
        i * eta - n * (eta * d + k.sqrt())
    }
}
