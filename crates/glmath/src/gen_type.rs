//! Scalars and vectors behind one interface.
//!
//! GLSL builtins such as `floor` or `clamp` accept a scalar or a vector of
//! any size, which the GLSL documentation calls `genType`. [`GenType`] is
//! that abstraction: the builtins in [`crate::functions`] are written once
//! against it and work on `f32` as well as on `Vec4<f32>`.
use crate::{
    numeric::NumericVector,
    scalar::{BaseFloat, BaseInt, Number, SignedNumber},
    vector::{Element, Vector},
};

/// A scalar, or a numeric vector of scalars, that builtins apply to
/// componentwise.
pub trait GenType: Element {
    type Scalar: Number;
    /// The same shape holding `D`s: `D` itself for scalars.
    type Cast<D: Element>: Element;

    /// Broadcasts a scalar to every component.
    fn from_scalar(scalar: Self::Scalar) -> Self;

    fn apply(self, f: impl FnMut(Self::Scalar) -> Self::Scalar) -> Self;

    fn apply2(self, b: Self, f: impl FnMut(Self::Scalar, Self::Scalar) -> Self::Scalar) -> Self;

    fn apply3(
        self,
        b: Self,
        c: Self,
        f: impl FnMut(Self::Scalar, Self::Scalar, Self::Scalar) -> Self::Scalar,
    ) -> Self;

    fn apply_to<D: Element>(self, f: impl FnMut(Self::Scalar) -> D) -> Self::Cast<D>;

    fn apply2_to<D: Element>(
        self,
        b: Self,
        f: impl FnMut(Self::Scalar, Self::Scalar) -> D,
    ) -> Self::Cast<D>;

    /// Combines each component with the matching component of a value of the
    /// same shape but another element type.
    fn apply_with<D: Element>(
        self,
        b: Self::Cast<D>,
        f: impl FnMut(Self::Scalar, D) -> Self::Scalar,
    ) -> Self;

    fn apply_split(self, f: impl FnMut(Self::Scalar) -> (Self::Scalar, Self::Scalar)) -> (Self, Self);

    /// Takes `b`'s component where `mask` is `true` and `self`'s elsewhere.
    fn select(self, b: Self, mask: Self::Cast<bool>) -> Self;

    /// Whether `f` holds for every pair of matching components.
    fn all2(self, b: Self, f: impl FnMut(Self::Scalar, Self::Scalar) -> bool) -> bool;
}

/// Float scalars and vectors.
pub trait GenFloat: GenType<Scalar: BaseFloat> {}

impl<T: GenType<Scalar: BaseFloat>> GenFloat for T {}

/// Signed scalars and vectors: floats and `i32`.
pub trait GenSigned: GenType<Scalar: SignedNumber> {}

impl<T: GenType<Scalar: SignedNumber>> GenSigned for T {}

/// 32-bit integer scalars and vectors.
pub trait GenInt: GenType<Scalar: BaseInt> {}

impl<T: GenType<Scalar: BaseInt>> GenInt for T {}

macro_rules! impl_gen_type_scalar {
    ($($ty:ty),+) => {$(
        impl GenType for $ty {
            type Scalar = $ty;
            type Cast<D: Element> = D;

            fn from_scalar(scalar: $ty) -> Self {
                scalar
            }

            fn apply(self, mut f: impl FnMut($ty) -> $ty) -> Self {
                f(self)
            }

            fn apply2(self, b: Self, mut f: impl FnMut($ty, $ty) -> $ty) -> Self {
                f(self, b)
            }

            fn apply3(self, b: Self, c: Self, mut f: impl FnMut($ty, $ty, $ty) -> $ty) -> Self {
                f(self, b, c)
            }

            fn apply_to<D: Element>(self, mut f: impl FnMut($ty) -> D) -> D {
                f(self)
            }

            fn apply2_to<D: Element>(self, b: Self, mut f: impl FnMut($ty, $ty) -> D) -> D {
                f(self, b)
            }

            fn apply_with<D: Element>(self, b: D, mut f: impl FnMut($ty, D) -> $ty) -> Self {
                f(self, b)
            }

            fn apply_split(self, mut f: impl FnMut($ty) -> ($ty, $ty)) -> (Self, Self) {
                f(self)
            }

            fn select(self, b: Self, mask: bool) -> Self {
                if mask { b } else { self }
            }

            fn all2(self, b: Self, mut f: impl FnMut($ty, $ty) -> bool) -> bool {
                f(self, b)
            }
        }
    )+};
}

impl_gen_type_scalar!(f32, f64, i32, u32);

impl<V: NumericVector> GenType for V {
    type Scalar = V::Component;
    type Cast<D: Element> = <V as Vector>::Cast<D>;

    fn from_scalar(scalar: Self::Scalar) -> Self {
        V::splat(scalar)
    }

    fn apply(self, f: impl FnMut(Self::Scalar) -> Self::Scalar) -> Self {
        self.map(f)
    }

    fn apply2(self, b: Self, f: impl FnMut(Self::Scalar, Self::Scalar) -> Self::Scalar) -> Self {
        self.zip(b, f)
    }

    fn apply3(
        self,
        b: Self,
        c: Self,
        mut f: impl FnMut(Self::Scalar, Self::Scalar, Self::Scalar) -> Self::Scalar,
    ) -> Self {
        V::from_fn(|index| f(self[index], b[index], c[index]))
    }

    fn apply_to<D: Element>(self, f: impl FnMut(Self::Scalar) -> D) -> Self::Cast<D> {
        self.map_to(f)
    }

    fn apply2_to<D: Element>(
        self,
        b: Self,
        f: impl FnMut(Self::Scalar, Self::Scalar) -> D,
    ) -> Self::Cast<D> {
        self.zip_to(b, f)
    }

    fn apply_with<D: Element>(
        self,
        b: Self::Cast<D>,
        mut f: impl FnMut(Self::Scalar, D) -> Self::Scalar,
    ) -> Self {
        V::from_fn(|index| f(self[index], b[index]))
    }

    fn apply_split(self, f: impl FnMut(Self::Scalar) -> (Self::Scalar, Self::Scalar)) -> (Self, Self) {
        self.split(f)
    }

    fn select(self, b: Self, mask: Self::Cast<bool>) -> Self {
        V::from_fn(|index| if mask[index] { b[index] } else { self[index] })
    }

    fn all2(self, b: Self, mut f: impl FnMut(Self::Scalar, Self::Scalar) -> bool) -> bool {
        (0..V::DIMENSION).all(|index| f(self[index], b[index]))
    }
}
