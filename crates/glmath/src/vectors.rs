//! Vector types.
//!
//! `Vec2`, `Vec3` and `Vec4` are plain `#[repr(C)]` structs generic over
//! their component type, with GLSL style aliases (`Vec3f`, `Vec2u`, `Vec4b`,
//! ...), const constructors (`vec3f`, `vec2u`, ...) and swizzles in the
//! `xyzw`, `rgba` and `stpq` sets.
use crate::{
    dimension::{Dim2, Dim3, Dim4},
    numeric::{Cross, FloatVector},
    scalar::{BaseFloat, Number},
    vector::{LowerDimension, Vector, impl_vector},
};

mod ops;

/// A vector with two components.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

/// A vector with three components.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vec3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

/// A vector with four components.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vec4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl_vector!(Vec2, Dim2, [x = 0, y = 1]);
impl_vector!(Vec3, Dim3, [x = 0, y = 1, z = 2]);
impl_vector!(Vec4, Dim4, [x = 0, y = 1, z = 2, w = 3]);

/// Expands to `T`, once per field it is given.
macro_rules! component_type {
    ($field:ident) => {
        T
    };
}

/// vector! generates the constructors and conversions shared by every
/// vector size.
macro_rules! vector {
    // Example: vector!(Vec2, 2, [x, y]);
    ($ty:ident, $n:literal, [$($field:ident),+]) => {
        impl<T> $ty<T> {
            pub const fn new($($field: T),+) -> Self {
                Self { $($field),+ }
            }

            pub fn to_array(self) -> [T; $n] {
                [$(self.$field),+]
            }
        }

        impl<T: Number> $ty<T> {
            /// All zeros.
            pub const ZERO: Self = Self { $($field: T::ZERO),+ };
            /// All ones.
            pub const ONE: Self = Self { $($field: T::ONE),+ };
        }

        impl<T> From<[T; $n]> for $ty<T> {
            fn from([$($field),+]: [T; $n]) -> Self {
                Self { $($field),+ }
            }
        }

        impl<T> From<$ty<T>> for [T; $n] {
            fn from(vector: $ty<T>) -> Self {
                vector.to_array()
            }
        }

        impl<T> From<($(component_type!($field)),+)> for $ty<T> {
            fn from(($($field),+): ($(component_type!($field)),+)) -> Self {
                Self { $($field),+ }
            }
        }
    };
}

vector!(Vec2, 2, [x, y]);
vector!(Vec3, 3, [x, y, z]);
vector!(Vec4, 4, [x, y, z, w]);

/// aliases! generates the concrete type aliases of a vector size, their
/// const constructors and scalar broadcasting.
macro_rules! aliases {
    (@alias $ty:ident, $n:literal, [$($field:ident),+], $suffix:ident, $scalar:ty) => {
        paste::paste! {
            #[doc = concat!("A ", $n, " dimensional vector of `", stringify!($scalar), "` components.")]
            pub type [<$ty $suffix>] = $ty<$scalar>;

            #[doc = concat!("Constructor for a ", $n, " dimensional vector of `", stringify!($scalar), "` components.")]
            pub const fn [<$ty:lower $suffix>]($($field: $scalar),+) -> $ty<$scalar> {
                $ty::new($($field),+)
            }
        }

        impl From<$scalar> for $ty<$scalar> {
            /// Broadcasts the scalar to every component.
            fn from(scalar: $scalar) -> Self {
                Self::splat(scalar)
            }
        }
    };

    // Example: aliases!(Vec2, 2, [x, y], [f: f32, d: f64]);
    ($ty:ident, $n:literal, $fields:tt, [$($suffix:ident: $scalar:ty),+]) => {
        $(aliases!(@alias $ty, $n, $fields, $suffix, $scalar);)+
    };
}

aliases!(Vec2, 2, [x, y], [f: f32, d: f64, i: i32, u: u32, b: bool]);
aliases!(Vec3, 3, [x, y, z], [f: f32, d: f64, i: i32, u: u32, b: bool]);
aliases!(Vec4, 4, [x, y, z, w], [f: f32, d: f64, i: i32, u: u32, b: bool]);

impl<T: Number> Vec2<T> {
    pub const X: Self = Self::new(T::ONE, T::ZERO);
    pub const Y: Self = Self::new(T::ZERO, T::ONE);
}

impl<T: Number> Vec3<T> {
    pub const X: Self = Self::new(T::ONE, T::ZERO, T::ZERO);
    pub const Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO);
    pub const Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE);
}

impl<T: Number> Vec4<T> {
    pub const X: Self = Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO);
    pub const Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO, T::ZERO);
    pub const Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE, T::ZERO);
    pub const W: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE);
}

impl<T: Copy> Vec2<T> {
    /// `self` followed by `z`.
    pub const fn extend(self, z: T) -> Vec3<T> {
        Vec3::new(self.x, self.y, z)
    }
}

impl<T: Copy> Vec3<T> {
    /// `xy` followed by `z`.
    pub const fn from_vec2(xy: Vec2<T>, z: T) -> Self {
        Self::new(xy.x, xy.y, z)
    }

    /// `x` followed by `yz`.
    pub const fn from_scalar_vec2(x: T, yz: Vec2<T>) -> Self {
        Self::new(x, yz.x, yz.y)
    }

    /// `self` followed by `w`.
    pub const fn extend(self, w: T) -> Vec4<T> {
        Vec4::new(self.x, self.y, self.z, w)
    }
}

impl<T: Copy> Vec4<T> {
    pub const fn from_vec3(xyz: Vec3<T>, w: T) -> Self {
        Self::new(xyz.x, xyz.y, xyz.z, w)
    }

    pub const fn from_scalar_vec3(x: T, yzw: Vec3<T>) -> Self {
        Self::new(x, yzw.x, yzw.y, yzw.z)
    }

    pub const fn from_vec2s(xy: Vec2<T>, zw: Vec2<T>) -> Self {
        Self::new(xy.x, xy.y, zw.x, zw.y)
    }

    pub const fn from_vec2_scalars(xy: Vec2<T>, z: T, w: T) -> Self {
        Self::new(xy.x, xy.y, z, w)
    }

    pub const fn from_scalars_vec2(x: T, y: T, zw: Vec2<T>) -> Self {
        Self::new(x, y, zw.x, zw.y)
    }

    pub const fn from_scalar_vec2_scalar(x: T, yz: Vec2<T>, w: T) -> Self {
        Self::new(x, yz.x, yz.y, w)
    }
}

impl<T: crate::vector::Element> LowerDimension for Vec3<T> {
    type Lower = Vec2<T>;
}

impl<T: crate::vector::Element> LowerDimension for Vec4<T> {
    type Lower = Vec3<T>;
}

impl<T: BaseFloat> Cross for Vec3<T>
where
    Vec3<T>: FloatVector<Component = T>,
{
    fn cross(self, other: Self) -> Self {
        Vec3::new(
            self.y * other.z - other.y * self.z,
            self.z * other.x - other.z * self.x,
            self.x * other.y - other.x * self.y,
        )
    }
}

glmath_macros::swizzle!(Vec2, [T, Vec2, Vec3, Vec4], [x, y], [x, y]);
glmath_macros::swizzle!(Vec2, [T, Vec2, Vec3, Vec4], [x, y], [r, g]);
glmath_macros::swizzle!(Vec2, [T, Vec2, Vec3, Vec4], [x, y], [s, t]);
glmath_macros::swizzle!(Vec3, [T, Vec2, Vec3, Vec4], [x, y, z], [x, y, z]);
glmath_macros::swizzle!(Vec3, [T, Vec2, Vec3, Vec4], [x, y, z], [r, g, b]);
glmath_macros::swizzle!(Vec3, [T, Vec2, Vec3, Vec4], [x, y, z], [s, t, p]);
glmath_macros::swizzle!(Vec4, [T, Vec2, Vec3, Vec4], [x, y, z, w], [x, y, z, w]);
glmath_macros::swizzle!(Vec4, [T, Vec2, Vec3, Vec4], [x, y, z, w], [r, g, b, a]);
glmath_macros::swizzle!(Vec4, [T, Vec2, Vec3, Vec4], [x, y, z, w], [s, t, p, q]);
