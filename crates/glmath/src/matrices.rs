//! Matrix types.
//!
//! `Mat2`, `Mat3` and `Mat4` hold two, three or four columns of any vector
//! type. The aliases follow GLSL: `Mat2x3f` is `Mat2<Vec3<f32>>`, with two
//! columns and three rows, and `Mat3d` is `Mat3<Vec3<f64>>`.
use std::ops::*;

use crate::{
    backend::{ActiveBackend, MatrixBackend},
    dimension::{Dim2, Dim3, Dim4},
    matrix::{Matrix, mul_matrix, mul_row_vector, mul_vector},
    numeric::FloatVector,
    scalar::BaseFloat,
    vector::{LowerDimension, Vector, impl_vector},
    vectors::{Vec2, Vec3, Vec4},
};

/// A matrix with two columns.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Mat2<C> {
    pub x_axis: C,
    pub y_axis: C,
}

/// A matrix with three columns.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Mat3<C> {
    pub x_axis: C,
    pub y_axis: C,
    pub z_axis: C,
}

/// A matrix with four columns.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Mat4<C> {
    pub x_axis: C,
    pub y_axis: C,
    pub z_axis: C,
    pub w_axis: C,
}

impl_vector!(Mat2, Dim2, [x_axis = 0, y_axis = 1]);
impl_vector!(Mat3, Dim3, [x_axis = 0, y_axis = 1, z_axis = 2]);
impl_vector!(Mat4, Dim4, [x_axis = 0, y_axis = 1, z_axis = 2, w_axis = 3]);

impl<T: crate::vector::Element> LowerDimension for Mat3<T> {
    type Lower = Mat2<T>;
}

impl<T: crate::vector::Element> LowerDimension for Mat4<T> {
    type Lower = Mat3<T>;
}

/// matrix! generates what every matrix size shares: construction,
/// conversions and the arithmetic that does not depend on shape.
macro_rules! matrix {
    // Example: matrix!(Mat2, 2, [x_axis, y_axis]);
    ($mat:ident, $n:literal, [$($axis:ident),+]) => {
        impl<C> $mat<C> {
            /// Builds a matrix from its columns.
            pub const fn new($($axis: C),+) -> Self {
                Self { $($axis),+ }
            }

            pub fn to_cols_array(self) -> [C; $n] {
                [$(self.$axis),+]
            }
        }

        impl<C> From<[C; $n]> for $mat<C> {
            fn from([$($axis),+]: [C; $n]) -> Self {
                Self { $($axis),+ }
            }
        }

        impl<C: FloatVector> Add for $mat<C> {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                self.zip(rhs, |a, b| a + b)
            }
        }

        impl<C: FloatVector> Sub for $mat<C> {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                self.zip(rhs, |a, b| a - b)
            }
        }

        impl<C: FloatVector> AddAssign for $mat<C> {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl<C: FloatVector> SubAssign for $mat<C> {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl<C: FloatVector> Neg for $mat<C> {
            type Output = Self;

            fn neg(self) -> Self {
                self.map(|column| -column)
            }
        }

        matrix!(@scalar $mat, f32);
        matrix!(@scalar $mat, f64);
    };

    (@scalar $mat:ident, $scalar:ty) => {
        impl<C: FloatVector<Component = $scalar>> Mul<$scalar> for $mat<C> {
            type Output = Self;

            fn mul(self, rhs: $scalar) -> Self {
                self.map(|column| column * rhs)
            }
        }

        impl<C: FloatVector<Component = $scalar>> Mul<$mat<C>> for $scalar {
            type Output = $mat<C>;

            fn mul(self, rhs: $mat<C>) -> $mat<C> {
                rhs * self
            }
        }

        impl<C: FloatVector<Component = $scalar>> Div<$scalar> for $mat<C> {
            type Output = Self;

            fn div(self, rhs: $scalar) -> Self {
                self.map(|column| column / rhs)
            }
        }

        impl<C: FloatVector<Component = $scalar>> MulAssign<$scalar> for $mat<C> {
            fn mul_assign(&mut self, rhs: $scalar) {
                *self = *self * rhs;
            }
        }

        impl<C: FloatVector<Component = $scalar>> DivAssign<$scalar> for $mat<C> {
            fn div_assign(&mut self, rhs: $scalar) {
                *self = *self / rhs;
            }
        }
    };
}

matrix!(Mat2, 2, [x_axis, y_axis]);
matrix!(Mat3, 3, [x_axis, y_axis, z_axis]);
matrix!(Mat4, 4, [x_axis, y_axis, z_axis, w_axis]);

/// Implements [`Matrix`] for one shape: `$mat` columns of `$col`, whose rows
/// are `$row`s.
macro_rules! impl_matrix {
    // Example: impl_matrix!(Mat2<Vec3>, Vec2, Mat3);
    ($mat:ident<$col:ident>, $row:ident, $transpose:ident) => {
        impl<T: BaseFloat> Matrix for $mat<$col<T>>
        where
            $col<T>: FloatVector<Component = T>,
            $row<T>: FloatVector<Component = T>,
        {
            type Row = $row<T>;
            type Transpose = $transpose<$row<T>>;
        }
    };
}

impl_matrix!(Mat2<Vec2>, Vec2, Mat2);
impl_matrix!(Mat2<Vec3>, Vec2, Mat3);
impl_matrix!(Mat2<Vec4>, Vec2, Mat4);
impl_matrix!(Mat3<Vec2>, Vec3, Mat2);
impl_matrix!(Mat3<Vec3>, Vec3, Mat3);
impl_matrix!(Mat3<Vec4>, Vec3, Mat4);
impl_matrix!(Mat4<Vec2>, Vec4, Mat2);
impl_matrix!(Mat4<Vec3>, Vec4, Mat3);
impl_matrix!(Mat4<Vec4>, Vec4, Mat4);

/// Implements the matrix products of one left hand side shape.
macro_rules! impl_matrix_mul {
    // Example: impl_matrix_mul!(Mat2<Vec3>, Vec2, [Mat2, Mat3, Mat4]);
    ($lhs:ident<$col:ident>, $row:ident, [$($rhs:ident),*]) => {
        impl_matrix_mul!(@column $lhs<$col>, $row);
        impl_matrix_mul!(@matrices $lhs<$col>, $row, [$($rhs),*]);
    };

    // Only the row vector product, for shapes with specialized kernels.
    (@row $lhs:ident<$col:ident>, $row:ident, [$($rhs:ident),*]) => {
        impl<T: BaseFloat> Mul<$lhs<$col<T>>> for $col<T>
        where
            $lhs<$col<T>>: Matrix<Component = $col<T>, Row = $row<T>>,
        {
            type Output = $row<T>;

            fn mul(self, rhs: $lhs<$col<T>>) -> $row<T> {
                mul_row_vector(self, rhs)
            }
        }

        impl_matrix_mul!(@matrices $lhs<$col>, $row, [$($rhs),*]);
    };

    (@column $lhs:ident<$col:ident>, $row:ident) => {
        impl<T: BaseFloat> Mul<$row<T>> for $lhs<$col<T>>
        where
            $lhs<$col<T>>: Matrix<Component = $col<T>, Row = $row<T>>,
        {
            type Output = $col<T>;

            fn mul(self, rhs: $row<T>) -> $col<T> {
                mul_vector(self, rhs)
            }
        }

        impl<T: BaseFloat> Mul<$lhs<$col<T>>> for $col<T>
        where
            $lhs<$col<T>>: Matrix<Component = $col<T>, Row = $row<T>>,
        {
            type Output = $row<T>;

            fn mul(self, rhs: $lhs<$col<T>>) -> $row<T> {
                mul_row_vector(self, rhs)
            }
        }
    };

    (@matrices $lhs:ident<$col:ident>, $row:ident, [$($rhs:ident),*]) => {
        $(
            impl<T: BaseFloat> Mul<$rhs<$row<T>>> for $lhs<$col<T>>
            where
                $lhs<$col<T>>: Matrix<Component = $col<T>, Row = $row<T>>,
                $rhs<$row<T>>: Matrix<Component = $row<T>>,
            {
                type Output = $rhs<$col<T>>;

                fn mul(self, rhs: $rhs<$row<T>>) -> $rhs<$col<T>> {
                    <$rhs<$col<T>>>::from_fn(|column| mul_vector(self, rhs[column]))
                }
            }
        )*
    };
}

impl_matrix_mul!(Mat2<Vec2>, Vec2, [Mat2, Mat3, Mat4]);
impl_matrix_mul!(Mat2<Vec3>, Vec2, [Mat2, Mat3, Mat4]);
impl_matrix_mul!(Mat2<Vec4>, Vec2, [Mat2, Mat3, Mat4]);
impl_matrix_mul!(Mat3<Vec2>, Vec3, [Mat2, Mat3, Mat4]);
impl_matrix_mul!(Mat3<Vec3>, Vec3, [Mat2, Mat3, Mat4]);
impl_matrix_mul!(Mat3<Vec4>, Vec3, [Mat2, Mat3, Mat4]);
impl_matrix_mul!(Mat4<Vec2>, Vec4, [Mat2, Mat3, Mat4]);
impl_matrix_mul!(Mat4<Vec3>, Vec4, [Mat2, Mat3, Mat4]);
impl_matrix_mul!(@row Mat4<Vec4>, Vec4, [Mat2, Mat3]);

impl Mul for Mat4<Vec4<f32>> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        ActiveBackend::mul_mat4(self, rhs)
    }
}

impl Mul<Vec4<f32>> for Mat4<Vec4<f32>> {
    type Output = Vec4<f32>;

    fn mul(self, rhs: Vec4<f32>) -> Vec4<f32> {
        ActiveBackend::mul_mat4_vec4(self, rhs)
    }
}

impl Mul for Mat4<Vec4<f64>> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        mul_matrix(self, rhs)
    }
}

impl Mul<Vec4<f64>> for Mat4<Vec4<f64>> {
    type Output = Vec4<f64>;

    fn mul(self, rhs: Vec4<f64>) -> Vec4<f64> {
        mul_vector(self, rhs)
    }
}

/// Generates the aliases and constructors of one matrix shape.
macro_rules! aliases {
    // Example: aliases!(Mat2, 2, Vec3, 3, [x_axis, y_axis]);
    ($mat:ident, $columns:literal, $col:ident, $rows:literal, [$($axis:ident),+]) => {
        paste::paste! {
            #[doc = concat!("A matrix of `f32` with ", $columns, " columns and ", $rows, " rows.")]
            pub type [<Mat $columns x $rows f>] = $mat<$col<f32>>;

            #[doc = concat!("A matrix of `f64` with ", $columns, " columns and ", $rows, " rows.")]
            pub type [<Mat $columns x $rows d>] = $mat<$col<f64>>;

            #[doc = concat!("Constructor for a `f32` matrix from its ", $columns, " columns.")]
            pub const fn [<mat $columns x $rows f>]($($axis: $col<f32>),+) -> $mat<$col<f32>> {
                $mat::new($($axis),+)
            }

            #[doc = concat!("Constructor for a `f64` matrix from its ", $columns, " columns.")]
            pub const fn [<mat $columns x $rows d>]($($axis: $col<f64>),+) -> $mat<$col<f64>> {
                $mat::new($($axis),+)
            }
        }
    };

    // Example: aliases!(Mat2, 2, Vec2, [x_axis, y_axis]);
    ($mat:ident, $n:literal, $col:ident, [$($axis:ident),+]) => {
        aliases!($mat, $n, $col, $n, [$($axis),+]);

        paste::paste! {
            #[doc = concat!("A square `f32` matrix with ", $n, " columns.")]
            pub type [<Mat $n f>] = $mat<$col<f32>>;

            #[doc = concat!("A square `f64` matrix with ", $n, " columns.")]
            pub type [<Mat $n d>] = $mat<$col<f64>>;

            pub const fn [<mat $n f>]($($axis: $col<f32>),+) -> $mat<$col<f32>> {
                $mat::new($($axis),+)
            }

            pub const fn [<mat $n d>]($($axis: $col<f64>),+) -> $mat<$col<f64>> {
                $mat::new($($axis),+)
            }
        }
    };
}

aliases!(Mat2, 2, Vec2, [x_axis, y_axis]);
aliases!(Mat2, 2, Vec3, 3, [x_axis, y_axis]);
aliases!(Mat2, 2, Vec4, 4, [x_axis, y_axis]);
aliases!(Mat3, 3, Vec2, 2, [x_axis, y_axis, z_axis]);
aliases!(Mat3, 3, Vec3, [x_axis, y_axis, z_axis]);
aliases!(Mat3, 3, Vec4, 4, [x_axis, y_axis, z_axis]);
aliases!(Mat4, 4, Vec2, 2, [x_axis, y_axis, z_axis, w_axis]);
aliases!(Mat4, 4, Vec3, 3, [x_axis, y_axis, z_axis, w_axis]);
aliases!(Mat4, 4, Vec4, [x_axis, y_axis, z_axis, w_axis]);

#[cfg(test)]
mod test {
    use crate::{matrix::SquareMatrix, vectors::*};

    use super::*;

    #[test]
    fn sanity_matrix_vector_product() {
        // Rows (1 2) (3 4) (5 6).
        let m = mat2x3f(vec3f(1.0, 3.0, 5.0), vec3f(2.0, 4.0, 6.0));
        assert_eq!(vec3f(5.0, 11.0, 17.0), m * vec2f(1.0, 2.0));
        assert_eq!(vec2f(22.0, 28.0), vec3f(1.0, 2.0, 3.0) * m);
    }

    #[test]
    fn sanity_matrix_product_shapes() {
        let a = mat2x3f(vec3f(1.0, 3.0, 5.0), vec3f(2.0, 4.0, 6.0));
        let b = mat3x2f(vec2f(1.0, 0.0), vec2f(0.0, 1.0), vec2f(1.0, 1.0));
        let ab: Mat3f = a * b;
        assert_eq!(
            mat3f(vec3f(1.0, 3.0, 5.0), vec3f(2.0, 4.0, 6.0), vec3f(3.0, 7.0, 11.0)),
            ab
        );
        let ba: Mat2f = b * a;
        assert_eq!(mat2f(vec2f(6.0, 8.0), vec2f(8.0, 10.0)), ba);
    }

    #[test]
    fn sanity_identity_is_neutral() {
        let m = mat4f(
            vec4f(1.0, 2.0, 3.0, 4.0),
            vec4f(5.0, 6.0, 7.0, 8.0),
            vec4f(9.0, 10.0, 11.0, 12.0),
            vec4f(13.0, 14.0, 15.0, 16.0),
        );
        assert_eq!(m, m * Mat4f::identity());
        assert_eq!(m, Mat4f::identity() * m);
        let v = vec4f(1.0, -1.0, 2.0, 0.5);
        assert_eq!(v, Mat4f::identity() * v);
        assert_eq!(v, v * Mat4f::identity());

        let d = mat3d(
            vec3d(1.0, 2.0, 3.0),
            vec3d(4.0, 5.0, 6.0),
            vec3d(7.0, 8.0, 9.0),
        );
        assert_eq!(d, d * Mat3d::identity());
    }

    #[test]
    fn sanity_product_is_associative() {
        let a = mat4d(
            vec4d(1.0, 2.0, 0.0, 1.0),
            vec4d(0.0, 1.0, 3.0, 0.0),
            vec4d(2.0, 0.0, 1.0, 4.0),
            vec4d(1.0, 1.0, 1.0, 1.0),
        );
        let b = a.transpose();
        let v = vec4d(1.0, 2.0, 3.0, 4.0);
        assert_eq!((a * b) * v, a * (b * v));
    }

    #[test]
    fn sanity_arithmetic() {
        let a = mat2f(vec2f(1.0, 2.0), vec2f(3.0, 4.0));
        assert_eq!(mat2f(vec2f(2.0, 4.0), vec2f(6.0, 8.0)), a + a);
        assert_eq!(Mat2::default(), a - a);
        assert_eq!(a + a, a * 2.0f32);
        assert_eq!(a + a, 2.0f32 * a);
        assert_eq!(a, (a * 2.0f32) / 2.0f32);
        assert_eq!(mat2f(vec2f(-1.0, -2.0), vec2f(-3.0, -4.0)), -a);
        let mut b = a;
        b += a;
        b *= 0.5f32;
        assert_eq!(a, b);
    }

    #[test]
    fn sanity_columns() {
        let mut m = Mat3f::identity();
        m[2] = vec3f(1.0, 2.0, 3.0);
        assert_eq!(vec3f(1.0, 2.0, 3.0), m.z_axis);
        assert_eq!([Vec3::X, Vec3::Y, vec3f(1.0, 2.0, 3.0)], m.to_cols_array());
        assert_eq!(mat2f(vec2f(1.0, 0.0), vec2f(0.0, 1.0)), m.truncate().map_to(|c| c.truncate()));
    }
}
