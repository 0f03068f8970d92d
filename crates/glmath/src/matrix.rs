//! The matrix abstraction and its algebra.
//!
//! Matrices are column major vectors of column vectors: `Mat2<Vec3<f32>>`
//! has two columns and three rows. [`Matrix`] adds rows and transposition to
//! [`Vector`], [`SquareMatrix`] adds the identity, determinant and inverse.
use crate::{
    error::{ComponentCountSnafu, Result, SingularMatrixSnafu},
    matrices::{Mat2, Mat3, Mat4},
    numeric::{Cross, FloatVector},
    scalar::{BaseFloat, One, Zero},
    vector::{LowerDimension, Vector},
    vectors::{Vec2, Vec3, Vec4},
};

/// The scalar type of matrix `M`.
pub type ScalarOf<M> = <<M as Vector>::Component as Vector>::Component;

/// A matrix: a vector of float column vectors.
///
/// `m[j]` is column `j` and `m[j][i]` the element in row `i` of that column.
pub trait Matrix: Vector<Component: FloatVector> {
    /// A row of this matrix, with one component per column.
    type Row: FloatVector<Component = ScalarOf<Self>>;
    /// The matrix with rows and columns swapped.
    type Transpose: Matrix<Component = Self::Row, Row = Self::Component>;

    const COLUMNS: usize = Self::DIMENSION;
    const ROWS: usize = <Self::Component as Vector>::DIMENSION;

    /// Row `index`.
    ///
    /// # Panics
    /// Panics if `index` is not below [`Matrix::ROWS`].
    fn row(&self, index: usize) -> Self::Row {
        <Self::Row>::from_fn(|column| self[column][index])
    }

    fn transpose(self) -> Self::Transpose {
        <Self::Transpose>::from_fn(|index| self.row(index))
    }

    /// Builds a matrix from scalars in column major order.
    fn from_scalars(scalars: &[ScalarOf<Self>]) -> Result<Self> {
        let rows = Self::ROWS;
        snafu::ensure!(
            scalars.len() == rows * Self::COLUMNS,
            ComponentCountSnafu {
                expected: rows * Self::COLUMNS,
                actual: scalars.len(),
            }
        );
        Ok(Self::from_fn(|column| {
            <Self::Component>::from_fn(|row| scalars[column * rows + row])
        }))
    }

    /// The element at `column` and `row`, checked.
    fn element(&self, column: usize, row: usize) -> Result<ScalarOf<Self>> {
        self.get(column)?.get(row)
    }

    /// Componentwise product, as opposed to the matrix product `*`.
    fn matrix_comp_mult(self, other: Self) -> Self {
        self.zip(other, |a, b| a * b)
    }

    /// Whether every column is close to `other`'s, see
    /// [`FloatVector::is_close`].
    fn is_close(self, other: Self, tolerance: ScalarOf<Self>) -> bool {
        (0..Self::COLUMNS).all(|column| self[column].is_close(other[column], tolerance))
    }
}

/// `lhs * rhs` for a column vector `rhs`.
pub(crate) fn mul_vector<M: Matrix>(lhs: M, rhs: M::Row) -> M::Component {
    let rows = lhs.transpose();
    <M::Component>::from_fn(|index| rows[index].dot(rhs))
}

/// `lhs * rhs` for a row vector `lhs`.
pub(crate) fn mul_row_vector<M: Matrix>(lhs: M::Component, rhs: M) -> M::Row {
    <M::Row>::from_fn(|column| lhs.dot(rhs[column]))
}

/// The matrix product. Element `[j][i]` is the dot product of row `i` of
/// `lhs` with column `j` of `rhs`.
pub(crate) fn mul_matrix<L, R>(lhs: L, rhs: R) -> R::Cast<L::Component>
where
    L: Matrix,
    R: Matrix<Component = L::Row>,
{
    let rows = lhs.transpose();
    rhs.map_to(|column| <L::Component>::from_fn(|index| rows[index].dot(column)))
}

/// A matrix with as many rows as columns.
pub trait SquareMatrix: Matrix<Transpose = Self> {
    /// The matrix with `diagonal` on its diagonal and zeros elsewhere.
    fn from_diagonal(diagonal: Self::Component) -> Self {
        Self::from_fn(|column| {
            <Self::Component>::from_fn(|row| {
                if row == column {
                    diagonal[row]
                } else {
                    <ScalarOf<Self> as Zero>::ZERO
                }
            })
        })
    }

    fn identity() -> Self {
        Self::from_diagonal(<Self::Component>::splat(<ScalarOf<Self> as One>::ONE))
    }

    fn determinant(&self) -> ScalarOf<Self>;

    /// The adjugate divided by the determinant.
    ///
    /// Errors with [`Error::SingularMatrix`](crate::Error::SingularMatrix)
    /// when the determinant is exactly zero. Nearly singular matrices invert
    /// to very large elements instead.
    fn inverse(&self) -> Result<Self>;
}

fn ensure_invertible<T: BaseFloat>(determinant: T) -> Result<()> {
    if determinant.is_zero() {
        log::debug!("matrix has determinant {determinant:?} and no inverse");
        return SingularMatrixSnafu {
            determinant: determinant.to_f64(),
        }
        .fail();
    }
    Ok(())
}

impl<T: BaseFloat> SquareMatrix for Mat2<Vec2<T>>
where
    Vec2<T>: FloatVector<Component = T>,
{
    fn determinant(&self) -> T {
        let Mat2 {
            x_axis: a,
            y_axis: b,
        } = *self;
        a.x * b.y - b.x * a.y
    }

    fn inverse(&self) -> Result<Self> {
        let determinant = self.determinant();
        ensure_invertible(determinant)?;
        let Mat2 {
            x_axis: a,
            y_axis: b,
        } = *self;
        let adjugate = Mat2::new(Vec2::new(b.y, -a.y), Vec2::new(-b.x, a.x));
        Ok(adjugate.map(|column| column / determinant))
    }
}

impl<T: BaseFloat> SquareMatrix for Mat3<Vec3<T>>
where
    Vec3<T>: FloatVector<Component = T> + Cross,
{
    fn determinant(&self) -> T {
        self.x_axis.dot(self.y_axis.cross(self.z_axis))
    }

    fn inverse(&self) -> Result<Self> {
        let determinant = self.determinant();
        ensure_invertible(determinant)?;
        let Mat3 {
            x_axis: x,
            y_axis: y,
            z_axis: z,
        } = *self;
        // The rows of the adjugate are the cross products of column pairs.
        let adjugate = Mat3::new(y.cross(z), z.cross(x), x.cross(y)).transpose();
        Ok(adjugate.map(|column| column / determinant))
    }
}

/// The signed determinant of `matrix` without `column` and `row`.
fn cofactor<T: BaseFloat>(matrix: &Mat4<Vec4<T>>, column: usize, row: usize) -> T
where
    Vec4<T>: FloatVector<Component = T>,
    Vec3<T>: FloatVector<Component = T> + Cross,
{
    let minor: Mat3<Vec3<T>> = Mat3::from_fn(|index| {
        let source = if index < column { index } else { index + 1 };
        matrix[source].remove(row)
    });
    let minor = minor.determinant();
    if (column + row) % 2 == 0 { minor } else { -minor }
}

impl<T: BaseFloat> SquareMatrix for Mat4<Vec4<T>>
where
    Vec4<T>: FloatVector<Component = T>,
    Vec3<T>: FloatVector<Component = T> + Cross,
{
    /// Cofactor expansion along the first column.
    fn determinant(&self) -> T {
        (0..4).fold(T::ZERO, |determinant, row| {
            determinant + self.x_axis[row] * cofactor(self, 0, row)
        })
    }

    fn inverse(&self) -> Result<Self> {
        let determinant = self.determinant();
        ensure_invertible(determinant)?;
        // The adjugate is the transposed cofactor matrix.
        Ok(Mat4::from_fn(|column| {
            Vec4::from_fn(|row| cofactor(self, row, column) / determinant)
        }))
    }
}

/// The outer product `self * row^T` of a column vector and a row vector.
pub trait OuterProduct<R: FloatVector>: FloatVector {
    type Output: Matrix<Component = Self, Row = R>;

    fn outer_product(self, row: R) -> <Self as OuterProduct<R>>::Output;
}

macro_rules! impl_outer_product {
    ($row:ident, $mat:ident) => {
        impl<C, T> OuterProduct<$row<T>> for C
        where
            T: BaseFloat,
            C: FloatVector<Component = T>,
            $row<T>: FloatVector<Component = T>,
            $mat<C>: Matrix<Component = C, Row = $row<T>>,
        {
            type Output = $mat<C>;

            fn outer_product(self, row: $row<T>) -> $mat<C> {
                $mat::from_fn(|column| self * row[column])
            }
        }
    };
}

impl_outer_product!(Vec2, Mat2);
impl_outer_product!(Vec3, Mat3);
impl_outer_product!(Vec4, Mat4);

#[cfg(test)]
mod test {
    use crate::{error::Error, matrices::*, vectors::*};

    use super::*;

    fn rotation(radians: f64) -> Mat3d {
        let (sin, cos) = radians.sin_cos();
        mat3d(
            vec3d(cos, sin, 0.0),
            vec3d(-sin, cos, 0.0),
            vec3d(0.0, 0.0, 1.0),
        )
    }

    #[test]
    fn sanity_rows_and_transpose() {
        let m = mat2x3f(vec3f(1.0, 2.0, 3.0), vec3f(4.0, 5.0, 6.0));
        assert_eq!(2, Mat2x3f::COLUMNS);
        assert_eq!(3, Mat2x3f::ROWS);
        assert_eq!(vec2f(2.0, 5.0), m.row(1));
        let t = m.transpose();
        assert_eq!(
            mat3x2f(vec2f(1.0, 4.0), vec2f(2.0, 5.0), vec2f(3.0, 6.0)),
            t
        );
        assert_eq!(m, t.transpose());
        assert_eq!(Ok(6.0), m.element(1, 2));
        assert!(m.element(2, 0).is_err());
        assert!(m.element(0, 3).is_err());
    }

    #[test]
    fn sanity_from_scalars() {
        let m = Mat2x3f::from_scalars(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(mat2x3f(vec3f(1.0, 2.0, 3.0), vec3f(4.0, 5.0, 6.0)), m);
        assert_eq!(
            Err(Error::ComponentCount {
                expected: 6,
                actual: 4
            }),
            Mat2x3f::from_scalars(&[1.0, 2.0, 3.0, 4.0])
        );
    }

    #[test]
    fn sanity_identity_and_diagonal() {
        assert_eq!(
            mat3f(vec3f(1.0, 0.0, 0.0), vec3f(0.0, 1.0, 0.0), vec3f(0.0, 0.0, 1.0)),
            Mat3f::identity()
        );
        assert_eq!(
            mat2f(vec2f(2.0, 0.0), vec2f(0.0, 3.0)),
            Mat2f::from_diagonal(vec2f(2.0, 3.0))
        );
        assert_eq!(1.0, Mat4d::identity().determinant());
    }

    #[test]
    fn sanity_determinant() {
        assert_eq!(-2.0, mat2f(vec2f(1.0, 3.0), vec2f(2.0, 4.0)).determinant());
        let m = mat3f(
            vec3f(2.0, 0.0, 1.0),
            vec3f(1.0, 3.0, 2.0),
            vec3f(1.0, 1.0, 0.0),
        );
        assert_eq!(-6.0, m.determinant());
        assert_eq!(24.0, Mat4f::from_diagonal(vec4f(1.0, 2.0, 3.0, 4.0)).determinant());
        let shear = mat4d(
            vec4d(1.0, 0.0, 0.0, 0.0),
            vec4d(5.0, 1.0, 0.0, 0.0),
            vec4d(0.0, 0.0, 2.0, 0.0),
            vec4d(0.0, 7.0, 0.0, 1.0),
        );
        assert_eq!(2.0, shear.determinant());
    }

    #[test]
    fn sanity_inverse() {
        let m = mat2f(vec2f(1.0, 3.0), vec2f(2.0, 4.0));
        let inverse = m.inverse().unwrap();
        assert!((m * inverse).is_close(Mat2::identity(), 1e-6));

        let r = rotation(0.3);
        let inverse = r.inverse().unwrap();
        assert!(inverse.is_close(r.transpose(), 1e-12));

        let m = mat4d(
            vec4d(2.0, 0.0, 0.0, 1.0),
            vec4d(0.0, 1.0, 3.0, 0.0),
            vec4d(1.0, 0.0, 1.0, 0.0),
            vec4d(0.0, 2.0, 0.0, 1.0),
        );
        let inverse = m.inverse().unwrap();
        assert!((m * inverse).is_close(Mat4::identity(), 1e-12));
        assert!((inverse * m).is_close(Mat4::identity(), 1e-12));
    }

    #[test]
    fn inverse_of_column_major_2x2() {
        let m = Mat2f::from_scalars(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(mat2f(vec2f(1.0, 2.0), vec2f(3.0, 4.0)), m);
        assert_eq!(-2.0, m.determinant());
        let inverse = m.inverse().unwrap();
        assert!(inverse.is_close(mat2f(vec2f(-2.0, 1.0), vec2f(1.5, -0.5)), 1e-6));
        assert!((m * inverse).is_close(Mat2f::identity(), 1e-6));
        assert!((inverse * m).is_close(Mat2f::identity(), 1e-6));
    }

    #[test]
    fn singular_matrices_have_no_inverse() {
        let m = mat2f(vec2f(1.0, 2.0), vec2f(2.0, 4.0));
        assert_eq!(
            Err(Error::SingularMatrix { determinant: 0.0 }),
            m.inverse()
        );
        assert!(Mat3d::from_diagonal(vec3d(1.0, 0.0, 1.0)).inverse().is_err());
        assert!(Mat4f::from_diagonal(Vec4::ZERO).inverse().is_err());
    }

    #[test]
    fn sanity_outer_product() {
        let m = vec3f(1.0, 2.0, 3.0).outer_product(vec2f(4.0, 5.0));
        assert_eq!(
            mat2x3f(vec3f(4.0, 8.0, 12.0), vec3f(5.0, 10.0, 15.0)),
            m
        );
    }

    #[test]
    fn sanity_comp_mult() {
        let a = mat2f(vec2f(1.0, 2.0), vec2f(3.0, 4.0));
        assert_eq!(
            mat2f(vec2f(1.0, 4.0), vec2f(9.0, 16.0)),
            a.matrix_comp_mult(a)
        );
    }
}

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use crate::{matrices::*, vector::Vector, vectors::*};

    use super::*;

    fn any_mat2d() -> impl Strategy<Value = Mat2d> {
        prop::array::uniform4(-10.0f64..10.0).prop_map(|scalars| {
            Mat2d::from_fn(|column| Vec2d::from_fn(|row| scalars[column * 2 + row]))
        })
    }

    fn any_mat3d() -> impl Strategy<Value = Mat3d> {
        prop::array::uniform9(-10.0f64..10.0).prop_map(|scalars| {
            Mat3d::from_fn(|column| Vec3d::from_fn(|row| scalars[column * 3 + row]))
        })
    }

    fn any_mat4d() -> impl Strategy<Value = Mat4d> {
        prop::array::uniform16(-10.0f64..10.0).prop_map(|scalars| {
            Mat4d::from_fn(|column| Vec4d::from_fn(|row| scalars[column * 4 + row]))
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn inverse_of_2x2_undoes_the_product(m in any_mat2d()) {
            prop_assume!(m.determinant().abs() > 1e-2);
            let inverse = m.inverse().unwrap();
            prop_assert!((m * inverse).is_close(Mat2d::identity(), 1e-6));
            prop_assert!((inverse * m).is_close(Mat2d::identity(), 1e-6));
        }

        #[test]
        fn inverse_of_3x3_undoes_the_product(m in any_mat3d()) {
            prop_assume!(m.determinant().abs() > 1e-2);
            let inverse = m.inverse().unwrap();
            prop_assert!((m * inverse).is_close(Mat3d::identity(), 1e-6));
            prop_assert!((inverse * m).is_close(Mat3d::identity(), 1e-6));
        }

        #[test]
        fn inverse_of_4x4_undoes_the_product(m in any_mat4d()) {
            prop_assume!(m.determinant().abs() > 1e-2);
            let inverse = m.inverse().unwrap();
            prop_assert!((m * inverse).is_close(Mat4d::identity(), 1e-6));
        }

        #[test]
        fn transpose_swaps_rows_and_columns(m in any_mat3d()) {
            let t = m.transpose();
            for column in 0..3 {
                prop_assert_eq!(m.row(column), t[column]);
            }
        }
    }
}
