//! Matrix functions.
use crate::{
    error::Result,
    matrix::{Matrix, OuterProduct, ScalarOf, SquareMatrix},
    numeric::FloatVector,
};

/// The componentwise product of two matrices.
pub fn matrix_comp_mult<M: Matrix>(x: M, y: M) -> M {
    x.matrix_comp_mult(y)
}

/// The product of column vector `c` and row vector `r`.
pub fn outer_product<C, R>(c: C, r: R) -> <C as OuterProduct<R>>::Output
where
    C: OuterProduct<R>,
    R: FloatVector,
{
    c.outer_product(r)
}

pub fn transpose<M: Matrix>(m: M) -> M::Transpose {
    m.transpose()
}

pub fn determinant<M: SquareMatrix>(m: M) -> ScalarOf<M> {
    m.determinant()
}

/// The inverse of `m`, or [`Error::SingularMatrix`](crate::Error::SingularMatrix).
pub fn inverse<M: SquareMatrix>(m: M) -> Result<M> {
    m.inverse()
}

#[cfg(test)]
mod test {
    use crate::{matrices::*, vectors::*};

    use super::*;

    #[test]
    fn sanity_matrix_functions() {
        let m = mat2f(vec2f(1.0, 3.0), vec2f(2.0, 4.0));
        assert_eq!(-2.0, determinant(m));
        assert_eq!(mat2f(vec2f(1.0, 2.0), vec2f(3.0, 4.0)), transpose(m));
        assert!((m * inverse(m).unwrap()).is_close(Mat2::identity(), 1e-6));
        assert_eq!(
            mat2f(vec2f(1.0, 9.0), vec2f(4.0, 16.0)),
            matrix_comp_mult(m, m)
        );
        assert_eq!(
            mat3x2d(vec2d(3.0, 6.0), vec2d(4.0, 8.0), vec2d(5.0, 10.0)),
            outer_product(vec2d(1.0, 2.0), vec3d(3.0, 4.0, 5.0))
        );
        assert!(inverse(Mat3f::default()).is_err());
    }
}
