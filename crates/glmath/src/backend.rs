//! Kernels for the hottest matrix products.
//!
//! The `f32` 4x4 matrix-matrix and matrix-vector products dispatch through
//! [`ActiveBackend`]. With the `glam` feature (the default) that is [`Glam`],
//! which uses glam's SIMD implementations. Without it, [`Portable`] runs the
//! generic algebra every other shape uses. Both give the same results up to
//! rounding.
use crate::{
    matrices::Mat4f,
    matrix::{mul_matrix, mul_vector},
    vectors::Vec4f,
};

/// A provider of `f32` 4x4 matrix products.
pub trait MatrixBackend {
    fn mul_mat4(lhs: Mat4f, rhs: Mat4f) -> Mat4f;

    fn mul_mat4_vec4(lhs: Mat4f, rhs: Vec4f) -> Vec4f;
}

/// The generic, dependency free implementation.
pub struct Portable;

impl MatrixBackend for Portable {
    fn mul_mat4(lhs: Mat4f, rhs: Mat4f) -> Mat4f {
        mul_matrix(lhs, rhs)
    }

    fn mul_mat4_vec4(lhs: Mat4f, rhs: Vec4f) -> Vec4f {
        mul_vector(lhs, rhs)
    }
}

/// Products computed by glam.
#[cfg(feature = "glam")]
pub struct Glam;

#[cfg(feature = "glam")]
impl MatrixBackend for Glam {
    fn mul_mat4(lhs: Mat4f, rhs: Mat4f) -> Mat4f {
        (glam::Mat4::from(lhs) * glam::Mat4::from(rhs)).into()
    }

    fn mul_mat4_vec4(lhs: Mat4f, rhs: Vec4f) -> Vec4f {
        (glam::Mat4::from(lhs) * glam::Vec4::from(rhs)).into()
    }
}

#[cfg(feature = "glam")]
pub type ActiveBackend = Glam;

#[cfg(not(feature = "glam"))]
pub type ActiveBackend = Portable;
