//! GLSL math in Rust.
//!
//! Vectors and matrices of two to four dimensions over `f32`, `f64`, `i32`,
//! `u32` and `bool`, with the operators and builtin functions of the GLSL
//! specification. A glob import brings the GLSL names into scope:
//!
//! ```rust
//! use glmath::*;
//!
//! let color = vec4f(1.0, 2.0, 3.0, 4.0);
//! assert_eq!(vec2f(4.0, 1.0), color.wx());
//! assert_eq!(10.0, color.sum());
//! assert_eq!(
//!     vec4f(0.0, 0.5, 1.0, 1.0),
//!     clamp(color * 0.5 - 0.5, 0.0f32, 1.0f32)
//! );
//!
//! let m = mat2f(vec2f(1.0, 3.0), vec2f(2.0, 4.0));
//! let inv = inverse(m)?;
//! assert!((m * inv).is_close(Mat2f::identity(), 1e-6));
//! assert!(inverse(Mat2f::default()).is_err());
//! # Ok::<(), glmath::Error>(())
//! ```
//!
//! Vector types are generic over their component, matrices over their
//! column vector, so `Mat3x2<f64>` is spelled `Mat3<Vec2<f64>>` (or
//! [`Mat3x2d`]). Functions are generic over [`GenType`], which scalars and
//! vectors both implement.
mod approx_eq;
pub mod backend;
mod bits;
pub mod dimension;
pub mod error;
pub mod functions;
pub mod gen_type;
#[cfg(feature = "glam")]
mod interop;
pub mod matrices;
pub mod matrix;
pub mod numeric;
pub mod packing;
pub mod scalar;
pub mod vector;
pub mod vectors;

pub use dimension::*;
pub use error::Error;
pub use functions::*;
pub use gen_type::*;
pub use matrices::*;
pub use matrix::*;
pub use numeric::*;
pub use packing::*;
pub use scalar::*;
pub use vector::*;
pub use vectors::*;
