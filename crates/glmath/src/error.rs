//! Errors returned by the checked parts of the API.
//!
//! Operator indexing (`v[i]`, `m[j]`) panics on an out of range index the way
//! slices do. Everything that takes a runtime index or a runtime length and is
//! not an operator returns [`Result`] instead.
use snafu::Snafu;

#[derive(Debug, Snafu, Clone, PartialEq)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Index {index} is out of range for {dimension} components"))]
    IndexOutOfRange { index: usize, dimension: usize },

    #[snafu(display("Expected {expected} components but got {actual}"))]
    ComponentCount { expected: usize, actual: usize },

    #[snafu(display("Matrix is singular (determinant {determinant}) and has no inverse"))]
    SingularMatrix { determinant: f64 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
