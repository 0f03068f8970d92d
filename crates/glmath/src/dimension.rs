//! Compile time vector arity.
use std::fmt::Debug;

/// Marker for the number of components of a vector, or columns of a matrix.
pub trait Dimension: Copy + Debug + Default + 'static {
    const VALUE: usize;
}

/// Two components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dim2;

/// Three components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dim3;

/// Four components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dim4;

impl Dimension for Dim2 {
    const VALUE: usize = 2;
}

impl Dimension for Dim3 {
    const VALUE: usize = 3;
}

impl Dimension for Dim4 {
    const VALUE: usize = 4;
}
