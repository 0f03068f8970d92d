//! The vector abstraction.
//!
//! [`Vector`] is the contract shared by every fixed size container in the
//! crate: [`Vec2`](crate::Vec2), [`Vec3`](crate::Vec3) and
//! [`Vec4`](crate::Vec4) over any component type, and the matrix types, which
//! are vectors of column vectors. Algorithms written against it work for all
//! dimensions and component types, and all of it resolves at compile time.
use std::{
    fmt::Debug,
    ops::{Index, IndexMut},
};

use crate::{
    dimension::Dimension,
    error::{ComponentCountSnafu, IndexOutOfRangeSnafu, Result},
};

/// Anything that can be stored as a vector component.
pub trait Element: Copy + Debug + PartialEq + 'static {}

impl<T: Copy + Debug + PartialEq + 'static> Element for T {}

/// A fixed size, ordered collection of components.
///
/// Indexing with `v[i]` panics when `i` is out of range, like a slice does.
/// [`Vector::get`] and [`Vector::set`] are the checked equivalents.
pub trait Vector: Element
where
    Self: Index<usize, Output = <Self as Vector>::Component> + IndexMut<usize>,
{
    type Dim: Dimension;
    type Component: Element;
    /// The vector of the same dimension holding `D` components.
    ///
    /// `Cast<bool>` is the result type of componentwise comparisons.
    type Cast<D: Element>: Vector<Dim = Self::Dim, Component = D>;

    const DIMENSION: usize = <Self::Dim as Dimension>::VALUE;

    /// Broadcasts one component to every slot.
    fn splat(component: Self::Component) -> Self;

    /// Builds a vector from its component indices, in index order.
    fn from_fn(f: impl FnMut(usize) -> Self::Component) -> Self;

    fn map(self, f: impl FnMut(Self::Component) -> Self::Component) -> Self;

    fn zip(
        self,
        other: Self,
        f: impl FnMut(Self::Component, Self::Component) -> Self::Component,
    ) -> Self;

    /// Left fold in index order.
    fn fold<A>(self, init: A, f: impl FnMut(A, Self::Component) -> A) -> A;

    /// Maps every component to a pair and unzips the pairs into two vectors.
    fn split(
        self,
        f: impl FnMut(Self::Component) -> (Self::Component, Self::Component),
    ) -> (Self, Self);

    /// Fold seeded with the first component.
    fn reduce(self, mut f: impl FnMut(Self::Component, Self::Component) -> Self::Component) -> Self::Component {
        let mut accumulator = self[0];
        for index in 1..Self::DIMENSION {
            accumulator = f(accumulator, self[index]);
        }
        accumulator
    }

    fn map_to<D: Element>(self, mut f: impl FnMut(Self::Component) -> D) -> Self::Cast<D> {
        <Self::Cast<D>>::from_fn(|index| f(self[index]))
    }

    fn zip_to<D: Element>(
        self,
        other: Self,
        mut f: impl FnMut(Self::Component, Self::Component) -> D,
    ) -> Self::Cast<D> {
        <Self::Cast<D>>::from_fn(|index| f(self[index], other[index]))
    }

    /// Builds a vector from exactly [`Vector::DIMENSION`] components.
    fn try_from_slice(components: &[Self::Component]) -> Result<Self> {
        snafu::ensure!(
            components.len() == Self::DIMENSION,
            ComponentCountSnafu {
                expected: Self::DIMENSION,
                actual: components.len(),
            }
        );
        Ok(Self::from_fn(|index| components[index]))
    }

    fn get(&self, index: usize) -> Result<Self::Component> {
        snafu::ensure!(
            index < Self::DIMENSION,
            IndexOutOfRangeSnafu {
                index,
                dimension: Self::DIMENSION,
            }
        );
        Ok(self[index])
    }

    fn set(&mut self, index: usize, component: Self::Component) -> Result<()> {
        snafu::ensure!(
            index < Self::DIMENSION,
            IndexOutOfRangeSnafu {
                index,
                dimension: Self::DIMENSION,
            }
        );
        self[index] = component;
        Ok(())
    }
}

/// A vector of three or four components and its one smaller sibling.
pub trait LowerDimension: Vector {
    type Lower: Vector<Component = Self::Component>;

    /// `lower` followed by `last`.
    fn from_lower(lower: Self::Lower, last: Self::Component) -> Self {
        Self::from_fn(|index| {
            if index < Self::Lower::DIMENSION {
                lower[index]
            } else {
                last
            }
        })
    }

    /// `first` followed by `lower`.
    fn from_first_and_lower(first: Self::Component, lower: Self::Lower) -> Self {
        Self::from_fn(|index| if index == 0 { first } else { lower[index - 1] })
    }

    /// Drops the last component.
    fn truncate(self) -> Self::Lower {
        <Self::Lower>::from_fn(|index| self[index])
    }

    /// Drops the component at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    fn remove(self, index: usize) -> Self::Lower {
        assert!(
            index < Self::DIMENSION,
            "index out of bounds: {} components but index is {index}",
            Self::DIMENSION
        );
        <Self::Lower>::from_fn(|i| if i < index { self[i] } else { self[i + 1] })
    }
}

/// A vector of `bool`s, the result of componentwise comparisons.
pub trait BoolVector: Vector<Component = bool> {
    /// Whether any component is `true`.
    fn any(self) -> bool {
        self.fold(false, |any, component| any || component)
    }

    /// Whether every component is `true`.
    fn all(self) -> bool {
        self.fold(true, |all, component| all && component)
    }
}

impl<V: Vector<Component = bool>> BoolVector for V {}

/// Implements [`Vector`] and indexing for a struct whose fields are its
/// components, listed with their index.
macro_rules! impl_vector {
    ($ty:ident, $dim:ty, [$($field:ident = $index:literal),+]) => {
        impl<T> std::ops::Index<usize> for $ty<T> {
            type Output = T;

            fn index(&self, index: usize) -> &T {
                match index {
                    $($index => &self.$field,)+
                    _ => panic!(
                        "index out of bounds: {} has {} components but index is {index}",
                        stringify!($ty),
                        <$dim as $crate::dimension::Dimension>::VALUE,
                    ),
                }
            }
        }

        impl<T> std::ops::IndexMut<usize> for $ty<T> {
            fn index_mut(&mut self, index: usize) -> &mut T {
                match index {
                    $($index => &mut self.$field,)+
                    _ => panic!(
                        "index out of bounds: {} has {} components but index is {index}",
                        stringify!($ty),
                        <$dim as $crate::dimension::Dimension>::VALUE,
                    ),
                }
            }
        }

        impl<T: $crate::vector::Element> $crate::vector::Vector for $ty<T> {
            type Dim = $dim;
            type Component = T;
            type Cast<D: $crate::vector::Element> = $ty<D>;

            fn splat(component: T) -> Self {
                Self { $($field: component),+ }
            }

            fn from_fn(mut f: impl FnMut(usize) -> T) -> Self {
                Self { $($field: f($index)),+ }
            }

            fn map(self, mut f: impl FnMut(T) -> T) -> Self {
                Self { $($field: f(self.$field)),+ }
            }

            fn zip(self, other: Self, mut f: impl FnMut(T, T) -> T) -> Self {
                Self { $($field: f(self.$field, other.$field)),+ }
            }

            fn fold<A>(self, init: A, mut f: impl FnMut(A, T) -> A) -> A {
                let accumulator = init;
                $(let accumulator = f(accumulator, self.$field);)+
                accumulator
            }

            fn split(self, mut f: impl FnMut(T) -> (T, T)) -> (Self, Self) {
                $(let $field = f(self.$field);)+
                (Self { $($field: $field.0),+ }, Self { $($field: $field.1),+ })
            }
        }
    };
}

pub(crate) use impl_vector;
