//! Finite element definitions

use crate::tabulation::Tabulation;
use crate::types::{ElementError, MapType};
use rlst::{DynamicArray, RlstScalar};
use std::sync::Arc;

/// A shared reference to a finite element
///
/// Composite elements hold their factors through this type, so a factor can be used by more
/// than one composite element.
pub type ElementRef<T> = Arc<dyn FiniteElement<T = T>>;

pub trait FiniteElement: Send + Sync {
    //! A finite element whose basis functions can be tabulated at points

    /// The scalar type
    type T: RlstScalar;

    /// The dimension of the space the element is defined in
    fn tdim(&self) -> usize;

    /// The value shape
    ///
    /// This is empty for a scalar-valued element and `[n]` for an element whose values are
    /// vectors of length `n`.
    fn value_shape(&self) -> &[usize];

    /// The value size
    fn value_size(&self) -> usize {
        self.value_shape().iter().product()
    }

    /// The number of basis functions
    fn dim(&self) -> usize;

    /// The push forward / pull back map to use for this element
    fn map_type(&self) -> MapType;

    /// The degree of the differential form that the element represents, if known
    fn form_degree(&self) -> Option<usize>;

    /// The lowest degree `n` such that the highest degree polynomial in this element is contained
    /// in a Lagrange (or vector Lagrange) element of degree `n`
    fn embedded_superdegree(&self) -> usize;

    /// Tabulate the values of the basis functions and their derivatives at a set of points
    ///
    /// `points` has shape `[npoints, tdim]`. All derivatives of total order up to and including
    /// `nderivs` are computed.
    fn tabulate(
        &self,
        points: &DynamicArray<<Self::T as RlstScalar>::Real, 2>,
        nderivs: usize,
    ) -> Result<Tabulation<Self::T>, ElementError>;
}
