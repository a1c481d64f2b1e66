//! Tensor product elements
//!
//! The basis functions of the tensor product of an element `A` on a cell with coordinates `x`
//! and an element `B` on a cell with coordinates `y` are the products `a_i(x) b_j(y)`. The
//! product of basis functions `i` and `j` is basis function `i * dim(B) + j`.
use crate::multi_index::block_splits;
use crate::tabulation::{check_points, check_table, split_points, Tabulation};
use crate::traits::{ElementRef, FiniteElement};
use crate::types::{ElementError, MapType};
use itertools::iproduct;
use log::{debug, trace};
use rlst::{DynamicArray, RlstScalar, Shape};

/// The map type of the product of elements with the given map types
fn product_map_type(a: MapType, b: MapType) -> Result<MapType, ElementError> {
    match (a, b) {
        (MapType::Identity, m) => Ok(m),
        (m, MapType::Identity) => Ok(m),
        (a, b) => Err(ElementError::MapTypeMismatch(format!(
            "cannot take the tensor product of elements with map types {a:?} and {b:?}"
        ))),
    }
}

/// The tensor product of two elements
pub struct TensorProductElement<T: RlstScalar> {
    factor_a: ElementRef<T>,
    factor_b: ElementRef<T>,
    value_shape: Vec<usize>,
    map_type: MapType,
    form_degree: Option<usize>,
    embedded_superdegree: usize,
    dim: usize,
}

impl<T: RlstScalar> TensorProductElement<T> {
    /// Create the tensor product of two elements
    ///
    /// At most one of the two elements can be vector-valued.
    pub fn new(factor_a: ElementRef<T>, factor_b: ElementRef<T>) -> Result<Self, ElementError> {
        let value_shape = match (factor_a.value_size(), factor_b.value_size()) {
            (1, _) => factor_b.value_shape().to_vec(),
            (_, 1) => factor_a.value_shape().to_vec(),
            _ => {
                return Err(ElementError::ShapeMismatch(format!(
                    "cannot take the tensor product of two vector-valued elements (value shapes {:?} and {:?})",
                    factor_a.value_shape(),
                    factor_b.value_shape()
                )))
            }
        };
        let map_type = product_map_type(factor_a.map_type(), factor_b.map_type())?;
        let form_degree = match (factor_a.form_degree(), factor_b.form_degree()) {
            (Some(a), Some(b)) => Some(a + b),
            _ => None,
        };
        let embedded_superdegree =
            factor_a.embedded_superdegree() + factor_b.embedded_superdegree();
        let dim = factor_a.dim() * factor_b.dim();

        debug!(
            "Created tensor product element: tdim {} ({} + {}), {} DOFs, value shape {:?}, map type {:?}",
            factor_a.tdim() + factor_b.tdim(),
            factor_a.tdim(),
            factor_b.tdim(),
            dim,
            value_shape,
            map_type
        );

        Ok(Self {
            factor_a,
            factor_b,
            value_shape,
            map_type,
            form_degree,
            embedded_superdegree,
            dim,
        })
    }

    /// The element on the first block of coordinates
    pub fn factor_a(&self) -> &ElementRef<T> {
        &self.factor_a
    }

    /// The element on the second block of coordinates
    pub fn factor_b(&self) -> &ElementRef<T> {
        &self.factor_b
    }
}

impl<T: RlstScalar> FiniteElement for TensorProductElement<T> {
    type T = T;

    fn tdim(&self) -> usize {
        self.factor_a.tdim() + self.factor_b.tdim()
    }
    fn value_shape(&self) -> &[usize] {
        &self.value_shape
    }
    fn dim(&self) -> usize {
        self.dim
    }
    fn map_type(&self) -> MapType {
        self.map_type
    }
    fn form_degree(&self) -> Option<usize> {
        self.form_degree
    }
    fn embedded_superdegree(&self) -> usize {
        self.embedded_superdegree
    }
    fn tabulate(
        &self,
        points: &DynamicArray<T::Real, 2>,
        nderivs: usize,
    ) -> Result<Tabulation<T>, ElementError> {
        let tdim_a = self.factor_a.tdim();
        let tdim_b = self.factor_b.tdim();
        check_points::<T>(points, tdim_a + tdim_b)?;
        let npoints = points.shape()[0];
        trace!(
            "Tabulating tensor product element at {} points with {} derivatives",
            npoints,
            nderivs
        );

        let (points_a, points_b) = split_points::<T>(points, tdim_a, tdim_b)?;
        let (table_a, table_b) = rayon::join(
            || self.factor_a.tabulate(&points_a, nderivs),
            || self.factor_b.tabulate(&points_b, nderivs),
        );
        let table_a = table_a?;
        let table_b = table_b?;

        let dim_b = self.factor_b.dim();
        let vs_a = self.factor_a.value_size();
        let vs_b = self.factor_b.value_size();
        check_table(&table_a, tdim_a, nderivs, self.factor_a.dim(), vs_a, npoints)?;
        check_table(&table_b, tdim_b, nderivs, dim_b, vs_b, npoints)?;
        let value_size = self.value_size();

        let mut data = Tabulation::new(
            tdim_a + tdim_b,
            nderivs,
            self.dim,
            &self.value_shape,
            npoints,
        );
        for (d, (_, alpha_a, alpha_b)) in block_splits(nderivs, tdim_a, tdim_b).enumerate() {
            let da = alpha_a.index();
            let db = alpha_b.index();
            for (i, j) in iproduct!(0..self.factor_a.dim(), 0..dim_b) {
                for c in 0..value_size {
                    // The scalar factor is the same for every component
                    let ca = if vs_a == 1 { 0 } else { c };
                    let cb = if vs_b == 1 { 0 } else { c };
                    for p in 0..npoints {
                        *data.get_mut([d, i * dim_b + j, c, p]).unwrap() =
                            *table_a.get([da, i, ca, p]).unwrap()
                                * *table_b.get([db, j, cb, p]).unwrap();
                    }
                }
            }
        }
        Ok(data)
    }
}
