//! Tabulated values of basis functions and their derivatives
use crate::multi_index::{all_orders_up_to, derivative_count, AllOrders, MultiIndex};
use crate::types::ElementError;
use rlst::{
    rlst_dynamic_array2, rlst_dynamic_array4, DynamicArray, RandomAccessByRef, RandomAccessMut,
    RlstScalar, Shape,
};

/// The values of the basis functions of an element and their derivatives at a set of points
///
/// The data is stored in an array with shape `[derivative, basis function, value component,
/// point]`, where the derivative axis follows the ordering of [`MultiIndex::index`]. Every
/// multi-index of length `tdim` and total order at most `nderivs` is present. Scalar elements
/// have a single value component.
pub struct Tabulation<T: RlstScalar> {
    tdim: usize,
    nderivs: usize,
    value_shape: Vec<usize>,
    data: DynamicArray<T, 4>,
}

impl<T: RlstScalar> Tabulation<T> {
    /// Create a tabulation filled with zeros
    pub fn new(
        tdim: usize,
        nderivs: usize,
        dim: usize,
        value_shape: &[usize],
        npoints: usize,
    ) -> Self {
        let value_size = value_shape.iter().product::<usize>();
        Self {
            tdim,
            nderivs,
            value_shape: value_shape.to_vec(),
            data: rlst_dynamic_array4!(
                T,
                [derivative_count(tdim, nderivs), dim, value_size, npoints]
            ),
        }
    }

    /// The dimension of the space the points live in
    pub fn tdim(&self) -> usize {
        self.tdim
    }

    /// The highest total order of derivative that is included
    pub fn nderivs(&self) -> usize {
        self.nderivs
    }

    /// The number of derivatives (ie multi-indices) that are included
    pub fn derivative_count(&self) -> usize {
        self.data.shape()[0]
    }

    /// The number of basis functions
    pub fn dim(&self) -> usize {
        self.data.shape()[1]
    }

    /// The value shape
    pub fn value_shape(&self) -> &[usize] {
        &self.value_shape
    }

    /// The number of value components
    pub fn value_size(&self) -> usize {
        self.data.shape()[2]
    }

    /// The number of points
    pub fn npoints(&self) -> usize {
        self.data.shape()[3]
    }

    /// The multi-indices of all derivatives in this tabulation, in storage order
    pub fn keys(&self) -> AllOrders {
        all_orders_up_to(self.nderivs, self.tdim)
    }

    /// The position of a derivative on the first axis of the data
    pub fn derivative(&self, alpha: &MultiIndex) -> Option<usize> {
        if alpha.len() == self.tdim && alpha.order() <= self.nderivs {
            Some(alpha.index())
        } else {
            None
        }
    }

    /// Get the value of a derivative of a basis function at a point
    pub fn value(
        &self,
        alpha: &MultiIndex,
        basis: usize,
        component: usize,
        point: usize,
    ) -> Option<T> {
        let d = self.derivative(alpha)?;
        self.data.get([d, basis, component, point]).copied()
    }

    /// Get an entry by its position `[derivative, basis function, value component, point]`
    pub fn get(&self, index: [usize; 4]) -> Option<&T> {
        self.data.get(index)
    }

    /// Get a mutable entry by its position `[derivative, basis function, value component, point]`
    pub fn get_mut(&mut self, index: [usize; 4]) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    /// The underlying data array
    pub fn data(&self) -> &DynamicArray<T, 4> {
        &self.data
    }
}

/// Split points in a product space into points in the two factor spaces
///
/// `points` has shape `[npoints, dim_a + dim_b]`; the first `dim_a` coordinates of each point
/// go to the first output and the remaining `dim_b` coordinates to the second. The order of the
/// points is unchanged.
pub fn split_points<T: RlstScalar>(
    points: &DynamicArray<T::Real, 2>,
    dim_a: usize,
    dim_b: usize,
) -> Result<(DynamicArray<T::Real, 2>, DynamicArray<T::Real, 2>), ElementError> {
    let [npoints, gdim] = points.shape();
    if gdim != dim_a + dim_b {
        return Err(ElementError::DimensionMismatch {
            expected: dim_a + dim_b,
            actual: gdim,
        });
    }
    let mut points_a = rlst_dynamic_array2!(T::Real, [npoints, dim_a]);
    let mut points_b = rlst_dynamic_array2!(T::Real, [npoints, dim_b]);
    for p in 0..npoints {
        for i in 0..dim_a {
            *points_a.get_mut([p, i]).unwrap() = *points.get([p, i]).unwrap();
        }
        for i in 0..dim_b {
            *points_b.get_mut([p, i]).unwrap() = *points.get([p, dim_a + i]).unwrap();
        }
    }
    Ok((points_a, points_b))
}

/// Check that a set of points has `tdim` coordinates
pub(crate) fn check_points<T: RlstScalar>(
    points: &DynamicArray<T::Real, 2>,
    tdim: usize,
) -> Result<(), ElementError> {
    let gdim = points.shape()[1];
    if gdim == tdim {
        Ok(())
    } else {
        Err(ElementError::DimensionMismatch {
            expected: tdim,
            actual: gdim,
        })
    }
}

/// Check that a tabulation returned by a sub-element has the shape that was requested
pub(crate) fn check_table<T: RlstScalar>(
    table: &Tabulation<T>,
    tdim: usize,
    nderivs: usize,
    dim: usize,
    value_size: usize,
    npoints: usize,
) -> Result<(), ElementError> {
    let expected = [derivative_count(tdim, nderivs), dim, value_size, npoints];
    let actual = table.data.shape();
    if table.tdim == tdim && table.nderivs == nderivs && actual == expected {
        Ok(())
    } else {
        Err(ElementError::ShapeMismatch(format!(
            "sub-element tabulation has shape {:?} with tdim {} and {} derivatives; expected shape {:?} with tdim {} and {} derivatives",
            actual, table.tdim, table.nderivs, expected, tdim, nderivs
        )))
    }
}
