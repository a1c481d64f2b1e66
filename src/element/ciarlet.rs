//! Ciarlet elements
//!
//! The basis functions of these elements are given explicitly as coefficients in the monomial
//! basis, so they can be tabulated with exact derivatives of every order.

use crate::element::polynomials::{monomial_shape, polynomial_count, tabulate_monomials};
use crate::element::reference_cell;
use crate::tabulation::{check_points, Tabulation};
use crate::traits::FiniteElement;
use crate::types::{Continuity, ElementError, MapType, ReferenceCell};
use log::trace;
use rlst::{rlst_dynamic_array3, DynamicArray, RandomAccessByRef, RlstScalar, Shape};

pub mod lagrange;
pub mod nedelec;
pub mod raviart_thomas;

/// A Ciarlet element
pub struct CiarletElement<T: RlstScalar> {
    family: &'static str,
    cell_type: ReferenceCell,
    degree: usize,
    embedded_superdegree: usize,
    map_type: MapType,
    value_shape: Vec<usize>,
    value_size: usize,
    continuity: Continuity,
    form_degree: usize,
    dim: usize,
    coefficients: DynamicArray<T, 3>,
    entity_dofs: [Vec<Vec<usize>>; 4],
}

impl<T: RlstScalar> CiarletElement<T> {
    /// Create a Ciarlet element
    ///
    /// `coefficients` has shape `[dim, value_size, polynomial_count]` and gives each basis
    /// function in the monomial basis of degree `embedded_superdegree`. If the element is
    /// discontinuous, all DOFs are associated with the interior of the cell.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        family: &'static str,
        cell_type: ReferenceCell,
        degree: usize,
        value_shape: Vec<usize>,
        coefficients: DynamicArray<T, 3>,
        entity_dofs: [Vec<Vec<usize>>; 4],
        map_type: MapType,
        continuity: Continuity,
        form_degree: usize,
        embedded_superdegree: usize,
    ) -> Self {
        let tdim = reference_cell::dim(cell_type);
        let value_size = value_shape.iter().product::<usize>();
        let [dim, vs, pdim] = coefficients.shape();
        if vs != value_size {
            panic!("Incompatible value size");
        }
        if pdim != polynomial_count(tdim, embedded_superdegree) {
            panic!("Incompatible polynomial count");
        }

        let entity_dofs = if continuity == Continuity::Discontinuous {
            let mut new_dofs = [vec![], vec![], vec![], vec![]];
            for (i, counts) in reference_cell::entity_counts(cell_type)
                .iter()
                .enumerate()
                .take(tdim)
            {
                for _e in 0..*counts {
                    new_dofs[i].push(vec![]);
                }
            }
            new_dofs[tdim].push((0..dim).collect::<Vec<_>>());
            new_dofs
        } else {
            entity_dofs
        };

        CiarletElement::<T> {
            family,
            cell_type,
            degree,
            embedded_superdegree,
            map_type,
            value_shape,
            value_size,
            continuity,
            form_degree,
            dim,
            coefficients,
            entity_dofs,
        }
    }

    /// The name of the element family
    pub fn family(&self) -> &'static str {
        self.family
    }

    /// The reference cell type
    pub fn cell_type(&self) -> ReferenceCell {
        self.cell_type
    }

    /// The polynomial degree
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Is the element continuous between cells?
    pub fn continuity(&self) -> Continuity {
        self.continuity
    }

    /// The DOFs that are associated with a subentity of the reference cell
    pub fn entity_dofs(&self, entity_dim: usize, entity_number: usize) -> Option<&[usize]> {
        if entity_dim < 4 && entity_number < self.entity_dofs[entity_dim].len() {
            Some(&self.entity_dofs[entity_dim][entity_number])
        } else {
            None
        }
    }
}

impl<T: RlstScalar> FiniteElement for CiarletElement<T> {
    type T = T;

    fn tdim(&self) -> usize {
        reference_cell::dim(self.cell_type)
    }
    fn value_shape(&self) -> &[usize] {
        &self.value_shape
    }
    fn value_size(&self) -> usize {
        self.value_size
    }
    fn dim(&self) -> usize {
        self.dim
    }
    fn map_type(&self) -> MapType {
        self.map_type
    }
    fn form_degree(&self) -> Option<usize> {
        Some(self.form_degree)
    }
    fn embedded_superdegree(&self) -> usize {
        self.embedded_superdegree
    }
    fn tabulate(
        &self,
        points: &DynamicArray<T::Real, 2>,
        nderivs: usize,
    ) -> Result<Tabulation<T>, ElementError> {
        let tdim = self.tdim();
        check_points::<T>(points, tdim)?;
        let npoints = points.shape()[0];
        trace!(
            "Tabulating {} element at {} points with {} derivatives",
            self.family,
            npoints,
            nderivs
        );

        let mut table = rlst_dynamic_array3!(
            T,
            monomial_shape(tdim, npoints, self.embedded_superdegree, nderivs)
        );
        tabulate_monomials(points, self.embedded_superdegree, nderivs, &mut table);

        let mut data = Tabulation::new(tdim, nderivs, self.dim, &self.value_shape, npoints);
        for d in 0..table.shape()[0] {
            for p in 0..npoints {
                for j in 0..self.value_size {
                    for b in 0..self.dim {
                        let value = data.get_mut([d, b, j, p]).unwrap();
                        for i in 0..table.shape()[1] {
                            *value += *self.coefficients.get([b, j, i]).unwrap()
                                * *table.get([d, i, p]).unwrap();
                        }
                    }
                }
            }
        }
        Ok(data)
    }
}
