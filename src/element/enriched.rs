//! Enriched elements
//!
//! The basis of an enriched element is the union of the bases of its sub-elements: the basis
//! functions of the first sub-element come first, followed by those of the second, and so on.
use crate::tabulation::{check_points, check_table, Tabulation};
use crate::traits::{ElementRef, FiniteElement};
use crate::types::{ElementError, MapType};
use log::{debug, trace, warn};
use rayon::prelude::*;
use rlst::{DynamicArray, RlstScalar, Shape};

/// The direct sum of a list of elements
pub struct EnrichedElement<T: RlstScalar> {
    elements: Vec<ElementRef<T>>,
    offsets: Vec<usize>,
    tdim: usize,
    value_shape: Vec<usize>,
    map_type: MapType,
    form_degree: Option<usize>,
    embedded_superdegree: usize,
    dim: usize,
}

impl<T: RlstScalar> EnrichedElement<T> {
    /// Create an enriched element
    ///
    /// The elements must all have the same topological dimension, value shape and map type.
    pub fn new(elements: Vec<ElementRef<T>>) -> Result<Self, ElementError> {
        let first = elements.first().ok_or_else(|| {
            ElementError::ShapeMismatch("cannot enrich an empty list of elements".to_string())
        })?;
        let tdim = first.tdim();
        let value_shape = first.value_shape().to_vec();
        let map_type = first.map_type();
        let mut form_degree = first.form_degree();

        for e in elements.iter().skip(1) {
            if e.tdim() != tdim {
                return Err(ElementError::ShapeMismatch(format!(
                    "cannot enrich elements with different dimensions ({} and {})",
                    tdim,
                    e.tdim()
                )));
            }
            if e.value_shape() != value_shape {
                return Err(ElementError::ShapeMismatch(format!(
                    "cannot enrich elements with different value shapes ({:?} and {:?})",
                    value_shape,
                    e.value_shape()
                )));
            }
            if e.map_type() != map_type {
                return Err(ElementError::MapTypeMismatch(format!(
                    "cannot enrich elements with different map types ({:?} and {:?})",
                    map_type,
                    e.map_type()
                )));
            }
            if e.form_degree() != form_degree {
                form_degree = None;
            }
        }
        if elements.len() == 1 {
            warn!("Creating an enriched element from a single element");
        }

        let mut offsets = vec![0];
        for e in &elements {
            offsets.push(offsets[offsets.len() - 1] + e.dim());
        }
        let dim = offsets[elements.len()];
        let embedded_superdegree = elements
            .iter()
            .map(|e| e.embedded_superdegree())
            .max()
            .unwrap_or(0);

        debug!(
            "Created enriched element from {} elements: tdim {}, {} DOFs, value shape {:?}",
            elements.len(),
            tdim,
            dim,
            value_shape
        );

        Ok(Self {
            elements,
            offsets,
            tdim,
            value_shape,
            map_type,
            form_degree,
            embedded_superdegree,
            dim,
        })
    }

    /// The sub-elements
    pub fn elements(&self) -> &[ElementRef<T>] {
        &self.elements
    }

    /// The DOFs of the enriched element that come from the `i`th sub-element
    pub fn dof_range(&self, i: usize) -> Option<std::ops::Range<usize>> {
        if i < self.elements.len() {
            Some(self.offsets[i]..self.offsets[i + 1])
        } else {
            None
        }
    }
}

impl<T: RlstScalar> FiniteElement for EnrichedElement<T> {
    type T = T;

    fn tdim(&self) -> usize {
        self.tdim
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
        check_points::<T>(points, self.tdim)?;
        let npoints = points.shape()[0];
        trace!(
            "Tabulating enriched element at {} points with {} derivatives",
            npoints,
            nderivs
        );

        let tables = self
            .elements
            .par_iter()
            .map(|e| e.tabulate(points, nderivs))
            .collect::<Result<Vec<_>, _>>()?;

        let mut data = Tabulation::new(self.tdim, nderivs, self.dim, &self.value_shape, npoints);
        let value_size = self.value_size();
        for ((table, e), offset) in tables.iter().zip(&self.elements).zip(&self.offsets) {
            check_table(table, self.tdim, nderivs, e.dim(), value_size, npoints)?;
            for d in 0..table.derivative_count() {
                for b in 0..table.dim() {
                    for c in 0..value_size {
                        for p in 0..npoints {
                            *data.get_mut([d, offset + b, c, p]).unwrap() =
                                *table.get([d, b, c, p]).unwrap();
                        }
                    }
                }
            }
        }
        Ok(data)
    }
}
