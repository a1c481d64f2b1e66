//! H(div) and H(curl) elements built from tensor product elements
//!
//! The values of a tensor product element are placed into a vector with one component for each
//! coordinate. Where the values go depends on which factor is vector-valued and on the form
//! degrees of the factors. Components that are not written to are zero.
use crate::element::tensor_product::TensorProductElement;
use crate::tabulation::{check_points, check_table, Tabulation};
use crate::traits::FiniteElement;
use crate::types::{ElementError, MapType};
use log::{debug, trace};
use rlst::{DynamicArray, RlstScalar, Shape};

/// The Sobolev space that an element is embedded into
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Embedding {
    /// H(div)
    HDiv,
    /// H(curl)
    HCurl,
}

/// Where the values of the tensor product are written
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum Placement {
    /// A scalar value written to a single component
    Scalar { component: usize, negate: bool },
    /// A vector value copied into the components starting at `offset`
    Block { offset: usize, size: usize },
    /// A 2-vector `(v0, v1)` written to the components starting at `offset` as `(v1, -v0)`
    /// if `clockwise` and as `(-v1, v0)` otherwise
    Rotated { offset: usize, clockwise: bool },
}

/// An element embedded into H(div) or H(curl)
pub struct HDivCurlElement<T: RlstScalar> {
    element: TensorProductElement<T>,
    embedding: Embedding,
    placement: Placement,
    value_shape: Vec<usize>,
}

impl<T: RlstScalar> HDivCurlElement<T> {
    /// Embed a tensor product element into H(div)
    ///
    /// The element must represent a `(tdim - 1)`-form.
    pub fn hdiv(element: TensorProductElement<T>) -> Result<Self, ElementError> {
        Self::new(element, Embedding::HDiv)
    }

    /// Embed a tensor product element into H(curl)
    ///
    /// The element must represent a 1-form.
    pub fn hcurl(element: TensorProductElement<T>) -> Result<Self, ElementError> {
        Self::new(element, Embedding::HCurl)
    }

    fn new(element: TensorProductElement<T>, embedding: Embedding) -> Result<Self, ElementError> {
        let tdim = element.tdim();
        let expected = match embedding {
            Embedding::HDiv => tdim - 1,
            Embedding::HCurl => 1,
        };
        if element.form_degree() != Some(expected) {
            return Err(ElementError::InvalidFormDegree {
                expected,
                actual: element.form_degree(),
            });
        }
        let placement = placement(&element, embedding)?;
        debug!(
            "Created {:?} element: tdim {}, {} DOFs, placement {:?}",
            embedding,
            tdim,
            element.dim(),
            placement
        );
        Ok(Self {
            element,
            embedding,
            placement,
            value_shape: vec![tdim],
        })
    }

    /// The tensor product element that is embedded
    pub fn element(&self) -> &TensorProductElement<T> {
        &self.element
    }

    /// The space the element is embedded into
    pub fn embedding(&self) -> Embedding {
        self.embedding
    }
}

/// Work out where the values of a tensor product go in the embedded element
fn placement<T: RlstScalar>(
    element: &TensorProductElement<T>,
    embedding: Embedding,
) -> Result<Placement, ElementError> {
    let a = element.factor_a();
    let b = element.factor_b();
    let tdim = element.tdim();

    // The map type of a scalar-valued element with a vector-valued embedding
    let (same, rotated, negate_scalar) = match embedding {
        Embedding::HDiv => (MapType::ContravariantPiola, MapType::CovariantPiola, true),
        Embedding::HCurl => (MapType::CovariantPiola, MapType::ContravariantPiola, false),
    };
    // The form degree of a factor whose values go in the first component
    let leading_form_degree = match embedding {
        Embedding::HDiv => 0,
        Embedding::HCurl => 1,
    };

    let m = element.map_type();
    if m == MapType::Identity {
        if element.value_size() != 1 {
            return Err(ElementError::ShapeMismatch(format!(
                "expected a scalar-valued element, found value shape {:?}",
                element.value_shape()
            )));
        }
        if a.form_degree() == Some(leading_form_degree) {
            Ok(Placement::Scalar {
                component: 0,
                negate: negate_scalar,
            })
        } else if b.form_degree() == Some(leading_form_degree) {
            Ok(Placement::Scalar {
                component: tdim - 1,
                negate: false,
            })
        } else {
            Err(ElementError::InvalidFormDegree {
                expected: leading_form_degree,
                actual: b.form_degree(),
            })
        }
    } else if m == same || m == rotated {
        let (factor, offset) = if a.map_type() == m {
            (a, 0)
        } else {
            (b, tdim - b.tdim())
        };
        if factor.value_shape() != [factor.tdim()] {
            return Err(ElementError::ShapeMismatch(format!(
                "expected value shape [{}], found {:?}",
                factor.tdim(),
                factor.value_shape()
            )));
        }
        if m == same {
            Ok(Placement::Block {
                offset,
                size: factor.tdim(),
            })
        } else if factor.tdim() == 2 {
            Ok(Placement::Rotated {
                offset,
                clockwise: embedding == Embedding::HDiv,
            })
        } else {
            Err(ElementError::MapTypeMismatch(format!(
                "cannot rotate the values of a {:?} element with tdim {}",
                m,
                factor.tdim()
            )))
        }
    } else {
        Err(ElementError::MapTypeMismatch(format!(
            "cannot embed an element with map type {m:?} into {embedding:?}"
        )))
    }
}

impl<T: RlstScalar> FiniteElement for HDivCurlElement<T> {
    type T = T;

    fn tdim(&self) -> usize {
        self.element.tdim()
    }
    fn value_shape(&self) -> &[usize] {
        &self.value_shape
    }
    fn dim(&self) -> usize {
        self.element.dim()
    }
    fn map_type(&self) -> MapType {
        match self.embedding {
            Embedding::HDiv => MapType::ContravariantPiola,
            Embedding::HCurl => MapType::CovariantPiola,
        }
    }
    fn form_degree(&self) -> Option<usize> {
        self.element.form_degree()
    }
    fn embedded_superdegree(&self) -> usize {
        self.element.embedded_superdegree()
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
            "Tabulating {:?} element at {} points with {} derivatives",
            self.embedding,
            npoints,
            nderivs
        );

        let table = self.element.tabulate(points, nderivs)?;
        check_table(
            &table,
            tdim,
            nderivs,
            self.element.dim(),
            self.element.value_size(),
            npoints,
        )?;
        let mut data = Tabulation::new(tdim, nderivs, self.dim(), &self.value_shape, npoints);
        for d in 0..table.derivative_count() {
            for b in 0..table.dim() {
                for p in 0..npoints {
                    match self.placement {
                        Placement::Scalar { component, negate } => {
                            let value = *table.get([d, b, 0, p]).unwrap();
                            *data.get_mut([d, b, component, p]).unwrap() =
                                if negate { -value } else { value };
                        }
                        Placement::Block { offset, size } => {
                            for c in 0..size {
                                *data.get_mut([d, b, offset + c, p]).unwrap() =
                                    *table.get([d, b, c, p]).unwrap();
                            }
                        }
                        Placement::Rotated { offset, clockwise } => {
                            let v0 = *table.get([d, b, 0, p]).unwrap();
                            let v1 = *table.get([d, b, 1, p]).unwrap();
                            let (w0, w1) = if clockwise { (v1, -v0) } else { (-v1, v0) };
                            *data.get_mut([d, b, offset, p]).unwrap() = w0;
                            *data.get_mut([d, b, offset + 1, p]).unwrap() = w1;
                        }
                    }
                }
            }
        }
        Ok(data)
    }
}
