extern crate blas_src;
extern crate lapack_src;

use approx::assert_relative_eq;
use rlst::{rlst_dynamic_array2, DynamicArray, RandomAccessMut, RlstScalar};
use std::sync::Arc;
use tpelement::element::ciarlet::{lagrange, CiarletElement};
use tpelement::element::{EnrichedElement, HDivCurlElement, TensorProductElement};
use tpelement::tabulation::Tabulation;
use tpelement::traits::{ElementRef, FiniteElement};
use tpelement::types::{Continuity, ElementError, MapType, ReferenceCell};

/// A P1 element on an interval that can only tabulate first derivatives
struct FirstDerivativesOnly {
    element: CiarletElement<f64>,
}

impl FirstDerivativesOnly {
    fn new() -> Self {
        Self {
            element: lagrange::create::<f64>(ReferenceCell::Interval, 1, Continuity::Continuous)
                .unwrap(),
        }
    }
}

impl FiniteElement for FirstDerivativesOnly {
    type T = f64;

    fn tdim(&self) -> usize {
        1
    }
    fn value_shape(&self) -> &[usize] {
        &[]
    }
    fn dim(&self) -> usize {
        2
    }
    fn map_type(&self) -> MapType {
        MapType::Identity
    }
    fn form_degree(&self) -> Option<usize> {
        Some(0)
    }
    fn embedded_superdegree(&self) -> usize {
        1
    }
    fn tabulate(
        &self,
        points: &DynamicArray<<f64 as RlstScalar>::Real, 2>,
        nderivs: usize,
    ) -> Result<Tabulation<f64>, ElementError> {
        if nderivs > 1 {
            Err(ElementError::UnsupportedOrder {
                requested: nderivs,
                maximum: 1,
            })
        } else {
            self.element.tabulate(points, nderivs)
        }
    }
}

/// A P1 element on an interval that ignores the requested number of derivatives
struct ValuesOnly {
    element: CiarletElement<f64>,
}

impl FiniteElement for ValuesOnly {
    type T = f64;

    fn tdim(&self) -> usize {
        1
    }
    fn value_shape(&self) -> &[usize] {
        &[]
    }
    fn dim(&self) -> usize {
        2
    }
    fn map_type(&self) -> MapType {
        MapType::Identity
    }
    fn form_degree(&self) -> Option<usize> {
        Some(0)
    }
    fn embedded_superdegree(&self) -> usize {
        1
    }
    fn tabulate(
        &self,
        points: &DynamicArray<<f64 as RlstScalar>::Real, 2>,
        _nderivs: usize,
    ) -> Result<Tabulation<f64>, ElementError> {
        self.element.tabulate(points, 0)
    }
}

fn points_2d() -> DynamicArray<f64, 2> {
    let mut points = rlst_dynamic_array2!(f64, [3, 2]);
    *points.get_mut([0, 0]).unwrap() = 0.1;
    *points.get_mut([0, 1]).unwrap() = 0.7;
    *points.get_mut([1, 0]).unwrap() = 0.5;
    *points.get_mut([1, 1]).unwrap() = 0.5;
    *points.get_mut([2, 0]).unwrap() = 0.9;
    *points.get_mut([2, 1]).unwrap() = 0.2;
    points
}

fn interval(degree: usize, continuity: Continuity) -> ElementRef<f64> {
    Arc::new(lagrange::create::<f64>(ReferenceCell::Interval, degree, continuity).unwrap())
}

#[test]
fn test_enriched_dimension_and_values() {
    let p1 = interval(1, Continuity::Continuous);
    let p0 = interval(0, Continuity::Discontinuous);
    let a: ElementRef<f64> = Arc::new(
        HDivCurlElement::hdiv(TensorProductElement::new(p1.clone(), p0.clone()).unwrap()).unwrap(),
    );
    let b: ElementRef<f64> = Arc::new(
        HDivCurlElement::hdiv(TensorProductElement::new(p0.clone(), p1.clone()).unwrap()).unwrap(),
    );
    let e = EnrichedElement::new(vec![a.clone(), b.clone()]).unwrap();
    assert_eq!(e.dim(), a.dim() + b.dim());
    assert_eq!(e.value_shape(), &[2]);
    assert_eq!(e.map_type(), MapType::ContravariantPiola);

    let points = points_2d();
    let tab = e.tabulate(&points, 2).unwrap();
    let tab_a = a.tabulate(&points, 2).unwrap();
    let tab_b = b.tabulate(&points, 2).unwrap();
    for d in 0..tab.derivative_count() {
        for c in 0..2 {
            for p in 0..3 {
                for i in 0..a.dim() {
                    assert_relative_eq!(
                        *tab.get([d, i, c, p]).unwrap(),
                        *tab_a.get([d, i, c, p]).unwrap()
                    );
                }
                for i in 0..b.dim() {
                    assert_relative_eq!(
                        *tab.get([d, a.dim() + i, c, p]).unwrap(),
                        *tab_b.get([d, i, c, p]).unwrap()
                    );
                }
            }
        }
    }
}

#[test]
fn test_enriched_single_element() {
    let p1 = interval(1, Continuity::Continuous);
    let e = EnrichedElement::new(vec![p1.clone()]).unwrap();
    let mut points = rlst_dynamic_array2!(f64, [1, 1]);
    *points.get_mut([0, 0]).unwrap() = 0.3;
    let tab = e.tabulate(&points, 1).unwrap();
    let tab_p1 = p1.tabulate(&points, 1).unwrap();
    for d in 0..2 {
        for b in 0..2 {
            assert_eq!(tab.get([d, b, 0, 0]), tab_p1.get([d, b, 0, 0]));
        }
    }
}

#[test]
fn test_unsupported_order_propagates() {
    let restricted: ElementRef<f64> = Arc::new(FirstDerivativesOnly::new());
    let p0 = interval(0, Continuity::Discontinuous);
    let points = points_2d();

    let tp = TensorProductElement::new(restricted.clone(), p0.clone()).unwrap();
    assert!(tp.tabulate(&points, 1).is_ok());
    let expected = Some(ElementError::UnsupportedOrder {
        requested: 2,
        maximum: 1,
    });
    assert_eq!(tp.tabulate(&points, 2).err(), expected);

    let hdiv = HDivCurlElement::hdiv(tp).unwrap();
    assert_eq!(hdiv.tabulate(&points, 2).err(), expected);

    let hdiv: ElementRef<f64> = Arc::new(hdiv);
    let other: ElementRef<f64> = Arc::new(
        HDivCurlElement::hdiv(TensorProductElement::new(p0.clone(), restricted).unwrap()).unwrap(),
    );
    let enriched = EnrichedElement::new(vec![hdiv, other]).unwrap();
    assert!(enriched.tabulate(&points, 1).is_ok());
    assert_eq!(enriched.tabulate(&points, 2).err(), expected);
}

#[test]
fn test_enriched_wrong_point_dimension() {
    let e = EnrichedElement::new(vec![interval(1, Continuity::Continuous)]).unwrap();
    assert_eq!(
        e.tabulate(&points_2d(), 0).err(),
        Some(ElementError::DimensionMismatch {
            expected: 1,
            actual: 2
        })
    );
}

#[test]
fn test_malformed_sub_element_table() {
    let values_only: ElementRef<f64> = Arc::new(ValuesOnly {
        element: lagrange::create::<f64>(ReferenceCell::Interval, 1, Continuity::Continuous)
            .unwrap(),
    });
    let p0 = interval(0, Continuity::Discontinuous);

    let mut points_1d = rlst_dynamic_array2!(f64, [1, 1]);
    *points_1d.get_mut([0, 0]).unwrap() = 0.3;
    let enriched = EnrichedElement::new(vec![values_only.clone()]).unwrap();
    assert!(enriched.tabulate(&points_1d, 0).is_ok());
    assert!(matches!(
        enriched.tabulate(&points_1d, 1),
        Err(ElementError::ShapeMismatch(_))
    ));

    let points = points_2d();
    let tp = TensorProductElement::new(values_only.clone(), p0.clone()).unwrap();
    assert!(tp.tabulate(&points, 0).is_ok());
    assert!(matches!(
        tp.tabulate(&points, 1),
        Err(ElementError::ShapeMismatch(_))
    ));

    let tp = TensorProductElement::new(p0, values_only).unwrap();
    assert!(matches!(
        tp.tabulate(&points, 2),
        Err(ElementError::ShapeMismatch(_))
    ));
    let hdiv = HDivCurlElement::hdiv(tp).unwrap();
    assert!(hdiv.tabulate(&points, 0).is_ok());
    assert!(matches!(
        hdiv.tabulate(&points, 1),
        Err(ElementError::ShapeMismatch(_))
    ));
}
