//! Nedelec (first kind) elements

use crate::element::ciarlet::CiarletElement;
use crate::types::{Continuity, ElementError, MapType, ReferenceCell};
use rlst::{rlst_dynamic_array3, RandomAccessMut, RlstScalar};

const FAMILY: &str = "Nedelec (first kind)";

/// Create a Nedelec (first kind) element
///
/// The lowest order element on a triangle is supported. Its basis functions are `(-y, x)`,
/// `(y, 1 - x)` and `(1 - y, x)`.
pub fn create<T: RlstScalar>(
    cell_type: ReferenceCell,
    degree: usize,
    continuity: Continuity,
) -> Result<CiarletElement<T>, ElementError> {
    if cell_type != ReferenceCell::Triangle {
        return Err(ElementError::UnsupportedCell {
            family: FAMILY,
            cell: cell_type,
        });
    }
    if degree != 1 {
        return Err(ElementError::UnsupportedDegree {
            family: FAMILY,
            cell: cell_type,
            degree,
        });
    }

    let mut coefficients = rlst_dynamic_array3!(T, [3, 2, 3]);
    *coefficients.get_mut([0, 0, 2]).unwrap() = -T::one();
    *coefficients.get_mut([0, 1, 1]).unwrap() = T::one();
    *coefficients.get_mut([1, 0, 2]).unwrap() = T::one();
    *coefficients.get_mut([1, 1, 0]).unwrap() = T::one();
    *coefficients.get_mut([1, 1, 1]).unwrap() = -T::one();
    *coefficients.get_mut([2, 0, 0]).unwrap() = T::one();
    *coefficients.get_mut([2, 0, 2]).unwrap() = -T::one();
    *coefficients.get_mut([2, 1, 1]).unwrap() = T::one();

    let entity_dofs = [
        vec![vec![], vec![], vec![]],
        vec![vec![0], vec![1], vec![2]],
        vec![vec![]],
        vec![],
    ];

    Ok(CiarletElement::create(
        FAMILY,
        cell_type,
        degree,
        vec![2],
        coefficients,
        entity_dofs,
        MapType::CovariantPiola,
        continuity,
        1,
        1,
    ))
}
