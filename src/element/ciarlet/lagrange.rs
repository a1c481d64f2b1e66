//! Lagrange elements

use crate::element::ciarlet::CiarletElement;
use crate::element::polynomials::polynomial_count;
use crate::element::reference_cell;
use crate::types::{Continuity, ElementError, MapType, ReferenceCell};
use rlst::{rlst_dynamic_array3, RandomAccessMut, RlstScalar};

const FAMILY: &str = "Lagrange";

/// The points that the DOFs of a degree `degree` Lagrange element on an interval are defined at
///
/// The two vertices come first, followed by the equally spaced interior points.
fn interval_nodes<T: RlstScalar>(degree: usize) -> Vec<T> {
    let mut nodes = vec![T::zero(), T::one()];
    for i in 1..degree {
        nodes.push(num::cast::<usize, T>(i).unwrap() / num::cast::<usize, T>(degree).unwrap());
    }
    nodes
}

/// Create a Lagrange element
///
/// Any degree is supported on an interval. On triangles and tetrahedra, degrees 0 and 1 are
/// supported. Degree 0 elements must be discontinuous.
pub fn create<T: RlstScalar>(
    cell_type: ReferenceCell,
    degree: usize,
    continuity: Continuity,
) -> Result<CiarletElement<T>, ElementError> {
    if degree == 0 && continuity == Continuity::Continuous {
        return Err(ElementError::UnsupportedDegree {
            family: FAMILY,
            cell: cell_type,
            degree,
        });
    }
    if !reference_cell::is_simplex(cell_type) || cell_type == ReferenceCell::Point {
        return Err(ElementError::UnsupportedCell {
            family: FAMILY,
            cell: cell_type,
        });
    }
    let tdim = reference_cell::dim(cell_type);
    if cell_type != ReferenceCell::Interval && degree > 1 {
        return Err(ElementError::UnsupportedDegree {
            family: FAMILY,
            cell: cell_type,
            degree,
        });
    }

    let pdim = polynomial_count(tdim, degree);
    let mut coefficients = rlst_dynamic_array3!(T, [pdim, 1, pdim]);
    let mut entity_dofs = [vec![], vec![], vec![], vec![]];
    for (d, counts) in reference_cell::entity_counts(cell_type)
        .iter()
        .enumerate()
    {
        for _e in 0..*counts {
            entity_dofs[d].push(vec![]);
        }
    }

    if degree == 0 {
        *coefficients.get_mut([0, 0, 0]).unwrap() = T::one();
        entity_dofs[tdim][0].push(0);
    } else if tdim == 1 {
        let nodes = interval_nodes::<T>(degree);
        for (m, xm) in nodes.iter().enumerate() {
            // Expand the product of (x - x_l) / (x_m - x_l) over l != m
            let mut poly = vec![T::one()];
            for (l, xl) in nodes.iter().enumerate() {
                if l == m {
                    continue;
                }
                let scale = T::one() / (*xm - *xl);
                let mut next = vec![T::zero(); poly.len() + 1];
                for (k, c) in poly.iter().enumerate() {
                    next[k + 1] += *c * scale;
                    next[k] -= *c * *xl * scale;
                }
                poly = next;
            }
            for (k, c) in poly.iter().enumerate() {
                *coefficients.get_mut([m, 0, k]).unwrap() = *c;
            }
        }
        entity_dofs[0][0].push(0);
        entity_dofs[0][1].push(1);
        entity_dofs[1][0].extend(2..=degree);
    } else {
        // The monomials are 1, x_0, ..., x_{tdim-1}
        *coefficients.get_mut([0, 0, 0]).unwrap() = T::one();
        for i in 0..tdim {
            *coefficients.get_mut([0, 0, i + 1]).unwrap() = -T::one();
            *coefficients.get_mut([i + 1, 0, i + 1]).unwrap() = T::one();
        }
        for (v, dofs) in entity_dofs[0].iter_mut().enumerate() {
            dofs.push(v);
        }
    }

    Ok(CiarletElement::create(
        FAMILY,
        cell_type,
        degree,
        vec![],
        coefficients,
        entity_dofs,
        MapType::Identity,
        continuity,
        if continuity == Continuity::Discontinuous {
            tdim
        } else {
            0
        },
        degree,
    ))
}
