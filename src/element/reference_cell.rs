//! Cell definitions

use crate::types::ReferenceCell;

/// The topological dimension of the cell
pub fn dim(cell: ReferenceCell) -> usize {
    match cell {
        ReferenceCell::Point => 0,
        ReferenceCell::Interval => 1,
        ReferenceCell::Triangle => 2,
        ReferenceCell::Quadrilateral => 2,
        ReferenceCell::Tetrahedron => 3,
        ReferenceCell::Hexahedron => 3,
        ReferenceCell::Prism => 3,
        ReferenceCell::Pyramid => 3,
    }
}
/// Is the cell a simplex?
pub fn is_simplex(cell: ReferenceCell) -> bool {
    match cell {
        ReferenceCell::Point => true,
        ReferenceCell::Interval => true,
        ReferenceCell::Triangle => true,
        ReferenceCell::Quadrilateral => false,
        ReferenceCell::Tetrahedron => true,
        ReferenceCell::Hexahedron => false,
        ReferenceCell::Prism => false,
        ReferenceCell::Pyramid => false,
    }
}

/// The number of subentities of each dimension
pub fn entity_counts(cell: ReferenceCell) -> Vec<usize> {
    match cell {
        ReferenceCell::Point => vec![1, 0, 0, 0],
        ReferenceCell::Interval => vec![2, 1, 0, 0],
        ReferenceCell::Triangle => vec![3, 3, 1, 0],
        ReferenceCell::Quadrilateral => vec![4, 4, 1, 0],
        ReferenceCell::Tetrahedron => vec![4, 6, 4, 1],
        ReferenceCell::Hexahedron => vec![8, 12, 6, 1],
        ReferenceCell::Prism => vec![6, 9, 5, 1],
        ReferenceCell::Pyramid => vec![5, 8, 5, 1],
    }
}
