//! Types used by elements

/// The type of a reference cell
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(u8)]
pub enum ReferenceCell {
    /// A point
    Point = 0,
    /// A line interval
    Interval = 1,
    /// A triangle
    Triangle = 2,
    /// A quadrilateral
    Quadrilateral = 3,
    /// A tetrahedron (whose faces are all triangles)
    Tetrahedron = 4,
    /// A hexahedron (whose faces are all quadrilaterals)
    Hexahedron = 5,
    /// A triangular prism
    Prism = 6,
    /// A square-based pyramid
    Pyramid = 7,
}

impl ReferenceCell {
    /// Create a reference cell type from a u8
    pub fn from(i: u8) -> Option<ReferenceCell> {
        match i {
            0 => Some(ReferenceCell::Point),
            1 => Some(ReferenceCell::Interval),
            2 => Some(ReferenceCell::Triangle),
            3 => Some(ReferenceCell::Quadrilateral),
            4 => Some(ReferenceCell::Tetrahedron),
            5 => Some(ReferenceCell::Hexahedron),
            6 => Some(ReferenceCell::Prism),
            7 => Some(ReferenceCell::Pyramid),
            _ => None,
        }
    }
}

/// The map type used by an element
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(u8)]
pub enum MapType {
    /// Identity map
    Identity = 0,
    /// Covariant Piola map
    ///
    /// This map is used by H(curl) elements
    CovariantPiola = 1,
    /// Contravariant Piola map
    ///
    /// This map is used by H(div) elements
    ContravariantPiola = 2,
    /// L2 Piola map
    L2Piola = 3,
}

/// Continuity type
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(u8)]
pub enum Continuity {
    /// The element has standard continuity between cells
    Continuous = 0,
    /// The element is discontinuous between cells
    Discontinuous = 1,
}

/// Errors raised when creating or tabulating an element
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ElementError {
    /// A point or multi-index has the wrong number of entries
    #[error("Dimension mismatch: expected {expected}, found {actual}")]
    DimensionMismatch {
        /// The dimension required by the element
        expected: usize,
        /// The dimension that was supplied
        actual: usize,
    },
    /// Elements cannot be combined because their value shapes or dimensions differ
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),
    /// Elements cannot be combined because of their map types
    #[error("Map type mismatch: {0}")]
    MapTypeMismatch(String),
    /// An element has the wrong form degree for a H(div) or H(curl) embedding
    #[error("Invalid form degree: expected {expected}, found {actual:?}")]
    InvalidFormDegree {
        /// The form degree required by the embedding
        expected: usize,
        /// The form degree of the element
        actual: Option<usize>,
    },
    /// A derivative order that an element cannot tabulate was requested
    #[error("Unsupported derivative order {requested} (maximum {maximum})")]
    UnsupportedOrder {
        /// The requested number of derivatives
        requested: usize,
        /// The highest number of derivatives the element supports
        maximum: usize,
    },
    /// An element of this degree is not implemented
    #[error("Unsupported degree {degree} for {family} element on {cell:?}")]
    UnsupportedDegree {
        /// The element family
        family: &'static str,
        /// The reference cell
        cell: ReferenceCell,
        /// The requested degree
        degree: usize,
    },
    /// An element is not implemented on this cell
    #[error("Unsupported cell {cell:?} for {family} element")]
    UnsupportedCell {
        /// The element family
        family: &'static str,
        /// The reference cell
        cell: ReferenceCell,
    },
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_reference_cell_type() {
        for cell in [
            ReferenceCell::Point,
            ReferenceCell::Interval,
            ReferenceCell::Triangle,
            ReferenceCell::Quadrilateral,
            ReferenceCell::Tetrahedron,
            ReferenceCell::Hexahedron,
            ReferenceCell::Prism,
            ReferenceCell::Pyramid,
        ] {
            assert_eq!(cell, ReferenceCell::from(cell as u8).unwrap());
        }
        assert_eq!(ReferenceCell::from(8), None);
    }

    #[test]
    fn test_error_messages() {
        let e = ElementError::DimensionMismatch {
            expected: 3,
            actual: 2,
        };
        assert_eq!(e.to_string(), "Dimension mismatch: expected 3, found 2");
        let e = ElementError::UnsupportedOrder {
            requested: 4,
            maximum: 2,
        };
        assert_eq!(e.to_string(), "Unsupported derivative order 4 (maximum 2)");
    }
}
