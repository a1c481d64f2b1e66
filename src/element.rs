//! Finite elements

pub mod ciarlet;
pub mod enriched;
pub mod hdivcurl;
pub mod polynomials;
pub mod reference_cell;
pub mod tensor_product;

pub use ciarlet::CiarletElement;
pub use enriched::EnrichedElement;
pub use hdivcurl::{Embedding, HDivCurlElement};
pub use tensor_product::TensorProductElement;
