//! Composite finite elements
//!
//! Build new elements from existing ones: tensor products of elements on lower dimensional
//! cells, embeddings of tensor product elements into H(div) and H(curl), and enriched elements
//! whose basis is the union of the bases of several elements.
#![cfg_attr(feature = "strict", deny(warnings))]
#![warn(missing_docs)]

pub mod element;
pub mod multi_index;
pub mod tabulation;
pub mod traits;
pub mod types;
