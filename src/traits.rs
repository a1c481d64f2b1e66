//! Trait definitions

mod element;

pub use element::{ElementRef, FiniteElement};
