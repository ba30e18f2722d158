//! `grocer-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup):
//! the error model shared by the product pipeline and the value object marker.

pub mod error;
pub mod value_object;

pub use error::{DomainError, DomainResult, ValidationError, ValidationReason};
pub use value_object::ValueObject;
