//! Validation Module - business rules applied to a typed request
//!
//! Runs after parse/coercion and before any encoding work. Every violated
//! rule is collected so the caller sees all problems in one response.

pub mod ranges;
pub mod rules;

pub use ranges::{ValidationRange, VALIDATION_RANGES};
pub use rules::{validate, ValidationResult};
