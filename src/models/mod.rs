//! Request and response models

pub mod valuation;

pub use valuation::*;
