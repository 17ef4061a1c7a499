//! Valuation pipeline: validate → encode → predict

pub mod validation;
pub mod features;
pub mod model;
