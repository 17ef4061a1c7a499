//! Numeric domain ranges
//!
//! Bounds match the data the model was trained on.

use crate::models::valuation::{
    ValuationRequest, FIELD_BATHS, FIELD_BEDS, FIELD_HOUSE_SIZE, FIELD_LAND_SIZE,
};

/// Closed interval `[min, max]` for one numeric field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationRange {
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
}

impl ValidationRange {
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Value of this range's field on a request
    pub fn value_of(&self, req: &ValuationRequest) -> f64 {
        match self.field {
            FIELD_BATHS => req.baths as f64,
            FIELD_BEDS => req.beds as f64,
            FIELD_LAND_SIZE => req.land_size,
            _ => req.house_size,
        }
    }

    pub fn message(&self) -> String {
        format!("{} must be between {} and {}", self.field, self.min, self.max)
    }
}

pub const VALIDATION_RANGES: [ValidationRange; 4] = [
    ValidationRange { field: FIELD_BATHS, min: 1.0, max: 10.0 },
    ValidationRange { field: FIELD_BEDS, min: 2.0, max: 20.0 },
    ValidationRange { field: FIELD_LAND_SIZE, min: 40.0, max: 1000.0 },     // perches
    ValidationRange { field: FIELD_HOUSE_SIZE, min: 1000.0, max: 10000.0 }, // sq.ft
];
