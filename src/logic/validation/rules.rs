//! Range, cross-field and categorical rules

use crate::logic::features::layout::{district_index, DISTRICTS};
use crate::models::valuation::ValuationRequest;

use super::ranges::VALIDATION_RANGES;

/// House sq.ft allowed per perch of land
pub const SQFT_PER_PERCH_CEILING: f64 = 100.0;

/// Minimum livable floor area per bedroom, sq.ft
pub const MIN_SQFT_PER_BEDROOM: f64 = 80.0;

pub const MSG_BATHS_EXCEED_BEDS: &str = "Bathrooms cannot exceed the number of bedrooms";
pub const MSG_BATHS_OVER_HALF: &str = "Bathrooms should not be more than half the bedrooms";
pub const MSG_HOUSE_EXCEEDS_LAND: &str = "House size cannot be larger than available land";
pub const MSG_BEDROOM_TOO_SMALL: &str = "Each bedroom should have at least 80 sq. ft of house size";
pub const MSG_TOWN_EMPTY: &str = "Town must be a non-empty string";

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    Valid,
    Invalid(Vec<String>),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    fn from_errors(errors: Vec<String>) -> Self {
        if errors.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(errors)
        }
    }
}

/// Evaluate every rule; never short-circuits.
pub fn validate(req: &ValuationRequest) -> ValidationResult {
    let mut errors = Vec::new();

    for range in VALIDATION_RANGES.iter() {
        if !range.contains(range.value_of(req)) {
            errors.push(range.message());
        }
    }

    errors.extend(check_logical(req));

    if district_index(&req.district).is_none() {
        errors.push(format!("Invalid district. Must be one of: {}", DISTRICTS.join(", ")));
    }

    if req.town.trim().is_empty() {
        errors.push(MSG_TOWN_EMPTY.to_string());
    }

    ValidationResult::from_errors(errors)
}

/// Real-world consistency between fields
fn check_logical(req: &ValuationRequest) -> Vec<String> {
    let baths = req.baths as f64;
    let beds = req.beds as f64;
    let mut errors = Vec::new();

    if req.baths > req.beds {
        errors.push(MSG_BATHS_EXCEED_BEDS.to_string());
    }
    // Real division: beds=5 allows up to 2 baths, beds=4 allows 2
    if baths > beds / 2.0 {
        errors.push(MSG_BATHS_OVER_HALF.to_string());
    }
    if req.house_size > req.land_size * SQFT_PER_PERCH_CEILING {
        errors.push(MSG_HOUSE_EXCEEDS_LAND.to_string());
    }
    if req.house_size < beds * MIN_SQFT_PER_BEDROOM {
        errors.push(MSG_BEDROOM_TOO_SMALL.to_string());
    }

    errors
}
