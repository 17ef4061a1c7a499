//! Feature encoder: validated request → [`FeatureVector`]

use super::layout::{district_index, DISTRICT_COUNT, FEATURE_COUNT, TOWN_BUCKETS};
use super::town::town_bucket;
use super::vector::FeatureVector;
use crate::error::ValuationError;
use crate::models::valuation::ValuationRequest;

/// Pure function of the request and the static layout tables.
///
/// Expects a request that already passed validation; an unknown district
/// encodes as an all-zero district block.
pub fn encode(req: &ValuationRequest) -> Result<FeatureVector, ValuationError> {
    let mut features = Vec::with_capacity(FEATURE_COUNT);

    features.extend_from_slice(&[
        req.baths as f64,
        req.beds as f64,
        req.land_size,
        req.house_size,
    ]);

    let district = district_index(&req.district);
    features.extend((0..DISTRICT_COUNT).map(|i| one_hot(district == Some(i))));

    let bucket = town_bucket(&req.town);
    features.extend((0..TOWN_BUCKETS).map(|i| one_hot(i == bucket)));

    FeatureVector::from_values(features)
}

fn one_hot(hit: bool) -> f64 {
    if hit { 1.0 } else { 0.0 }
}
