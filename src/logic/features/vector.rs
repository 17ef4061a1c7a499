//! Feature Vector - model input
//!
//! Length is checked on construction so a vector that exists always has
//! the shape the model expects.

use serde::Serialize;

use super::layout::{
    layout_hash, FEATURE_COUNT, FEATURE_VERSION, DISTRICT_COUNT, DISTRICT_OFFSET,
    TOWN_BUCKETS, TOWN_OFFSET,
};
use crate::error::ValuationError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureVector {
    /// Feature layout version
    pub version: u8,
    /// CRC32 hash of the feature layout
    pub layout_hash: u32,
    values: Vec<f64>,
}

impl FeatureVector {
    /// Wrap raw values, rejecting any length other than [`FEATURE_COUNT`]
    pub fn from_values(values: Vec<f64>) -> Result<Self, ValuationError> {
        if values.len() != FEATURE_COUNT {
            return Err(ValuationError::FeatureCountMismatch {
                expected: FEATURE_COUNT,
                actual: values.len(),
            });
        }

        Ok(Self {
            version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            values,
        })
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Baths, Beds, Land_size, House_size
    pub fn numeric(&self) -> &[f64] {
        &self.values[..DISTRICT_OFFSET]
    }

    pub fn district_slots(&self) -> &[f64] {
        &self.values[DISTRICT_OFFSET..DISTRICT_OFFSET + DISTRICT_COUNT]
    }

    pub fn town_slots(&self) -> &[f64] {
        &self.values[TOWN_OFFSET..TOWN_OFFSET + TOWN_BUCKETS]
    }

    /// Values narrowed for f32 runtimes
    pub fn to_f32(&self) -> Vec<f32> {
        self.values.iter().map(|v| *v as f32).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_length_rejected() {
        match FeatureVector::from_values(vec![0.0; FEATURE_COUNT - 1]) {
            Err(ValuationError::FeatureCountMismatch { expected, actual }) => {
                assert_eq!(expected, FEATURE_COUNT);
                assert_eq!(actual, FEATURE_COUNT - 1);
            }
            other => panic!("expected mismatch, got {:?}", other),
        }
        assert!(FeatureVector::from_values(vec![0.0; FEATURE_COUNT + 1]).is_err());
    }

    #[test]
    fn test_block_views() {
        let mut values = vec![0.0; FEATURE_COUNT];
        values[0] = 2.0;
        values[DISTRICT_OFFSET + 1] = 1.0;
        values[TOWN_OFFSET + 218] = 1.0;
        let vector = FeatureVector::from_values(values).unwrap();

        assert_eq!(vector.numeric(), &[2.0, 0.0, 0.0, 0.0]);
        assert_eq!(vector.district_slots().len(), DISTRICT_COUNT);
        assert_eq!(vector.district_slots()[1], 1.0);
        assert_eq!(vector.town_slots().len(), TOWN_BUCKETS);
        assert_eq!(vector.town_slots()[218], 1.0);
        assert_eq!(vector.version, FEATURE_VERSION);
    }
}
