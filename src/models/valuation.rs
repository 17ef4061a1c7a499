//! Valuation request/response models
//!
//! The wire format keeps the field casing the frontend already sends
//! (`Baths`, `Beds`, `Land_size`, `House_size`, `district`, `town`).

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ValuationError;

pub const FIELD_BATHS: &str = "Baths";
pub const FIELD_BEDS: &str = "Beds";
pub const FIELD_LAND_SIZE: &str = "Land_size";
pub const FIELD_HOUSE_SIZE: &str = "House_size";
pub const FIELD_DISTRICT: &str = "district";
pub const FIELD_TOWN: &str = "town";

/// Required body fields, in the order missing ones are reported
pub const REQUIRED_FIELDS: &[&str] = &[
    FIELD_BATHS,
    FIELD_BEDS,
    FIELD_LAND_SIZE,
    FIELD_HOUSE_SIZE,
    FIELD_DISTRICT,
    FIELD_TOWN,
];

/// Currency of every predicted price
pub const CURRENCY: &str = "LKR";

/// Typed valuation request, produced by [`ValuationRequest::from_json`]
#[derive(Debug, Clone, PartialEq)]
pub struct ValuationRequest {
    pub baths: i64,
    pub beds: i64,
    /// Perches
    pub land_size: f64,
    /// Square feet
    pub house_size: f64,
    pub district: String,
    /// Raw town as sent; trimmed by validation and encoding
    pub town: String,
}

impl ValuationRequest {
    /// Parse and coerce a raw JSON body.
    ///
    /// Presence is checked first and every absent field is reported at once.
    /// Numeric coercion follows, failing with a single generic error.
    /// Non-string `district`/`town` values coerce to an empty string and are
    /// rejected later by validation with the usual messages.
    pub fn from_json(body: &Value) -> Result<Self, ValuationError> {
        let obj = body.as_object().ok_or_else(|| {
            ValuationError::InvalidBody("Request body must be a JSON object".to_string())
        })?;

        let missing: Vec<String> = REQUIRED_FIELDS
            .iter()
            .filter(|f| !obj.contains_key(**f))
            .map(|f| f.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ValuationError::MissingFields(missing));
        }

        Ok(Self {
            baths: int_field(obj, FIELD_BATHS)?,
            beds: int_field(obj, FIELD_BEDS)?,
            land_size: float_field(obj, FIELD_LAND_SIZE)?,
            house_size: float_field(obj, FIELD_HOUSE_SIZE)?,
            district: string_field(obj, FIELD_DISTRICT),
            town: string_field(obj, FIELD_TOWN),
        })
    }
}

fn int_field(obj: &Map<String, Value>, field: &str) -> Result<i64, ValuationError> {
    obj.get(field)
        .and_then(coerce_int)
        .ok_or(ValuationError::InvalidNumberFormat)
}

fn float_field(obj: &Map<String, Value>, field: &str) -> Result<f64, ValuationError> {
    obj.get(field)
        .and_then(coerce_float)
        .ok_or(ValuationError::InvalidNumberFormat)
}

fn string_field(obj: &Map<String, Value>, field: &str) -> String {
    obj.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}

/// Integers, integral floats (`4.0`) and integer strings. A fractional
/// value such as `10.5` is not a count and is rejected.
fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Numbers and numeric strings
fn coerce_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Successful prediction body
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PredictionResponse {
    pub success: bool,
    pub predicted_price: f64,
    pub currency: &'static str,
    pub features_used: usize,
}

impl PredictionResponse {
    pub fn new(predicted_price: f64, features_used: usize) -> Self {
        Self {
            success: true,
            predicted_price,
            currency: CURRENCY,
            features_used,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "Baths": 2,
            "Beds": 4,
            "Land_size": 100,
            "House_size": 1500,
            "district": "Kandy",
            "town": "Peradeniya"
        })
    }

    #[test]
    fn test_parse_typed_request() {
        let req = ValuationRequest::from_json(&sample()).unwrap();
        assert_eq!(req.baths, 2);
        assert_eq!(req.beds, 4);
        assert_eq!(req.land_size, 100.0);
        assert_eq!(req.house_size, 1500.0);
        assert_eq!(req.district, "Kandy");
        assert_eq!(req.town, "Peradeniya");
    }

    #[test]
    fn test_missing_fields_all_reported() {
        let body = json!({ "Beds": 3, "town": "Kadawatha" });
        match ValuationRequest::from_json(&body) {
            Err(ValuationError::MissingFields(missing)) => {
                assert_eq!(missing, vec!["Baths", "Land_size", "House_size", "district"]);
            }
            other => panic!("expected MissingFields, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_checked_before_coercion() {
        let body = json!({ "Baths": "two", "Beds": 4 });
        assert!(matches!(
            ValuationRequest::from_json(&body),
            Err(ValuationError::MissingFields(_))
        ));
    }

    #[test]
    fn test_null_counts_as_present() {
        let mut body = sample();
        body["Baths"] = Value::Null;
        assert!(matches!(
            ValuationRequest::from_json(&body),
            Err(ValuationError::InvalidNumberFormat)
        ));
    }

    #[test]
    fn test_numeric_strings_coerce() {
        let mut body = sample();
        body["Baths"] = json!(" 3 ");
        body["Land_size"] = json!("120.5");
        let req = ValuationRequest::from_json(&body).unwrap();
        assert_eq!(req.baths, 3);
        assert_eq!(req.land_size, 120.5);
    }

    #[test]
    fn test_integral_float_accepted_for_counts() {
        let mut body = sample();
        body["Beds"] = json!(4.0);
        assert_eq!(ValuationRequest::from_json(&body).unwrap().beds, 4);
    }

    #[test]
    fn test_fractional_counts_rejected() {
        // Neither may be rounded into range ([1,10] and [2,20])
        for (field, value) in [(FIELD_BATHS, 10.5), (FIELD_BEDS, 20.9), (FIELD_BEDS, 5.9)] {
            let mut body = sample();
            body[field] = json!(value);
            assert!(
                matches!(
                    ValuationRequest::from_json(&body),
                    Err(ValuationError::InvalidNumberFormat)
                ),
                "{} = {} should be rejected",
                field,
                value
            );
        }
    }

    #[test]
    fn test_invalid_number_format() {
        for bad in [json!("2.5"), json!("abc"), json!(true), json!([2])] {
            let mut body = sample();
            body["Baths"] = bad;
            assert!(matches!(
                ValuationRequest::from_json(&body),
                Err(ValuationError::InvalidNumberFormat)
            ));
        }

        let mut body = sample();
        body["House_size"] = json!("big");
        assert!(matches!(
            ValuationRequest::from_json(&body),
            Err(ValuationError::InvalidNumberFormat)
        ));
    }

    #[test]
    fn test_non_string_categoricals_become_empty() {
        let mut body = sample();
        body["district"] = json!(5);
        body["town"] = Value::Null;
        let req = ValuationRequest::from_json(&body).unwrap();
        assert_eq!(req.district, "");
        assert_eq!(req.town, "");
    }

    #[test]
    fn test_body_must_be_object() {
        assert!(matches!(
            ValuationRequest::from_json(&json!([1, 2, 3])),
            Err(ValuationError::InvalidBody(_))
        ));
    }

    #[test]
    fn test_prediction_response_shape() {
        let body = serde_json::to_value(PredictionResponse::new(12_500_000.0, 247)).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["currency"], "LKR");
        assert_eq!(body["features_used"], 247);
        assert_eq!(body["predicted_price"], 12_500_000.0);
    }
}
