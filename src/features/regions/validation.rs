//! Field rules for region create/update payloads.
//!
//! | Field | Rule |
//! |-------|------|
//! | `code`, `name` | not blank |
//! | `area` | > 0 |
//! | `lat` | != 0 |
//! | `long` | > 0 |
//! | `population` | >= 0 |

use std::borrow::Cow;

use validator::{Validate, ValidationError};

use crate::features::regions::models::RegionAttributes;
use crate::shared::types::FieldError;

/// Order in which field errors are reported
const FIELD_ORDER: [&str; 6] = ["code", "name", "area", "lat", "long", "population"];

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message(Cow::Borrowed("Cannot be null, empty or white space")));
    }
    Ok(())
}

/// Check region attributes against the field rules.
///
/// Returns one entry per violated rule; an empty list means the attributes are valid.
pub fn validate_region(attributes: &RegionAttributes) -> Vec<FieldError> {
    let mut errors: Vec<FieldError> = match attributes.validate() {
        Ok(()) => Vec::new(),
        Err(e) => e
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errors)| {
                field_errors.iter().map(move |err| {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string());
                    FieldError::new(field.to_string(), message)
                })
            })
            .collect(),
    };

    // `validator` has no "not equal" rule for numbers
    if attributes.lat == 0.0 {
        errors.push(FieldError::new("lat", "Lat cannot be equal to zero"));
    }

    errors.sort_by_key(|e| {
        FIELD_ORDER
            .iter()
            .position(|f| *f == e.field)
            .unwrap_or(FIELD_ORDER.len())
    });
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wellington() -> RegionAttributes {
        RegionAttributes {
            code: "WLG".to_string(),
            name: "Wellington".to_string(),
            area: 227755.0,
            lat: -41.28,
            long: 174.77,
            population: 212700,
        }
    }

    fn fields(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn test_valid_region_has_no_errors() {
        assert!(validate_region(&wellington()).is_empty());
    }

    #[test]
    fn test_blank_code_and_name() {
        let attrs = RegionAttributes {
            code: "   ".to_string(),
            name: String::new(),
            ..wellington()
        };
        let errors = validate_region(&attrs);
        assert_eq!(fields(&errors), vec!["code", "name"]);
        assert_eq!(errors[0].message, "Cannot be null, empty or white space");
    }

    #[test]
    fn test_area_must_be_strictly_positive() {
        let attrs = RegionAttributes {
            area: 0.0,
            ..wellington()
        };
        let errors = validate_region(&attrs);
        assert_eq!(fields(&errors), vec!["area"]);
        assert_eq!(errors[0].message, "Area must be greater than zero");
    }

    #[test]
    fn test_lat_must_not_be_zero() {
        let attrs = RegionAttributes {
            lat: 0.0,
            ..wellington()
        };
        assert_eq!(fields(&validate_region(&attrs)), vec!["lat"]);

        // negative latitudes are fine
        let attrs = RegionAttributes {
            lat: -10.0,
            ..wellington()
        };
        assert!(validate_region(&attrs).is_empty());
    }

    #[test]
    fn test_long_must_be_strictly_positive() {
        let attrs = RegionAttributes {
            long: -1.0,
            ..wellington()
        };
        assert_eq!(fields(&validate_region(&attrs)), vec!["long"]);
    }

    #[test]
    fn test_population_zero_is_allowed() {
        let attrs = RegionAttributes {
            population: 0,
            ..wellington()
        };
        assert!(validate_region(&attrs).is_empty());

        let attrs = RegionAttributes {
            population: -1,
            ..wellington()
        };
        assert_eq!(fields(&validate_region(&attrs)), vec!["population"]);
    }

    #[test]
    fn test_all_rules_reported_in_field_order() {
        let attrs = RegionAttributes {
            code: String::new(),
            name: " ".to_string(),
            area: -5.0,
            lat: 0.0,
            long: 0.0,
            population: -3,
        };
        assert_eq!(
            fields(&validate_region(&attrs)),
            vec!["code", "name", "area", "lat", "long", "population"]
        );
    }
}
