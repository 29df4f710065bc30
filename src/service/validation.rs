//! Request validation for car payloads.

use crate::error::ValidationError;
use crate::model::NewCar;
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::OnceLock;

const NAME_PATTERN: &str = "^[A-Za-z0-9 ]+$";
const YEAR_MIN: i64 = 1000;
const YEAR_MAX: i64 = 9999;

pub struct CarValidator;

impl CarValidator {
    /// Validate an untyped body and normalize it. Name, year and image are checked in that
    /// order and the first failure wins. A body that is not a JSON object has no fields.
    pub fn validate(body: &Value) -> Result<NewCar, ValidationError> {
        let empty = Map::new();
        let fields = body.as_object().unwrap_or(&empty);

        let car_name = validate_name(fields.get("carName"))?;
        let car_year = validate_year(fields.get("carYear"))?;
        let car_image = validate_image(fields.get("carImage"))?;
        Ok(NewCar {
            car_name,
            car_year,
            car_image,
        })
    }
}

fn name_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // NAME_PATTERN is a literal; a compile failure is a bug, not bad input.
    RE.get_or_init(|| Regex::new(NAME_PATTERN).expect("NAME_PATTERN is a valid regex"))
}

fn validate_name(v: Option<&Value>) -> Result<String, ValidationError> {
    let s = v.and_then(Value::as_str).ok_or(ValidationError::InvalidName)?;
    if !name_pattern().is_match(s) {
        return Err(ValidationError::InvalidName);
    }
    Ok(s.to_string())
}

/// Year must render as exactly four digits: an integral number in 1000..=9999, or a string of
/// four ASCII digits with the same value.
fn validate_year(v: Option<&Value>) -> Result<i64, ValidationError> {
    let year = match v {
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                i
            } else {
                let f = n.as_f64().ok_or(ValidationError::InvalidYear)?;
                if !f.is_finite() || f.fract() != 0.0 {
                    return Err(ValidationError::InvalidYear);
                }
                f as i64
            }
        }
        Some(Value::String(s)) => {
            if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ValidationError::InvalidYear);
            }
            s.parse::<i64>().map_err(|_| ValidationError::InvalidYear)?
        }
        _ => return Err(ValidationError::InvalidYear),
    };
    if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
        return Err(ValidationError::InvalidYear);
    }
    Ok(year)
}

// No URL-shape check: any non-empty string is an image reference.
fn validate_image(v: Option<&Value>) -> Result<String, ValidationError> {
    match v.and_then(Value::as_str) {
        Some(s) if !s.is_empty() => Ok(s.to_string()),
        _ => Err(ValidationError::InvalidImage),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(name: Value, year: Value, image: Value) -> Value {
        json!({ "carName": name, "carYear": year, "carImage": image })
    }

    #[test]
    fn name_pattern_compiles() {
        assert!(name_pattern().is_match("Model 3"));
        assert!(!name_pattern().is_match(""));
    }

    #[test]
    fn accepts_well_formed_car() {
        let car = CarValidator::validate(&body(json!("Model 3"), json!(2024), json!("http://x/y.png"))).unwrap();
        assert_eq!(
            car,
            NewCar {
                car_name: "Model 3".into(),
                car_year: 2024,
                car_image: "http://x/y.png".into(),
            }
        );
    }

    #[test]
    fn name_rules() {
        for bad in [json!("Civic!"), json!(""), json!(42), json!(null), json!("Ré"), json!("a-b")] {
            assert_eq!(
                CarValidator::validate(&body(bad.clone(), json!(2024), json!("img"))),
                Err(ValidationError::InvalidName),
                "{bad}"
            );
        }
        assert!(CarValidator::validate(&body(json!("   "), json!(2024), json!("img"))).is_ok());
    }

    #[test]
    fn year_rules() {
        for bad in [
            json!(99),
            json!(10000),
            json!("abcd"),
            json!(-999),
            json!(1999.5),
            json!("0123"),
            json!(" 202"),
            json!(true),
            json!([2024]),
            json!(null),
            json!(0),
        ] {
            assert_eq!(
                CarValidator::validate(&body(json!("Golf"), bad.clone(), json!("img"))),
                Err(ValidationError::InvalidYear),
                "{bad}"
            );
        }
        for (good, expected) in [(json!(2024), 2024), (json!(1000), 1000), (json!(9999), 9999), (json!("1987"), 1987), (json!(2024.0), 2024)] {
            let car = CarValidator::validate(&body(json!("Golf"), good, json!("img"))).unwrap();
            assert_eq!(car.car_year, expected);
        }
    }

    #[test]
    fn image_is_any_non_empty_string() {
        assert!(CarValidator::validate(&body(json!("Golf"), json!(2024), json!("not a url"))).is_ok());
        for bad in [json!(""), json!(1), json!({"url": "x"})] {
            assert_eq!(
                CarValidator::validate(&body(json!("Golf"), json!(2024), bad)),
                Err(ValidationError::InvalidImage)
            );
        }
        assert_eq!(
            CarValidator::validate(&json!({"carName": "Golf", "carYear": 2024})),
            Err(ValidationError::InvalidImage)
        );
    }

    #[test]
    fn first_failure_wins() {
        assert_eq!(
            CarValidator::validate(&body(json!("bad!"), json!(1), json!(""))),
            Err(ValidationError::InvalidName)
        );
        assert_eq!(
            CarValidator::validate(&body(json!("ok"), json!(1), json!(""))),
            Err(ValidationError::InvalidYear)
        );
    }

    #[test]
    fn non_object_body_has_no_fields() {
        assert_eq!(CarValidator::validate(&json!([1, 2])), Err(ValidationError::InvalidName));
        assert_eq!(CarValidator::validate(&Value::Null), Err(ValidationError::InvalidName));
    }
}
