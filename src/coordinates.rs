use thiserror::Error;

use crate::tag_value::Rational;

/// Errors raised while turning GPS tags into decimal degrees
#[derive(Error, Debug, PartialEq)]
pub enum CoordinateError {
    #[error("{component} has a zero denominator")]
    ZeroDenominator { component: &'static str },

    #[error("expected degrees, minutes and seconds but found {0} components")]
    WrongComponentCount(usize),

    #[error("GPS block has no {0} tag")]
    MissingField(&'static str),

    #[error("{field} should be {expected} but is {found}")]
    UnexpectedType {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

const COMPONENT_NAMES: [&str; 3] = ["degrees", "minutes", "seconds"];

/// Converts a degrees/minutes/seconds triple of rationals to decimal degrees
pub fn convert_to_degrees(dms: &[Rational]) -> Result<f64, CoordinateError> {
    if dms.len() != 3 {
        return Err(CoordinateError::WrongComponentCount(dms.len()));
    }

    let mut parts = [0.0; 3];
    for (i, value) in dms.iter().enumerate() {
        if value.denom == 0 {
            return Err(CoordinateError::ZeroDenominator {
                component: COMPONENT_NAMES[i],
            });
        }
        parts[i] = value.num as f64 / value.denom as f64;
    }

    let [degrees, minutes, seconds] = parts;
    Ok(degrees + minutes / 60.0 + seconds / 3600.0)
}

/// Negates `value` when `reference` names the negative hemisphere.
///
/// Any other reference, including values outside N/S/E/W, leaves the sign
/// as it is.
pub fn apply_hemisphere(value: f64, reference: &str, negative_ref: &str) -> f64 {
    if reference == negative_ref {
        -value
    } else {
        value
    }
}
