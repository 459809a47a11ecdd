use serde::Serialize;

use crate::coordinates::{apply_hemisphere, convert_to_degrees, CoordinateError};
use crate::tag_value::{Rational, TagMap, TagValue};

/// The four GPS tags needed to place an image
#[derive(Debug, Clone, PartialEq)]
pub struct GpsFields {
    pub latitude: Vec<Rational>,
    pub latitude_ref: String,
    pub longitude: Vec<Rational>,
    pub longitude_ref: String,
}

impl GpsFields {
    /// Picks the required tags out of a GPSInfo map
    pub fn from_gps_info(gps_info: &TagMap) -> Result<Self, CoordinateError> {
        Ok(Self {
            latitude: rationals(gps_info, "GPSLatitude")?,
            latitude_ref: text(gps_info, "GPSLatitudeRef")?,
            longitude: rationals(gps_info, "GPSLongitude")?,
            longitude_ref: text(gps_info, "GPSLongitudeRef")?,
        })
    }

    /// Signed decimal (latitude, longitude)
    pub fn to_decimal(&self) -> Result<(f64, f64), CoordinateError> {
        let latitude = apply_hemisphere(convert_to_degrees(&self.latitude)?, &self.latitude_ref, "S");
        let longitude = apply_hemisphere(convert_to_degrees(&self.longitude)?, &self.longitude_ref, "W");
        Ok((latitude, longitude))
    }
}

fn required<'a>(gps_info: &'a TagMap, field: &'static str) -> Result<&'a TagValue, CoordinateError> {
    gps_info.get(field).ok_or(CoordinateError::MissingField(field))
}

fn rationals(gps_info: &TagMap, field: &'static str) -> Result<Vec<Rational>, CoordinateError> {
    let value = required(gps_info, field)?;
    value
        .as_rationals()
        .map(<[Rational]>::to_vec)
        .ok_or(CoordinateError::UnexpectedType {
            field,
            expected: "rational",
            found: value.kind(),
        })
}

fn text(gps_info: &TagMap, field: &'static str) -> Result<String, CoordinateError> {
    let value = required(gps_info, field)?;
    value
        .as_text()
        .map(str::to_string)
        .ok_or(CoordinateError::UnexpectedType {
            field,
            expected: "text",
            found: value.kind(),
        })
}

/// One output row: an image and where it was taken
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoPoint {
    #[serde(rename = "Path")]
    pub path: String,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
}

impl GeoPoint {
    pub fn from_gps_fields(path: String, fields: &GpsFields) -> Result<Self, CoordinateError> {
        let (latitude, longitude) = fields.to_decimal()?;
        Ok(Self {
            path,
            latitude,
            longitude,
        })
    }
}
