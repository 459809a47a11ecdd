use std::collections::BTreeMap;

/// Tag name to value mapping produced for one image
pub type TagMap = BTreeMap<String, TagValue>;

/// Exact fraction as stored in EXIF (numerator / denominator)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rational {
    pub num: i64,
    pub denom: i64,
}

impl Rational {
    pub fn new(num: i64, denom: i64) -> Self {
        Self { num, denom }
    }
}

impl From<exif::Rational> for Rational {
    fn from(value: exif::Rational) -> Self {
        Self::new(i64::from(value.num), i64::from(value.denom))
    }
}

impl From<exif::SRational> for Rational {
    fn from(value: exif::SRational) -> Self {
        Self::new(i64::from(value.num), i64::from(value.denom))
    }
}

/// A single metadata value. EXIF fields are usually arrays, so most
/// variants carry every component of the field.
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    Integers(Vec<i64>),
    Floats(Vec<f64>),
    Text(String),
    Rationals(Vec<Rational>),
    Bytes(Vec<u8>),
    /// Sub-IFD whose tags were resolved separately (GPSInfo)
    Map(TagMap),
}

impl TagValue {
    /// Short name of the variant, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            TagValue::Integers(_) => "integer",
            TagValue::Floats(_) => "float",
            TagValue::Text(_) => "text",
            TagValue::Rationals(_) => "rational",
            TagValue::Bytes(_) => "bytes",
            TagValue::Map(_) => "map",
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            TagValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_rationals(&self) -> Option<&[Rational]> {
        match self {
            TagValue::Rationals(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&TagMap> {
        match self {
            TagValue::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<&exif::Value> for TagValue {
    fn from(value: &exif::Value) -> Self {
        use exif::Value;

        match value {
            Value::Byte(bytes) => TagValue::Bytes(bytes.clone()),
            Value::Undefined(bytes, _) => TagValue::Bytes(bytes.clone()),
            Value::SByte(values) => TagValue::Integers(values.iter().map(|v| i64::from(*v)).collect()),
            Value::Short(values) => TagValue::Integers(values.iter().map(|v| i64::from(*v)).collect()),
            Value::SShort(values) => TagValue::Integers(values.iter().map(|v| i64::from(*v)).collect()),
            Value::Long(values) => TagValue::Integers(values.iter().map(|v| i64::from(*v)).collect()),
            Value::SLong(values) => TagValue::Integers(values.iter().map(|v| i64::from(*v)).collect()),
            Value::Float(values) => TagValue::Floats(values.iter().map(|v| f64::from(*v)).collect()),
            Value::Double(values) => TagValue::Floats(values.clone()),
            Value::Rational(values) => TagValue::Rationals(values.iter().map(|v| Rational::from(*v)).collect()),
            Value::SRational(values) => TagValue::Rationals(values.iter().map(|v| Rational::from(*v)).collect()),
            Value::Ascii(components) => TagValue::Text(ascii_to_string(components)),
            _ => TagValue::Bytes(Vec::new()),
        }
    }
}

fn ascii_to_string(components: &[Vec<u8>]) -> String {
    components
        .iter()
        .map(|component| {
            String::from_utf8_lossy(component)
                .trim_end_matches('\0')
                .to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}
