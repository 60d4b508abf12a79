//! Field value types and the comparison rules used by list queries

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use uuid::Uuid;

/// A polymorphic field value that can hold different types
///
/// Every record exposes its fields as `FieldValue`s so that searching,
/// filtering and sorting can work over any record shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Uuid(Uuid),
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
    Tags(Vec<String>),
    Null,
}

impl FieldValue {
    /// Get the value as a string if possible
    pub fn as_string(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer if possible
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the value as a UUID if possible
    pub fn as_uuid(&self) -> Option<Uuid> {
        match self {
            FieldValue::Uuid(u) => Some(*u),
            _ => None,
        }
    }

    /// Get the value as a tag list if possible
    pub fn as_tags(&self) -> Option<&[String]> {
        match self {
            FieldValue::Tags(tags) => Some(tags),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Case-insensitive substring match used by free-text search.
    ///
    /// `needle` must already be lowercased. Strings, tag lists and dates
    /// (as `YYYY-MM-DD` or RFC 3339 text) take part in free-text search.
    pub fn contains_text(&self, needle: &str) -> bool {
        match self {
            FieldValue::String(s) => s.to_lowercase().contains(needle),
            FieldValue::Tags(tags) => tags.iter().any(|t| t.to_lowercase().contains(needle)),
            FieldValue::Date(_) | FieldValue::DateTime(_) => self
                .canonical_text()
                .is_some_and(|text| text.to_lowercase().contains(needle)),
            _ => false,
        }
    }

    /// Equality filter: does this record value satisfy the accepted value?
    ///
    /// Tag lists pass when they contain the accepted value. A string accepted
    /// value matches any scalar whose canonical text equals it, so filters
    /// coming from query strings (`priority=3`) still apply to typed fields.
    pub fn matches(&self, accepted: &FieldValue) -> bool {
        match (self, accepted) {
            (FieldValue::Tags(tags), FieldValue::String(wanted)) => {
                tags.iter().any(|t| t == wanted)
            }
            (FieldValue::Tags(tags), FieldValue::Tags(wanted)) => {
                wanted.iter().all(|w| tags.contains(w))
            }
            (FieldValue::Integer(a), FieldValue::Float(b))
            | (FieldValue::Float(b), FieldValue::Integer(a)) => {
                cmp_int_float(*a, *b) == Ordering::Equal
            }
            (FieldValue::Date(d), FieldValue::DateTime(dt))
            | (FieldValue::DateTime(dt), FieldValue::Date(d)) => dt.date_naive() == *d,
            (FieldValue::String(a), FieldValue::String(b)) => a == b,
            (value, FieldValue::String(wanted)) => {
                value.canonical_text().is_some_and(|text| &text == wanted)
            }
            (a, b) => a == b,
        }
    }

    /// Total order used when sorting records.
    ///
    /// Values are ranked by kind first, then compared within their kind.
    /// Strings compare case-sensitively, numbers numerically and dates
    /// chronologically.
    pub fn total_cmp(&self, other: &FieldValue) -> Ordering {
        let rank = self.kind_rank().cmp(&other.kind_rank());
        if rank != Ordering::Equal {
            return rank;
        }

        match (self, other) {
            (FieldValue::Boolean(a), FieldValue::Boolean(b)) => a.cmp(b),
            (FieldValue::String(a), FieldValue::String(b)) => a.cmp(b),
            (FieldValue::Uuid(a), FieldValue::Uuid(b)) => a.cmp(b),
            (FieldValue::Tags(a), FieldValue::Tags(b)) => a.cmp(b),
            (FieldValue::Integer(a), FieldValue::Integer(b)) => a.cmp(b),
            (FieldValue::Float(a), FieldValue::Float(b)) => cmp_float(*a, *b),
            (FieldValue::Integer(a), FieldValue::Float(b)) => cmp_int_float(*a, *b),
            (FieldValue::Float(a), FieldValue::Integer(b)) => cmp_int_float(*b, *a).reverse(),
            (a, b) => match (a.as_instant(), b.as_instant()) {
                (Some(x), Some(y)) => x.cmp(&y),
                _ => Ordering::Equal,
            },
        }
    }

    /// Convert a JSON value into a field value.
    ///
    /// Strings that look like RFC 3339 timestamps or `YYYY-MM-DD` dates are
    /// parsed so they sort chronologically. Nested objects are not queryable
    /// and become `Null`.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null | Value::Object(_) => FieldValue::Null,
            Value::Bool(b) => FieldValue::Boolean(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => FieldValue::Integer(i),
                None => n.as_f64().map_or(FieldValue::Null, FieldValue::Float),
            },
            Value::String(s) => Self::parse_text(s),
            Value::Array(items) => FieldValue::Tags(
                items
                    .iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s.clone()),
                        Value::Number(n) => Some(n.to_string()),
                        Value::Bool(b) => Some(b.to_string()),
                        _ => None,
                    })
                    .collect(),
            ),
        }
    }

    /// Parse a free-form string, recognizing dates and timestamps
    pub fn parse_text(s: &str) -> Self {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return FieldValue::DateTime(dt.with_timezone(&Utc));
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return FieldValue::Date(date);
        }
        FieldValue::String(s.to_string())
    }

    fn kind_rank(&self) -> u8 {
        match self {
            FieldValue::Null => 0,
            FieldValue::Boolean(_) => 1,
            FieldValue::Integer(_) | FieldValue::Float(_) => 2,
            FieldValue::String(_) => 3,
            FieldValue::Date(_) | FieldValue::DateTime(_) => 4,
            FieldValue::Uuid(_) => 5,
            FieldValue::Tags(_) => 6,
        }
    }

    fn as_instant(&self) -> Option<DateTime<Utc>> {
        match self {
            FieldValue::DateTime(dt) => Some(*dt),
            FieldValue::Date(d) => Some(d.and_time(NaiveTime::MIN).and_utc()),
            _ => None,
        }
    }

    fn canonical_text(&self) -> Option<String> {
        match self {
            FieldValue::String(s) => Some(s.clone()),
            FieldValue::Integer(i) => Some(i.to_string()),
            FieldValue::Float(f) => Some(f.to_string()),
            FieldValue::Boolean(b) => Some(b.to_string()),
            FieldValue::Uuid(u) => Some(u.to_string()),
            FieldValue::Date(d) => Some(d.format("%Y-%m-%d").to_string()),
            FieldValue::DateTime(dt) => Some(dt.to_rfc3339()),
            FieldValue::Tags(_) | FieldValue::Null => None,
        }
    }
}

// Floats order numerically with -0.0 equal to 0.0, so that integer zero
// stays equal to both. NaN sorts by sign past every number.
fn cmp_float(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}

// Exact comparison of an integer with a float, without rounding the integer
// through `f64`.
fn cmp_int_float(i: i64, f: f64) -> Ordering {
    const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

    if f.is_nan() {
        return if f.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    if f >= TWO_POW_63 {
        return Ordering::Less;
    }
    if f < -TWO_POW_63 {
        return Ordering::Greater;
    }

    let whole = f.trunc();
    match i.cmp(&(whole as i64)) {
        Ordering::Equal if f > whole => Ordering::Less,
        Ordering::Equal if f < whole => Ordering::Greater,
        ordering => ordering,
    }
}

/// Conversion of typed record fields into [`FieldValue`]
pub trait ToFieldValue {
    fn to_field_value(&self) -> FieldValue;
}

impl ToFieldValue for FieldValue {
    fn to_field_value(&self) -> FieldValue {
        self.clone()
    }
}

impl ToFieldValue for String {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::String(self.clone())
    }
}

impl ToFieldValue for &str {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::String((*self).to_string())
    }
}

impl ToFieldValue for bool {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Boolean(*self)
    }
}

impl ToFieldValue for f64 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Float(*self)
    }
}

impl ToFieldValue for f32 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Float(f64::from(*self))
    }
}

macro_rules! integer_field_value {
    ($($ty:ty),*) => {
        $(
            impl ToFieldValue for $ty {
                fn to_field_value(&self) -> FieldValue {
                    FieldValue::Integer(i64::from(*self))
                }
            }
        )*
    };
}

integer_field_value!(i8, i16, i32, i64, u8, u16, u32);

impl ToFieldValue for usize {
    fn to_field_value(&self) -> FieldValue {
        i64::try_from(*self).map_or(FieldValue::Float(*self as f64), FieldValue::Integer)
    }
}

impl ToFieldValue for u64 {
    fn to_field_value(&self) -> FieldValue {
        i64::try_from(*self).map_or(FieldValue::Float(*self as f64), FieldValue::Integer)
    }
}

impl ToFieldValue for Uuid {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Uuid(*self)
    }
}

impl ToFieldValue for NaiveDate {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Date(*self)
    }
}

impl ToFieldValue for DateTime<Utc> {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::DateTime(*self)
    }
}

impl ToFieldValue for Vec<String> {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Tags(self.clone())
    }
}

impl<T: ToFieldValue> ToFieldValue for Option<T> {
    fn to_field_value(&self) -> FieldValue {
        self.as_ref().map_or(FieldValue::Null, ToFieldValue::to_field_value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        FieldValue::Date(value)
    }
}
