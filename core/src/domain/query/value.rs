use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;
use uuid::Uuid;

/// A loosely typed filter value as it arrives from the request layer.
///
/// Conversion into a storage value happens later, against the column the
/// strategy is bound to, so a `Text("1")` can still filter a small integer
/// column.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    DateTime(NaiveDateTime),
    List(Vec<FilterValue>),
    DateRange {
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
    },
    ValueRange {
        min: Option<Box<FilterValue>>,
        max: Option<Box<FilterValue>>,
    },
}

impl FilterValue {
    pub fn date_range(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> Self {
        FilterValue::DateRange { start, end }
    }

    pub fn value_range(min: Option<FilterValue>, max: Option<FilterValue>) -> Self {
        FilterValue::ValueRange {
            min: min.filter(|v| !v.is_empty()).map(Box::new),
            max: max.filter(|v| !v.is_empty()).map(Box::new),
        }
    }

    /// `None`, the empty string and the empty list carry no filter.
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Null => true,
            FilterValue::Text(s) => s.is_empty(),
            FilterValue::List(items) => items.is_empty(),
            _ => false,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FilterValue::Int(i) => Some(*i),
            FilterValue::Bool(b) => Some(i64::from(*b)),
            FilterValue::Float(f) if f.fract() == 0.0 => Some(*f as i64),
            FilterValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FilterValue::Int(i) => Some(*i as f64),
            FilterValue::Float(f) => Some(*f),
            FilterValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Tri-state coercion: native booleans, `1`/`0`, and the strings
    /// `true`, `1` and `yes` (any case) as true.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FilterValue::Bool(b) => Some(*b),
            FilterValue::Int(i) => Some(*i == 1),
            FilterValue::Text(s) => Some(matches!(
                s.trim().to_lowercase().as_str(),
                "true" | "1" | "yes"
            )),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<String> {
        match self {
            FilterValue::Text(s) => Some(s.clone()),
            FilterValue::Int(i) => Some(i.to_string()),
            FilterValue::Float(f) => Some(f.to_string()),
            _ => None,
        }
    }

    pub fn as_uuid(&self) -> Option<Uuid> {
        match self {
            FilterValue::Text(s) => Uuid::parse_str(s.trim()).ok(),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            FilterValue::DateTime(dt) => Some(*dt),
            FilterValue::Text(s) => parse_datetime(s),
            _ => None,
        }
    }
}

/// Accepts ISO-8601 date-times (with or without offset, `T` or space
/// separated) and bare `YYYY-MM-DD` dates, which resolve to midnight.
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

impl From<Value> for FilterValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => FilterValue::Null,
            Value::Bool(b) => FilterValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => FilterValue::Int(i),
                None => n.as_f64().map(FilterValue::Float).unwrap_or(FilterValue::Null),
            },
            Value::String(s) => FilterValue::Text(s),
            Value::Array(items) => {
                FilterValue::List(items.into_iter().map(FilterValue::from).collect())
            }
            Value::Object(map) => {
                if map.contains_key("start") || map.contains_key("end") {
                    let bound = |key: &str| {
                        map.get(key)
                            .and_then(Value::as_str)
                            .and_then(parse_datetime)
                    };
                    FilterValue::date_range(bound("start"), bound("end"))
                } else if map.contains_key("min") || map.contains_key("max") {
                    let bound = |key: &str| map.get(key).cloned().map(FilterValue::from);
                    FilterValue::value_range(bound("min"), bound("max"))
                } else {
                    FilterValue::Null
                }
            }
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Int(value)
    }
}

impl From<i32> for FilterValue {
    fn from(value: i32) -> Self {
        FilterValue::Int(i64::from(value))
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Bool(value)
    }
}

impl From<Uuid> for FilterValue {
    fn from(value: Uuid) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<NaiveDateTime> for FilterValue {
    fn from(value: NaiveDateTime) -> Self {
        FilterValue::DateTime(value)
    }
}

impl<T: Into<FilterValue>> From<Option<T>> for FilterValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FilterValue::Null)
    }
}

impl<T: Into<FilterValue>> From<Vec<T>> for FilterValue {
    fn from(value: Vec<T>) -> Self {
        FilterValue::List(value.into_iter().map(Into::into).collect())
    }
}
