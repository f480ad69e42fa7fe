use std::fmt;
use std::str::FromStr;

/// Operator suffix of a `field__operator` filter key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterOperator {
    Eq,    // equals (default for bare field names)
    Ne,    // not equals
    Like,  // case-insensitive substring
    Range, // {min, max}
    In,    // membership list
}

impl FilterOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOperator::Eq => "eq",
            FilterOperator::Ne => "ne",
            FilterOperator::Like => "like",
            FilterOperator::Range => "range",
            FilterOperator::In => "in",
        }
    }
}

impl FromStr for FilterOperator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" => Ok(FilterOperator::Eq),
            "ne" => Ok(FilterOperator::Ne),
            "like" => Ok(FilterOperator::Like),
            "range" => Ok(FilterOperator::Range),
            "in" => Ok(FilterOperator::In),
            _ => Err(()),
        }
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed filter key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterKey {
    pub field: String,
    pub operator: FilterOperator,
}

impl FilterKey {
    pub fn new(field: impl Into<String>, operator: FilterOperator) -> Self {
        Self {
            field: field.into(),
            operator,
        }
    }

    /// Splits `status__eq` into its parts. A key without a `__` suffix is a
    /// bare field name and means equality. Unknown operators don't parse.
    pub fn parse(key: &str) -> Option<Self> {
        match key.rsplit_once("__") {
            Some((field, operator)) if !field.is_empty() => operator
                .parse::<FilterOperator>()
                .ok()
                .map(|operator| Self::new(field, operator)),
            Some(_) => None,
            None if key.is_empty() => None,
            None => Some(Self::new(key, FilterOperator::Eq)),
        }
    }

    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}__{}", self.field, self.operator)
    }
}
