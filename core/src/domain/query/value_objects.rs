use std::str::FromStr;

use sea_orm::Order;
use serde::{Deserialize, Serialize};

use super::value::FilterValue;
use crate::domain::common::value_objects::OffsetLimit;

/// One accumulated `{key, value}` pair awaiting strategy application.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCondition {
    pub key: String,
    pub value: FilterValue,
}

impl FilterCondition {
    pub fn new(key: impl Into<String>, value: FilterValue) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Parsed filter parameters, in request order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterParams {
    pub conditions: Vec<FilterCondition>,
}

impl FilterParams {
    pub fn new() -> Self {
        Self {
            conditions: Vec::new(),
        }
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<FilterValue>) {
        self.conditions.push(FilterCondition::new(key, value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

impl<K: Into<String>, V: Into<FilterValue>> FromIterator<(K, V)> for FilterParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            conditions: iter
                .into_iter()
                .map(|(key, value)| FilterCondition::new(key, value.into()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ASC" => Ok(SortDirection::Asc),
            "DESC" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}

impl From<SortDirection> for Order {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        }
    }
}

/// `sort_field` / `sort_direction` request pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortParams {
    pub field: Option<String>,
    pub direction: SortDirection,
}

impl SortParams {
    pub fn new(field: Option<String>, direction: Option<&str>) -> Self {
        Self {
            field: field.filter(|f| !f.trim().is_empty()),
            direction: direction
                .and_then(|d| d.parse().ok())
                .unwrap_or_default(),
        }
    }
}

/// Combined list query (filter, sort, pagination).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    pub filter: FilterParams,
    pub sort: SortParams,
    pub pagination: OffsetLimit,
}
