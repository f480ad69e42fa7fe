use chrono::{NaiveDateTime, TimeDelta};
use sea_orm::{
    ColumnTrait, ColumnType, Condition, Value,
    sea_query::{Expr, Func, SimpleExpr},
};

use super::value::FilterValue;

/// Predicate construction bound to one column (or a small group of columns).
#[derive(Debug, Clone, PartialEq)]
pub enum FilterStrategy<C> {
    Equal(C),
    NotEqual(C),
    /// Case-insensitive substring match.
    Like(C),
    /// Case-insensitive substring match ORed across several columns.
    MultiFieldKeyword(Vec<C>),
    /// `{start, end}` where the end day is included up to 23:59:59.
    DateTimeRange(C),
    /// `{min, max}`, both bounds inclusive and optional.
    ValueRange(C),
    In(C),
    Boolean(C),
}

impl<C: ColumnTrait> FilterStrategy<C> {
    pub fn name(&self) -> &'static str {
        match self {
            FilterStrategy::Equal(_) => "equal",
            FilterStrategy::NotEqual(_) => "not_equal",
            FilterStrategy::Like(_) => "like",
            FilterStrategy::MultiFieldKeyword(_) => "multi_field_keyword",
            FilterStrategy::DateTimeRange(_) => "datetime_range",
            FilterStrategy::ValueRange(_) => "value_range",
            FilterStrategy::In(_) => "in",
            FilterStrategy::Boolean(_) => "boolean",
        }
    }

    pub fn validate(&self, value: &FilterValue) -> bool {
        if value.is_empty() {
            return false;
        }

        match self {
            FilterStrategy::DateTimeRange(_) => matches!(
                value,
                FilterValue::DateRange { start, end } if start.is_some() || end.is_some()
            ),
            FilterStrategy::ValueRange(_) => matches!(
                value,
                FilterValue::ValueRange { min, max } if min.is_some() || max.is_some()
            ),
            FilterStrategy::In(_) => matches!(value, FilterValue::List(items) if !items.is_empty()),
            _ => true,
        }
    }

    /// Builds the predicate for `value`, or `None` when the value does not
    /// fit the strategy or the column type.
    pub fn condition(&self, value: &FilterValue) -> Option<Condition> {
        let expr = match self {
            FilterStrategy::Equal(column) => column.eq(coerce(column, value)?),
            FilterStrategy::NotEqual(column) => column.ne(coerce(column, value)?),
            FilterStrategy::Like(column) => contains_ignore_case(column, &value.as_text()?),
            FilterStrategy::MultiFieldKeyword(columns) => {
                let keyword = value.as_text()?;
                if columns.is_empty() {
                    return None;
                }
                let any = columns
                    .iter()
                    .fold(Condition::any(), |any, column| {
                        any.add(contains_ignore_case(column, &keyword))
                    });
                return Some(Condition::all().add(any));
            }
            FilterStrategy::DateTimeRange(column) => {
                let FilterValue::DateRange { start, end } = value else {
                    return None;
                };
                let (lower, upper) = inclusive_day_bounds(*start, *end);
                let mut condition = Condition::all();
                if let Some(lower) = lower {
                    condition = condition.add(column.gte(lower));
                }
                if let Some(upper) = upper {
                    condition = condition.add(column.lte(upper));
                }
                return (lower.is_some() || upper.is_some()).then_some(condition);
            }
            FilterStrategy::ValueRange(column) => {
                let FilterValue::ValueRange { min, max } = value else {
                    return None;
                };
                let lower = min.as_deref().and_then(|v| coerce(column, v));
                let upper = max.as_deref().and_then(|v| coerce(column, v));
                if lower.is_none() && upper.is_none() {
                    return None;
                }
                let mut condition = Condition::all();
                if let Some(lower) = lower {
                    condition = condition.add(column.gte(lower));
                }
                if let Some(upper) = upper {
                    condition = condition.add(column.lte(upper));
                }
                return Some(condition);
            }
            FilterStrategy::In(column) => {
                let FilterValue::List(items) = value else {
                    return None;
                };
                let values: Vec<Value> = items.iter().filter_map(|v| coerce(column, v)).collect();
                if values.is_empty() {
                    return None;
                }
                column.is_in(values)
            }
            FilterStrategy::Boolean(column) => {
                let flag = value.as_bool()?;
                column.eq(coerce(column, &FilterValue::Bool(flag))?)
            }
        };

        Some(Condition::all().add(expr))
    }
}

/// `[start, end + 1 day - 1 second]`, so an end date covers its whole day.
pub fn inclusive_day_bounds(
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
) -> (Option<NaiveDateTime>, Option<NaiveDateTime>) {
    let upper = end.and_then(|end| {
        end.checked_add_signed(TimeDelta::days(1))
            .and_then(|next| next.checked_sub_signed(TimeDelta::seconds(1)))
    });
    (start, upper)
}

fn contains_ignore_case<C: ColumnTrait>(column: &C, keyword: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(column.as_column_ref())))
        .like(format!("%{}%", keyword.to_lowercase()))
}

/// Converts a request value into the storage value the column expects.
fn coerce<C: ColumnTrait>(column: &C, value: &FilterValue) -> Option<Value> {
    match column.def().get_column_type() {
        ColumnType::Uuid => value.as_uuid().map(Value::from),
        ColumnType::SmallInteger => value
            .as_i64()
            .and_then(|v| i16::try_from(v).ok())
            .map(Value::from),
        ColumnType::Integer => value
            .as_i64()
            .and_then(|v| i32::try_from(v).ok())
            .map(Value::from),
        ColumnType::BigInteger => value.as_i64().map(Value::from),
        ColumnType::Float | ColumnType::Double => value.as_f64().map(Value::from),
        ColumnType::Boolean => value.as_bool().map(Value::from),
        ColumnType::DateTime | ColumnType::Timestamp => value.as_datetime().map(Value::from),
        _ => value.as_text().map(Value::from),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryTrait};

    use super::*;
    use crate::entity::sys_user::{Column, Entity};

    fn day(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .expect("valid date")
    }

    fn sql_for(strategy: &FilterStrategy<Column>, value: &FilterValue) -> Option<String> {
        strategy.condition(value).map(|condition| {
            Entity::find()
                .filter(condition)
                .build(DbBackend::Postgres)
                .to_string()
        })
    }

    #[test]
    fn test_end_bound_covers_the_whole_day() {
        let (start, end) = inclusive_day_bounds(Some(day(2024, 1, 1)), Some(day(2024, 1, 31)));
        assert_eq!(start, Some(day(2024, 1, 1)));
        let end = end.expect("end bound");
        assert_eq!(end.to_string(), "2024-01-31 23:59:59");
        assert!(end < day(2024, 2, 1));
    }

    #[test]
    fn test_equal_coerces_text_to_small_integer() {
        let sql = sql_for(&FilterStrategy::Equal(Column::Status), &FilterValue::from("1"))
            .expect("condition");
        assert!(sql.contains(r#""sys_user"."status" = 1"#), "{sql}");
    }

    #[test]
    fn test_equal_rejects_malformed_uuid() {
        assert!(
            sql_for(&FilterStrategy::Equal(Column::DeptId), &FilterValue::from("abc")).is_none()
        );
    }

    #[test]
    fn test_like_is_case_insensitive() {
        let sql = sql_for(&FilterStrategy::Like(Column::Username), &FilterValue::from("AdM"))
            .expect("condition");
        assert!(sql.contains(r#"LOWER("sys_user"."username") LIKE '%adm%'"#), "{sql}");
    }

    #[test]
    fn test_keyword_ors_across_columns() {
        let strategy = FilterStrategy::MultiFieldKeyword(vec![Column::Username, Column::Mobile]);
        let sql = sql_for(&strategy, &FilterValue::from("13")).expect("condition");
        assert!(sql.contains(" OR "), "{sql}");
        assert!(sql.contains(r#"LOWER("sys_user"."mobile") LIKE '%13%'"#), "{sql}");
    }

    #[test]
    fn test_in_requires_a_non_empty_list() {
        let strategy = FilterStrategy::In(Column::Status);
        assert!(!strategy.validate(&FilterValue::List(vec![])));
        assert!(!strategy.validate(&FilterValue::Int(1)));
        assert!(strategy.validate(&FilterValue::from(vec![1, 2])));

        let sql = sql_for(&strategy, &FilterValue::from(vec![1, 2])).expect("condition");
        assert!(sql.contains(r#""sys_user"."status" IN (1, 2)"#), "{sql}");
    }

    #[test]
    fn test_value_range_keeps_only_given_bounds() {
        let strategy = FilterStrategy::ValueRange(Column::Gender);
        let value = FilterValue::value_range(Some(FilterValue::Int(1)), None);
        let sql = sql_for(&strategy, &value).expect("condition");
        assert!(sql.contains(r#""sys_user"."gender" >= 1"#), "{sql}");
        assert!(!sql.contains("<="), "{sql}");
    }

    #[test]
    fn test_boolean_maps_onto_small_integer_column() {
        let strategy = FilterStrategy::Boolean(Column::IsDeleted);
        let sql = sql_for(&strategy, &FilterValue::from("yes")).expect("condition");
        assert!(sql.contains(r#""sys_user"."is_deleted" = 1"#), "{sql}");
    }

    #[test]
    fn test_range_strategies_validate_shape() {
        let date_range = FilterStrategy::DateTimeRange(Column::CreateTime);
        assert!(!date_range.validate(&FilterValue::from("2024-01-01")));
        assert!(!date_range.validate(&FilterValue::date_range(None, None)));
        assert!(date_range.validate(&FilterValue::date_range(Some(day(2024, 1, 1)), None)));
    }
}
