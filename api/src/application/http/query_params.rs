use rbac_admin_core::domain::{
    common::value_objects::OffsetLimit,
    mapping::case::to_snake_case,
    query::{FilterParams, FilterValue, ListQuery, SortParams, value::parse_datetime},
};

/// Upper bound for a single page.
pub const MAX_LIMIT: u64 = 500;

/// Keys that steer the listing itself and never reach the filter mapping.
const RESERVED_KEYS: &[&str] = &[
    "offset",
    "limit",
    "pageNum",
    "pageSize",
    "sort_field",
    "sort_direction",
    "format",
];

/// Which half of a date range a bracketed key carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RangeBound {
    Start,
    End,
}

/// Parses an ordered list of query pairs into a [`ListQuery`].
///
/// Handles formats like:
/// - `status=1`, `username__like=ali` (flat `field__operator` keys)
/// - `dept_id__in=a,b,c` (comma separated lists)
/// - `status__range=0,1` (`min,max`, either side may be empty)
/// - `create_time_range=2024-01-01,2024-01-31`
/// - `create_time_range[start]=2024-01-01&create_time_range[end]=2024-01-31`
/// - `sort_field=createTime&sort_direction=ASC`
/// - `offset=0&limit=20` or `pageNum=1&pageSize=20`
///
/// Anything malformed is passed through or skipped; whether a key means
/// anything is decided by the query builder it ends up in.
pub fn parse_list_query(pairs: &[(String, String)]) -> ListQuery {
    let mut filters: Vec<(String, FilterValue)> = Vec::new();
    let mut sort_field: Option<String> = None;
    let mut sort_direction: Option<String> = None;
    let mut offset: Option<u64> = None;
    let mut limit: Option<u64> = None;
    let mut page_num: Option<u64> = None;
    let mut page_size: Option<u64> = None;

    for (key, value) in pairs {
        let value = value.trim();

        match key.as_str() {
            "offset" => offset = value.parse().ok(),
            "limit" => limit = value.parse().ok(),
            "pageNum" => page_num = value.parse().ok(),
            "pageSize" => page_size = value.parse().ok(),
            "sort_field" => sort_field = Some(to_snake_case(value)),
            "sort_direction" => sort_direction = Some(value.to_string()),
            _ if RESERVED_KEYS.contains(&key.as_str()) => {}
            _ => {
                if let Some((name, bound)) = bracketed_range_key(key) {
                    merge_date_bound(&mut filters, name, bound, value);
                } else {
                    filters.push((key.clone(), filter_value(key, value)));
                }
            }
        }
    }

    ListQuery {
        filter: filters.into_iter().collect::<FilterParams>(),
        sort: SortParams::new(sort_field, sort_direction.as_deref()),
        pagination: pagination(offset, limit, page_num, page_size),
    }
}

fn pagination(
    offset: Option<u64>,
    limit: Option<u64>,
    page_num: Option<u64>,
    page_size: Option<u64>,
) -> OffsetLimit {
    let default = OffsetLimit::default();
    match (page_num, page_size) {
        (Some(page_num), Some(page_size)) if offset.is_none() && limit.is_none() => {
            OffsetLimit::from_page(page_num, page_size.clamp(1, MAX_LIMIT))
        }
        _ => OffsetLimit::new(
            offset.unwrap_or(default.offset),
            limit.unwrap_or(default.limit).clamp(1, MAX_LIMIT),
        ),
    }
}

/// Turns the raw string of a flat key into a [`FilterValue`] by the shape
/// the key asks for.
fn filter_value(key: &str, raw: &str) -> FilterValue {
    if key.ends_with("__in") {
        return FilterValue::List(
            split_list(raw)
                .map(|item| FilterValue::Text(item.to_string()))
                .collect(),
        );
    }

    if key.ends_with("__range") {
        let (min, max) = split_pair(raw);
        return FilterValue::value_range(
            min.map(|v| FilterValue::Text(v.to_string())),
            max.map(|v| FilterValue::Text(v.to_string())),
        );
    }

    if key.ends_with("_range") {
        let (start, end) = split_pair(raw);
        return FilterValue::date_range(
            start.and_then(parse_datetime),
            end.and_then(parse_datetime),
        );
    }

    FilterValue::Text(raw.to_string())
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|item| !item.is_empty())
}

fn non_empty(raw: &str) -> Option<&str> {
    Some(raw.trim()).filter(|s| !s.is_empty())
}

fn split_pair(raw: &str) -> (Option<&str>, Option<&str>) {
    match raw.split_once(',') {
        Some((first, second)) => (non_empty(first), non_empty(second)),
        None => (non_empty(raw), None),
    }
}

/// `create_time_range[start]` → (`create_time_range`, Start).
fn bracketed_range_key(key: &str) -> Option<(&str, RangeBound)> {
    let (name, rest) = key.split_once('[')?;
    if !name.ends_with("_range") {
        return None;
    }
    match rest {
        "start]" => Some((name, RangeBound::Start)),
        "end]" => Some((name, RangeBound::End)),
        _ => None,
    }
}

fn merge_date_bound(
    filters: &mut Vec<(String, FilterValue)>,
    name: &str,
    bound: RangeBound,
    raw: &str,
) {
    let parsed = parse_datetime(raw);
    let position = filters.iter().position(|(key, _)| key == name);

    let (start, end) = match position.map(|index| &filters[index].1) {
        Some(FilterValue::DateRange { start, end }) => (*start, *end),
        _ => (None, None),
    };
    let merged = match bound {
        RangeBound::Start => FilterValue::date_range(parsed, end),
        RangeBound::End => FilterValue::date_range(start, parsed),
    };

    match position {
        Some(index) => filters[index].1 = merged,
        None => filters.push((name.to_string(), merged)),
    }
}
