use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use sea_orm::{Condition, EntityTrait, Order, QueryFilter, QueryOrder, QuerySelect, Select};
use tracing::debug;

use super::{
    key::{FilterKey, FilterOperator},
    strategy::FilterStrategy,
    value::FilterValue,
    value_objects::{FilterCondition, FilterParams, SortDirection},
};

/// Per-field capabilities used by [`QueryBuilder::auto_register_field_strategies`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldConfig {
    pub field: String,
    pub allow_equal: bool,
    pub allow_not_equal: bool,
    pub allow_like: bool,
    pub allow_range: bool,
    pub allow_in: bool,
    pub allow_sort: bool,
}

impl FieldConfig {
    /// Equality only, the default capability set.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            allow_equal: true,
            allow_not_equal: false,
            allow_like: false,
            allow_range: false,
            allow_in: false,
            allow_sort: false,
        }
    }

    pub fn without_equal(mut self) -> Self {
        self.allow_equal = false;
        self
    }

    pub fn not_equal(mut self) -> Self {
        self.allow_not_equal = true;
        self
    }

    pub fn like(mut self) -> Self {
        self.allow_like = true;
        self
    }

    pub fn range(mut self) -> Self {
        self.allow_range = true;
        self
    }

    pub fn in_list(mut self) -> Self {
        self.allow_in = true;
        self
    }

    /// Lets callers order the listing by this field.
    pub fn sortable(mut self) -> Self {
        self.allow_sort = true;
        self
    }
}

/// Composes filter strategies on top of a caller supplied select.
///
/// The builder is a value: every call that changes it consumes `self` and
/// returns the new builder, so conditions cannot leak between requests
/// through a shared instance. Factories construct a fresh one per call.
#[derive(Debug, Clone)]
pub struct QueryBuilder<E: EntityTrait> {
    strategies: HashMap<String, FilterStrategy<E::Column>>,
    conditions: Vec<FilterCondition>,
}

impl<E: EntityTrait> Default for QueryBuilder<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntityTrait> QueryBuilder<E> {
    pub fn new() -> Self {
        Self {
            strategies: HashMap::new(),
            conditions: Vec::new(),
        }
    }

    /// Later registrations under the same name replace earlier ones.
    pub fn register_strategy(
        mut self,
        name: impl Into<String>,
        strategy: FilterStrategy<E::Column>,
    ) -> Self {
        self.strategies.insert(name.into(), strategy);
        self
    }

    pub fn auto_register_field_strategies(mut self, fields: &[FieldConfig]) -> Self {
        for config in fields {
            let Ok(column) = E::Column::from_str(&config.field) else {
                debug!(field = %config.field, "skipping unknown field in strategy config");
                continue;
            };

            let key = |operator| FilterKey::new(config.field.as_str(), operator).canonical();

            if config.allow_equal {
                self = self.register_strategy(key(FilterOperator::Eq), FilterStrategy::Equal(column));
            }
            if config.allow_not_equal {
                self = self.register_strategy(key(FilterOperator::Ne), FilterStrategy::NotEqual(column));
            }
            if config.allow_like {
                self = self.register_strategy(key(FilterOperator::Like), FilterStrategy::Like(column));
            }
            if config.allow_range {
                self = self.register_strategy(
                    key(FilterOperator::Range),
                    FilterStrategy::ValueRange(column),
                );
            }
            if config.allow_in {
                self = self.register_strategy(key(FilterOperator::In), FilterStrategy::In(column));
            }
        }
        self
    }

    /// Adds a condition unless the value is `None`, `""` or `[]`.
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.conditions.push(FilterCondition::new(key, value));
        }
        self
    }

    pub fn filter_all<K, V, I>(self, pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<FilterValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        pairs
            .into_iter()
            .fold(self, |builder, (key, value)| builder.filter(key, value))
    }

    pub fn filter_params(self, params: FilterParams) -> Self {
        self.filter_all(
            params
                .conditions
                .into_iter()
                .map(|condition| (condition.key, condition.value)),
        )
    }

    pub fn reset(mut self) -> Self {
        self.conditions.clear();
        self
    }

    pub fn has_strategy(&self, name: &str) -> bool {
        self.strategies.contains_key(name)
    }

    pub fn conditions(&self) -> &[FilterCondition] {
        &self.conditions
    }

    /// Exact name first, then the canonical `field__eq` form of a bare key.
    fn resolve(&self, key: &str) -> Option<&FilterStrategy<E::Column>> {
        self.strategies.get(key).or_else(|| {
            FilterKey::parse(key)
                .map(|parsed| parsed.canonical())
                .filter(|canonical| canonical != key)
                .and_then(|canonical| self.strategies.get(&canonical))
        })
    }

    /// ANDs every applicable condition. Unknown keys, values failing
    /// validation and values that don't fit the column are dropped.
    pub fn condition(&self) -> Option<Condition> {
        let mut applied = 0usize;
        let mut all = Condition::all();

        for FilterCondition { key, value } in &self.conditions {
            let Some(strategy) = self.resolve(key) else {
                debug!(%key, "dropping filter with no registered strategy");
                continue;
            };
            if !strategy.validate(value) {
                debug!(%key, strategy = strategy.name(), "dropping filter that failed validation");
                continue;
            }
            match strategy.condition(value) {
                Some(condition) => {
                    all = all.add(condition);
                    applied += 1;
                }
                None => {
                    debug!(%key, strategy = strategy.name(), ?value, "dropping filter with mismatched value");
                }
            }
        }

        (applied > 0).then_some(all)
    }

    pub fn build(&self, base: Select<E>) -> Select<E> {
        match self.condition() {
            Some(condition) => base.filter(condition),
            None => base,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortDirective<C> {
    pub column: C,
    pub direction: SortDirection,
}

impl<C> SortDirective<C> {
    pub fn asc(column: C) -> Self {
        Self {
            column,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(column: C) -> Self {
        Self {
            column,
            direction: SortDirection::Desc,
        }
    }
}

/// [`QueryBuilder`] plus ordering and an offset/limit window.
///
/// Ordering by name ([`sort`](Self::sort), [`order_by_field`](Self::order_by_field))
/// only accepts fields declared sortable; typed [`order_by`](Self::order_by)
/// directives are not restricted.
#[derive(Debug, Clone)]
pub struct PaginatedQueryBuilder<E: EntityTrait> {
    builder: QueryBuilder<E>,
    offset: u64,
    limit: u64,
    order_by: Vec<SortDirective<E::Column>>,
    sortable: HashSet<String>,
}

impl<E: EntityTrait> Default for PaginatedQueryBuilder<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntityTrait> From<QueryBuilder<E>> for PaginatedQueryBuilder<E> {
    fn from(builder: QueryBuilder<E>) -> Self {
        Self {
            builder,
            offset: 0,
            limit: 100,
            order_by: Vec::new(),
            sortable: HashSet::new(),
        }
    }
}

impl<E: EntityTrait> PaginatedQueryBuilder<E> {
    pub fn new() -> Self {
        Self::from(QueryBuilder::new())
    }

    pub fn register_strategy(
        mut self,
        name: impl Into<String>,
        strategy: FilterStrategy<E::Column>,
    ) -> Self {
        self.builder = self.builder.register_strategy(name, strategy);
        self
    }

    pub fn auto_register_field_strategies(mut self, fields: &[FieldConfig]) -> Self {
        self.builder = self.builder.auto_register_field_strategies(fields);
        for config in fields.iter().filter(|config| config.allow_sort) {
            self = self.allow_sort(config.field.as_str());
        }
        self
    }

    /// Declares `field` as a valid sort target. Unknown columns are skipped.
    pub fn allow_sort(mut self, field: &str) -> Self {
        if E::Column::from_str(field).is_ok() {
            self.sortable.insert(field.to_string());
        } else {
            debug!(%field, "skipping unknown sortable field");
        }
        self
    }

    pub fn is_sortable(&self, field: &str) -> bool {
        self.sortable.contains(field)
    }

    fn sort_column(&self, field: &str) -> Option<E::Column> {
        if !self.is_sortable(field) {
            debug!(%field, "ignoring sort on undeclared field");
            return None;
        }
        E::Column::from_str(field).ok()
    }

    pub fn filter(mut self, key: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.builder = self.builder.filter(key, value);
        self
    }

    pub fn filter_all<K, V, I>(mut self, pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<FilterValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        self.builder = self.builder.filter_all(pairs);
        self
    }

    pub fn filter_params(mut self, params: FilterParams) -> Self {
        self.builder = self.builder.filter_params(params);
        self
    }

    /// Clears filter conditions; ordering and window are kept.
    pub fn reset(mut self) -> Self {
        self.builder = self.builder.reset();
        self
    }

    pub fn paginate(mut self, offset: u64, limit: u64) -> Self {
        self.offset = offset;
        self.limit = limit;
        self
    }

    pub fn order_by(mut self, directive: SortDirective<E::Column>) -> Self {
        self.order_by.push(directive);
        self
    }

    /// Appends an ordering on a sortable field; other names are ignored.
    pub fn order_by_field(self, name: &str, direction: SortDirection) -> Self {
        match self.sort_column(name) {
            Some(column) => self.order_by(SortDirective { column, direction }),
            None => self,
        }
    }

    /// Replaces the current ordering when `field` is sortable, keeps it otherwise.
    pub fn sort(mut self, field: Option<&str>, direction: SortDirection) -> Self {
        if let Some(column) = field.and_then(|field| self.sort_column(field)) {
            self.order_by = vec![SortDirective { column, direction }];
        }
        self
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn ordering(&self) -> &[SortDirective<E::Column>] {
        &self.order_by
    }

    pub fn query_builder(&self) -> &QueryBuilder<E> {
        &self.builder
    }

    /// Filters only, for counting.
    pub fn build(&self, base: Select<E>) -> Select<E> {
        self.builder.build(base)
    }

    pub fn build_paginated(&self, base: Select<E>) -> Select<E> {
        let mut query = self.builder.build(base);

        for directive in &self.order_by {
            query = query.order_by(directive.column, Order::from(directive.direction));
        }

        if self.limit > 0 {
            query = query.limit(self.limit).offset(self.offset);
        }

        query
    }
}
