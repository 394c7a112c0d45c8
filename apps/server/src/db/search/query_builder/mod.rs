//! SQL query builder for recipe summary listings.
//!
//! Produces the SQL text plus positional bind values; the caller attaches the
//! values with [`bind_all`].

use super::params::{Pagination, SearchParameters};
use super::predicate::build_search_predicate;
use super::sort::build_order_by;
use uuid::Uuid;

mod bind;

pub use bind::bind_all;
pub(crate) use bind::{push_bigint, push_text, push_text_array, push_uuid};

/// Bind values for `sqlx` queries.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Text(String),
    TextArray(Vec<String>),
    Uuid(Uuid),
    BigInt(i64),
}

/// Tag names of `r` in stored order.
pub(crate) const TAG_NAMES_SQL: &str = "ARRAY(\
    SELECT t.name FROM unnest(r.tags) WITH ORDINALITY AS a(tag_id, ord) \
    JOIN tags t ON t.id = a.tag_id ORDER BY a.ord)";

/// One page of summaries for one user.
#[derive(Debug, Clone)]
pub struct SummaryQuery<'a> {
    pub user_id: Uuid,
    pub search: &'a SearchParameters,
    pub pagination: Pagination,
}

impl<'a> SummaryQuery<'a> {
    pub fn new(user_id: Uuid, search: &'a SearchParameters, pagination: Pagination) -> Self {
        Self {
            user_id,
            search,
            pagination,
        }
    }

    /// Build the SQL text and its bind values.
    ///
    /// Fetches `limit + 1` rows; the extra row only tells the caller another
    /// page exists.
    pub fn build_sql(&self) -> (String, Vec<BindValue>) {
        let mut bind_params = Vec::new();

        let user_idx = push_uuid(&mut bind_params, self.user_id);
        let predicate =
            build_search_predicate(&self.search.query, &self.search.tags, &mut bind_params);

        let order_by = build_order_by(&self.search.sort_by);
        let order_by = if order_by.is_empty() {
            "ORDER BY r.id".to_string()
        } else {
            format!("{order_by}, r.id")
        };

        let limit_idx = push_bigint(&mut bind_params, self.pagination.limit + 1);
        let offset_idx = push_bigint(&mut bind_params, self.pagination.offset);

        let sql = format!(
            "SELECT r.id, r.favorite, r.title, \
             COALESCE(r.prep_info->>'totalTime', '') AS total_time, \
             r.image_source, {TAG_NAMES_SQL} AS tag_names \
             FROM recipes r \
             WHERE r.user_id = ${user_idx} AND {predicate} \
             {order_by} \
             LIMIT ${limit_idx} OFFSET ${offset_idx}"
        );

        (sql, bind_params)
    }
}
