//! WHERE-clause predicate for recipe searches.
//!
//! The predicate is written over the `r` alias of `recipes`. Client text is
//! pushed into `bind_params` and referenced by position only.

use super::query_builder::{push_text, push_text_array, BindValue};

/// Build the title/tag predicate, wrapped in parentheses.
///
/// - non-blank tags: title matches AND recipe carries every tag
/// - no usable tags: title matches OR recipe carries a tag named like the query
///
/// Both title and tag comparisons are case-insensitive.
pub fn build_search_predicate(
    query: &str,
    tags: &[String],
    bind_params: &mut Vec<BindValue>,
) -> String {
    let filters: Vec<String> = tags
        .iter()
        .filter(|t| !t.trim().is_empty())
        .cloned()
        .collect();

    let query_idx = push_text(bind_params, query.to_string());
    let title_matches = format!("position(LOWER(${query_idx}::text) in LOWER(r.title)) > 0");

    if filters.is_empty() {
        let tags_idx = push_text_array(bind_params, vec![query.to_string()]);
        format!("({title_matches} OR {})", tags_contain_all(tags_idx))
    } else {
        let tags_idx = push_text_array(bind_params, filters);
        format!("({title_matches} AND {})", tags_contain_all(tags_idx))
    }
}

fn tags_contain_all(bind_idx: usize) -> String {
    format!(
        "ARRAY(SELECT LOWER(f) FROM unnest(${bind_idx}::text[]) AS f) \
         <@ ARRAY(SELECT LOWER(t.name) FROM unnest(r.tags) AS a(tag_id) \
         JOIN tags t ON t.id = a.tag_id)"
    )
}
