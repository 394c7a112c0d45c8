//! Search and paging parameters for recipe listings.

use super::cursor::CursorPair;
use super::sort::SortKey;
use crate::{Error, Result};

/// What to match and how to order it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParameters {
    /// Case-insensitive title substring. Empty matches every title.
    pub query: String,
    /// Tag names a recipe must all carry. Blank entries are ignored.
    pub tags: Vec<String>,
    pub sort_by: Vec<SortKey>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: i64,
    pub offset: i64,
}

impl Pagination {
    /// Apply cursor pairs over the current values. Unknown keys are ignored.
    pub fn merge_cursor(&mut self, pairs: &[CursorPair]) -> Result<()> {
        for (key, value) in pairs {
            match key.as_str() {
                "offset" => self.offset = parse_cursor_number(key, value)?,
                "limit" => self.limit = parse_cursor_number(key, value)?,
                _ => {}
            }
        }
        Ok(())
    }

    pub fn validate(&self, max_limit: i64) -> Result<()> {
        if self.limit < 1 {
            return Err(Error::BadRequest(format!(
                "limit must be at least 1, got {}",
                self.limit
            )));
        }
        if self.limit > max_limit {
            return Err(Error::BadRequest(format!(
                "limit must be at most {max_limit}, got {}",
                self.limit
            )));
        }
        if self.offset < 0 {
            return Err(Error::BadRequest(format!(
                "offset must not be negative, got {}",
                self.offset
            )));
        }
        Ok(())
    }
}

fn parse_cursor_number(key: &str, value: &str) -> Result<i64> {
    value
        .parse()
        .map_err(|_| Error::MalformedCursor(format!("{key} is not an integer: {value:?}")))
}

/// A parsed `GET /api/recipes/summaries` query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub search: SearchParameters,
    pub pagination: Pagination,
    pub cursor: Option<String>,
}

impl ListRequest {
    /// Parse ordered (key, value) items. Repeated `tags` and `sortBy` accumulate;
    /// `sortBy` also accepts comma-separated values. `limit` is clamped to `max_limit`.
    pub fn from_items(items: &[(String, String)], default_limit: i64, max_limit: i64) -> Result<Self> {
        let mut search = SearchParameters::default();
        let mut pagination = Pagination {
            limit: default_limit,
            offset: 0,
        };
        let mut cursor = None;

        for (key, value) in items {
            match key.as_str() {
                "query" => search.query = value.clone(),
                "tags" => search.tags.push(value.clone()),
                "sortBy" => {
                    for part in value.split(',').filter(|p| !p.trim().is_empty()) {
                        let sort_key = part.parse::<SortKey>().map_err(|_| {
                            Error::BadRequest(format!("Invalid sortBy value: {part}"))
                        })?;
                        search.sort_by.push(sort_key);
                    }
                }
                "limit" => {
                    let parsed: i64 = value
                        .parse()
                        .map_err(|_| Error::BadRequest(format!("Invalid limit value: {value}")))?;
                    pagination.limit = parsed.min(max_limit);
                }
                "offset" => {
                    pagination.offset = value
                        .parse()
                        .map_err(|_| Error::BadRequest(format!("Invalid offset value: {value}")))?;
                }
                "cursor" => {
                    if !value.is_empty() {
                        cursor = Some(value.clone());
                    }
                }
                _ => {}
            }
        }

        Ok(Self {
            search,
            pagination,
            cursor,
        })
    }
}
