//! Recipe search: parameters, predicate, ordering, cursors and SQL assembly.

pub mod cursor;
pub mod params;
pub mod predicate;
pub mod query_builder;
pub mod sort;

pub use cursor::{decode_cursor, encode_cursor, next_cursor, CursorPair};
pub use params::{ListRequest, Pagination, SearchParameters};
pub use query_builder::{BindValue, SummaryQuery};
pub use sort::{build_order_by, resolve, SortField, SortKey};
