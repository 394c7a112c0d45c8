//! Sort directives for recipe listings.
//!
//! A sort key is a signed integer: the absolute value picks the field and a
//! negative sign flips the field's default direction. Favorite is code 0, so it
//! has no reversed form. Fragments are closed-set literals so client input
//! never reaches the SQL text.

use serde::{Deserialize, Serialize};
use std::ops::Neg;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Favorite,
    Newest,
    RecentlyUsed,
    Alphabetical,
}

impl SortField {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Favorite),
            1 => Some(Self::Newest),
            2 => Some(Self::RecentlyUsed),
            3 => Some(Self::Alphabetical),
            _ => None,
        }
    }

    /// `(default, reversed)` fragments.
    fn fragments(self) -> (&'static str, &'static str) {
        match self {
            Self::Favorite => ("favorite DESC", "favorite"),
            Self::Newest => ("created DESC", "created"),
            Self::RecentlyUsed => ("last_viewed DESC", "last_viewed"),
            Self::Alphabetical => ("title", "title DESC"),
        }
    }
}

/// Signed sort key as sent on the wire (`sortBy=0`, `sortBy=-1`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortKey(pub i32);

impl SortKey {
    pub const FAVORITE: SortKey = SortKey(0);
    pub const NEWEST: SortKey = SortKey(1);
    pub const RECENTLY_USED: SortKey = SortKey(2);
    pub const ALPHABETICAL: SortKey = SortKey(3);

    pub fn field(self) -> Option<SortField> {
        SortField::from_code(self.0.checked_abs()?)
    }

    pub fn is_reversed(self) -> bool {
        self.0 < 0
    }
}

impl Neg for SortKey {
    type Output = SortKey;

    fn neg(self) -> SortKey {
        SortKey(self.0.saturating_neg())
    }
}

impl std::str::FromStr for SortKey {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i32>().map(SortKey)
    }
}

/// Resolve one key to its `ORDER BY` fragment. Unknown fields resolve to "".
pub fn resolve(key: SortKey) -> &'static str {
    match key.field() {
        Some(field) => {
            let (default, reversed) = field.fragments();
            if key.is_reversed() {
                reversed
            } else {
                default
            }
        }
        None => "",
    }
}

/// Build a full `ORDER BY` clause, or "" when no key resolves.
pub fn build_order_by(keys: &[SortKey]) -> String {
    let fragments: Vec<&str> = keys
        .iter()
        .map(|k| resolve(*k))
        .filter(|f| !f.is_empty())
        .collect();

    if fragments.is_empty() {
        String::new()
    } else {
        format!("ORDER BY {}", fragments.join(","))
    }
}
