//! Display indexes for distilleries.
//!
//! Categories are shown as a numbered list (`1. Ardbeg`, `2. Balvenie`, ...)
//! and later commands refer to them by that number. Both directions go
//! through [`index_categories`] applied to the same sorted, directories-only
//! listing, so the number a user sees is always the number that resolves.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayCategory {
    pub index: usize,
    pub name: String,
    pub review_count: usize,
}

/// Assigns 1-based indexes in the order given.
///
/// Callers pass names already sorted; this does not sort.
pub fn index_categories<I>(categories: I) -> Vec<DisplayCategory>
where
    I: IntoIterator<Item = (String, usize)>,
{
    categories
        .into_iter()
        .enumerate()
        .map(|(pos, (name, review_count))| DisplayCategory {
            index: pos + 1,
            name,
            review_count,
        })
        .collect()
}

/// Resolves a display index against a sorted name list.
pub fn name_at(names: &[String], index: usize) -> Option<&str> {
    index
        .checked_sub(1)
        .and_then(|pos| names.get(pos))
        .map(String::as_str)
}

/// Parses a user-typed index such as `2` or `#2`.
pub fn parse_index(input: &str) -> Option<usize> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    match digits.parse::<usize>() {
        Ok(0) | Err(_) => None,
        Ok(n) => Some(n),
    }
}
