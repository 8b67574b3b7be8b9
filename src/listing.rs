//! Reusable data-table helpers: query-string parameters, the paged response
//! envelope, fuzzy filtering, and sort-column whitelists.
//!
//! Two pagination modes are supported. Large tables (movies) are paged
//! server-side with sqlx `QueryBuilder`; small reference tables
//! (countries/regions/languages) are loaded whole and paged in memory via
//! `paginate_in_memory`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::{IntoParams, ToSchema};

/// Hard cap on page size, applied regardless of what the client asks for.
pub const MAX_PER_PAGE: i64 = 100;
const DEFAULT_PER_PAGE: i64 = 20;

/// SortOrder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// SQL keyword for interpolation after a whitelisted column name.
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// ListQuery
///
/// The accepted query parameters for every listing endpoint. All fields are
/// optional; accessors clamp them to sane bounds so handlers never see a
/// zero page or an unbounded page size.
#[derive(Debug, Clone, Deserialize, IntoParams, Default)]
pub struct ListQuery {
    /// 1-based page number.
    pub page: Option<i64>,
    /// Page size, capped at 100.
    pub per_page: Option<i64>,
    /// Sort key; checked against a per-resource whitelist before use.
    pub sort: Option<String>,
    pub order: Option<SortOrder>,
    /// Fuzzy search term.
    pub search: Option<String>,
}

impl ListQuery {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn per_page(&self) -> i64 {
        self.per_page
            .unwrap_or(DEFAULT_PER_PAGE)
            .clamp(1, MAX_PER_PAGE)
    }

    /// Saturating: an absurd client-supplied page number lands past the end
    /// of any result set instead of overflowing.
    pub fn offset(&self) -> i64 {
        (self.page() - 1).saturating_mul(self.per_page())
    }

    pub fn order(&self) -> SortOrder {
        self.order.unwrap_or_default()
    }
}

/// Page
///
/// The paged response envelope shared by server- and client-paged listings.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: i64, page: i64, per_page: i64) -> Self {
        let total_pages = if total == 0 {
            0
        } else {
            (total + per_page - 1) / per_page
        };
        Page {
            items,
            total,
            page,
            per_page,
            total_pages,
        }
    }

    pub fn empty(page: i64, per_page: i64) -> Self {
        Page::new(Vec::new(), 0, page, per_page)
    }
}

/// fuzzy_matches
///
/// Case-insensitive subsequence match: every character of `pattern` must
/// appear in `text` in order, not necessarily adjacent. An empty pattern
/// matches everything.
pub fn fuzzy_matches(pattern: &str, text: &str) -> bool {
    let text: Vec<char> = text.to_lowercase().chars().collect();
    let mut from = 0;

    for wanted in pattern.to_lowercase().chars() {
        match text[from..].iter().position(|&c| c == wanted) {
            Some(offset) => from += offset + 1,
            None => return false,
        }
    }
    true
}

/// paginate_in_memory
///
/// Client-style pagination for small reference tables: fuzzy-filter by the
/// display key, sort by it (honoring `order`), then slice the requested
/// page. A page past the end comes back empty with the total intact.
pub fn paginate_in_memory<T, F>(items: Vec<T>, query: &ListQuery, key: F) -> Page<T>
where
    F: Fn(&T) -> String,
{
    let mut filtered: Vec<T> = match query.search.as_deref() {
        Some(term) if !term.is_empty() => items
            .into_iter()
            .filter(|item| fuzzy_matches(term, &key(item)))
            .collect(),
        _ => items,
    };

    filtered.sort_by_cached_key(|item| key(item).to_lowercase());
    if query.order() == SortOrder::Desc {
        filtered.reverse();
    }

    let total = filtered.len() as i64;
    let page = query.page();
    let per_page = query.per_page();
    let start = query.offset() as usize;

    let items = if start >= filtered.len() {
        Vec::new()
    } else {
        filtered
            .into_iter()
            .skip(start)
            .take(per_page as usize)
            .collect()
    };

    Page::new(items, total, page, per_page)
}

// --- Sort whitelists (requested key -> SQL column) ---

pub const MOVIE_SORT_COLUMNS: &[(&str, &str)] = &[
    ("title", "title"),
    ("year", "year"),
    ("published", "published"),
    ("created_at", "created_at"),
];

/// sort_column
///
/// Maps a client-provided sort key onto an allowed SQL column, falling back
/// to `default`. Only whitelisted columns ever reach a query string.
pub fn sort_column<'a>(
    requested: Option<&str>,
    allowed: &[(&'a str, &'a str)],
    default: &'a str,
) -> &'a str {
    requested
        .and_then(|key| {
            allowed
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, column)| *column)
        })
        .unwrap_or(default)
}
