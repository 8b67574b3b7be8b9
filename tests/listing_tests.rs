use cine_portal::listing::{
    ListQuery, MAX_PER_PAGE, MOVIE_SORT_COLUMNS, Page, SortOrder, fuzzy_matches,
    paginate_in_memory, sort_column,
};

fn query(page: i64, per_page: i64) -> ListQuery {
    ListQuery {
        page: Some(page),
        per_page: Some(per_page),
        ..ListQuery::default()
    }
}

// --- Fuzzy matching ---

#[test]
fn fuzzy_matches_subsequences() {
    assert!(fuzzy_matches("grmn", "Germany"));
    assert!(fuzzy_matches("fr", "France"));
    assert!(!fuzzy_matches("frz", "France"));
}

#[test]
fn fuzzy_matching_is_case_insensitive() {
    assert!(fuzzy_matches("GERMANY", "germany"));
    assert!(fuzzy_matches("jp", "Japanese"));
}

#[test]
fn fuzzy_characters_must_stay_in_order() {
    assert!(fuzzy_matches("abc", "a-b-c"));
    assert!(!fuzzy_matches("cba", "a-b-c"));
}

#[test]
fn empty_pattern_matches_everything() {
    assert!(fuzzy_matches("", "anything"));
    assert!(fuzzy_matches("", ""));
}

// --- Parameter clamping ---

#[test]
fn page_and_per_page_are_clamped() {
    let q = query(0, 5000);
    assert_eq!(q.page(), 1);
    assert_eq!(q.per_page(), MAX_PER_PAGE);

    let q = query(-3, 0);
    assert_eq!(q.page(), 1);
    assert_eq!(q.per_page(), 1);
}

#[test]
fn defaults_apply_when_parameters_are_absent() {
    let q = ListQuery::default();
    assert_eq!(q.page(), 1);
    assert_eq!(q.per_page(), 20);
    assert_eq!(q.offset(), 0);
    assert_eq!(q.order(), SortOrder::Asc);
}

#[test]
fn offset_follows_page_and_size() {
    assert_eq!(query(3, 25).offset(), 50);
}

#[test]
fn offset_saturates_on_huge_page_numbers() {
    let q = query(i64::MAX, 100);
    assert_eq!(q.offset(), i64::MAX);

    // An out-of-range request stays a valid (empty) page.
    let page = paginate_in_memory(names(), &q, |s| s.clone());
    assert!(page.items.is_empty());
    assert_eq!(page.total, 5);
}

// --- Page envelope ---

#[test]
fn total_pages_rounds_up() {
    let page: Page<i32> = Page::new(vec![1, 2, 3], 7, 1, 3);
    assert_eq!(page.total_pages, 3);

    let exact: Page<i32> = Page::new(vec![], 6, 1, 3);
    assert_eq!(exact.total_pages, 2);
}

#[test]
fn empty_page_has_zero_total_pages() {
    let page: Page<i32> = Page::empty(1, 20);
    assert_eq!(page.total, 0);
    assert_eq!(page.total_pages, 0);
    assert!(page.items.is_empty());
}

// --- In-memory pagination ---

fn names() -> Vec<String> {
    ["France", "Germany", "Brazil", "Japan", "Argentina"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[test]
fn in_memory_pagination_sorts_and_slices() {
    let page = paginate_in_memory(names(), &query(1, 2), |s| s.clone());
    assert_eq!(page.items, vec!["Argentina", "Brazil"]);
    assert_eq!(page.total, 5);
    assert_eq!(page.total_pages, 3);

    let last = paginate_in_memory(names(), &query(3, 2), |s| s.clone());
    assert_eq!(last.items, vec!["Japan"]);
}

#[test]
fn in_memory_pagination_honors_descending_order() {
    let q = ListQuery {
        order: Some(SortOrder::Desc),
        ..query(1, 2)
    };
    let page = paginate_in_memory(names(), &q, |s| s.clone());
    assert_eq!(page.items, vec!["Japan", "Germany"]);
}

#[test]
fn in_memory_pagination_filters_before_paging() {
    let q = ListQuery {
        search: Some("an".into()),
        ..query(1, 10)
    };
    let page = paginate_in_memory(names(), &q, |s| s.clone());
    // Subsequence "an": Argentina, France, Germany, Japan. Brazil drops out.
    assert_eq!(page.items, vec!["Argentina", "France", "Germany", "Japan"]);
    assert_eq!(page.total, 4);
}

#[test]
fn page_past_the_end_is_empty_but_keeps_the_total() {
    let page = paginate_in_memory(names(), &query(9, 20), |s| s.clone());
    assert!(page.items.is_empty());
    assert_eq!(page.total, 5);
}

// --- Sort whitelists ---

#[test]
fn sort_column_accepts_whitelisted_keys() {
    assert_eq!(
        sort_column(Some("year"), MOVIE_SORT_COLUMNS, "title"),
        "year"
    );
}

#[test]
fn sort_column_rejects_unknown_keys() {
    assert_eq!(
        sort_column(Some("password_hash"), MOVIE_SORT_COLUMNS, "title"),
        "title"
    );
    assert_eq!(sort_column(None, MOVIE_SORT_COLUMNS, "title"), "title");
}

#[test]
fn sort_order_sql_keywords() {
    assert_eq!(SortOrder::Asc.as_sql(), "ASC");
    assert_eq!(SortOrder::Desc.as_sql(), "DESC");
}
