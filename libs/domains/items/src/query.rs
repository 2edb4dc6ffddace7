//! Filtering and pagination over an in-memory item collection.

use serde_json::Number;

use crate::models::{Item, ItemPage, ItemQuery, Pagination};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;

/// Parses a positive integer query value, falling back to `default` when it
/// is missing, not a number, or zero.
pub fn parse_positive(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| *value >= 1)
        .unwrap_or(default)
}

/// True when the lowercased `needle` occurs in the item's name, category or
/// the decimal form of its price.
pub fn matches(item: &Item, needle: &str) -> bool {
    let contains = |text: &str| text.to_lowercase().contains(needle);

    item.name().is_some_and(contains)
        || item.category().is_some_and(contains)
        || item
            .price()
            .is_some_and(|price| price_text(price).contains(needle))
}

/// Decimal text of a price with integral floats printed without a fraction,
/// so a stored `100.0` searches like `100`.
pub fn price_text(price: &Number) -> String {
    match price.as_f64() {
        Some(value) if price.is_f64() && value.fract() == 0.0 && value.abs() < 1e21 => {
            format!("{value:.0}")
        }
        _ => price.to_string(),
    }
}

/// Items matching `search`, in collection order. A blank term keeps
/// everything.
pub fn filter_items(items: Vec<Item>, search: Option<&str>) -> Vec<Item> {
    let needle = match search.map(str::trim).filter(|s| !s.is_empty()) {
        Some(term) => term.to_lowercase(),
        None => return items,
    };

    items
        .into_iter()
        .filter(|item| matches(item, &needle))
        .collect()
}

/// Filters then slices one page. Pages past the end are empty, not errors.
pub fn run(items: Vec<Item>, query: &ItemQuery) -> ItemPage {
    let filtered = filter_items(items, query.search.as_deref());
    let pagination = Pagination::new(query.page, query.limit, filtered.len() as u64);

    let offset = query.page.saturating_sub(1).saturating_mul(query.limit);
    let offset = usize::try_from(offset).unwrap_or(usize::MAX);
    let limit = usize::try_from(query.limit).unwrap_or(usize::MAX);

    let items = filtered.into_iter().skip(offset).take(limit).collect();

    ItemPage { items, pagination }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn catalog() -> Vec<Item> {
        serde_json::from_value(json!([
            { "id": 1, "name": "Laptop Pro", "category": "Electronics", "price": 1399 },
            { "id": 2, "name": "Laptop Air", "category": "Electronics", "price": 399.99 },
            { "id": 3, "name": "Desk Lamp", "category": "Home", "price": 29.9 },
            { "id": 4, "name": "Office Chair", "category": "Furniture", "price": 249 },
            { "id": 5, "name": "Wrist Watch", "category": "Accessories", "price": 3999 },
            { "id": 6, "name": "Blender", "category": "Kitchen", "price": 59.95 },
            { "id": 7, "colour": "red" },
            { "id": 8, "name": 42, "category": ["Toys"], "price": "cheap" },
            { "id": 9, "name": "Floor Rug", "category": "Home", "price": 100.0 }
        ]))
        .unwrap()
    }

    fn ids(page: &ItemPage) -> Vec<i64> {
        page.items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive(Some("3"), 1), 3);
        assert_eq!(parse_positive(Some(" 7 "), 1), 7);
        assert_eq!(parse_positive(Some("0"), 10), 10);
        assert_eq!(parse_positive(Some("-2"), 10), 10);
        assert_eq!(parse_positive(Some("ten"), 10), 10);
        assert_eq!(parse_positive(None, 1), 1);
    }

    #[test]
    fn test_page_never_exceeds_limit() {
        for limit in 1..=8 {
            for page in 1..=9 {
                let result = run(catalog(), &ItemQuery::new(page, limit, None));
                assert!(result.items.len() as u64 <= limit);
                assert_eq!(result.pagination.total_pages, 9_u64.div_ceil(limit));
            }
        }
    }

    #[test]
    fn test_second_page() {
        let result = run(catalog(), &ItemQuery::new(2, 3, None));
        assert_eq!(ids(&result), vec![4, 5, 6]);
        assert!(result.pagination.has_prev_page);
        assert!(result.pagination.has_next_page);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let result = run(catalog(), &ItemQuery::new(99, 10, None));
        assert!(result.items.is_empty());
        assert_eq!(result.pagination.page, 99);
        assert_eq!(result.pagination.total_items, 9);
        assert!(!result.pagination.has_next_page);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let lower = run(catalog(), &ItemQuery::new(1, 10, Some("laptop")));
        let upper = run(catalog(), &ItemQuery::new(1, 10, Some("LAPTOP")));
        assert_eq!(ids(&lower), vec![1, 2]);
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_search_matches_category() {
        let result = run(catalog(), &ItemQuery::new(1, 10, Some("furn")));
        assert_eq!(ids(&result), vec![4]);
    }

    #[test]
    fn test_search_matches_price_digits() {
        let result = run(catalog(), &ItemQuery::new(1, 10, Some("399")));
        assert_eq!(ids(&result), vec![1, 2, 5]);
        assert_eq!(result.pagination.total_items, 3);
        assert_eq!(result.pagination.total_pages, 1);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let once = filter_items(catalog(), Some("lamp"));
        let twice = filter_items(once.clone(), Some("lamp"));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_blank_search_keeps_everything() {
        let none = run(catalog(), &ItemQuery::new(1, 10, None));
        let blank = run(catalog(), &ItemQuery {
            page: 1,
            limit: 10,
            search: Some("   ".to_string()),
        });
        assert_eq!(none, blank);
        assert_eq!(none.items.len(), 9);
    }

    #[test]
    fn test_item_without_fields_never_matches() {
        let result = filter_items(catalog(), Some("red"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_wrong_typed_fields_never_match() {
        assert!(filter_items(catalog(), Some("42")).is_empty());
        assert!(filter_items(catalog(), Some("toys")).is_empty());
        assert!(filter_items(catalog(), Some("cheap")).is_empty());
    }

    #[test]
    fn test_integral_float_price_matches_without_fraction() {
        let result = run(catalog(), &ItemQuery::new(1, 10, Some("100")));
        assert_eq!(ids(&result), vec![9]);
        assert!(filter_items(catalog(), Some("100.0")).is_empty());
    }

    #[test]
    fn test_price_text() {
        let text = |value: Value| price_text(value.as_number().unwrap());
        assert_eq!(text(json!(100.0)), "100");
        assert_eq!(text(json!(100)), "100");
        assert_eq!(text(json!(399.99)), "399.99");
        assert_eq!(text(json!(-3.0)), "-3");
    }
}
