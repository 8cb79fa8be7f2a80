use crate::{MAX_WATCHLIST_SYMBOLS, Watchlist};

#[test]
fn test_default_watchlist() {
    let list = Watchlist::default();
    assert_eq!(list.symbols(), ["IBM", "AAPL", "MSFT"]);
}

#[test]
fn test_add_normalizes_symbol() {
    let mut list = Watchlist::empty();
    assert!(list.add("  tsla "));
    assert_eq!(list.symbols(), ["TSLA"]);
}

#[test]
fn test_add_ignores_duplicates_and_blanks() {
    let mut list = Watchlist::default();
    assert!(!list.add("ibm"));
    assert!(!list.add("   "));
    assert!(!list.add(""));
    assert_eq!(list.len(), 3);
}

#[test]
fn test_add_stops_at_cap() {
    let mut list = Watchlist::empty();
    for i in 0..MAX_WATCHLIST_SYMBOLS {
        assert!(list.add(&format!("S{i}")));
    }

    assert!(list.is_full());
    assert!(!list.add("OVERFLOW"));
    assert_eq!(list.len(), MAX_WATCHLIST_SYMBOLS);
    assert!(!list.contains("OVERFLOW"));
}

#[test]
fn test_with_symbols_truncates_to_cap() {
    let list = Watchlist::with_symbols(["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]);
    assert_eq!(list.len(), MAX_WATCHLIST_SYMBOLS);
    assert_eq!(list.symbols().last().map(String::as_str), Some("H"));
}

#[test]
fn test_remove() {
    let mut list = Watchlist::default();
    assert!(list.remove("aapl"));
    assert!(!list.remove("AAPL"));
    assert_eq!(list.symbols(), ["IBM", "MSFT"]);
}

#[test]
fn test_symbol_with_inner_whitespace_is_rejected() {
    assert_eq!(Watchlist::normalize_symbol("BRK B"), None);
    assert_eq!(Watchlist::normalize_symbol("brk.b"), Some("BRK.B".to_string()));
}

#[test]
fn test_suggestions_skip_tracked_symbols() {
    let list = Watchlist::with_symbols(["IBM", "tsla", "NVDA"]);
    assert_eq!(list.suggestions(), vec!["GOOGL", "AMZN"]);
}

#[test]
fn test_full_watchlist_has_no_suggestions() {
    let list = Watchlist::with_symbols(["A", "B", "C", "D", "E", "F", "G", "H"]);
    assert!(list.is_full());
    assert!(list.suggestions().is_empty());
}
