use crate::NewsItem;

use serde_json::json;

#[test]
fn test_from_feed_skips_untitled_entries() {
    let raw = json!({
        "items": "2",
        "feed": [
            {
                "title": "Chipmakers rally",
                "url": "https://news.example/chips",
                "summary": "Semis up 3%",
                "source": "Example Wire",
                "time_published": "20261016T133000"
            },
            { "url": "https://news.example/untitled" }
        ]
    });

    let items = NewsItem::from_feed(&raw);

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Chipmakers rally");
    assert_eq!(items[0].source.as_deref(), Some("Example Wire"));
}

#[test]
fn test_from_feed_without_feed_is_empty() {
    assert!(NewsItem::from_feed(&json!({ "Information": "rate limited" })).is_empty());
}
