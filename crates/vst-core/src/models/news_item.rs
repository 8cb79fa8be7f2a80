use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub title: String,
    pub url: Option<String>,
    pub summary: Option<String>,
    pub source: Option<String>,
    pub time_published: Option<String>,
}

impl NewsItem {
    /// Extract articles from the provider's `feed` array. Entries without a
    /// title are skipped; a payload without a feed yields nothing.
    pub fn from_feed(raw: &Value) -> Vec<Self> {
        let Some(feed) = raw.get("feed").and_then(Value::as_array) else {
            return Vec::new();
        };

        feed.iter()
            .filter_map(|entry| {
                let title = string(entry, "title")?;
                Some(Self {
                    title,
                    url: string(entry, "url"),
                    summary: string(entry, "summary"),
                    source: string(entry, "source"),
                    time_published: string(entry, "time_published"),
                })
            })
            .collect()
    }
}

fn string(entry: &Value, key: &str) -> Option<String> {
    entry
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}
