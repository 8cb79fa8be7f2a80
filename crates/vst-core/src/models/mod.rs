pub mod competition;
pub mod competition_participant;
pub mod holding;
pub mod news_item;
pub mod portfolio;
pub mod quote;
pub mod trade_request;
pub mod tutorial;
pub mod watchlist;

use serde::{Deserialize, Deserializer};

/// Entity text fields may come back as `null`; read those as empty.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
