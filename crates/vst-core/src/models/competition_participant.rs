use serde::{Deserialize, Serialize};

/// Returned by `POST /api/competitions/join/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionParticipant {
    #[serde(default)]
    pub id: Option<i64>,
    pub competition_id: i64,
    #[serde(default)]
    pub competition_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub portfolio_value: f64,
}
