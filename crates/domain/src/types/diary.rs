//! Diary wire types: matches ("jogos") and training sessions ("treinos")
//!
//! JSON field names follow the backend contract, hence the serde renames.

use serde::{Deserialize, Serialize};

/// A logged match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// Backend-assigned identifier; absent until the match is created
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "adversario")]
    pub opponent: String,
    /// e.g. "amistoso"
    #[serde(rename = "tipo")]
    pub kind: String,
    /// e.g. "vitoria", "derrota"
    #[serde(rename = "resultado")]
    pub result: String,
    #[serde(rename = "gols")]
    pub goals: i64,
    #[serde(rename = "assistencias")]
    pub assists: i64,
    #[serde(rename = "nota")]
    pub rating: f64,
    /// Self-reported feeling, 1 to 10
    #[serde(rename = "sensacao")]
    pub feeling: i64,
    #[serde(rename = "comentarios")]
    pub comments: String,
}

/// A logged training session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSession {
    /// Backend-assigned identifier; absent until the session is created
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "data")]
    pub date: String,
    /// e.g. "cardio"
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "duracaoMin")]
    pub duration_min: i64,
    /// e.g. "alta"
    #[serde(rename = "intensidade")]
    pub intensity: String,
    /// Self-reported feeling, 1 to 10
    #[serde(rename = "sensacao")]
    pub feeling: i64,
    #[serde(rename = "observacoes")]
    pub notes: String,
}
