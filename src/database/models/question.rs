use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A quiz question as stored in the questions table.
///
/// The wire format is camelCase to match the frontend contract; the same
/// serde names double as the expected CSV header row on import. The id is
/// assigned by storage and absent on records submitted by callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub question_text: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct_answer: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
}
