// CSV upload helpers: format sniffing and row-to-record mapping.
use thiserror::Error;

use crate::database::models::Question;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Content types browsers commonly attach to CSV uploads.
const CSV_CONTENT_TYPES: &[&str] = &["text/csv", "application/csv", "application/vnd.ms-excel"];

/// Whether an upload looks like a CSV file. Browsers disagree on the MIME
/// type for CSV, so a `.csv` filename is accepted as well.
pub fn has_csv_format(content_type: Option<&str>, file_name: Option<&str>) -> bool {
    if let Some(ct) = content_type {
        if CSV_CONTENT_TYPES.contains(&ct) {
            return true;
        }
    }
    file_name.is_some_and(|name| name.to_ascii_lowercase().ends_with(".csv"))
}

/// Parse uploaded CSV bytes into question records.
///
/// Expects a header row with the camelCase column names the frontend uses
/// (questionText, optionA..optionD, correctAnswer, category, difficulty).
/// A malformed row rejects the whole file; nothing is persisted by the
/// caller in that case.
pub fn parse_questions(data: &[u8]) -> Result<Vec<Question>, ImportError> {
    let mut reader = csv::Reader::from_reader(data);
    let mut questions = Vec::new();
    for row in reader.deserialize() {
        questions.push(row?);
    }
    Ok(questions)
}
