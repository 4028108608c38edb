use chrono::{DateTime, Local, Utc};
use remoview_core::config::ConfigSource;
use remoview_core::models::{Coordinates, GuessField, SessionResult, ValidationFeedback};
use serde::Serialize;
use tabled::Tabled;

/// Output for coords command
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordsOutput {
    pub coordinates: Coordinates,
    pub formatted: String,
    pub map_url: String,
}

/// One row of the history table
#[derive(Debug, Serialize, Tabled)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "When")]
    pub when: String,
    #[tabled(rename = "Coordinates")]
    pub coordinates: String,
    #[tabled(rename = "Country")]
    pub country: String,
    #[tabled(rename = "Score")]
    pub score: String,
}

impl HistoryRow {
    pub fn from_result(result: &SessionResult) -> Self {
        Self {
            id: result.id.to_string(),
            when: local_timestamp(&result.timestamp),
            coordinates: result.coordinates.short(),
            country: result.real_data.country.clone(),
            score: format!("{:.0}", result.validation.score),
        }
    }
}

/// One row of the per-field feedback table
#[derive(Debug, Serialize, Tabled)]
pub struct FeedbackRow {
    #[tabled(rename = "Field")]
    pub field: String,
    #[tabled(rename = "Your guess")]
    pub guess: String,
    #[tabled(rename = "Actual")]
    pub actual: String,
    #[tabled(rename = "Result")]
    pub evaluation: String,
    #[tabled(rename = "Why")]
    pub explanation: String,
}

impl FeedbackRow {
    pub fn new(field: GuessField, feedback: &ValidationFeedback) -> Self {
        Self {
            field: field.label().to_string(),
            guess: feedback.guess.clone(),
            actual: feedback.actual.clone(),
            evaluation: feedback.evaluation.as_str().to_string(),
            explanation: feedback.explanation.clone(),
        }
    }
}

/// One row of the config command
#[derive(Debug, Serialize, Tabled)]
pub struct ConfigRow {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Source", display_with = "display_source")]
    pub source: ConfigSource,
}

fn display_source(source: &ConfigSource) -> String {
    format!("{:?}", source)
}

/// Session timestamp in the local timezone, minute precision
pub fn local_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use remoview_core::models::Evaluation;

    #[test]
    fn test_feedback_row_uses_labels() {
        let feedback = ValidationFeedback {
            guess: "Asia".to_string(),
            actual: "Europe".to_string(),
            evaluation: Evaluation::Wrong,
            explanation: "Different continent".to_string(),
        };
        let row = FeedbackRow::new(GuessField::Continent, &feedback);
        assert_eq!(row.field, "Continent");
        assert_eq!(row.evaluation, "wrong");
    }

    #[test]
    fn test_display_source() {
        assert_eq!(display_source(&ConfigSource::Environment), "Environment");
    }
}
