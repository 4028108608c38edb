//! Human-readable rendering of a completed session

use console::{style, StyledObject};
use remoview_core::media::map_url;
use remoview_core::models::{Evaluation, ScoreBand, SessionResult};

use crate::output::OutputWriter;
use crate::output_types::{local_timestamp, FeedbackRow};

fn styled_score(score: f64) -> StyledObject<String> {
    let text = format!("{:.0}/100", score);
    match ScoreBand::from_score(score) {
        ScoreBand::High => style(text).green().bold(),
        ScoreBand::Medium => style(text).yellow().bold(),
        ScoreBand::Low => style(text).red().bold(),
    }
}

/// Print a session result: score, ground truth, media links, and per-field feedback
pub fn render(output: &OutputWriter, result: &SessionResult) -> anyhow::Result<()> {
    let feedback = &result.validation.feedback;

    output.section("Result");
    output.kv("Score", styled_score(result.validation.score));
    output.kv(
        "Graded",
        format!(
            "{} correct, {} close, {} wrong",
            feedback.count(Evaluation::Correct),
            feedback.count(Evaluation::Close),
            feedback.count(Evaluation::Wrong),
        ),
    );
    output.kv("Session", result.id);
    output.kv("When", local_timestamp(&result.timestamp));

    output.section("Location");
    let real = &result.real_data;
    output.kv("Coordinates", result.coordinates);
    output.kv("Country", &real.country);
    output.kv("Continent", &real.continent);
    output.kv("Area type", &real.area_type);
    if !real.major_features.is_empty() {
        output.kv("Features", real.major_features.join(", "));
    }
    if !real.dominant_languages.is_empty() {
        output.kv("Languages", real.dominant_languages.join(", "));
    }
    output.kv("Map", map_url(&result.coordinates));
    output.kv("Photo", &result.photo_url);
    if let Some(attribution) = &result.photo_attribution {
        println!("  {}", style(attribution).dim());
    }

    output.section("Feedback");
    let rows: Vec<FeedbackRow> =
        feedback.iter().map(|(field, f)| FeedbackRow::new(field, f)).collect();
    output.table(&rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_text() {
        assert_eq!(styled_score(87.4).force_styling(false).to_string(), "87/100");
    }
}
