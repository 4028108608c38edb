use serde::{Deserialize, Serialize};

use super::guesses::GuessField;

/// Grading outcome for a single guessed field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Evaluation {
    Correct,
    Close,
    Wrong,
}

impl Evaluation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Evaluation::Correct => "correct",
            Evaluation::Close => "close",
            Evaluation::Wrong => "wrong",
        }
    }
}

/// Per-field grading of one guess against the ground truth
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFeedback {
    pub guess: String,
    pub actual: String,
    pub evaluation: Evaluation,
    pub explanation: String,
}

/// Feedback for exactly the six guess fields.
///
/// Unknown keys are rejected so a response can never carry feedback for a
/// field the participant did not answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FeedbackSet {
    pub seen_object1: ValidationFeedback,
    pub seen_object2: ValidationFeedback,
    pub seen_object3: ValidationFeedback,
    pub continent: ValidationFeedback,
    pub language: ValidationFeedback,
    pub area_type: ValidationFeedback,
}

impl FeedbackSet {
    pub fn get(&self, field: GuessField) -> &ValidationFeedback {
        match field {
            GuessField::SeenObject1 => &self.seen_object1,
            GuessField::SeenObject2 => &self.seen_object2,
            GuessField::SeenObject3 => &self.seen_object3,
            GuessField::Continent => &self.continent,
            GuessField::Language => &self.language,
            GuessField::AreaType => &self.area_type,
        }
    }

    /// Feedback entries in `GuessField::ALL` order
    pub fn iter(&self) -> impl Iterator<Item = (GuessField, &ValidationFeedback)> {
        GuessField::ALL.into_iter().map(move |field| (field, self.get(field)))
    }

    /// Number of fields graded with the given tag
    pub fn count(&self, evaluation: Evaluation) -> usize {
        self.iter().filter(|(_, f)| f.evaluation == evaluation).count()
    }
}

/// Aggregate grading outcome for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Overall score in [0, 100]
    pub score: f64,
    pub feedback: FeedbackSet,
}

impl ValidationResult {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }
}

/// Coarse score bucket used when presenting results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 75.0 {
            ScoreBand::High
        } else if score >= 40.0 {
            ScoreBand::Medium
        } else {
            ScoreBand::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn feedback_json(evaluation: &str) -> serde_json::Value {
        json!({
            "guess": "river",
            "actual": "Mekong",
            "evaluation": evaluation,
            "explanation": "A major river runs through the area."
        })
    }

    fn feedback_set_json() -> serde_json::Value {
        json!({
            "seenObject1": feedback_json("correct"),
            "seenObject2": feedback_json("close"),
            "seenObject3": feedback_json("wrong"),
            "continent": feedback_json("correct"),
            "language": feedback_json("wrong"),
            "areaType": feedback_json("close"),
        })
    }

    #[test]
    fn test_feedback_set_decodes_six_fields() {
        let set: FeedbackSet = serde_json::from_value(feedback_set_json()).unwrap();
        assert_eq!(set.iter().count(), 6);
        assert_eq!(set.count(Evaluation::Correct), 2);
        assert_eq!(set.count(Evaluation::Close), 2);
        assert_eq!(set.count(Evaluation::Wrong), 2);
        assert_eq!(set.get(GuessField::SeenObject2).evaluation, Evaluation::Close);
    }

    #[test]
    fn test_feedback_set_rejects_extra_key() {
        let mut value = feedback_set_json();
        value["weather"] = feedback_json("wrong");
        assert!(serde_json::from_value::<FeedbackSet>(value).is_err());
    }

    #[test]
    fn test_feedback_set_rejects_missing_key() {
        let mut value = feedback_set_json();
        value.as_object_mut().unwrap().remove("language");
        assert!(serde_json::from_value::<FeedbackSet>(value).is_err());
    }

    #[test]
    fn test_unknown_evaluation_tag_is_rejected() {
        assert!(serde_json::from_value::<ValidationFeedback>(feedback_json("maybe")).is_err());
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::from_score(100.0), ScoreBand::High);
        assert_eq!(ScoreBand::from_score(75.0), ScoreBand::High);
        assert_eq!(ScoreBand::from_score(74.9), ScoreBand::Medium);
        assert_eq!(ScoreBand::from_score(40.0), ScoreBand::Medium);
        assert_eq!(ScoreBand::from_score(39.0), ScoreBand::Low);
    }
}
