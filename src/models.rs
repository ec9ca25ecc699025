use serde::{Deserialize, Serialize};
use serde_json::Number;

pub const SUBJECT_MAX_LEN: usize = 100;
pub const GOAL_MAX_LEN: usize = 200;
pub const LEVEL_MAX_LEN: usize = 50;
pub const QUESTION_MAX_LEN: usize = 500;
pub const CONTENT_MIN_LEN: usize = 10;
pub const CONTENT_MAX_LEN: usize = 5000;
pub const MAX_HOURS_PER_DAY: i64 = 24;

/// Learner profile used to build a study plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyProfile {
    pub subject: String,
    pub goal: String,
    pub level: String,
    /// Kept as the raw JSON number so any numeric input reaches the range check
    pub time_per_day: Number,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TutorRequest {
    pub question: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizRequest {
    pub subject: String,
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashcardRequest {
    pub subject: String,
    pub level: String,
}

/// Free-text study material for the content-based endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentRequest {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flashcard {
    pub id: i64,
    pub front: String,
    pub back: String,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyPlanResponse {
    pub study_plan: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TutorResponse {
    pub answer: String,
}

/// Model output is passed through as raw JSON, so the list is untyped here
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResponse {
    pub questions: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashcardResponse {
    pub flashcards: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

// Schema-level bounds. Lengths count characters, not bytes.
fn check_length(field: &str, value: &str, min: usize, max: usize) -> Result<(), String> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(format!(
            "{} must be between {} and {} characters",
            field, min, max
        ));
    }
    Ok(())
}

impl StudyProfile {
    pub fn validate(&self) -> Result<(), String> {
        check_length("subject", &self.subject, 1, SUBJECT_MAX_LEN)?;
        check_length("goal", &self.goal, 1, GOAL_MAX_LEN)?;
        check_length("level", &self.level, 1, LEVEL_MAX_LEN)?;
        match self.hours_per_day() {
            Some(hours) if (1..=MAX_HOURS_PER_DAY).contains(&hours) => Ok(()),
            None if self.is_fractional_hours() => {
                Err("Time per day must be a whole number of hours".to_string())
            }
            _ => Err("Time per day must be between 1 and 24 hours".to_string()),
        }
    }

    /// Whole number of hours, if `time_per_day` is integral and fits in an i64.
    /// Exponent forms such as `2e0` count as integral.
    pub fn hours_per_day(&self) -> Option<i64> {
        if let Some(hours) = self.time_per_day.as_i64() {
            return Some(hours);
        }
        let value = self.time_per_day.as_f64()?;
        if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
            Some(value as i64)
        } else {
            None
        }
    }

    fn is_fractional_hours(&self) -> bool {
        self.time_per_day
            .as_f64()
            .is_some_and(|value| value.is_finite() && value.fract() != 0.0)
    }

    /// Every text field still has content once whitespace is removed
    pub fn has_blank_field(&self) -> bool {
        [&self.subject, &self.goal, &self.level]
            .iter()
            .any(|field| field.trim().is_empty())
    }
}

impl TutorRequest {
    pub fn validate(&self) -> Result<(), String> {
        check_length("question", &self.question, 1, QUESTION_MAX_LEN)
    }
}

impl QuizRequest {
    pub fn validate(&self) -> Result<(), String> {
        check_length("subject", &self.subject, 1, SUBJECT_MAX_LEN)?;
        check_length("level", &self.level, 1, LEVEL_MAX_LEN)
    }
}

impl FlashcardRequest {
    pub fn validate(&self) -> Result<(), String> {
        check_length("subject", &self.subject, 1, SUBJECT_MAX_LEN)?;
        check_length("level", &self.level, 1, LEVEL_MAX_LEN)
    }
}

impl ContentRequest {
    pub fn validate(&self) -> Result<(), String> {
        check_length("content", &self.content, CONTENT_MIN_LEN, CONTENT_MAX_LEN)
    }

    pub fn is_too_short(&self) -> bool {
        self.content.trim().chars().count() < CONTENT_MIN_LEN
    }
}
