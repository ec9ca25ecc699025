use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

use crate::models::{Difficulty, Flashcard, QuizQuestion};

// First '[' through last ']', across newlines.
static JSON_ARRAY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\[.*\]").expect("static regex is valid"));

/// Result of interpreting raw model output.
///
/// Both variants carry a payload that is safe to return to the caller; the
/// tag only records where it came from.
#[derive(Debug, Clone, PartialEq)]
pub enum Interpretation {
    Parsed(Value),
    Fallback(Value),
}

impl Interpretation {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Interpretation::Fallback(_))
    }

    pub fn into_value(self) -> Value {
        match self {
            Interpretation::Parsed(value) | Interpretation::Fallback(value) => value,
        }
    }
}

/// Parse the whole response as JSON, any shape accepted.
pub fn interpret_direct(raw: &str, fallback: impl FnOnce() -> Value) -> Interpretation {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => Interpretation::Parsed(value),
        Err(_) => Interpretation::Fallback(fallback()),
    }
}

/// Pull the bracketed array out of surrounding prose; only a non-empty array is accepted.
pub fn interpret_extracted(raw: &str, fallback: impl FnOnce() -> Value) -> Interpretation {
    let parsed = JSON_ARRAY_PATTERN
        .find(raw)
        .and_then(|m| serde_json::from_str::<Value>(m.as_str()).ok());

    match parsed {
        Some(Value::Array(items)) if !items.is_empty() => Interpretation::Parsed(Value::Array(items)),
        _ => Interpretation::Fallback(fallback()),
    }
}

/// Remove emphasis, code-fence and triple-quote markers from a tutor answer.
pub fn clean_tutor_answer(raw: &str) -> String {
    raw.replace("**", "")
        .replace('*', "")
        .replace("```", "")
        .replace("\"\"\"", "")
}

fn to_list<T: serde::Serialize>(items: Vec<T>) -> Value {
    serde_json::to_value(items).unwrap_or_else(|_| Value::Array(Vec::new()))
}

pub fn quiz_fallback(subject: &str) -> Value {
    to_list(vec![QuizQuestion {
        question: format!("What is a fundamental concept in {}?", subject),
        options: ["Option A", "Option B", "Option C", "Option D"]
            .map(String::from)
            .to_vec(),
        correct: 0,
    }])
}

pub fn flashcards_fallback(subject: &str) -> Value {
    to_list(vec![Flashcard {
        id: 1,
        front: format!("What is a key concept in {}?", subject),
        back: format!(
            "This is a fundamental concept in {} that you should understand.",
            subject
        ),
        difficulty: Difficulty::Easy,
    }])
}

pub fn content_quiz_fallback() -> Value {
    to_list(vec![QuizQuestion {
        question: "What is the main topic discussed?".to_string(),
        options: ["Topic A", "Topic B", "Topic C", "Topic D"]
            .map(String::from)
            .to_vec(),
        correct: 0,
    }])
}

pub fn content_flashcards_fallback() -> Value {
    to_list(vec![Flashcard {
        id: 1,
        front: "Key concept from content".to_string(),
        back: "Main explanation from the content".to_string(),
        difficulty: Difficulty::Medium,
    }])
}
