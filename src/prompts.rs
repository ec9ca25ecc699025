//! Prompt templates for each feature.
//!
//! Every function here is pure: validated request fields in, prompt text out.

use crate::models::{FlashcardRequest, QuizRequest, StudyProfile};

/// Only this many characters of caller content are embedded in a prompt
pub const CONTENT_PROMPT_LIMIT: usize = 1000;
pub const QUIZ_QUESTION_COUNT: usize = 5;
pub const FLASHCARD_COUNT: usize = 5;
pub const CONTENT_ITEM_COUNT: usize = 3;

/// Strip emphasis markers and cap the content at [`CONTENT_PROMPT_LIMIT`] characters.
pub fn clean_content(content: &str) -> String {
    content
        .replace("**", "")
        .replace('*', "")
        .trim()
        .chars()
        .take(CONTENT_PROMPT_LIMIT)
        .collect()
}

pub fn study_plan_prompt(profile: &StudyProfile) -> String {
    format!(
        r#"Create a comprehensive daily study plan without using asterisks or markdown formatting.

Study Profile:
- Subject: {subject}
- Goal: {goal}
- Current Level: {level}
- Available Time: {hours} hours per day

Please provide a complete study plan with these sections:

## Daily Schedule ({hours} Hours)
Break down the daily {hours} hours into specific time blocks.

## Weekly Learning Path
Outline what to study each week.

## Key Topics to Master
List important topics for {subject}.

## Recommended Resources
Suggest books, courses, and materials.

## Practice Strategy
Describe practice methods.

## Progress Milestones
Set weekly goals.

## Study Tips
Provide specific advice.

Use simple formatting: ## for main sections, ### for subsections, and - for bullet points. Do not use asterisks."#,
        subject = profile.subject,
        goal = profile.goal,
        level = profile.level,
        hours = profile
            .hours_per_day()
            .map(|hours| hours.to_string())
            .unwrap_or_else(|| profile.time_per_day.to_string()),
    )
}

pub fn tutor_prompt(question: &str) -> String {
    format!(
        r#"You are an AI tutor. Answer this question clearly and concisely:

Question: {question}

Provide a helpful, educational answer that explains the concept step by step.
Use simple language and include examples where appropriate.
Do not use any markdown formatting, asterisks, or special characters."#
    )
}

pub fn quiz_prompt(request: &QuizRequest) -> String {
    format!(
        r#"Create a quiz with {count} multiple choice questions about {subject} at {level} level.

Format your response as a JSON array with this exact structure:
[
  {{
    "question": "Question text here?",
    "options": ["Option A", "Option B", "Option C", "Option D"],
    "correct": 0
  }}
]

Make sure:
- Questions are appropriate for {level} level
- Each question has exactly 4 options
- The correct answer index (0-3) is specified
- Questions test understanding, not just memorization"#,
        count = QUIZ_QUESTION_COUNT,
        subject = request.subject,
        level = request.level,
    )
}

pub fn flashcards_prompt(request: &FlashcardRequest) -> String {
    format!(
        r#"Create {count} educational flashcards for {subject} at {level} level.

Format your response as a JSON array with this exact structure:
[
  {{
    "id": 1,
    "front": "Question or concept to learn",
    "back": "Detailed explanation or answer",
    "difficulty": "easy"
  }}
]

Make sure:
- Each flashcard has a clear question/concept on the front
- The back has a comprehensive but concise explanation
- Difficulty levels are: "easy", "medium", or "hard"
- Content is appropriate for {level} level
- Focus on key concepts in {subject}"#,
        count = FLASHCARD_COUNT,
        subject = request.subject,
        level = request.level,
    )
}

pub fn quiz_from_content_prompt(content: &str) -> String {
    format!(
        r#"Create {count} multiple choice questions based on this content. Return ONLY valid JSON:

{content}

Response format:
[
  {{
    "question": "Clear question?",
    "options": ["A", "B", "C", "D"],
    "correct": 0
  }}
]"#,
        count = CONTENT_ITEM_COUNT,
        content = clean_content(content),
    )
}

pub fn flashcards_from_content_prompt(content: &str) -> String {
    format!(
        r#"Create {count} flashcards from this content. Return ONLY valid JSON:

{content}

Response format:
[
  {{
    "id": 1,
    "front": "Question",
    "back": "Answer",
    "difficulty": "easy"
  }}
]"#,
        count = CONTENT_ITEM_COUNT,
        content = clean_content(content),
    )
}
