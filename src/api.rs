use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use uuid::Uuid;

use crate::{
    errors::{ApiError, ErrorContext, ErrorReply},
    interpreter::{self, Interpretation},
    llm_service::LLMService,
    models::*,
    prompts,
};

// Import logging macros
use crate::{log_api_start, log_api_success, log_interpretation, log_validation};

#[derive(Clone)]
pub struct AppState {
    pub llm_service: LLMService,
}

/// Static description of one endpoint, used for logging and error replies
struct Operation {
    name: &'static str,
    resource: &'static str,
    failure_message: &'static str,
}

const STUDY_PLAN: Operation = Operation {
    name: "generate_study_plan",
    resource: "study_plan",
    failure_message: "Failed to generate study plan. Please try again.",
};

const TUTOR: Operation = Operation {
    name: "ask_tutor",
    resource: "answer",
    failure_message: "Failed to get answer. Please try again.",
};

const QUIZ: Operation = Operation {
    name: "generate_quiz",
    resource: "quiz",
    failure_message: "Failed to generate quiz. Please try again.",
};

const FLASHCARDS: Operation = Operation {
    name: "generate_flashcards",
    resource: "flashcards",
    failure_message: "Failed to generate flashcards. Please try again.",
};

const QUIZ_FROM_CONTENT: Operation = Operation {
    name: "generate_quiz_from_content",
    resource: "quiz",
    failure_message: "Failed to generate quiz from content.",
};

const FLASHCARDS_FROM_CONTENT: Operation = Operation {
    name: "generate_flashcards_from_content",
    resource: "flashcards",
    failure_message: "Failed to generate flashcards from content.",
};

impl Operation {
    fn reject(&self, request_id: &str, error: ApiError) -> ErrorReply {
        let context = ErrorContext::new(self.name, self.resource)
            .with_id(request_id)
            .with_user_message(self.failure_message);
        error.to_response_with_context(context)
    }

    fn invalid(&self, request_id: &str, message: String) -> ErrorReply {
        log_validation!(failure, self.resource, error = message);
        self.reject(request_id, ApiError::ValidationError(message))
    }

    async fn ask_model(
        &self,
        state: &AppState,
        request_id: &str,
        prompt: &str,
    ) -> Result<String, ErrorReply> {
        state
            .llm_service
            .complete(prompt)
            .await
            .map_err(|e| self.reject(request_id, e.into()))
    }

    fn record(&self, request_id: &str, interpretation: &Interpretation, raw: &str) {
        if interpretation.is_fallback() {
            log_interpretation!(fallback, self.name, request_id = request_id, raw_length = raw.len());
        } else {
            log_interpretation!(parsed, self.name, request_id = request_id);
        }
    }
}

fn item_count(value: &serde_json::Value) -> usize {
    value.as_array().map(Vec::len).unwrap_or(1)
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "Backend running".to_string(),
    })
}

pub async fn generate_study_plan(
    State(state): State<AppState>,
    Json(profile): Json<StudyProfile>,
) -> Result<Json<StudyPlanResponse>, ErrorReply> {
    let request_id = Uuid::new_v4().to_string();
    log_api_start!(STUDY_PLAN.name, request_id = request_id);

    profile
        .validate()
        .map_err(|message| STUDY_PLAN.invalid(&request_id, message))?;
    if profile.has_blank_field() {
        return Err(STUDY_PLAN.invalid(&request_id, "All fields must be non-empty".to_string()));
    }

    let prompt = prompts::study_plan_prompt(&profile);
    let study_plan = STUDY_PLAN.ask_model(&state, &request_id, &prompt).await?;

    log_api_success!(STUDY_PLAN.name, request_id = request_id, "study plan generated");
    Ok(Json(StudyPlanResponse { study_plan }))
}

pub async fn ask_tutor(
    State(state): State<AppState>,
    Json(request): Json<TutorRequest>,
) -> Result<Json<TutorResponse>, ErrorReply> {
    let request_id = Uuid::new_v4().to_string();
    log_api_start!(TUTOR.name, request_id = request_id);

    request
        .validate()
        .map_err(|message| TUTOR.invalid(&request_id, message))?;

    let prompt = prompts::tutor_prompt(&request.question);
    let raw = TUTOR.ask_model(&state, &request_id, &prompt).await?;
    let answer = interpreter::clean_tutor_answer(&raw);

    log_api_success!(TUTOR.name, request_id = request_id, "answer generated");
    Ok(Json(TutorResponse { answer }))
}

pub async fn generate_quiz(
    State(state): State<AppState>,
    Json(request): Json<QuizRequest>,
) -> Result<Json<QuizResponse>, ErrorReply> {
    let request_id = Uuid::new_v4().to_string();
    log_api_start!(QUIZ.name, request_id = request_id);

    request
        .validate()
        .map_err(|message| QUIZ.invalid(&request_id, message))?;

    let prompt = prompts::quiz_prompt(&request);
    let raw = QUIZ.ask_model(&state, &request_id, &prompt).await?;

    let interpretation =
        interpreter::interpret_direct(&raw, || interpreter::quiz_fallback(&request.subject));
    QUIZ.record(&request_id, &interpretation, &raw);
    let questions = interpretation.into_value();

    log_api_success!(QUIZ.name, request_id = request_id, count = item_count(&questions), "quiz generated");
    Ok(Json(QuizResponse { questions }))
}

pub async fn generate_flashcards(
    State(state): State<AppState>,
    Json(request): Json<FlashcardRequest>,
) -> Result<Json<FlashcardResponse>, ErrorReply> {
    let request_id = Uuid::new_v4().to_string();
    log_api_start!(FLASHCARDS.name, request_id = request_id);

    request
        .validate()
        .map_err(|message| FLASHCARDS.invalid(&request_id, message))?;

    let prompt = prompts::flashcards_prompt(&request);
    let raw = FLASHCARDS.ask_model(&state, &request_id, &prompt).await?;

    let interpretation =
        interpreter::interpret_direct(&raw, || interpreter::flashcards_fallback(&request.subject));
    FLASHCARDS.record(&request_id, &interpretation, &raw);
    let flashcards = interpretation.into_value();

    log_api_success!(FLASHCARDS.name, request_id = request_id, count = item_count(&flashcards), "flashcards generated");
    Ok(Json(FlashcardResponse { flashcards }))
}

pub async fn generate_quiz_from_content(
    State(state): State<AppState>,
    Json(request): Json<ContentRequest>,
) -> Result<Json<QuizResponse>, ErrorReply> {
    let request_id = Uuid::new_v4().to_string();
    log_api_start!(QUIZ_FROM_CONTENT.name, request_id = request_id);

    request
        .validate()
        .map_err(|message| QUIZ_FROM_CONTENT.invalid(&request_id, message))?;
    if request.is_too_short() {
        return Err(QUIZ_FROM_CONTENT.invalid(
            &request_id,
            "Content too short to generate quiz".to_string(),
        ));
    }

    let prompt = prompts::quiz_from_content_prompt(&request.content);
    let raw = QUIZ_FROM_CONTENT.ask_model(&state, &request_id, &prompt).await?;

    let interpretation = interpreter::interpret_extracted(&raw, interpreter::content_quiz_fallback);
    QUIZ_FROM_CONTENT.record(&request_id, &interpretation, &raw);
    let questions = interpretation.into_value();

    log_api_success!(QUIZ_FROM_CONTENT.name, request_id = request_id, count = item_count(&questions), "quiz generated");
    Ok(Json(QuizResponse { questions }))
}

pub async fn generate_flashcards_from_content(
    State(state): State<AppState>,
    Json(request): Json<ContentRequest>,
) -> Result<Json<FlashcardResponse>, ErrorReply> {
    let request_id = Uuid::new_v4().to_string();
    log_api_start!(FLASHCARDS_FROM_CONTENT.name, request_id = request_id);

    request
        .validate()
        .map_err(|message| FLASHCARDS_FROM_CONTENT.invalid(&request_id, message))?;
    if request.is_too_short() {
        return Err(FLASHCARDS_FROM_CONTENT.invalid(
            &request_id,
            "Content too short to generate flashcards".to_string(),
        ));
    }

    let prompt = prompts::flashcards_from_content_prompt(&request.content);
    let raw = FLASHCARDS_FROM_CONTENT.ask_model(&state, &request_id, &prompt).await?;

    let interpretation =
        interpreter::interpret_extracted(&raw, interpreter::content_flashcards_fallback);
    FLASHCARDS_FROM_CONTENT.record(&request_id, &interpretation, &raw);
    let flashcards = interpretation.into_value();

    log_api_success!(FLASHCARDS_FROM_CONTENT.name, request_id = request_id, count = item_count(&flashcards), "flashcards generated");
    Ok(Json(FlashcardResponse { flashcards }))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/study-plan", post(generate_study_plan))
        .route("/tutor", post(ask_tutor))
        .route("/quiz", post(generate_quiz))
        .route("/flashcards", post(generate_flashcards))
        .route("/quiz-from-content", post(generate_quiz_from_content))
        .route("/flashcards-from-content", post(generate_flashcards_from_content))
        .with_state(state)
}
