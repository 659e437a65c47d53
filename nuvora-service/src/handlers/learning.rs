use axum::{extract::State, Json};
use validator::Validate;

use crate::dtos::{
    AppJson, CorrectionRequest, CorrectionResponse, QuizRequest, QuizResponse, SummaryRequest,
    SummaryResponse,
};
use crate::prompts;
use crate::services::complete;
use crate::startup::AppState;
use service_core::error::AppError;

#[tracing::instrument(skip(state, request))]
pub async fn summarize(
    State(state): State<AppState>,
    AppJson(request): AppJson<SummaryRequest>,
) -> Result<Json<SummaryResponse>, AppError> {
    request.validate()?;

    let summary = complete(state.groq.as_ref(), &prompts::summary(&request.text)).await?;

    tracing::info!(summary_len = summary.len(), "Summary generated");

    Ok(Json(SummaryResponse { summary }))
}

#[tracing::instrument(skip(state, request))]
pub async fn language_correct(
    State(state): State<AppState>,
    AppJson(request): AppJson<CorrectionRequest>,
) -> Result<Json<CorrectionResponse>, AppError> {
    request.validate()?;

    let correction = complete(state.gemini.as_ref(), &prompts::correction(&request.text)).await?;

    Ok(Json(CorrectionResponse { correction }))
}

#[tracing::instrument(skip(state, request))]
pub async fn quiz(
    State(state): State<AppState>,
    AppJson(request): AppJson<QuizRequest>,
) -> Result<Json<QuizResponse>, AppError> {
    request.validate()?;

    let quiz = complete(state.groq.as_ref(), &prompts::quiz(&request.text)).await?;

    tracing::info!(quiz_len = quiz.len(), "Quiz generated");

    Ok(Json(QuizResponse { quiz }))
}
