use axum::{extract::State, Json};
use validator::Validate;

use crate::dtos::{
    AppJson, ConversationRequest, ConversationResponse, InspirationResponse, ReminderRequest,
};
use crate::prompts;
use crate::reminder::{split_reminder, ReminderParts};
use crate::services::complete;
use crate::startup::AppState;
use service_core::error::AppError;

#[tracing::instrument(skip(state))]
pub async fn daily_inspiration(
    State(state): State<AppState>,
) -> Result<Json<InspirationResponse>, AppError> {
    let inspiration = complete(state.gemini.as_ref(), prompts::DAILY_INSPIRATION).await?;

    Ok(Json(InspirationResponse { inspiration }))
}

#[tracing::instrument(skip(state, request))]
pub async fn reminder(
    State(state): State<AppState>,
    AppJson(request): AppJson<ReminderRequest>,
) -> Result<Json<ReminderParts>, AppError> {
    request.validate()?;

    let reply = complete(
        state.gemini.as_ref(),
        &prompts::reminder(&request.goal, &request.time),
    )
    .await?;

    let parts = split_reminder(&reply);
    if parts.reminder_message.is_empty() && parts.goal_tip.is_empty() {
        tracing::warn!(reply_len = reply.len(), "Reminder reply had no recognised markers");
    }

    Ok(Json(parts))
}

#[tracing::instrument(skip(state, request))]
pub async fn conversation_prompt(
    State(state): State<AppState>,
    AppJson(request): AppJson<ConversationRequest>,
) -> Result<Json<ConversationResponse>, AppError> {
    request.validate()?;

    let response = complete(
        state.gemini.as_ref(),
        &prompts::conversation(&request.message),
    )
    .await?;

    Ok(Json(ConversationResponse { response }))
}
