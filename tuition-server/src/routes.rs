use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};

use tuition_api::domain::auth::{LoginRequest, LoginResponse};
use tuition_api::domain::payment::PaymentRequest;
use tuition_api::domain::registration::RegisterStudentRequest;
use tuition_api::error::ApiError;
use tuition_api::service::notifications::DEFAULT_REMINDER_LIMIT;
use tuition_db::models::fee_record::FeeRecordModel;
use tuition_db::models::notification::NotificationView;
use tuition_db::models::overview::LedgerOverview;

use crate::auth::{issue_token, AdminClaims, Claims};
use crate::error::AppError;
use crate::state::AppState;

pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let account = state
        .accounts
        .login(&payload.username, &payload.password)
        .await?;

    let claims = Claims::for_account(&account);
    let token = issue_token(&state.jwt, &claims)
        .map_err(|err| ApiError::InternalError(err.to_string()))?;

    Ok(Json(LoginResponse {
        token,
        role: account.role,
        username: account.username,
    }))
}

pub async fn stats_handler(
    _admin: AdminClaims,
    State(state): State<Arc<AppState>>,
) -> Result<Json<LedgerOverview>, AppError> {
    let today = Utc::now().date_naive();
    Ok(Json(state.ledger.overview(today).await?))
}

pub async fn list_students_handler(
    _admin: AdminClaims,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<FeeRecordModel>>, AppError> {
    Ok(Json(state.ledger.list_all().await?))
}

#[derive(Debug, Serialize)]
pub struct RegisterStudentResponse {
    pub message: String,
    pub username: String,
    pub password: String,
}

/// The generated credential is returned exactly once, here.
pub async fn register_student_handler(
    _admin: AdminClaims,
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegisterStudentRequest>,
) -> Result<(StatusCode, Json<RegisterStudentResponse>), AppError> {
    let (_, credential) = state.ledger.register(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterStudentResponse {
            message: "Student added".to_string(),
            username: credential.username,
            password: credential.password,
        }),
    ))
}

pub async fn apply_payment_handler(
    _admin: AdminClaims,
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<PaymentRequest>,
) -> Result<Json<Value>, AppError> {
    state.ledger.apply_payment(id, payload.amount).await?;
    Ok(Json(json!({ "message": "Payment updated" })))
}

/// Self-service view: the record is keyed by the token's account id,
/// never by a caller-supplied id.
pub async fn student_me_handler(
    claims: Claims,
    State(state): State<Arc<AppState>>,
) -> Result<Json<FeeRecordModel>, AppError> {
    Ok(Json(state.ledger.get_by_owner(claims.id).await?))
}

pub async fn reminders_handler(
    _admin: AdminClaims,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<NotificationView>>, AppError> {
    Ok(Json(
        state.notifications.list_recent(DEFAULT_REMINDER_LIMIT).await?,
    ))
}
