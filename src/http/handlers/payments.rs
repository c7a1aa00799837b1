use crate::domain::payment::RecordPaymentRequest;
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

pub async fn record_payment(
    State(state): State<AppState>,
    Json(req): Json<RecordPaymentRequest>,
) -> impl IntoResponse {
    match state.payment_service.record(req, Utc::now()).await {
        Ok(resp) => (axum::http::StatusCode::CREATED, Json(resp)).into_response(),
        Err((status, body)) => (status, Json(body)).into_response(),
    }
}

pub async fn payment_history(
    State(state): State<AppState>,
    Path(account_number): Path<String>,
) -> impl IntoResponse {
    match state.payment_service.history(&account_number).await {
        Ok(payments) => (axum::http::StatusCode::OK, Json(payments)).into_response(),
        Err((status, body)) => (status, Json(body)).into_response(),
    }
}
