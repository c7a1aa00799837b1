use crate::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

pub async fn list_customers(State(state): State<AppState>) -> impl IntoResponse {
    match state.ledger_service.list_customers(Utc::now()).await {
        Ok(items) => (axum::http::StatusCode::OK, Json(items)).into_response(),
        Err((status, body)) => (status, Json(body)).into_response(),
    }
}

pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match state.ledger_service.get_customer(id).await {
        Ok(customer) => (axum::http::StatusCode::OK, Json(customer)).into_response(),
        Err((status, body)) => (status, Json(body)).into_response(),
    }
}

pub async fn get_customer_by_account(
    State(state): State<AppState>,
    Path(account_number): Path<String>,
) -> impl IntoResponse {
    match state
        .ledger_service
        .get_customer_by_account(&account_number, Utc::now())
        .await
    {
        Ok(customer) => (axum::http::StatusCode::OK, Json(customer)).into_response(),
        Err((status, body)) => (status, Json(body)).into_response(),
    }
}
