use axum::response::IntoResponse;
use axum::Json;

pub async fn index() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "EMI Collection API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "endpoints": {
            "customers": "/customers",
            "payments": "/payments"
        }
    }))
}

pub async fn health() -> impl IntoResponse {
    (axum::http::StatusCode::OK, "ok")
}

pub async fn route_not_found() -> impl IntoResponse {
    (
        axum::http::StatusCode::NOT_FOUND,
        Json(serde_json::json!({"message": "Route not found"})),
    )
}
