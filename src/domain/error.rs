use axum::http::StatusCode;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorPayload,
}

#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

pub fn err(code: &str, message: &str) -> ErrorEnvelope {
    ErrorEnvelope {
        error: ErrorPayload {
            code: code.to_string(),
            message: message.to_string(),
            details: None,
        },
    }
}

pub fn bad_request(message: &str) -> (StatusCode, ErrorEnvelope) {
    (StatusCode::BAD_REQUEST, err("VALIDATION_ERROR", message))
}

pub fn not_found(code: &str, message: &str) -> (StatusCode, ErrorEnvelope) {
    (StatusCode::NOT_FOUND, err(code, message))
}

pub fn internal(e: anyhow::Error) -> (StatusCode, ErrorEnvelope) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorEnvelope {
            error: ErrorPayload {
                code: "STORE_UNAVAILABLE".to_string(),
                message: "store unavailable".to_string(),
                details: Some(e.to_string()),
            },
        },
    )
}
