use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A stored payment row. Append-only: never mutated or deleted after insert.
#[derive(Debug, Clone, Serialize)]
pub struct Payment {
    pub id: i64,
    pub customer_id: i64,
    pub account_number: String,
    pub payment_amount: Decimal,
    pub payment_date: DateTime<Utc>,
    pub status: String,
}

/// Required fields arrive as `Option` so missing input surfaces as a 400
/// from our own validation instead of a deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordPaymentRequest {
    pub account_number: Option<String>,
    pub payment_amount: Option<Decimal>,
    pub payment_date: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordPaymentResponse {
    pub message: String,
    pub payment: Payment,
}
