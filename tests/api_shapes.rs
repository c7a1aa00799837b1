use chrono::{NaiveDate, TimeZone, Utc};
use emi_collect::domain::customer::{Customer, CustomerWithBalance};
use emi_collect::domain::payment::{Payment, RecordPaymentRequest, RecordPaymentResponse};
use emi_collect::ledger::balance::EmiStatus;
use rust_decimal::Decimal;

fn sample_customer() -> Customer {
    Customer {
        id: 1,
        account_number: "AC100".to_string(),
        issue_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        interest_rate: "10.50".parse().unwrap(),
        tenure: 36,
        emi_due: "5000.00".parse().unwrap(),
    }
}

#[test]
fn customer_with_balance_serializes_flat() {
    let rec = CustomerWithBalance {
        customer: sample_customer(),
        total_paid_this_month: "3000".parse().unwrap(),
        remaining_emi: "2000.00".parse().unwrap(),
        emi_status: EmiStatus::Pending,
    };

    let v: serde_json::Value = serde_json::to_value(&rec).unwrap();
    // balance fields sit beside the customer fields, not nested under them
    assert_eq!(v["account_number"], "AC100");
    assert_eq!(v["emi_due"], "5000.00");
    assert_eq!(v["remaining_emi"], "2000.00");
    assert_eq!(v["emi_status"], "pending");
}

#[test]
fn record_payment_response_wraps_stored_row() {
    let resp = RecordPaymentResponse {
        message: "Payment successful".to_string(),
        payment: Payment {
            id: 42,
            customer_id: 1,
            account_number: "AC100".to_string(),
            payment_amount: "2500.00".parse().unwrap(),
            payment_date: Utc.with_ymd_and_hms(2026, 8, 15, 10, 30, 0).unwrap(),
            status: "completed".to_string(),
        },
    };

    let v: serde_json::Value = serde_json::to_value(&resp).unwrap();
    assert_eq!(v["message"], "Payment successful");
    assert_eq!(v["payment"]["id"], 42);
    assert_eq!(v["payment"]["status"], "completed");
}

#[test]
fn record_payment_request_tolerates_missing_fields() {
    let req: RecordPaymentRequest = serde_json::from_str("{}").unwrap();
    assert!(req.account_number.is_none());
    assert!(req.payment_amount.is_none());
    assert!(req.payment_date.is_none());
    assert!(req.status.is_none());
}

#[test]
fn store_failures_keep_diagnostics_in_details() {
    let (status, envelope) = emi_collect::domain::error::internal(anyhow::anyhow!("pool timed out"));
    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(envelope.error.code, "STORE_UNAVAILABLE");
    assert_eq!(envelope.error.message, "store unavailable");
    assert_eq!(envelope.error.details.as_deref(), Some("pool timed out"));
}

#[test]
fn record_payment_request_accepts_full_payload() {
    let req: RecordPaymentRequest = serde_json::from_str(
        r#"{
            "account_number": "AC100",
            "payment_amount": 2500.50,
            "payment_date": "2026-08-15T10:30:00Z",
            "status": "completed"
        }"#,
    )
    .unwrap();

    assert_eq!(req.account_number.as_deref(), Some("AC100"));
    assert_eq!(req.payment_amount, Some("2500.50".parse::<Decimal>().unwrap()));
    assert_eq!(req.payment_date.as_deref(), Some("2026-08-15T10:30:00Z"));
}
