use crate::domain::error::{bad_request, internal, not_found, ErrorEnvelope};
use crate::domain::payment::{Payment, RecordPaymentRequest, RecordPaymentResponse};
use crate::ledger::timeparse::{parse_payment_date, truncate_to_seconds};
use crate::repo::customers_repo::CustomersRepo;
use crate::repo::payments_repo::PaymentsRepo;
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

const DEFAULT_STATUS: &str = "completed";

/// Validates and persists one payment against an existing loan account.
#[derive(Clone)]
pub struct PaymentService {
    pub customers_repo: CustomersRepo,
    pub payments_repo: PaymentsRepo,
}

impl PaymentService {
    pub async fn record(
        &self,
        req: RecordPaymentRequest,
        now: DateTime<Utc>,
    ) -> Result<RecordPaymentResponse, (StatusCode, ErrorEnvelope)> {
        let (account_number, amount) = validate_request(&req)?;
        let payment_date = resolve_payment_date(req.payment_date.as_deref(), now)?;
        let status = req.status.unwrap_or_else(|| DEFAULT_STATUS.to_string());

        // Existence check before insert; accounts are never deleted in this
        // domain, so the check-then-insert race is acceptable.
        let customer = self
            .customers_repo
            .find_by_account_number(&account_number)
            .await
            .map_err(internal)?
            .ok_or_else(|| not_found("ACCOUNT_NOT_FOUND", "Account not found"))?;

        let id = self
            .payments_repo
            .insert(customer.id, &account_number, amount, payment_date, &status)
            .await
            .map_err(internal)?;

        // Return the stored row, not the request: the store assigns the id
        // and is authoritative for what was persisted.
        let payment = self
            .payments_repo
            .find_by_id(id)
            .await
            .map_err(internal)?
            .ok_or_else(|| internal(anyhow::anyhow!("payment {id} missing after insert")))?;

        tracing::info!(
            payment_id = payment.id,
            account_number = %payment.account_number,
            amount = %payment.payment_amount,
            "payment recorded"
        );

        Ok(RecordPaymentResponse {
            message: "Payment successful".to_string(),
            payment,
        })
    }

    pub async fn history(
        &self,
        account_number: &str,
    ) -> Result<Vec<Payment>, (StatusCode, ErrorEnvelope)> {
        self.payments_repo
            .find_by_account_number(account_number)
            .await
            .map_err(internal)
    }
}

fn validate_request(
    req: &RecordPaymentRequest,
) -> Result<(String, Decimal), (StatusCode, ErrorEnvelope)> {
    let account_number = match req.account_number.as_deref().map(str::trim) {
        Some(a) if !a.is_empty() => a.to_string(),
        _ => return Err(bad_request("Account number and payment amount are required")),
    };
    let amount = match req.payment_amount {
        Some(a) if a > Decimal::ZERO => a,
        Some(_) => return Err(bad_request("payment_amount must be greater than zero")),
        None => return Err(bad_request("Account number and payment amount are required")),
    };
    Ok((account_number, amount))
}

fn resolve_payment_date(
    raw: Option<&str>,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>, (StatusCode, ErrorEnvelope)> {
    let ts = match raw {
        Some(raw) => parse_payment_date(raw)
            .ok_or_else(|| bad_request("payment_date is not a recognized timestamp"))?,
        None => now,
    };
    Ok(truncate_to_seconds(ts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn req(account: Option<&str>, amount: Option<&str>) -> RecordPaymentRequest {
        RecordPaymentRequest {
            account_number: account.map(str::to_string),
            payment_amount: amount.map(|a| a.parse().unwrap()),
            payment_date: None,
            status: None,
        }
    }

    #[test]
    fn missing_account_number_is_rejected() {
        let e = validate_request(&req(None, Some("100"))).unwrap_err();
        assert_eq!(e.0, StatusCode::BAD_REQUEST);
        assert_eq!(e.1.error.code, "VALIDATION_ERROR");
    }

    #[test]
    fn blank_account_number_is_rejected() {
        assert!(validate_request(&req(Some("   "), Some("100"))).is_err());
    }

    #[test]
    fn missing_amount_is_rejected() {
        assert!(validate_request(&req(Some("AC100"), None)).is_err());
    }

    #[test]
    fn non_positive_amounts_are_rejected() {
        assert!(validate_request(&req(Some("AC100"), Some("0"))).is_err());
        assert!(validate_request(&req(Some("AC100"), Some("-50"))).is_err());
    }

    #[test]
    fn valid_input_passes_through_trimmed() {
        let (account, amount) = validate_request(&req(Some(" AC100 "), Some("2500.50"))).unwrap();
        assert_eq!(account, "AC100");
        assert_eq!(amount, "2500.50".parse().unwrap());
    }

    #[test]
    fn payment_date_defaults_to_now_at_whole_seconds() {
        let now = Utc.with_ymd_and_hms(2026, 8, 15, 10, 30, 0).unwrap()
            + chrono::Duration::milliseconds(789);
        let ts = resolve_payment_date(None, now).unwrap();
        assert_eq!(ts.timestamp_subsec_nanos(), 0);
        assert_eq!(ts.timestamp(), now.timestamp());
    }

    #[test]
    fn supplied_payment_date_is_parsed() {
        let now = Utc::now();
        let ts = resolve_payment_date(Some("2026-08-01 09:00:00"), now).unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2026, 8, 1, 9, 0, 0).unwrap());
    }

    #[test]
    fn unparseable_payment_date_is_rejected() {
        let e = resolve_payment_date(Some("soon"), Utc::now()).unwrap_err();
        assert_eq!(e.0, StatusCode::BAD_REQUEST);
    }
}
