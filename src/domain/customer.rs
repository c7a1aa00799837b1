use crate::ledger::balance::EmiStatus;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// One loan account. Immutable in this system; there are no update or
/// delete operations on customers.
#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    pub id: i64,
    pub account_number: String,
    pub issue_date: NaiveDate,
    pub interest_rate: Decimal,
    pub tenure: i32,
    pub emi_due: Decimal,
}

/// Customer annotated with the current calendar month's EMI position.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerWithBalance {
    #[serde(flatten)]
    pub customer: Customer,
    pub total_paid_this_month: Decimal,
    pub remaining_emi: Decimal,
    pub emi_status: EmiStatus,
}
