use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmiStatus {
    Paid,
    Pending,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmiBalance {
    pub total_paid_this_month: Decimal,
    pub remaining_emi: Decimal,
    pub emi_status: EmiStatus,
}

/// Monthly EMI position from the contractual installment and the sum of
/// completed payments in the reference month. `remaining_emi` is clamped
/// at zero and rounded to two decimal places.
pub fn compute_balance(emi_due: Decimal, total_paid_this_month: Decimal) -> EmiBalance {
    let outstanding = (emi_due - total_paid_this_month).max(Decimal::ZERO);

    // Status reflects the exact remainder; rounding is display-only.
    let emi_status = if outstanding <= Decimal::ZERO {
        EmiStatus::Paid
    } else {
        EmiStatus::Pending
    };

    let remaining_emi =
        outstanding.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    EmiBalance {
        total_paid_this_month,
        remaining_emi,
        emi_status,
    }
}
