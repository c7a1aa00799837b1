use crate::domain::customer::{Customer, CustomerWithBalance};
use crate::domain::error::{internal, not_found, ErrorEnvelope};
use crate::ledger::balance::compute_balance;
use crate::repo::customers_repo::CustomersRepo;
use crate::repo::payments_repo::PaymentsRepo;
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Read-only queries over loan accounts and their monthly EMI position.
#[derive(Clone)]
pub struct LedgerService {
    pub customers_repo: CustomersRepo,
    pub payments_repo: PaymentsRepo,
}

fn with_balance(customer: Customer, total_paid: Decimal) -> CustomerWithBalance {
    let balance = compute_balance(customer.emi_due, total_paid);
    CustomerWithBalance {
        customer,
        total_paid_this_month: balance.total_paid_this_month,
        remaining_emi: balance.remaining_emi,
        emi_status: balance.emi_status,
    }
}

impl LedgerService {
    pub async fn list_customers(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<CustomerWithBalance>, (StatusCode, ErrorEnvelope)> {
        let customers = self.customers_repo.find_all().await.map_err(internal)?;

        let mut out = Vec::with_capacity(customers.len());
        for customer in customers {
            let total_paid = self
                .payments_repo
                .sum_completed_this_month(customer.id, now)
                .await
                .map_err(internal)?;
            out.push(with_balance(customer, total_paid));
        }
        Ok(out)
    }

    /// Lookup by internal id returns the bare customer record, without the
    /// monthly balance fields. Account-number lookup is the balance-bearing
    /// path.
    pub async fn get_customer(
        &self,
        id: i64,
    ) -> Result<Customer, (StatusCode, ErrorEnvelope)> {
        self.customers_repo
            .find_by_id(id)
            .await
            .map_err(internal)?
            .ok_or_else(|| not_found("CUSTOMER_NOT_FOUND", "Customer not found"))
    }

    pub async fn get_customer_by_account(
        &self,
        account_number: &str,
        now: DateTime<Utc>,
    ) -> Result<CustomerWithBalance, (StatusCode, ErrorEnvelope)> {
        let customer = self
            .customers_repo
            .find_by_account_number(account_number)
            .await
            .map_err(internal)?
            .ok_or_else(|| not_found("ACCOUNT_NOT_FOUND", "Account not found"))?;

        let total_paid = self
            .payments_repo
            .sum_completed_this_month(customer.id, now)
            .await
            .map_err(internal)?;

        Ok(with_balance(customer, total_paid))
    }
}
