use crate::domain::customer::Customer;
use anyhow::Result;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

#[derive(Clone)]
pub struct CustomersRepo {
    pub pool: PgPool,
}

const CUSTOMER_COLUMNS: &str = "id, account_number, issue_date, interest_rate, tenure, emi_due";

fn customer_from_row(r: &PgRow) -> Customer {
    Customer {
        id: r.get("id"),
        account_number: r.get("account_number"),
        issue_date: r.get("issue_date"),
        interest_rate: r.get("interest_rate"),
        tenure: r.get("tenure"),
        emi_due: r.get("emi_due"),
    }
}

impl CustomersRepo {
    pub async fn find_all(&self) -> Result<Vec<Customer>> {
        let rows = sqlx::query(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(customer_from_row).collect())
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Customer>> {
        let row = sqlx::query(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(customer_from_row))
    }

    pub async fn find_by_account_number(&self, account_number: &str) -> Result<Option<Customer>> {
        let row = sqlx::query(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers WHERE account_number = $1"
        ))
        .bind(account_number)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(customer_from_row))
    }
}
