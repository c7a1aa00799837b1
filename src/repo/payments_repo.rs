use crate::domain::payment::Payment;
use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

#[derive(Clone)]
pub struct PaymentsRepo {
    pub pool: PgPool,
}

fn payment_from_row(r: &PgRow) -> Payment {
    Payment {
        id: r.get("id"),
        customer_id: r.get("customer_id"),
        account_number: r.get("account_number"),
        payment_amount: r.get("payment_amount"),
        payment_date: r.get("payment_date"),
        status: r.get("status"),
    }
}

impl PaymentsRepo {
    /// Sum of completed payments for a customer in the UTC calendar month
    /// of `now`. Absent payments sum to zero. The month boundary is pinned
    /// to UTC so it does not drift with the session time zone.
    pub async fn sum_completed_this_month(
        &self,
        customer_id: i64,
        now: DateTime<Utc>,
    ) -> Result<Decimal> {
        let row = sqlx::query(
            r#"
            SELECT COALESCE(SUM(payment_amount), 0) AS total_paid
            FROM payments
            WHERE customer_id = $1
              AND date_trunc('month', payment_date AT TIME ZONE 'UTC')
                  = date_trunc('month', $2::timestamptz AT TIME ZONE 'UTC')
              AND status = 'completed'
            "#,
        )
        .bind(customer_id)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.get("total_paid"))
    }

    pub async fn insert(
        &self,
        customer_id: i64,
        account_number: &str,
        payment_amount: Decimal,
        payment_date: DateTime<Utc>,
        status: &str,
    ) -> Result<i64> {
        let row = sqlx::query(
            r#"
            INSERT INTO payments (customer_id, account_number, payment_amount, payment_date, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(customer_id)
        .bind(account_number)
        .bind(payment_amount)
        .bind(payment_date)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.get("id"))
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Payment>> {
        let row = sqlx::query(
            r#"
            SELECT id, customer_id, account_number, payment_amount, payment_date, status
            FROM payments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(payment_from_row))
    }

    pub async fn find_by_account_number(&self, account_number: &str) -> Result<Vec<Payment>> {
        let rows = sqlx::query(
            r#"
            SELECT id, customer_id, account_number, payment_amount, payment_date, status
            FROM payments
            WHERE account_number = $1
            ORDER BY payment_date DESC
            "#,
        )
        .bind(account_number)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(payment_from_row).collect())
    }
}
