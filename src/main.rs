use axum::middleware::from_fn;
use axum::routing::{get, post};
use axum::Router;
use emi_collect::config::AppConfig;
use emi_collect::repo::customers_repo::CustomersRepo;
use emi_collect::repo::payments_repo::PaymentsRepo;
use emi_collect::service::ledger_service::LedgerService;
use emi_collect::service::payment_service::PaymentService;
use emi_collect::AppState;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&cfg.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let customers_repo = CustomersRepo { pool: pool.clone() };
    let payments_repo = PaymentsRepo { pool: pool.clone() };

    let state = AppState {
        ledger_service: LedgerService {
            customers_repo: customers_repo.clone(),
            payments_repo: payments_repo.clone(),
        },
        payment_service: PaymentService {
            customers_repo,
            payments_repo,
        },
    };

    let app = Router::new()
        .route("/", get(emi_collect::http::handlers::ops::index))
        .route("/health", get(emi_collect::http::handlers::ops::health))
        .route("/customers", get(emi_collect::http::handlers::customers::list_customers))
        .route(
            "/customers/:id",
            get(emi_collect::http::handlers::customers::get_customer),
        )
        .route(
            "/customers/account/:account_number",
            get(emi_collect::http::handlers::customers::get_customer_by_account),
        )
        .route("/payments", post(emi_collect::http::handlers::payments::record_payment))
        .route(
            "/payments/:account_number",
            get(emi_collect::http::handlers::payments::payment_history),
        )
        .fallback(emi_collect::http::handlers::ops::route_not_found)
        .layer(from_fn(emi_collect::http::middleware::request_log::log_request))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
