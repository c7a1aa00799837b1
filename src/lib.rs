pub mod config;
pub mod domain {
    pub mod customer;
    pub mod error;
    pub mod payment;
}
pub mod http {
    pub mod handlers {
        pub mod customers;
        pub mod ops;
        pub mod payments;
    }
    pub mod middleware {
        pub mod request_log;
    }
}
pub mod ledger {
    pub mod balance;
    pub mod timeparse;
}
pub mod repo {
    pub mod customers_repo;
    pub mod payments_repo;
}
pub mod service {
    pub mod ledger_service;
    pub mod payment_service;
}

#[derive(Clone)]
pub struct AppState {
    pub ledger_service: service::ledger_service::LedgerService,
    pub payment_service: service::payment_service::PaymentService,
}
