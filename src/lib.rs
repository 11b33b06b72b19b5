//! # KSEB Tariff Service
//!
//! Bi-monthly electricity bill estimation for KSEB Domestic (LT-1A)
//! consumers.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Tariff tables and the pure bill calculation
//! - **application**: Billing service invoked by the HTTP layer
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: Error types used across layers
//! - **config**: TOML application configuration

pub mod application;
pub mod config;
pub mod domain;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig, FirebaseConfig};

// Re-export core types for easy access
pub use application::BillingService;
pub use domain::{BillBreakdown, TariffSchedule};

// Re-export API router
pub use interfaces::http::create_api_router;
