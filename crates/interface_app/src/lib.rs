//! Application Layer
//!
//! The services a UI shell drives: the auth flow, the claim form service,
//! and the resource services with their bulk operations. Everything here
//! validates client-side first, then talks to the backend through the
//! domain ports, and hands typed results (or typed errors) back for the
//! shell to render.
//!
//! An `Unauthorized` error from any service means the session has already
//! been cleared; the shell's only job is to route to the login screen.

pub mod app;
pub mod auth_flow;
pub mod billing_service;
pub mod bulk;
pub mod claim_service;
pub mod config;
pub mod error;
pub mod payer_service;
pub mod registry_service;
pub mod telemetry;

pub use app::AppServices;
pub use auth_flow::AuthFlow;
pub use billing_service::{TariffService, TdsService};
pub use bulk::aggregate_bulk;
pub use claim_service::ClaimFormService;
pub use config::AppConfig;
pub use error::AppError;
pub use payer_service::{AffiliationOutcome, PayerAffiliationService};
pub use registry_service::{DoctorsService, StaffService};
pub use telemetry::init_tracing;
