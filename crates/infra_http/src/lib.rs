//! HTTP Infrastructure
//!
//! The only I/O layer in the system: a reqwest-based gateway plus one
//! adapter per domain port. The gateway owns bearer-token injection from
//! the session context, the fixed request timeout, JSON decoding, and the
//! mapping from HTTP status codes to the shared `PortError` taxonomy.
//!
//! Two behaviors are global by design:
//!
//! - a 401 from any endpoint clears the stored session before the error is
//!   returned, so the next screen load lands on login;
//! - nothing here retries. Failures surface to the caller, which reports
//!   them to the user.

pub mod adapters;
pub mod cache;
pub mod client;
pub mod endpoints;

pub use adapters::{
    AuthGateway, ClaimsGateway, DepartmentsGateway, DoctorsGateway, PayersGateway,
    SpecialtiesGateway, StaffGateway, TariffsGateway, TdsGateway, WardsGateway,
};
pub use cache::TtlCache;
pub use client::HttpGateway;
pub use endpoints::ServiceEndpoints;
