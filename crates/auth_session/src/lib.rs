//! Authentication Session Domain
//!
//! This crate manages the client-side authentication state: the bearer token,
//! the signed-in user's profile, and the token-creation timestamp. Storage is
//! behind the `SessionStore` trait with explicit get/set/clear semantics, and
//! expiry is a pluggable `ExpiryPolicy` so the 24-hour client-side cutoff can
//! be swapped out in tests.
//!
//! The session is consulted before every API call; an expired session is
//! cleared on read and reported as absent, which sends the user back to the
//! login screen.

pub mod error;
pub mod expiry;
pub mod ports;
pub mod requests;
pub mod session;
pub mod user;

pub use error::SessionError;
pub use expiry::{ExpiryPolicy, FixedTtl, NeverExpires};
pub use ports::AuthPort;
pub use requests::{
    FirebaseVerifyRequest, FirebaseVerifyResponse, LoginRequest, LoginResponse, OtpSendRequest,
    OtpSendResponse, OtpVerifyRequest, OtpVerifyResponse, TokenValidation,
};
pub use session::{AuthSession, InMemorySessionStore, JsonFileSessionStore, SessionContext, SessionStore};
pub use user::{AssignedEntity, UserProfile, UserRole};
