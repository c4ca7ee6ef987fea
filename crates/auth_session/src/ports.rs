//! Auth Domain Port
//!
//! Operations the auth flow needs from the backend. The HTTP gateway
//! implements this against the remote API; tests use an in-memory mock.

use async_trait::async_trait;

use core_kernel::{DomainPort, PortError};

use crate::requests::{
    FirebaseVerifyResponse, LoginRequest, LoginResponse, OtpSendResponse, OtpVerifyRequest,
    OtpVerifyResponse, TokenValidation,
};
use crate::user::UserProfile;

/// Backend operations behind the authentication screens
#[async_trait]
pub trait AuthPort: DomainPort {
    /// Direct email/password login for hospital admin users
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, PortError>;

    /// Verifies a Firebase ID token and returns the full profile
    async fn verify_firebase_token(&self, id_token: &str)
        -> Result<FirebaseVerifyResponse, PortError>;

    /// Fetches the signed-in user's profile
    async fn profile(&self) -> Result<UserProfile, PortError>;

    /// Asks the backend whether the stored token is still valid
    async fn validate_token(&self) -> Result<TokenValidation, PortError>;

    /// Sends a login OTP to an employee phone number
    async fn send_otp(&self, phone: &str) -> Result<OtpSendResponse, PortError>;

    /// Verifies an employee OTP
    async fn verify_otp(&self, request: &OtpVerifyRequest) -> Result<OtpVerifyResponse, PortError>;
}
