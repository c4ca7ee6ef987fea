//! Auth flow request and response types
//!
//! Requests are validated client-side before anything is dispatched; a
//! failed check blocks submission without a network round trip. Responses
//! are the typed shapes of the backend's auth endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::user::UserProfile;

/// Email/password login (`POST /auth/login`)
#[derive(Debug, Clone, Serialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Response to a successful login
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub access_token: String,
    pub user: UserProfile,
}

/// Firebase ID-token verification (`POST /firebase/verify-token`)
#[derive(Debug, Clone, Serialize, Validate)]
pub struct FirebaseVerifyRequest {
    #[validate(length(min = 1, message = "ID token is required"))]
    pub id_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FirebaseVerifyResponse {
    pub success: bool,
    #[serde(default)]
    pub user: Option<UserProfile>,
    #[serde(default)]
    pub message: Option<String>,
}

/// OTP dispatch for employee login (`POST /employee/send-otp`)
#[derive(Debug, Clone, Serialize, Validate)]
pub struct OtpSendRequest {
    #[validate(length(min = 10, message = "Phone number is required"))]
    pub phone: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OtpSendResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// OTP verification (`POST /employee/verify-otp`)
#[derive(Debug, Clone, Serialize, Validate)]
pub struct OtpVerifyRequest {
    #[validate(length(min = 10, message = "Phone number is required"))]
    pub phone: String,
    #[validate(length(equal = 6, message = "OTP must be 6 digits"))]
    pub code: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OtpVerifyResponse {
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default)]
    pub employee_name: Option<String>,
    #[serde(default)]
    pub corporate_name: Option<String>,
    #[serde(default)]
    pub dependents: Vec<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Result of `GET /auth/validate-token`
///
/// Transport failures are folded into `valid: false` by the caller; this
/// call never bubbles an error to the user.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenValidation {
    pub valid: bool,
    #[serde(default)]
    pub user: Option<UserProfile>,
}
