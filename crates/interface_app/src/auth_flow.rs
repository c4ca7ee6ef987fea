//! Authentication flow
//!
//! Orchestrates the login screens over the auth port and the session
//! context. Credentials are validated before dispatch; a successful login
//! stores the token, profile, and creation timestamp through the injected
//! session context.

use std::sync::Arc;

use validator::Validate;

use auth_session::{
    AuthPort, LoginRequest, OtpVerifyRequest, SessionContext, UserProfile,
};
use core_kernel::PortError;

use crate::error::AppError;

/// Drives login, OTP login, profile refresh, and logout
pub struct AuthFlow {
    port: Arc<dyn AuthPort>,
    session: SessionContext,
}

impl AuthFlow {
    pub fn new(port: Arc<dyn AuthPort>, session: SessionContext) -> Self {
        Self { port, session }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Email/password login for hospital admin users
    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile, AppError> {
        let request = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        request.validate()?;

        let response = self.port.login(&request).await?;
        self.session.set(response.access_token, response.user.clone())?;
        tracing::info!(uid = %response.user.uid, "login succeeded");
        Ok(response.user)
    }

    /// Firebase-token login for relationship managers
    pub async fn login_with_firebase_token(
        &self,
        id_token: &str,
    ) -> Result<UserProfile, AppError> {
        if id_token.trim().is_empty() {
            return Err(AppError::validation("ID token is required"));
        }

        let response = self.port.verify_firebase_token(id_token).await?;
        let user = response
            .user
            .ok_or_else(|| PortError::unauthorized("Backend verification failed"))?;
        self.session.set(id_token, user.clone())?;
        Ok(user)
    }

    /// Sends a login OTP to an employee phone
    pub async fn send_otp(&self, phone: &str) -> Result<(), AppError> {
        if phone.trim().len() < 10 {
            return Err(AppError::validation("Phone number is required"));
        }
        let response = self.port.send_otp(phone.trim()).await?;
        if !response.success {
            return Err(AppError::validation(
                response.message.unwrap_or_else(|| "Failed to send OTP".to_string()),
            ));
        }
        Ok(())
    }

    /// Verifies an employee OTP and opens the session
    pub async fn verify_otp(&self, phone: &str, otp: &str) -> Result<UserProfile, AppError> {
        let request = OtpVerifyRequest {
            phone: phone.trim().to_string(),
            code: otp.trim().to_string(),
        };
        request.validate()?;

        let response = self.port.verify_otp(&request).await?;
        if !response.success {
            return Err(AppError::Port(PortError::unauthorized(
                response
                    .message
                    .unwrap_or_else(|| "OTP verification failed".to_string()),
            )));
        }

        let token = response
            .token
            .ok_or_else(|| PortError::transformation("OTP response missing token"))?;
        let user = UserProfile::employee(
            response.uid.unwrap_or_default(),
            response.employee_name.unwrap_or_default(),
            request.phone.clone(),
            response.corporate_name.unwrap_or_default(),
            response.dependents,
        );

        self.session.set(token, user.clone())?;
        Ok(user)
    }

    /// Re-reads the profile and refreshes the stored copy
    pub async fn refresh_profile(&self) -> Result<UserProfile, AppError> {
        let profile = self.port.profile().await?;
        self.session.update_user(profile.clone())?;
        Ok(profile)
    }

    /// Local-plus-server session check
    ///
    /// Returns false (and clears local state) when the stored token is
    /// missing, expired client-side, or rejected by the backend.
    pub async fn is_authenticated(&self) -> Result<bool, AppError> {
        if self.session.get()?.is_none() {
            return Ok(false);
        }

        let validation = self.port.validate_token().await?;
        if !validation.valid {
            self.session.clear()?;
            return Ok(false);
        }
        if let Some(user) = validation.user {
            self.session.update_user(user)?;
        }
        Ok(true)
    }

    /// Clears the stored session
    pub fn logout(&self) -> Result<(), AppError> {
        self.session.clear()?;
        tracing::info!("session cleared on logout");
        Ok(())
    }
}
