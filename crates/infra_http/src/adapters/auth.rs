//! Auth endpoints adapter

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use auth_session::{
    AuthPort, FirebaseVerifyResponse, LoginRequest, LoginResponse, OtpSendResponse,
    OtpVerifyRequest, OtpVerifyResponse, TokenValidation, UserProfile,
};
use core_kernel::{DomainPort, PortError};

use crate::client::HttpGateway;

/// `AuthPort` against the remote auth service
pub struct AuthGateway {
    gateway: Arc<HttpGateway>,
}

impl AuthGateway {
    pub fn new(gateway: Arc<HttpGateway>) -> Self {
        Self { gateway }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.gateway.endpoints().auth_base, path)
    }
}

impl DomainPort for AuthGateway {}

#[async_trait]
impl AuthPort for AuthGateway {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, PortError> {
        // Login is the one call that must not carry a stale token
        self.gateway
            .post_public(&self.url("auth/login"), request)
            .await
    }

    async fn verify_firebase_token(
        &self,
        id_token: &str,
    ) -> Result<FirebaseVerifyResponse, PortError> {
        self.gateway
            .post_public(
                &self.url("firebase/verify-token"),
                &json!({ "id_token": id_token }),
            )
            .await
    }

    async fn profile(&self) -> Result<UserProfile, PortError> {
        self.gateway.get(&self.url("auth/profile")).await
    }

    async fn validate_token(&self) -> Result<TokenValidation, PortError> {
        // Transport failures fold into "not valid" rather than erroring;
        // the caller treats this endpoint as advisory
        match self
            .gateway
            .get::<TokenValidation>(&self.url("auth/validate-token"))
            .await
        {
            Ok(validation) => Ok(validation),
            Err(e) => {
                tracing::debug!(error = %e, "token validation failed, reporting invalid");
                Ok(TokenValidation::default())
            }
        }
    }

    async fn send_otp(&self, phone: &str) -> Result<OtpSendResponse, PortError> {
        self.gateway
            .post_public(&self.url("employee/send-otp"), &json!({ "phone": phone }))
            .await
    }

    async fn verify_otp(&self, request: &OtpVerifyRequest) -> Result<OtpVerifyResponse, PortError> {
        self.gateway
            .post_public(&self.url("employee/verify-otp"), request)
            .await
    }
}
