use anyhow::Result;
use reqwest::Method;
use serde_json::json;

use crate::models::{CheckAuthResponse, LoginRequest, LoginResponse, RegisterRequest, SuccessResponse, UserProfile};
use crate::services::http::{ApiClient, ApiError};

pub struct AuthService;

pub struct LoggedIn {
    pub token: String,
    pub profile: Option<UserProfile>,
}

impl AuthService {
    pub async fn login(api: &ApiClient, email: &str, password: &str) -> Result<LoggedIn> {
        let body = LoginRequest { email, password };
        let resp: LoginResponse = api.send_json(Method::POST, "/auth/login", &[], &body).await?;
        if !resp.success {
            return Err(ApiError::Rejected("Invalid credentials".into()).into());
        }
        let token = resp
            .token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::Decode("login succeeded without a token".into()))?;
        let profile = resp.user.map(|mut user| {
            if user.email.is_empty() {
                user.email = email.to_string();
            }
            user
        });
        Ok(LoggedIn { token, profile })
    }

    pub async fn register(api: &ApiClient, name: &str, email: &str, password: &str) -> Result<()> {
        let body = RegisterRequest { name, email, password };
        let resp: SuccessResponse = api.send_json(Method::POST, "/auth/register", &[], &body).await?;
        ensure_success(resp, "Registration failed")
    }

    /// `Ok(false)` means the server answered but no longer accepts the token.
    pub async fn check_auth(api: &ApiClient) -> Result<bool> {
        api.require_token()?;
        let resp: CheckAuthResponse = api.get_json("/auth/check-auth", &[]).await?;
        Ok(resp.authorized)
    }

    pub async fn send_otp(api: &ApiClient, identifier: &str) -> Result<()> {
        let body = json!({ "identifier": identifier });
        let resp: SuccessResponse =
            api.send_json(Method::POST, "/auth/forgot-password/send-otp", &[], &body).await?;
        ensure_success(resp, "Failed to send OTP")
    }

    pub async fn verify_otp(api: &ApiClient, identifier: &str, otp: &str) -> Result<()> {
        let body = json!({ "identifier": identifier, "otp": otp });
        let resp: SuccessResponse =
            api.send_json(Method::POST, "/auth/forgot-password/verify-otp", &[], &body).await?;
        ensure_success(resp, "Invalid OTP")
    }

    pub async fn reset_password(api: &ApiClient, identifier: &str, new_password: &str) -> Result<()> {
        let body = json!({ "identifier": identifier, "newPassword": new_password });
        let resp: SuccessResponse =
            api.send_json(Method::POST, "/auth/forgot-password/reset", &[], &body).await?;
        ensure_success(resp, "Password reset failed")
    }

    pub fn google_signup_url(api: &ApiClient) -> Result<String> {
        Ok(api.url("/auth/google", &[])?.to_string())
    }
}

fn ensure_success(resp: SuccessResponse, fallback: &str) -> Result<()> {
    if resp.success {
        Ok(())
    } else {
        let message = resp.message.filter(|m| !m.is_empty()).unwrap_or_else(|| fallback.to_string());
        Err(ApiError::Rejected(message).into())
    }
}
