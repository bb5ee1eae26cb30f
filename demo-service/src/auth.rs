//! Mock authentication endpoints, mounted under [`AUTH_PREFIX`].
//!
//! No credentials are checked: a login that passes request validation is
//! always acknowledged.

use axum::{routing::post, Router};
use demo_kit::{ErrorBody, ValidJson};

use crate::dtos::LoginForm;

pub const AUTH_PREFIX: &str = "/api/auth";

pub fn router() -> Router {
    Router::new().route("/login", post(login))
}

pub fn login_message(email: &str) -> String {
    format!("Login successful for email: {}", email)
}

/// Log in with email and password
///
/// Acknowledges any well-formed login form.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginForm,
    responses(
        (status = 200, description = "Login acknowledged", body = String, content_type = "text/plain"),
        (status = 400, description = "Malformed or invalid login form", body = ErrorBody),
        (status = 413, description = "Body exceeds the size limit", body = ErrorBody),
        (status = 415, description = "Body is not JSON", body = ErrorBody)
    )
)]
pub async fn login(ValidJson(form): ValidJson<LoginForm>) -> String {
    tracing::debug!(email = %form.email, "login accepted");
    login_message(&form.email)
}
