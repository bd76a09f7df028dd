//! Admin password gate.
//!
//! The admin view is protected by one shared password, compared in constant time.

use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use subtle::ConstantTimeEq;

use crate::errors::AppError;

/// Header name carrying the admin password.
pub const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

/// Admin authentication layer function that takes the expected password as a parameter.
pub async fn admin_auth_layer(
    expected_password: Option<String>,
    request: Request,
    next: Next,
) -> Response {
    // No password configured: the gate is open
    let Some(expected) = expected_password else {
        return next.run(request).await;
    };

    let provided = request
        .headers()
        .get(ADMIN_PASSWORD_HEADER)
        .and_then(|v| v.to_str().ok())
        .or_else(|| {
            request
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.strip_prefix("Bearer "))
        })
        .map(|s| s.to_string());

    match provided {
        Some(password) if password_matches(&password, &expected) => next.run(request).await,
        Some(_) => AppError::Unauthorized("Invalid admin password".to_string()).into_response(),
        None => AppError::Unauthorized("Missing admin password".to_string()).into_response(),
    }
}

/// Perform constant-time password comparison.
pub fn password_matches(provided: &str, expected: &str) -> bool {
    provided.as_bytes().ct_eq(expected.as_bytes()).into()
}
