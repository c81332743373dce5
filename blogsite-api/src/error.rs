/// Error handling for the BlogSite server
///
/// Service failures surface to clients in one of two shapes, depending on
/// the route:
///
/// - The form-post routes (signup, login, create blog) answer every failure
///   with a redirect to the generic `/error` page. Handlers return
///   [`RedirectResult`] so `?` converts any service error into that redirect.
/// - The two listing routes answer failures with a structured JSON body and
///   an HTTP status. Handlers return [`ApiResult`], and [`ApiError`]
///   converts itself into the response.
///
/// In both shapes the client sees a fixed message; detail goes to tracing
/// only.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use blogsite_shared::store::StoreError;
use serde::{Deserialize, Serialize};

/// Result alias for the JSON-erroring read routes
pub type ApiResult<T> = Result<T, ApiError>;

/// Result alias for the redirect-on-failure form routes
pub type RedirectResult = Result<Redirect, ErrorRedirect>;

/// Unified service error taxonomy
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Registration hit an email that is already taken
    #[error("an account with this email already exists")]
    DuplicateAccount,

    /// Login credentials matched no account
    #[error("invalid email or password")]
    InvalidCredentials,

    /// A session referenced an account that does not exist
    #[error("account not found")]
    AccountNotFound,

    /// The request payload failed schema validation
    #[error("request validation failed: {0}")]
    Validation(String),

    /// The persistence service failed
    #[error("persistence failure: {0}")]
    Persistence(StoreError),

    /// The session store failed
    #[error("session store failure: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

/// Error response format for the JSON routes
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Fixed, human-readable error message
    pub error: String,
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => ApiError::DuplicateAccount,
            other => ApiError::Persistence(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::AccountNotFound => (StatusCode::NOT_FOUND, "User not found"),
            ApiError::DuplicateAccount => (StatusCode::CONFLICT, "User already exists"),
            ApiError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid credentials"),
            ApiError::Validation(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "Request validation failed")
            }
            ApiError::Persistence(_) | ApiError::Session(_) => {
                // Log internal errors but don't expose details to clients
                tracing::error!(error = %self, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(ErrorResponse {
            error: message.to_string(),
        });

        (status, body).into_response()
    }
}

/// Failure surface for the form-post routes
///
/// Wraps the underlying [`ApiError`] but always renders as a redirect to the
/// generic error page, matching the site's write-path contract.
#[derive(Debug)]
pub struct ErrorRedirect(pub ApiError);

impl From<ApiError> for ErrorRedirect {
    fn from(err: ApiError) -> Self {
        Self(err)
    }
}

impl From<StoreError> for ErrorRedirect {
    fn from(err: StoreError) -> Self {
        Self(err.into())
    }
}

impl From<tower_sessions::session::Error> for ErrorRedirect {
    fn from(err: tower_sessions::session::Error) -> Self {
        Self(ApiError::Session(err))
    }
}

impl IntoResponse for ErrorRedirect {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self.0, "request failed, redirecting to error page");
        Redirect::to("/error").into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::DuplicateAccount;
        assert_eq!(err.to_string(), "an account with this email already exists");

        let err = ApiError::AccountNotFound;
        assert_eq!(err.to_string(), "account not found");
    }

    #[test]
    fn test_store_duplicate_maps_to_duplicate_account() {
        let err = ApiError::from(StoreError::DuplicateEmail);
        assert!(matches!(err, ApiError::DuplicateAccount));
    }

    #[test]
    fn test_not_found_response_status() {
        let response = ApiError::AccountNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_redirect_surface_points_at_error_page() {
        let response = ErrorRedirect(ApiError::InvalidCredentials).into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()["location"], "/error");
    }
}
