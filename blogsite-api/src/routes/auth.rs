/// Account service endpoints
///
/// This module provides registration, login, and logout:
///
/// - `POST /signup` - Create an account
/// - `POST /login` - Verify credentials and establish a session
/// - `GET /logout` - Destroy the session
///
/// All failures on these routes surface as a redirect to the generic error
/// page; no structured error body is returned.

use crate::{
    app::AppState,
    error::{ApiError, RedirectResult},
};
use axum::{extract::State, response::Redirect, Form};
use blogsite_shared::{
    auth::middleware::{SESSION_CREDENTIAL_KEY, SESSION_EMAIL_KEY},
    models::account::Account,
};
use serde::Deserialize;
use tower_sessions::Session;
use validator::Validate;

/// Signup form payload
///
/// Field names match the signup page form.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupForm {
    /// Display name
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    /// Email address; becomes the account identity
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Login credential; stored exactly as received
    pub password: String,
}

/// Login form payload
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    /// Email address
    pub email: String,

    /// Login credential
    pub password: String,
}

/// Registers a new account
///
/// Validates the record shape, rejects emails that are already registered,
/// and otherwise persists a fresh account with an empty post sequence.
///
/// # Responses
///
/// - Success: redirect to `/login`
/// - Duplicate email, validation failure, or store failure: redirect to `/error`
pub async fn signup(
    State(state): State<AppState>,
    Form(form): Form<SignupForm>,
) -> RedirectResult {
    // Validate the fixed record schema before touching the store
    form.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    if state.store.find_by_email(&form.email).await?.is_some() {
        tracing::debug!(email = %form.email, "signup rejected, email already registered");
        return Err(ApiError::DuplicateAccount.into());
    }

    let account = Account::new(form.name, form.email, form.password);
    state.store.insert(account).await?;

    Ok(Redirect::to("/login"))
}

/// Verifies credentials and establishes a session
///
/// The lookup matches email AND credential exactly, compared as opaque,
/// case-sensitive cleartext values. There is no rate limiting and no
/// lockout.
///
/// # Responses
///
/// - Success: session gains the email marker, redirect to `/home`
/// - No matching account or store failure: redirect to `/error`
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> RedirectResult {
    let account = state
        .store
        .find_by_credentials(&form.email, &form.password)
        .await?
        .ok_or_else(|| {
            tracing::debug!(email = %form.email, "login rejected, no matching account");
            ApiError::InvalidCredentials
        })?;

    session.insert(SESSION_EMAIL_KEY, &account.email).await?;
    session.insert(SESSION_CREDENTIAL_KEY, &form.password).await?;

    Ok(Redirect::to("/home"))
}

/// Destroys the session and returns to the login page
///
/// The redirect happens whether or not the session store cooperates; a
/// failed flush is only traced.
pub async fn logout(session: Session) -> Redirect {
    if let Err(error) = session.flush().await {
        tracing::warn!(%error, "failed to destroy session");
    }

    Redirect::to("/login")
}
