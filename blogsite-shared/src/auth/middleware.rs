/// Authentication gate for Axum
///
/// Protected routes are layered with [`require_session`], which allows a
/// request through only when its session carries a non-empty email marker.
/// Everything else is answered with a redirect to the login page; the gate
/// never raises an error toward the client.
///
/// # Session payload
///
/// After a successful login the session holds the authenticated email under
/// [`SESSION_EMAIL_KEY`] and the presented credential under
/// [`SESSION_CREDENTIAL_KEY`]. Nothing ties the payload to a still-existing
/// account; each handler re-resolves the account per request.
///
/// # Request Extensions
///
/// On success the gate inserts an [`AuthSession`] into request extensions for
/// handlers to extract:
///
/// ```no_run
/// use axum::Extension;
/// use blogsite_shared::auth::middleware::AuthSession;
///
/// async fn handler(Extension(auth): Extension<AuthSession>) -> String {
///     format!("Hello, {}!", auth.email)
/// }
/// ```

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

/// Key under which the authenticated email is stored in the session
pub const SESSION_EMAIL_KEY: &str = "email";

/// Key under which the presented credential is stored in the session
pub const SESSION_CREDENTIAL_KEY: &str = "password";

/// Authenticated identity added to request extensions by the gate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    /// Email marker taken from the session
    pub email: String,
}

/// Authentication gate middleware
///
/// Pure predicate plus redirect: continue when the session carries a
/// non-empty email, otherwise send the client to `/login`. A session-store
/// failure is treated the same as an absent session.
pub async fn require_session(session: Session, mut req: Request, next: Next) -> Response {
    let email = match session.get::<String>(SESSION_EMAIL_KEY).await {
        Ok(Some(email)) if !email.is_empty() => email,
        Ok(_) => {
            tracing::debug!(path = %req.uri().path(), "unauthenticated request, redirecting to login");
            return Redirect::to("/login").into_response();
        }
        Err(error) => {
            tracing::debug!(%error, "session lookup failed, redirecting to login");
            return Redirect::to("/login").into_response();
        }
    };

    req.extensions_mut().insert(AuthSession { email });

    next.run(req).await
}
