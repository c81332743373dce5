/// Fixed HTML pages
///
/// The form and confirmation pages are compiled into the binary with
/// `include_str!` and served as-is; rendering of dynamic content lives in
/// the blog routes.

use axum::response::{Html, IntoResponse, Redirect, Response};
use blogsite_shared::auth::middleware::SESSION_EMAIL_KEY;
use tower_sessions::Session;

/// Serves the signup form
pub async fn signup_page() -> Html<&'static str> {
    Html(include_str!("../../static/signup.html"))
}

/// Serves the login form, or sends an already-authenticated caller home
pub async fn login_page(session: Session) -> Response {
    if let Ok(Some(email)) = session.get::<String>(SESSION_EMAIL_KEY).await {
        if !email.is_empty() {
            return Redirect::to("/home").into_response();
        }
    }

    Html(include_str!("../../static/login.html")).into_response()
}

/// Serves the home page (behind the session gate)
pub async fn home_page() -> Html<&'static str> {
    Html(include_str!("../../static/home.html"))
}

/// Serves the post-creation form (behind the session gate)
pub async fn create_blog_page() -> Html<&'static str> {
    Html(include_str!("../../static/createblog.html"))
}

/// Serves the post-created confirmation page
pub async fn success_page() -> Html<&'static str> {
    Html(include_str!("../../static/success.html"))
}

/// Serves the generic failure page
pub async fn error_page() -> Html<&'static str> {
    Html(include_str!("../../static/error.html"))
}
