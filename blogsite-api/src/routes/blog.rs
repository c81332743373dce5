/// Blog service endpoints
///
/// - `POST /createBlog` - Append a post to the caller's account
/// - `GET /viewBlogs` - Render the caller's posts
/// - `GET /allBlogs` - Render every account's posts
///
/// All three sit behind the session gate. The write path redirects to the
/// error page on failure; the two read paths answer with JSON `{error}` and
/// an HTTP status instead.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult, RedirectResult},
    render,
};
use axum::{
    extract::State,
    response::{Html, Redirect},
    Extension, Form,
};
use blogsite_shared::{auth::middleware::AuthSession, models::account::Post};
use serde::Deserialize;

/// Create-blog form payload
///
/// Field names match the post-creation page form. The author is free text
/// entered with the post, not derived from the session identity.
#[derive(Debug, Deserialize)]
pub struct CreateBlogForm {
    /// Post title
    #[serde(rename = "blogTitle")]
    pub title: String,

    /// Post body
    #[serde(rename = "blogContent")]
    pub content: String,

    /// Author byline
    #[serde(rename = "authorName")]
    pub author: String,
}

/// Appends a post to the caller's account
///
/// Resolves the account by session email, appends the post, and persists the
/// whole account record. Title and content are deliberately not validated;
/// empty and duplicate posts are allowed.
///
/// Two concurrent appends for the same account race: both read the record,
/// both append locally, and the second write wins.
///
/// # Responses
///
/// - Success: redirect to `/success`
/// - Account gone or store failure: redirect to `/error`
pub async fn create_blog(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthSession>,
    Form(form): Form<CreateBlogForm>,
) -> RedirectResult {
    let mut account = state
        .store
        .find_by_email(&auth.email)
        .await?
        .ok_or(ApiError::AccountNotFound)?;

    account.posts.push(Post {
        title: form.title,
        content: form.content,
        author: form.author,
    });

    state.store.save(&account).await?;

    Ok(Redirect::to("/success"))
}

/// Renders the caller's posts in stored order
///
/// # Responses
///
/// - Success: HTML list of the account's posts (possibly empty)
/// - Account gone: `404 {"error": "User not found"}`
/// - Store failure: `500 {"error": "Internal server error"}`
pub async fn view_blogs(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthSession>,
) -> ApiResult<Html<String>> {
    let account = state
        .store
        .find_by_email(&auth.email)
        .await?
        .ok_or(ApiError::AccountNotFound)?;

    Ok(Html(render::posts_page("Your Blogs", &account.posts)))
}

/// Renders every post from every account
///
/// Accounts come back in store iteration order; within an account, posts
/// keep insertion order. No pagination, no filtering, no deduplication.
///
/// # Responses
///
/// - Success: HTML list of all posts
/// - Store failure: `500 {"error": "Internal server error"}`
pub async fn all_blogs(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let accounts = state.store.list().await?;

    let posts: Vec<Post> = accounts
        .into_iter()
        .flat_map(|account| account.posts)
        .collect();

    Ok(Html(render::posts_page("All Blogs", &posts)))
}
