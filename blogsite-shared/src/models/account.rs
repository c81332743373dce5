/// Account record and embedded posts
///
/// An account is identified by its email address, which is unique across the
/// whole store. Each account owns an ordered sequence of posts, embedded in
/// the account record itself; posts live and die with their account.
///
/// # Stored shape
///
/// ```json
/// {
///   "id": "uuid",
///   "name": "Ada",
///   "email": "ada@example.com",
///   "credential": "...",
///   "posts": [{ "title": "...", "content": "...", "name": "..." }],
///   "created_at": "2026-01-01T00:00:00Z"
/// }
/// ```
///
/// # Example
///
/// ```
/// use blogsite_shared::models::account::{Account, Post};
///
/// let mut account = Account::new("Ada", "ada@example.com", "hunter2");
/// assert!(account.posts.is_empty());
///
/// account.posts.push(Post {
///     title: "First".to_string(),
///     content: "Hello".to_string(),
///     author: "Ada".to_string(),
/// });
/// assert_eq!(account.posts.len(), 1);
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered account
///
/// Accounts are created at registration and never deleted. The only mutation
/// after creation is appending to `posts`.
///
/// The credential is held exactly as the client sent it. No hashing or
/// salting is applied and comparison is byte-for-byte; see the error-handling
/// notes in DESIGN.md.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Row id; carries no semantics beyond storage identity
    pub id: Uuid,

    /// Display name chosen at registration
    pub name: String,

    /// Email address; globally unique
    pub email: String,

    /// Login credential, stored as received
    pub credential: String,

    /// Owned posts, in insertion order; duplicates allowed
    pub posts: Vec<Post>,

    /// When the account was registered
    pub created_at: DateTime<Utc>,
}

/// A single blog entry, owned by exactly one account
///
/// The author field is free text entered with each post, not derived from the
/// owning account. It serializes as `name` to match the stored record shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Post title
    pub title: String,

    /// Post body
    pub content: String,

    /// Author byline as entered by the poster
    #[serde(rename = "name")]
    pub author: String,
}

impl Account {
    /// Creates a fresh account with an empty post sequence
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        credential: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            credential: credential.into(),
            posts: Vec::new(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account_has_no_posts() {
        let account = Account::new("Ada", "ada@example.com", "pw");
        assert_eq!(account.email, "ada@example.com");
        assert!(account.posts.is_empty());
    }

    #[test]
    fn test_post_serializes_author_as_name() {
        let post = Post {
            title: "T".to_string(),
            content: "C".to_string(),
            author: "Ada".to_string(),
        };

        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["name"], "Ada");
        assert!(value.get("author").is_none());
    }

    #[test]
    fn test_post_roundtrip_preserves_fields() {
        let post = Post {
            title: "T".to_string(),
            content: "C".to_string(),
            author: "Ghost".to_string(),
        };

        let json = serde_json::to_string(&post).unwrap();
        let back: Post = serde_json::from_str(&json).unwrap();
        assert_eq!(back, post);
    }
}
