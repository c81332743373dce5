/// Route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `pages`: Fixed HTML pages (forms and confirmations)
/// - `auth`: Account service endpoints (signup, login, logout)
/// - `blog`: Blog service endpoints (create, view own, view all)

pub mod auth;
pub mod blog;
pub mod health;
pub mod pages;
