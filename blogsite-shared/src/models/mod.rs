/// Persisted records for BlogSite
///
/// This module contains the account record and its embedded posts.
///
/// # Models
///
/// - `account`: Registered accounts and the posts they own

pub mod account;
