/// Authentication utilities
///
/// Sessions carry the authenticated identity between requests; the gate in
/// `middleware` protects every route that requires one.
///
/// # Modules
///
/// - `middleware`: the authentication gate and the session payload keys

pub mod middleware;
