// Shared-secret authorization gate for the admin endpoints.

/// True iff the supplied password exactly equals the configured admin secret.
/// Case-sensitive, no trimming; a missing password never matches.
pub fn is_admin(supplied: Option<&str>, secret: &str) -> bool {
    supplied == Some(secret)
}
