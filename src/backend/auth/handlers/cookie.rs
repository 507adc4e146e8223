/**
 * Session Cookie
 *
 * The session token travels in an HTTP-only, strict same-site cookie that
 * lives as long as the token itself. It is marked `Secure` in production.
 */

use axum_extra::extract::cookie::{Cookie, SameSite};

use crate::backend::auth::sessions::SESSION_COOKIE;

/// Cookie carrying a freshly issued session token
pub fn session_cookie(token: String, secure: bool, max_age: chrono::Duration) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Strict)
        .path("/")
        .max_age(time::Duration::seconds(max_age.num_seconds()))
        .build()
}

/// Empty session cookie with `Max-Age=0`, expiring any stored session
pub fn expired_session_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .http_only(true)
        .same_site(SameSite::Strict)
        .path("/")
        .max_age(time::Duration::ZERO)
        .build()
}
