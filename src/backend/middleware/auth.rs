/**
 * Authentication Guard
 *
 * Every authenticated route takes an [`AuthUser`] argument. The extractor
 * reads the `token` cookie and verifies it with the [`SessionCodec`];
 * on any failure (missing, malformed, expired, bad signature) the request
 * is rejected with a uniform 401 before the handler body runs, so no data
 * access happens for unauthenticated callers.
 *
 * The page gate below applies the same check to the HTML entry points:
 * `/dashboard` without a valid session redirects to `/login`, and `/login`
 * or `/register` with one redirects to `/dashboard`.
 */

use axum::{
    extract::{FromRef, FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::sessions::{AuthFailure, SessionCodec, SESSION_COOKIE};
use crate::backend::error::ApiError;
use crate::shared::UserId;

/// Authenticated user id, resolved from the session cookie
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthUser(pub UserId);

/// Resolve the session cookie in a jar to a user id
pub fn authenticate_jar(codec: &SessionCodec, jar: &CookieJar) -> Result<UserId, AuthFailure> {
    let cookie = jar.get(SESSION_COOKIE).ok_or(AuthFailure)?;
    codec.authenticate(cookie.value())
}

impl<S> FromRequestParts<S> for AuthUser
where
    SessionCodec: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let codec = SessionCodec::from_ref(state);
        let jar = CookieJar::from_headers(&parts.headers);

        let user_id = authenticate_jar(&codec, &jar).map_err(|_| {
            tracing::warn!(path = %parts.uri.path(), "Rejected unauthenticated request");
            ApiError::Unauthorized
        })?;

        Ok(AuthUser(user_id))
    }
}

/// Redirect HTML entry points based on session validity
pub async fn page_gate(
    State(codec): State<SessionCodec>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path();
    let signed_in = authenticate_jar(&codec, &jar).is_ok();

    if is_dashboard_path(path) && !signed_in {
        return Redirect::to("/login").into_response();
    }
    if matches!(path, "/login" | "/register") && signed_in {
        return Redirect::to("/dashboard").into_response();
    }

    next.run(request).await
}

fn is_dashboard_path(path: &str) -> bool {
    path == "/dashboard" || path.starts_with("/dashboard/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header::COOKIE, HeaderMap, HeaderValue};

    fn jar_with(cookie: &str) -> CookieJar {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(cookie).unwrap());
        CookieJar::from_headers(&headers)
    }

    #[test]
    fn test_authenticate_jar_with_valid_cookie() {
        let codec = SessionCodec::new("guard-secret");
        let token = codec.issue(11).unwrap();
        let jar = jar_with(&format!("{}={}", SESSION_COOKIE, token));
        assert_eq!(authenticate_jar(&codec, &jar), Ok(11));
    }

    #[test]
    fn test_authenticate_jar_failures_are_uniform() {
        let codec = SessionCodec::new("guard-secret");
        let forged = SessionCodec::new("other").issue(11).unwrap();

        let jars = [
            CookieJar::new(),
            jar_with("other=value"),
            jar_with(&format!("{}=garbage", SESSION_COOKIE)),
            jar_with(&format!("{}={}", SESSION_COOKIE, forged)),
        ];
        for jar in &jars {
            assert_eq!(authenticate_jar(&codec, jar), Err(AuthFailure));
        }
    }

    #[test]
    fn test_dashboard_paths() {
        assert!(is_dashboard_path("/dashboard"));
        assert!(is_dashboard_path("/dashboard/links"));
        assert!(!is_dashboard_path("/dashboards"));
        assert!(!is_dashboard_path("/login"));
    }
}
