use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    cookie::{time::Duration, Cookie, SameSite},
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
    web, Error, HttpRequest,
};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use tracing::debug;

use crate::config::config;
use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use entity::user::Model as UserModel;

pub const SESSION_COOKIE: &str = "sessionid";

/// Session key of a request: the cookie first, a bearer token otherwise.
pub fn session_key(req: &HttpRequest, bearer: Option<&BearerAuth>) -> Option<String> {
    req.cookie(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .or_else(|| bearer.map(|auth| auth.token().to_string()))
        .filter(|key| !key.is_empty())
}

/// Gate for resource scopes. Lets the request through only with a live
/// session of an active user; everything else is answered here.
pub async fn require_session(
    mut req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    match authorize(&mut req).await {
        Ok(user) => {
            debug!("{} {} as {}", req.method(), req.path(), user.username);
            next.call(req).await.map(ServiceResponse::map_into_left_body)
        }
        Err(e) => {
            debug!("Rejected {} {}: {}", req.method(), req.path(), e);
            Ok(req.error_response(e).map_into_right_body())
        }
    }
}

async fn authorize(req: &mut ServiceRequest) -> Result<UserModel, AppError> {
    let bearer = req.extract::<BearerAuth>().await.ok();
    let key = session_key(req.request(), bearer.as_ref()).ok_or(AppError::Forbidden)?;

    let db = req
        .app_data::<web::Data<Arc<DatabaseService>>>()
        .cloned()
        .ok_or_else(|| AppError::Internal("database service not registered".into()))?;
    db.authenticate_session(&key).await
}

pub fn session_cookie(key: String) -> Cookie<'static> {
    let session = &config().session;
    Cookie::build(SESSION_COOKIE, key)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(session.secure_cookie)
        .max_age(Duration::seconds(session.ttl_secs))
        .finish()
}

pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(SESSION_COOKIE, "").path("/").finish();
    cookie.make_removal();
    cookie
}

/// Only local paths are honoured as post-login targets.
pub fn local_redirect(next: Option<&str>, fallback: &str) -> String {
    match next {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_string(),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn redirect_targets() {
        assert_eq!(local_redirect(Some("/restaurants/"), "/"), "/restaurants/");
        assert_eq!(local_redirect(Some("https://evil.example/"), "/"), "/");
        assert_eq!(local_redirect(Some("//evil.example/"), "/"), "/");
        assert_eq!(local_redirect(None, "/"), "/");
    }

    #[test]
    fn key_from_cookie() {
        let req = TestRequest::default().cookie(Cookie::new(SESSION_COOKIE, "abc")).to_http_request();
        assert_eq!(session_key(&req, None).as_deref(), Some("abc"));

        let req = TestRequest::default().cookie(Cookie::new(SESSION_COOKIE, "")).to_http_request();
        assert!(session_key(&req, None).is_none());
        assert!(session_key(&TestRequest::default().to_http_request(), None).is_none());
    }

    #[test]
    fn cookies_are_scoped_to_root() {
        let cookie = session_cookie("k".into());
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(removal_cookie().value(), "");
    }
}
