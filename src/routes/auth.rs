use actix_web::{http::header, post, web, HttpRequest, HttpResponse};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use tracing::info;

use crate::config::config;
use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::user::RLogin;
use crate::utils::webutils::{local_redirect, removal_cookie, session_cookie, session_key};

#[post("/login/")]
pub async fn login(
    db: web::Data<Arc<DatabaseService>>,
    form: web::Form<RLogin>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();
    let session = &config().session;

    let user = db.authenticate(&form.username, &form.password).await?;
    let key = db.create_session(user.id, session.ttl_secs).await?;
    info!("User {} logged in", user.username);

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, local_redirect(form.next.as_deref(), &session.login_redirect_url)))
        .cookie(session_cookie(key))
        .finish())
}

/// Always succeeds; a missing or stale session is simply nothing to end.
#[post("/logout/")]
pub async fn logout(
    req: HttpRequest,
    bearer: Option<BearerAuth>,
    db: web::Data<Arc<DatabaseService>>,
) -> Result<HttpResponse, AppError> {
    if let Some(key) = session_key(&req, bearer.as_ref()) {
        db.delete_session(&key).await?;
    }

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, config().session.logout_redirect_url.as_str()))
        .cookie(removal_cookie())
        .finish())
}
