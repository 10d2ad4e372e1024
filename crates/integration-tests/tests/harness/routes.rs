//! Stand-in application routes that fail the way judge handlers do

use axum::Router;
use axum::extract::{Path, Query};
use axum::routing::{get, post};
use serde::Deserialize;
use vj4_core::builtin::{PERM_EDIT_PROBLEM, PERM_VIEW, PRIV_CREATE_DOMAIN, PRIV_USER_PROFILE};
use vj4_error::{ErrorArg, ErrorKind, InternalError, UserFacingError};
use vj4_server::HandlerResult;

const BATCH_COPY_LIMIT: i64 = 50;

async fn problem_detail(Path((domain_id, pid)): Path<(String, String)>) -> HandlerResult<String> {
    if pid == "1000" {
        return Ok(format!("A+B Problem in {domain_id}"));
    }
    Err(UserFacingError::problem_not_found(domain_id, pid).into())
}

async fn problem_edit() -> HandlerResult<String> {
    Err(UserFacingError::permission(PERM_EDIT_PROBLEM).into())
}

async fn domain_view() -> HandlerResult<String> {
    Err(UserFacingError::permission(PERM_VIEW).into())
}

async fn home_settings() -> HandlerResult<String> {
    Err(UserFacingError::privilege(PRIV_USER_PROFILE).into())
}

async fn domain_create() -> HandlerResult<String> {
    Err(UserFacingError::privilege(PRIV_CREATE_DOMAIN).into())
}

#[derive(Deserialize)]
struct CopyQuery {
    count: i64,
}

async fn problem_copy(Query(query): Query<CopyQuery>) -> HandlerResult<&'static str> {
    if query.count > BATCH_COPY_LIMIT {
        return Err(UserFacingError::batch_copy_limit_exceeded(BATCH_COPY_LIMIT, query.count).into());
    }
    Ok("copied")
}

/// Raise any kind by class name, with comma separated string arguments
async fn raise(Path((name, args)): Path<(String, String)>) -> HandlerResult<String> {
    let Ok(kind) = name.parse::<ErrorKind>() else {
        return Err(UserFacingError::invalid_argument(name).into());
    };
    let args = args.split(',').filter(|a| !a.is_empty()).map(ErrorArg::from).collect();
    Err(UserFacingError::new(kind, args)?.into())
}

async fn upgrade() -> HandlerResult<String> {
    Err(InternalError::DatabaseVersionMismatch { got: 3, expect: 4 }.into())
}

/// Router exercised by the integration tests
pub fn judge_routes() -> Router {
    Router::new()
        .route("/d/{domain_id}/p/{pid}", get(problem_detail))
        .route("/d/{domain_id}/p/{pid}/edit", post(problem_edit))
        .route("/d/{domain_id}", get(domain_view))
        .route("/home/settings", get(home_settings))
        .route("/domain/create", post(domain_create))
        .route("/p/copy", post(problem_copy))
        .route("/raise/{name}/{args}", get(raise))
        .route("/upgrade", get(upgrade))
}
