//! Request middleware: the access log hook, the module MIME override and
//! the trailing-slash file check.

use axum::{
    extract::{Request, State},
    http::{HeaderValue, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use nanoid::nanoid;
use std::{sync::Arc, time::Instant};
use tokio::fs;
use tracing::info;

use crate::{
    colors::tag_request,
    handlers::resolve_path,
    mime,
    state::{AccessLog, AppState},
};

/// Access log hook, run once per request
///
/// With [`AccessLog::Silent`] the hook only forwards the request. With
/// [`AccessLog::Tracing`] it:
/// 1. Generates a short nanoid for the request
/// 2. Logs the method and path with the colored ID
/// 3. Logs the final status and latency under the same ID
pub async fn log_requests(State(state): State<Arc<AppState>>, req: Request, next: Next) -> Response {
    if state.access_log == AccessLog::Silent {
        return next.run(req).await;
    }

    let id = nanoid!(5);
    let start_time = Instant::now();
    info!("{} → {} {}", tag_request(&id), req.method(), req.uri().path());

    let response = next.run(req).await;

    info!(
        "{} ← {} ({}ms)",
        tag_request(&id),
        response.status(),
        start_time.elapsed().as_millis()
    );
    response
}

/// Replaces the inferred content type of JavaScript files
///
/// Only successful responses are touched, so errors and redirects for a
/// `.js` path keep their own content type.
pub async fn override_module_mime(req: Request, next: Next) -> Response {
    let forced = urlencoding::decode(req.uri().path())
        .ok()
        .and_then(|path| mime::override_for(&path));

    let mut response = next.run(req).await;

    if let Some(content_type) = forced {
        if response.status().is_success() {
            response
                .headers_mut()
                .insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
        }
    }
    response
}

/// Answers 404 when a path ending in `/` names a regular file
///
/// A trailing slash only ever addresses a directory. Without this check the
/// file service would serve `/scripts/app.js/` as the file itself.
pub async fn reject_file_with_slash(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let slash_target = {
        let path = req.uri().path();
        if path.len() > 1 && path.ends_with('/') {
            resolve_path(&state.root, path)
        } else {
            None
        }
    };

    if let Some(target) = slash_target {
        if let Ok(metadata) = fs::metadata(&target).await {
            if !metadata.is_dir() {
                return StatusCode::NOT_FOUND.into_response();
            }
        }
    }
    next.run(req).await
}
