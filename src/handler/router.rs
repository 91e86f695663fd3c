//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: mute gate, method validation,
//! route matching and dispatching.

use crate::config::AppState;
use crate::handler::{actions, gate, heavy, landing};
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

pub const LANDING_PATH: &str = "/";
pub const CRASH_PATH: &str = "/crash";
pub const FREEZE_PATH: &str = "/freeze";
pub const MUTE_PATH: &str = "/mute";
pub const HEAVY_PATH: &str = "/heavy";

/// The five operations this server exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    Crash,
    Freeze,
    Mute,
    Heavy,
}

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub access_log: bool,
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let uri = req.uri();
    let path = uri.path();
    let is_head = *method == Method::HEAD;

    let access_log = state.config.logging.access_log;
    if access_log {
        logger::log_request(method, uri, req.version());
    }

    // 1. Mute gate, ahead of everything including the 404 branch. A muted
    //    request parks here forever: hyper never writes a response and the
    //    connection is left open, consuming no CPU.
    if gate::should_drop(state.is_muted(), path) {
        return std::future::pending().await;
    }

    // 2. Check HTTP method
    if let Some(resp) = check_http_method(method) {
        return Ok(resp);
    }

    let ctx = RequestContext {
        path,
        is_head,
        access_log,
    };

    // 3. Dispatch
    let response = match resolve_route(ctx.path) {
        Some(Route::Landing) => landing::handle(&ctx),
        Some(Route::Crash) => actions::crash(&ctx),
        Some(Route::Freeze) => actions::freeze(),
        Some(Route::Mute) => actions::mute(&state, &ctx),
        Some(Route::Heavy) => heavy::handle(&ctx).await,
        None => http::build_404_response(),
    };

    Ok(response)
}

/// Match a request path to one of the five operations. Exact match only.
pub fn resolve_route(path: &str) -> Option<Route> {
    match path {
        LANDING_PATH => Some(Route::Landing),
        CRASH_PATH => Some(Route::Crash),
        FREEZE_PATH => Some(Route::Freeze),
        MUTE_PATH => Some(Route::Mute),
        HEAVY_PATH => Some(Route::Heavy),
        _ => None,
    }
}

/// Check HTTP method and return appropriate response for non-GET/HEAD methods
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_routes() {
        assert_eq!(resolve_route("/"), Some(Route::Landing));
        assert_eq!(resolve_route("/crash"), Some(Route::Crash));
        assert_eq!(resolve_route("/freeze"), Some(Route::Freeze));
        assert_eq!(resolve_route("/mute"), Some(Route::Mute));
        assert_eq!(resolve_route("/heavy"), Some(Route::Heavy));
    }

    #[test]
    fn test_unknown_paths_do_not_resolve() {
        assert_eq!(resolve_route(""), None);
        assert_eq!(resolve_route("/unknown"), None);
        assert_eq!(resolve_route("/crash/"), None);
        assert_eq!(resolve_route("/HEAVY"), None);
    }
}
