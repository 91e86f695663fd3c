//! Crash, freeze and mute handlers.
//!
//! Each one demonstrates a distinct way a server process can stop serving:
//! exiting, spinning, and going silent.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::sync::Arc;
use std::time::Duration;

use crate::config::AppState;
use crate::handler::router::RequestContext;
use crate::http;
use crate::logger;

/// Delay between answering the crash request and exiting, long enough for
/// the confirmation to flush to the client.
const EXIT_DELAY: Duration = Duration::from_millis(100);

const EXIT_CODE: i32 = 1;

/// Confirm, then terminate the whole process shortly after.
pub fn crash(ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    logger::log_crash();

    tokio::task::spawn_local(async {
        tokio::time::sleep(EXIT_DELAY).await;
        std::process::exit(EXIT_CODE);
    });

    let body = "Crashing the server now";
    if ctx.access_log {
        logger::log_response(200, body.len());
    }
    http::build_text_response(body, ctx.is_head)
}

/// Enter an unbounded busy loop on the request-serving thread.
///
/// The runtime is single-threaded, so this starves every task on it: this
/// handler never returns, no confirmation is ever written, and all future
/// requests hang until the process is restarted from outside. The loop
/// must stay a tight spin; a sleep or yield here would change the
/// observable behavior.
pub fn freeze() -> Response<Full<Bytes>> {
    logger::log_freeze();

    loop {
        std::hint::spin_loop();
    }
}

/// Latch the process-wide mute flag and confirm.
///
/// This request always completes normally: the gate exempts the mute path,
/// so hitting it again after muting still responds.
pub fn mute(state: &Arc<AppState>, ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    logger::log_mute();
    state.mute();

    let body = "Muting the server";
    if ctx.access_log {
        logger::log_response(200, body.len());
    }
    http::build_text_response(body, ctx.is_head)
}
