//! Mute gate
//!
//! Process-wide response suppression. Once the mute flag is set, every
//! request except the mute endpoint itself is abandoned: no response, no
//! close, no CPU.

use crate::handler::router::MUTE_PATH;

/// Whether a request must be silently dropped instead of routed.
pub fn should_drop(muted: bool, path: &str) -> bool {
    muted && !is_exempt(path)
}

/// The mute endpoint is the only path served while muted, so muting stays
/// observable (and idempotent) after the flag is set.
pub fn is_exempt(path: &str) -> bool {
    path == MUTE_PATH
}
