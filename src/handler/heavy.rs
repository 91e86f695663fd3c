//! Heavy computation handler.
//!
//! Runs a deliberately expensive PBKDF2 derivation on the blocking thread
//! pool so the request-serving thread stays free. The counterpart to the
//! freeze handler: a comparable amount of CPU burn, zero starvation.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use std::time::Instant;

use crate::handler::router::RequestContext;
use crate::http;
use crate::logger;

// Fixed derivation inputs, sized to take on the order of ten seconds.
const PASSWORD: &[u8] = b"secret";
const SALT: &[u8] = b"salt";
const ITERATIONS: u32 = 5_000_000;

pub const KEY_LEN: usize = 64;

/// Derive a key with PBKDF2-HMAC-SHA512. Deterministic for fixed inputs.
pub fn derive_key(password: &[u8], salt: &[u8], iterations: u32) -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha512>(password, salt, iterations, &mut key);
    key
}

/// Run the derivation off the serving thread and report wall-clock time.
pub async fn handle(ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    logger::log_heavy_start();
    let started = Instant::now();

    let derived = tokio::task::spawn_blocking(|| derive_key(PASSWORD, SALT, ITERATIONS)).await;

    match derived {
        Ok(_key) => {
            let seconds = started.elapsed().as_secs_f64();
            logger::log_heavy_done(seconds);

            let body = format!("Heavy calculation done! Took {seconds:.3} seconds");
            if ctx.access_log {
                logger::log_response(200, body.len());
            }
            http::build_text_response(&body, ctx.is_head)
        }
        Err(e) => {
            // Keep this handler's stays-responsive contract: surface the
            // failure instead of taking the process down.
            logger::log_error(&format!("Key derivation task failed: {e}"));
            http::build_500_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivation_is_deterministic() {
        let a = derive_key(b"secret", b"salt", 2);
        let b = derive_key(b"secret", b"salt", 2);
        assert_eq!(a, b);
    }

    #[test]
    fn test_iteration_count_changes_key() {
        let one = derive_key(b"secret", b"salt", 1);
        let two = derive_key(b"secret", b"salt", 2);
        assert_ne!(one, two);
    }

    #[test]
    fn test_inputs_change_key() {
        let base = derive_key(b"secret", b"salt", 1);
        assert_ne!(base, derive_key(b"other", b"salt", 1));
        assert_ne!(base, derive_key(b"secret", b"pepper", 1));
    }

    #[test]
    fn test_key_is_not_all_zero() {
        let key = derive_key(b"secret", b"salt", 1);
        assert!(key.iter().any(|&b| b != 0));
    }
}
