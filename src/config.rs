use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("havoc").required(false))
            .add_source(config::Environment::with_prefix("HAVOC").separator("__"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("logging.access_log", true)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Shared application state.
///
/// The mute flag is the only mutable piece. It is one-directional: once
/// set, nothing in this process clears it again.
pub struct AppState {
    pub config: Config,
    muted: AtomicBool,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            muted: AtomicBool::new(false),
        }
    }

    /// Latch the mute flag. There is no unmute.
    ///
    /// Relaxed ordering is enough: a request racing the flip is served at
    /// most once more before the gate sees the flag.
    pub fn mute(&self) {
        self.muted.store(true, Ordering::Relaxed);
    }

    pub fn is_muted(&self) -> bool {
        self.muted.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_config(host: &str, port: u16) -> Config {
        Config {
            server: ServerConfig {
                host: host.to_string(),
                port,
            },
            logging: LoggingConfig { access_log: true },
        }
    }

    #[test]
    fn test_socket_addr_assembly() {
        let cfg = make_config("127.0.0.1", 3000);
        let addr = cfg.get_socket_addr().unwrap();
        assert!(addr.is_ipv4());
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_invalid_host_is_rejected() {
        let cfg = make_config("not a host", 3000);
        assert!(cfg.get_socket_addr().is_err());
    }

    #[test]
    fn test_mute_flag_starts_false_and_latches() {
        let state = AppState::new(&make_config("0.0.0.0", 3000));
        assert!(!state.is_muted());
        state.mute();
        assert!(state.is_muted());
        // Muting again is idempotent
        state.mute();
        assert!(state.is_muted());
    }
}
