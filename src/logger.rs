use chrono::Local;
use hyper::{Method, Uri, Version};
use std::net::SocketAddr;

use crate::config::Config;

fn timestamp() -> String {
    Local::now().format("%d/%b/%Y:%H:%M:%S %z").to_string()
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Havoc server started successfully");
    println!("Listening on: http://{addr}");
    println!(
        "Access log: {}",
        if config.logging.access_log {
            "enabled"
        } else {
            "disabled"
        }
    );
    println!("Using single-threaded Tokio runtime");
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_request(method: &Method, uri: &Uri, version: Version) {
    println!("[{}] [Request] {method} {uri} {version:?}", timestamp());
}

pub fn log_response(status: u16, size: usize) {
    println!("[Response] Sent {status} ({size} bytes)\n");
}

pub fn log_crash() {
    println!("[Action] Crashing the server");
}

pub fn log_freeze() {
    println!("[Action] Freezing the server");
}

pub fn log_mute() {
    println!("[Action] Muting the server");
}

pub fn log_heavy_start() {
    println!("[Action] Heavy calculation started");
}

pub fn log_heavy_done(seconds: f64) {
    println!("[Action] Heavy calculation done in {seconds:.3} seconds");
}
