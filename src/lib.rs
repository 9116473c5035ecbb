pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod validation;

use crate::config::Config;

pub fn init_tracing(config: &Config) {
    let level_filter = match config.log_level.as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "warn" => "warn",
        "error" => "error",
        _ => "info",
    };

    unsafe {
        std::env::set_var("RUST_LOG", level_filter);
    }

    match config.log_format.as_str() {
        "json" => {
            tracing_subscriber::fmt().json().init();
        }
        _ => {
            tracing_subscriber::fmt().init();
        }
    }
}
