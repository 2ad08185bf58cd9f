//! # Service Configuration
//!
//! Command-line flags with environment-variable fallbacks, parsed by clap.
//! Every setting has a default, so the binary starts with no configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use axum::http::HeaderValue;
use clap::Parser;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 3001;

/// The single browser origin allowed to call the API by default.
pub const DEFAULT_CORS_ORIGIN: &str = "https://correccion-prueba-frontend.vercel.app";

/// Runtime configuration for the quote API.
#[derive(Parser, Debug, Clone)]
#[command(name = "quote-api", version, about = "Insurance quote HTTP service")]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind the HTTP server to.
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Browser origin allowed by CORS.
    #[arg(long, env = "CORS_ORIGIN", default_value = DEFAULT_CORS_ORIGIN, value_parser = parse_origin)]
    pub cors_origin: HeaderValue,

    /// JSON file of customer records to seed the store with.
    /// The bundled dataset is used when unset.
    #[arg(long, env = "SEED_FILE")]
    pub seed_file: Option<PathBuf>,

    /// Emit logs as JSON lines instead of human-readable text.
    #[arg(long, env = "LOG_JSON")]
    pub log_json: bool,
}

impl AppConfig {
    /// The socket address to listen on.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            cors_origin: HeaderValue::from_static(DEFAULT_CORS_ORIGIN),
            seed_file: None,
            log_json: false,
        }
    }
}

fn parse_origin(origin: &str) -> Result<HeaderValue, String> {
    let origin = origin.trim().trim_end_matches('/');
    if !(origin.starts_with("http://") || origin.starts_with("https://")) {
        return Err(format!("origin must start with http:// or https://: {origin}"));
    }
    HeaderValue::from_str(origin).map_err(|e| format!("invalid origin {origin}: {e}"))
}
