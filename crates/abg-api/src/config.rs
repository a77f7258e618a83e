//! Runtime configuration, resolved once at startup from the environment.

use std::env;
use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
    pub cors_allow_any: bool,
    /// Serve through `lambda_http` instead of a TCP listener.
    pub lambda: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            log_format: LogFormat::Json,
            cors_allow_any: true,
            lambda: false,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let bind_addr = lookup("ABG_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .map_err(|e| eyre::eyre!("ABG_BIND_ADDR '{bind_addr}' is not a socket address: {e}"))?;

        let log_format = match lookup("ABG_LOG_FORMAT").as_deref() {
            None | Some("json") => LogFormat::Json,
            Some("pretty") => LogFormat::Pretty,
            Some(other) => {
                return Err(eyre::eyre!(
                    "ABG_LOG_FORMAT '{other}' is not one of: json, pretty"
                ));
            }
        };

        let cors_allow_any = match lookup("ABG_CORS_ALLOW_ANY").as_deref() {
            None => true,
            Some(value) => value.parse::<bool>().map_err(|_| {
                eyre::eyre!("ABG_CORS_ALLOW_ANY '{value}' must be true or false")
            })?,
        };

        Ok(Self {
            bind_addr,
            log_format,
            cors_allow_any,
            lambda: lookup("AWS_LAMBDA_RUNTIME_API").is_some(),
        })
    }
}
