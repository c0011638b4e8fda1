//! Process configuration, read once from the environment at startup

use crate::llm::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;
use thiserror::Error;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MAX_TURNS: usize = 2;
const DEFAULT_TIMEOUT_SECS: u64 = 300;
const DEFAULT_CORS_ORIGINS: &str = "http://127.0.0.1:5500,http://localhost:5500,*";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY not found in environment variables")]
    MissingApiKey,
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// Which browser origins may call the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsOrigins {
    /// `*` was listed; every origin is echoed back
    pub any: bool,
    pub explicit: Vec<String>,
}

impl CorsOrigins {
    fn parse(raw: &str) -> Self {
        let mut any = false;
        let mut explicit = Vec::new();
        for origin in raw.split(',').map(str::trim).filter(|o| !o.is_empty()) {
            if origin == "*" {
                any = true;
            } else {
                explicit.push(origin.to_string());
            }
        }
        Self { any, explicit }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub request_timeout: Duration,
    /// Exchange pairs before `/next` reports completion
    pub max_turns: usize,
    pub listen_addr: SocketAddr,
    pub cors_origins: CorsOrigins,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let api_key = lookup("GEMINI_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let model = lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = lookup("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout_secs = parse_or(&lookup, "GEMINI_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        let max_turns = parse_or(&lookup, "INTERVIEW_MAX_TURNS", DEFAULT_MAX_TURNS)?;
        let host = parse_or(
            &lookup,
            "INTERVIEW_HOST",
            IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        )?;
        let port = parse_or(&lookup, "INTERVIEW_PORT", DEFAULT_PORT)?;
        let cors_origins = CorsOrigins::parse(
            &lookup("INTERVIEW_CORS_ORIGINS").unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string()),
        );

        Ok(Self {
            api_key,
            model,
            base_url,
            request_timeout: Duration::from_secs(timeout_secs),
            max_turns,
            listen_addr: SocketAddr::new(host, port),
            cors_origins,
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
    }
}
