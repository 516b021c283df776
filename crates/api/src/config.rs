use std::str::FromStr;

use sentiment_events::BrokerConfig;

use crate::auth::jwt::JwtConfig;

/// Environment lookup used by every `from_lookup` constructor.
///
/// Production passes a closure over `std::env::var`; tests pass a map.
pub type Lookup<'a> = dyn Fn(&str) -> Option<String> + 'a;

/// Startup configuration failure. The binary exits with this error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key}={value:?} is invalid: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Read a required, non-empty variable.
pub(crate) fn required(lookup: &Lookup<'_>, key: &'static str) -> Result<String, ConfigError> {
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(key)),
    }
}

/// Parse an optional variable, falling back to `default` when unset.
pub(crate) fn parse_or<T>(
    lookup: &Lookup<'_>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }),
    }
}

/// Default CORS allow-list: local frontends on the usual dev ports.
pub const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "http://localhost",
    "http://localhost:8080",
    "http://localhost:3000",
    "http://127.0.0.1",
    "http://127.0.0.1:8080",
    "http://127.0.0.1:3000",
];

/// Server configuration loaded once at startup and shared through `AppState`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub database_url: String,
    pub database_max_connections: u32,
    /// JWT token configuration (secret, algorithm, expiry).
    pub jwt: JwtConfig,
    /// Broker address and the exchange/routing key analysis requests go to.
    pub broker: BrokerConfig,
    /// Base URL of the external scoring pipeline. Logged only.
    pub analysis_url: Option<String>,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&|key| std::env::var(key).ok())
    }

    /// Load configuration from `lookup` with defaults.
    ///
    /// | Env Var                    | Default                     |
    /// |----------------------------|-----------------------------|
    /// | `HOST`                     | `0.0.0.0`                   |
    /// | `PORT`                     | `8000`                      |
    /// | `DATABASE_URL`             | required                    |
    /// | `DATABASE_MAX_CONNECTIONS` | `10`                        |
    /// | `CORS_ORIGINS`             | [`DEFAULT_CORS_ORIGINS`]    |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                        |
    /// | `RABBITMQ_HOST`            | `localhost`                 |
    /// | `RABBITMQ_PORT`            | `5672`                      |
    /// | `RABBITMQ_USERNAME`        | `guest`                     |
    /// | `RABBITMQ_PASSWORD`        | `guest`                     |
    /// | `RABBITMQ_VHOST`           | `/`                         |
    /// | `RABBITMQ_EXCHANGE`        | `datas_exchanges`           |
    /// | `RABBITMQ_ROUTING_KEY`     | `minha_routing_key`         |
    /// | `ANALISE_URL`              | unset                       |
    ///
    /// JWT variables are documented on [`JwtConfig::from_lookup`].
    pub fn from_lookup(lookup: &Lookup<'_>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = parse_or(lookup, "PORT", 8000)?;

        let cors_origins: Vec<String> = match lookup("CORS_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            None => DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
        };

        let request_timeout_secs: u64 = parse_or(lookup, "REQUEST_TIMEOUT_SECS", 30)?;

        let database_url = required(lookup, "DATABASE_URL")?;
        let database_max_connections: u32 = parse_or(lookup, "DATABASE_MAX_CONNECTIONS", 10)?;

        let jwt = JwtConfig::from_lookup(lookup)?;
        let broker = broker_from_lookup(lookup)?;

        let analysis_url = lookup("ANALISE_URL").filter(|url| !url.trim().is_empty());

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            database_max_connections,
            jwt,
            broker,
            analysis_url,
        })
    }
}

fn broker_from_lookup(lookup: &Lookup<'_>) -> Result<BrokerConfig, ConfigError> {
    let defaults = BrokerConfig::default();
    Ok(BrokerConfig {
        host: lookup("RABBITMQ_HOST").unwrap_or(defaults.host),
        port: parse_or(lookup, "RABBITMQ_PORT", defaults.port)?,
        username: lookup("RABBITMQ_USERNAME").unwrap_or(defaults.username),
        password: lookup("RABBITMQ_PASSWORD").unwrap_or(defaults.password),
        vhost: lookup("RABBITMQ_VHOST").unwrap_or(defaults.vhost),
        exchange: lookup("RABBITMQ_EXCHANGE").unwrap_or(defaults.exchange),
        routing_key: lookup("RABBITMQ_ROUTING_KEY").unwrap_or(defaults.routing_key),
    })
}
