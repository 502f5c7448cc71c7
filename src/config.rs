use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context};

pub const DEFAULT_MINDFULNESS_TRACK_URL: &str = "https://www.youtube.com/embed/2OEL4P1Rz04";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    File(PathBuf),
    Postgres { database_url: String },
}

impl StoreBackend {
    pub fn name(&self) -> &'static str {
        match self {
            StoreBackend::Memory => "memory",
            StoreBackend::File(_) => "file",
            StoreBackend::Postgres { .. } => "postgres",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub frontend_url: String,
    pub cors_extra_origins: Vec<String>,

    pub jwt_secret: String,
    pub jwt_access_ttl_secs: i64,

    pub store: StoreBackend,

    pub require_entry_text: bool,
    pub mindfulness_track_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let store = match env_or("MOOD_STORE", "memory").to_lowercase().as_str() {
            "memory" => StoreBackend::Memory,
            "file" => StoreBackend::File(env_or("MOOD_FILE", "mood_logs.jsonl").into()),
            "postgres" => StoreBackend::Postgres {
                database_url: env::var("DATABASE_URL")
                    .context("DATABASE_URL must be set when MOOD_STORE=postgres")?,
            },
            other => bail!("MOOD_STORE must be one of memory, file, postgres (got {other:?})"),
        };

        Ok(Self {
            host: env_or("HOST", "0.0.0.0"),
            port: parse_env("PORT", 8080)?,
            frontend_url: env_or("FRONTEND_URL", "http://localhost:3000"),
            cors_extra_origins: env::var("CORS_EXTRA_ORIGINS")
                .map(|raw| {
                    raw.split(',')
                        .map(|o| o.trim().to_string())
                        .filter(|o| !o.is_empty())
                        .collect()
                })
                .unwrap_or_default(),

            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            jwt_access_ttl_secs: parse_env("JWT_ACCESS_TTL_SECS", 86_400)?,

            store,

            require_entry_text: parse_env("REQUIRE_ENTRY_TEXT", false)?,
            mindfulness_track_url: env_or("MINDFULNESS_TRACK_URL", DEFAULT_MINDFULNESS_TRACK_URL),
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.into())
}

fn parse_env<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw:?}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
impl Config {
    pub fn for_tests() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 0,
            frontend_url: "http://localhost:3000".into(),
            cors_extra_origins: Vec::new(),
            jwt_secret: "test-secret".into(),
            jwt_access_ttl_secs: 3600,
            store: StoreBackend::Memory,
            require_entry_text: false,
            mindfulness_track_url: DEFAULT_MINDFULNESS_TRACK_URL.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listen_addr_joins_host_and_port() {
        let config = Config {
            host: "0.0.0.0".into(),
            port: 9000,
            ..Config::for_tests()
        };
        assert_eq!(config.listen_addr(), "0.0.0.0:9000");
    }

    #[test]
    fn backend_names() {
        assert_eq!(StoreBackend::Memory.name(), "memory");
        assert_eq!(StoreBackend::File("x".into()).name(), "file");
        assert_eq!(
            StoreBackend::Postgres {
                database_url: "postgres://".into()
            }
            .name(),
            "postgres"
        );
    }
}
