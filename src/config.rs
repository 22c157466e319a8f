use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} not set")]
    Missing(&'static str),
    #[error("environment variable {0} has an invalid value: {1}")]
    Invalid(&'static str, String),
}

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub db_url: String,
    pub session: SessionConfig,
}

#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub ttl_secs: i64,
    pub secure_cookie: bool,
    pub login_redirect_url: String,
    pub logout_redirect_url: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            ttl_secs: 60 * 60 * 24 * 14,
            secure_cookie: false,
            login_redirect_url: "/".to_string(),
            logout_redirect_url: "/api-auth/login/".to_string(),
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        EnvConfig {
            port: 8080,
            db_url: "sqlite::memory:".to_string(),
            session: SessionConfig::default(),
        }
    }
}

impl EnvConfig {
    fn get_env(key: &'static str) -> Result<String, ConfigError> {
        env::var(key).map_err(|_| ConfigError::Missing(key))
    }

    fn get_env_or<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
        match env::var(key) {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid(key, raw)),
            Err(_) => Ok(default),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let defaults = SessionConfig::default();
        Ok(EnvConfig {
            port: Self::get_env_or("PORT", 8080)?,
            db_url: Self::get_env("DATABASE_URL")?,
            session: SessionConfig {
                ttl_secs: Self::get_env_or("SESSION_TTL_SECS", defaults.ttl_secs)?,
                secure_cookie: Self::get_env_or("SESSION_COOKIE_SECURE", defaults.secure_cookie)?,
                login_redirect_url: Self::get_env_or("LOGIN_REDIRECT_URL", defaults.login_redirect_url)?,
                logout_redirect_url: Self::get_env_or("LOGOUT_REDIRECT_URL", defaults.logout_redirect_url)?,
            },
        })
    }
}

pub static CONFIG: OnceLock<EnvConfig> = OnceLock::new();

/// Published config, or defaults when nothing was published (tests).
pub fn config() -> &'static EnvConfig {
    CONFIG.get_or_init(EnvConfig::default)
}
