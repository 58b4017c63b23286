use std::env;
use anyhow::{bail, Context, Result};
use uuid::Uuid;

const DEFAULT_USERNAME: &str = "user";

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
    pub auth_username: String,
    pub auth_password: String,
    /// True when no AUTH_PASSWORD was supplied and one was generated at startup.
    pub password_generated: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let service_port = lookup("SERVICE_PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = lookup("SERVICE_HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string());

        let auth_username = lookup("AUTH_USERNAME")
            .unwrap_or_else(|| DEFAULT_USERNAME.to_string());
        if auth_username.is_empty() {
            bail!("AUTH_USERNAME must not be empty");
        }

        let (auth_password, password_generated) = match lookup("AUTH_PASSWORD") {
            Some(password) if password.is_empty() => {
                bail!("AUTH_PASSWORD must not be empty");
            }
            Some(password) => (password, false),
            None => (Uuid::new_v4().to_string(), true),
        };

        Ok(Config {
            service_port,
            service_host,
            auth_username,
            auth_password,
            password_generated,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Service listening on: {}", self.bind_address());
        tracing::info!("  Authenticated user: {}", self.auth_username);
        if self.password_generated {
            tracing::warn!(
                "Using generated security password: {} (set AUTH_PASSWORD to override)",
                self.auth_password
            );
        } else {
            tracing::info!("  Password: provided via AUTH_PASSWORD");
        }
    }
}
