use crate::core::{AppError, Result};
use std::env;

/// Server configuration for HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self {
            host,
            port,
            workers: num_cpus::get() * 2, // 2x CPU cores for I/O-bound workload
        }
    }

    /// Load server configuration from environment variables
    ///
    /// HOST defaults to 0.0.0.0 and PORT to 8082.
    pub fn from_env() -> Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8082".to_string())
            .parse()
            .map_err(|_| AppError::configuration("Invalid PORT"))?;

        Ok(Self::new(host, port))
    }

    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(AppError::configuration("PORT must be greater than 0"));
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
