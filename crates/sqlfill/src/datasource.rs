//! Typed connection settings for the OPEN template.
//!
//! [`DataSource`] is the structured form of the five positional OPEN
//! arguments. It deserializes from a config table such as:
//!
//! ```toml
//! [database]
//! user = "app"
//! password = "secret"
//! host = "db.internal"
//! port = 3306
//! database = "shop"
//! ```

use crate::error::{FillError, FillResult};
use crate::fill;
use serde::{Deserialize, Serialize};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3306;

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

/// MySQL connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSource {
    pub user: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub database: String,
}

impl DataSource {
    /// Create settings for `user@127.0.0.1:3306/database` with no password.
    pub fn new(user: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: String::new(),
            host: default_host(),
            port: DEFAULT_PORT,
            database: database.into(),
        }
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Reject settings that would render an unusable data source.
    ///
    /// The password may be empty; user, host and database may not.
    pub fn validate(&self) -> FillResult<()> {
        if self.user.trim().is_empty() {
            return Err(FillError::config("user must not be empty"));
        }
        if self.host.trim().is_empty() {
            return Err(FillError::config("host must not be empty"));
        }
        if self.database.trim().is_empty() {
            return Err(FillError::config("database must not be empty"));
        }
        Ok(())
    }

    /// Positional arguments for the OPEN template.
    pub fn to_args(&self) -> [String; 5] {
        [
            self.user.clone(),
            self.password.clone(),
            self.host.clone(),
            self.port.to_string(),
            self.database.clone(),
        ]
    }

    /// Render `user:password@tcp(host:port)/database`.
    pub fn to_dsn(&self) -> FillResult<String> {
        self.validate()?;
        fill::open(&self.to_args())
    }
}
