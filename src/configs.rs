//! Database configuration resolution for Flairs
//!
//! Flairs attaches to the database owned by a Lemmy instance, so its
//! connection settings come from wherever Lemmy keeps them. The internal
//! provider implementations are private to enforce the standard resolution
//! order.
//!
//! # Source Priority
//!
//! 1. Environment variable `LEMMY_DATABASE_URL` (used verbatim)
//! 2. Environment variable `LEMMY_CONFIG_LOCATION` (path to a config file)
//! 3. Default: `<cwd>/config/config.hjson`
//!
//! Config files may be Hjson or JSON, with the connection fields either at the
//! root or under a `database` section.

// Internal provider implementations (private)
mod default_provider;
mod env_provider;
mod location_provider;

pub mod descriptor;
pub mod env;
pub mod format;
pub(crate) mod provider; // Available within crate for testing
pub mod validator;

use std::path::PathBuf;
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use crate::core::ports::{FileSystem, FileSystemError};

pub use descriptor::ConnectionDescriptor;
pub use env::Environment;
pub use format::{ConfigFormat, ParseError};
pub use provider::{ConfigSource, SourceOrigin};
pub use validator::MissingField;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unable to locate database credentials: {0}")]
    NoDatabaseConfig(#[from] NoDatabaseConfig),

    #[error("Missing database credentials: {}", join_fields(.fields))]
    MissingCredentials { fields: Vec<MissingField> },

    #[error("Environment variable {key} is not valid unicode")]
    Env { key: String },
}

/// Why no usable database configuration was found
#[derive(Debug, Error)]
pub enum NoDatabaseConfig {
    #[error(
        "the current directory is inaccessible and {} is not set",
        env::DATABASE_URL
    )]
    Unlocated,

    #[error(
        "failed to read {}: {source}. Lemmy's default config path is its home directory + 'config/config.hjson'; try setting {}",
        .path.display(),
        env::CONFIG_LOCATION
    )]
    Unreadable {
        path: PathBuf,
        source: FileSystemError,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Unparseable { path: PathBuf, source: ParseError },
}

fn join_fields(fields: &[MissingField]) -> String {
    fields
        .iter()
        .map(|field| field.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Connection settings as read from a config file, whichever layout it used
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    /// Prebuilt connection string; takes precedence over the other fields.
    /// Giving both `uri` and `connection` is rejected as a duplicate field.
    #[serde(alias = "connection")]
    pub uri: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    /// Advisory only
    #[serde(alias = "poolSize")]
    pub pool_size: Option<u32>,
}

impl ConnectionConfig {
    fn uri(&self) -> Option<&str> {
        self.uri.as_deref().filter(|uri| !uri.is_empty())
    }
}

/// Resolves the database connection descriptor
///
/// Holds no state besides its inputs: each call to [`Resolver::resolve`]
/// reads the environment snapshot and at most one file.
pub struct Resolver {
    env: Arc<Environment>,
    fs: Arc<dyn FileSystem>,
}

impl Resolver {
    pub fn new(env: Environment, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            env: Arc::new(env),
            fs,
        }
    }

    /// Resolver over the process environment and the real filesystem
    pub fn from_std_env() -> Self {
        use crate::adapters::UnixFs;

        Self::new(Environment::from_std_env(), Arc::new(UnixFs::new()))
    }

    /// Find the configuration source to use
    ///
    /// Priority order:
    /// 1. ENV `LEMMY_DATABASE_URL`
    /// 2. ENV `LEMMY_CONFIG_LOCATION`
    /// 3. Default: `<cwd>/config/config.hjson`
    pub fn locate(&self) -> Result<ConfigSource, ConfigError> {
        use provider::SourceProvider;

        // Build the provider chain in priority order
        let providers: Vec<Box<dyn SourceProvider>> = vec![
            Box::new(env_provider::EnvProvider::new(self.env.clone())),
            Box::new(location_provider::LocationProvider::new(self.env.clone())),
            Box::new(default_provider::DefaultProvider::new(
                self.fs.clone(),
                self.env.clone(),
            )),
        ];

        for provider in providers {
            if let Some(source) = provider.locate()? {
                return Ok(source);
            }
        }

        Err(NoDatabaseConfig::Unlocated.into())
    }

    /// Locate, read, parse and validate the configuration, then build the
    /// descriptor
    pub fn resolve(&self) -> Result<ConnectionDescriptor, ConfigError> {
        let source = self.locate()?;
        self.resolve_source(source)
    }

    /// Turn an already located source into a descriptor
    pub fn resolve_source(&self, source: ConfigSource) -> Result<ConnectionDescriptor, ConfigError> {
        let path = match source {
            ConfigSource::ConnectionString { value, .. } => {
                return Ok(ConnectionDescriptor::verbatim(value));
            }
            ConfigSource::File { path, .. } => path,
        };

        let bytes = match self.fs.read(&path) {
            Ok(bytes) => bytes,
            Err(source) => return Err(NoDatabaseConfig::Unreadable { path, source }.into()),
        };

        let format = ConfigFormat::from_path(&path);
        tracing::debug!(path = %path.display(), ?format, "Parsing database config");

        let config = match format::parse(&bytes, format) {
            Ok(config) => config,
            Err(source) => return Err(NoDatabaseConfig::Unparseable { path, source }.into()),
        };

        if let Some(pool_size) = config.pool_size {
            tracing::debug!(pool_size, "Config suggests a connection pool size");
        }

        if let Some(uri) = config.uri() {
            return Ok(ConnectionDescriptor::verbatim(uri));
        }

        let missing = validator::validate(&config);
        if !missing.is_empty() {
            return Err(ConfigError::MissingCredentials { fields: missing });
        }

        Ok(ConnectionDescriptor::from_config(&config))
    }
}
