use std::fmt;
use std::path::PathBuf;

use crate::configs::ConfigError;

/// Where a configuration source was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceOrigin {
    /// `LEMMY_DATABASE_URL`
    DatabaseUrl,
    /// `LEMMY_CONFIG_LOCATION`
    ConfigLocation,
    /// `<cwd>/config/config.hjson`
    DefaultPath,
    /// `LEMMY_DATABASE_URL`, consulted because the working directory is unavailable
    DatabaseUrlFallback,
}

impl fmt::Display for SourceOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SourceOrigin::DatabaseUrl => "database url variable",
            SourceOrigin::ConfigLocation => "config location variable",
            SourceOrigin::DefaultPath => "default config path",
            SourceOrigin::DatabaseUrlFallback => "database url variable (fallback)",
        };
        f.write_str(label)
    }
}

/// A located configuration source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// A ready-made connection string; no file is read
    ConnectionString { value: String, origin: SourceOrigin },
    /// A config file to read and parse
    File { path: PathBuf, origin: SourceOrigin },
}

impl ConfigSource {
    pub fn origin(&self) -> SourceOrigin {
        match self {
            ConfigSource::ConnectionString { origin, .. } | ConfigSource::File { origin, .. } => {
                *origin
            }
        }
    }
}

/// Trait for configuration source providers
///
/// Each provider represents one place the database configuration may come
/// from (environment variables, the default config path, ...).
///
/// Providers are executed in priority order until one returns a source.
pub trait SourceProvider {
    /// Attempt to locate a configuration source
    ///
    /// # Returns
    ///
    /// - `Ok(Some(source))`: This provider has a source
    /// - `Ok(None)`: Nothing here (try next provider)
    /// - `Err(e)`: The source is present but unusable (stop immediately)
    fn locate(&self) -> Result<Option<ConfigSource>, ConfigError>;
}
