use std::sync::Arc;

use crate::configs::env::{DATABASE_URL, Environment};
use crate::configs::provider::{ConfigSource, SourceOrigin, SourceProvider};
use crate::configs::ConfigError;
use crate::core::ports::FileSystem;

/// Provider for the default config file location
///
/// Points at `config/config.hjson` under the current working directory, which
/// is where Lemmy keeps it relative to its home directory. If the working
/// directory cannot be determined, `LEMMY_DATABASE_URL` is consulted instead.
/// This provider should be last in the priority chain.
pub struct DefaultProvider {
    fs: Arc<dyn FileSystem>,
    env: Arc<Environment>,
}

impl DefaultProvider {
    pub fn new(fs: Arc<dyn FileSystem>, env: Arc<Environment>) -> Self {
        Self { fs, env }
    }
}

impl SourceProvider for DefaultProvider {
    fn locate(&self) -> Result<Option<ConfigSource>, ConfigError> {
        match self.fs.current_dir() {
            Ok(cwd) => {
                let path = cwd.join("config").join("config.hjson");
                tracing::debug!(path = %path.display(), "Using default config path");
                Ok(Some(ConfigSource::File {
                    path,
                    origin: SourceOrigin::DefaultPath,
                }))
            }
            Err(e) => {
                tracing::warn!("Cannot access current directory ({e}). Looking for {DATABASE_URL}");
                Ok(self
                    .env
                    .get(DATABASE_URL)?
                    .map(|value| ConfigSource::ConnectionString {
                        value: value.to_string(),
                        origin: SourceOrigin::DatabaseUrlFallback,
                    }))
            }
        }
    }
}
