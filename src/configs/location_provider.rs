use std::sync::Arc;

use crate::configs::env::{CONFIG_LOCATION, Environment};
use crate::configs::provider::{ConfigSource, SourceOrigin, SourceProvider};
use crate::configs::ConfigError;

/// Provider for an explicit config file location
///
/// Reads the `LEMMY_CONFIG_LOCATION` environment variable. The path is used
/// exactly as given; whether it exists is only found out when it is read.
pub struct LocationProvider {
    env: Arc<Environment>,
}

impl LocationProvider {
    pub fn new(env: Arc<Environment>) -> Self {
        Self { env }
    }
}

impl SourceProvider for LocationProvider {
    fn locate(&self) -> Result<Option<ConfigSource>, ConfigError> {
        Ok(self.env.get_path(CONFIG_LOCATION).map(|location| {
            tracing::debug!(path = %location.display(), "Using config file from {CONFIG_LOCATION}");
            ConfigSource::File {
                path: location.to_path_buf(),
                origin: SourceOrigin::ConfigLocation,
            }
        }))
    }
}
