use std::sync::Arc;

use crate::configs::env::{DATABASE_URL, Environment};
use crate::configs::provider::{ConfigSource, SourceOrigin, SourceProvider};
use crate::configs::ConfigError;

/// Provider for a ready-made connection string
///
/// Reads the `LEMMY_DATABASE_URL` environment variable. When set, its value is
/// handed out verbatim and no config file is consulted.
pub struct EnvProvider {
    env: Arc<Environment>,
}

impl EnvProvider {
    pub fn new(env: Arc<Environment>) -> Self {
        Self { env }
    }
}

impl SourceProvider for EnvProvider {
    fn locate(&self) -> Result<Option<ConfigSource>, ConfigError> {
        Ok(self.env.get(DATABASE_URL)?.map(|value| {
            tracing::debug!("Using connection string from {DATABASE_URL}");
            ConfigSource::ConnectionString {
                value: value.to_string(),
                origin: SourceOrigin::DatabaseUrl,
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_connection_string() {
        let env: Environment = [(DATABASE_URL, "postgres://u:p@h:5432/d")]
            .into_iter()
            .collect();
        let provider = EnvProvider::new(Arc::new(env));

        let source = provider.locate().unwrap();

        assert_eq!(
            source,
            Some(ConfigSource::ConnectionString {
                value: "postgres://u:p@h:5432/d".to_string(),
                origin: SourceOrigin::DatabaseUrl,
            })
        );
    }

    #[test]
    fn test_locate_unset() {
        let provider = EnvProvider::new(Arc::new(Environment::default()));

        assert_eq!(provider.locate().unwrap(), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_locate_non_unicode_fails() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let env: Environment = [(DATABASE_URL, OsString::from_vec(b"postgres://\xff".to_vec()))]
            .into_iter()
            .collect();
        let provider = EnvProvider::new(Arc::new(env));

        assert!(matches!(provider.locate(), Err(ConfigError::Env { .. })));
    }

    #[test]
    fn test_locate_empty_is_unset() {
        let env: Environment = [(DATABASE_URL, "")].into_iter().collect();
        let provider = EnvProvider::new(Arc::new(env));

        assert_eq!(provider.locate().unwrap(), None);
    }
}
