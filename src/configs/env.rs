use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::Path;

use crate::configs::ConfigError;

/// Ready-made connection string, used verbatim when set
pub const DATABASE_URL: &str = "LEMMY_DATABASE_URL";

/// Location of Lemmy's config file, overriding the default path
pub const CONFIG_LOCATION: &str = "LEMMY_CONFIG_LOCATION";

const RECOGNIZED: [&str; 2] = [DATABASE_URL, CONFIG_LOCATION];

/// Read-only snapshot of the environment variables the resolver looks at
///
/// Resolution never touches the process environment directly, so tests can
/// hand it a synthetic one. Values are kept as raw OS strings; a value that
/// is not valid Unicode only fails when a provider asks for it as text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: BTreeMap<String, OsString>,
}

impl Environment {
    /// Snapshot the recognized variables from the process environment
    pub fn from_std_env() -> Self {
        RECOGNIZED
            .into_iter()
            .filter_map(|key| std::env::var_os(key).map(|value| (key, value)))
            .collect()
    }

    /// Look up a variable as text. An empty value counts as unset.
    pub fn get(&self, key: &str) -> Result<Option<&str>, ConfigError> {
        match self.get_os(key) {
            Some(value) => value
                .to_str()
                .map(Some)
                .ok_or_else(|| ConfigError::Env { key: key.to_string() }),
            None => Ok(None),
        }
    }

    /// Look up a variable as a filesystem path, whatever its encoding.
    /// An empty value counts as unset.
    pub fn get_path(&self, key: &str) -> Option<&Path> {
        self.get_os(key).map(Path::new)
    }

    fn get_os(&self, key: &str) -> Option<&OsString> {
        self.vars.get(key).filter(|value| !value.is_empty())
    }
}

impl<K, V> FromIterator<(K, V)> for Environment
where
    K: Into<String>,
    V: Into<OsString>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
