use std::ffi::OsStr;
use std::fmt;
use std::path::Path;

use serde::de::{self, Deserializer, MapAccess, Visitor, value::MapAccessDeserializer};
use serde::Deserialize;
use thiserror::Error;

use crate::configs::ConnectionConfig;

/// On-disk serialization of a config file, chosen by its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.hjson`: JSON with comments, unquoted keys and trailing commas
    Hjson,
    /// `.json`: strict JSON
    Json,
    /// Any other extension
    Unrecognized,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(OsStr::to_str) {
            Some("hjson") => ConfigFormat::Hjson,
            Some("json") => ConfigFormat::Json,
            _ => ConfigFormat::Unrecognized,
        }
    }
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("config is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("invalid Hjson: {0}")]
    Hjson(#[from] deser_hjson::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode a config document into a [`ConnectionConfig`]
///
/// Both the flat layout (fields at the document root) and the nested layout
/// (fields under a `database` object) are accepted. A `database` key holding
/// a plain value is the flat layout's database name, not a section. When a
/// section is present, root-level connection fields are ignored.
///
/// Decoding is typed, so unquoted Hjson values such as `host: 10.0.0.5` or
/// `password: 12345` are read as the strings the fields expect.
///
/// An unrecognized format yields an empty config, which validation rejects.
pub fn parse(bytes: &[u8], format: ConfigFormat) -> Result<ConnectionConfig, ParseError> {
    let document: Document = match format {
        ConfigFormat::Hjson => deser_hjson::from_str(std::str::from_utf8(bytes)?)?,
        ConfigFormat::Json => serde_json::from_slice(bytes)?,
        ConfigFormat::Unrecognized => {
            tracing::warn!("Unrecognized config format, expected .hjson or .json");
            return Ok(ConnectionConfig::default());
        }
    };

    Ok(document.into_config())
}

/// Document root: the flat fields, plus `database` as either a name or a section
#[derive(Default, Deserialize)]
#[serde(default)]
struct Document {
    #[serde(alias = "connection")]
    uri: Option<String>,
    host: String,
    port: u16,
    user: String,
    password: String,
    database: Option<DatabaseEntry>,
    #[serde(alias = "poolSize")]
    pool_size: Option<u32>,
}

impl Document {
    fn into_config(self) -> ConnectionConfig {
        let database = match self.database {
            Some(DatabaseEntry::Section(section)) => return section,
            Some(DatabaseEntry::Name(name)) => name,
            None => String::new(),
        };

        ConnectionConfig {
            uri: self.uri,
            host: self.host,
            port: self.port,
            user: self.user,
            password: self.password,
            database,
            pool_size: self.pool_size,
        }
    }
}

enum DatabaseEntry {
    Name(String),
    Section(ConnectionConfig),
}

impl<'de> Deserialize<'de> for DatabaseEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DatabaseEntryVisitor)
    }
}

struct DatabaseEntryVisitor;

impl<'de> Visitor<'de> for DatabaseEntryVisitor {
    type Value = DatabaseEntry;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a database name or a database section")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(DatabaseEntry::Name(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(DatabaseEntry::Name(value))
    }

    // unquoted Hjson names made only of digits
    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(DatabaseEntry::Name(value.to_string()))
    }

    fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        ConnectionConfig::deserialize(MapAccessDeserializer::new(map)).map(DatabaseEntry::Section)
    }
}
