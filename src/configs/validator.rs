use std::fmt;

use crate::configs::ConnectionConfig;

/// Name of a mandatory connection field that has no value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MissingField(&'static str);

impl MissingField {
    pub fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Mandatory fields and how to tell that each one is unset.
/// `password` is not listed: trust authentication runs without one.
const MANDATORY_FIELDS: [(&str, fn(&ConnectionConfig) -> bool); 4] = [
    ("host", |c| c.host.is_empty()),
    ("port", |c| c.port == 0),
    ("user", |c| c.user.is_empty()),
    ("database", |c| c.database.is_empty()),
];

/// Report every mandatory field that is missing, in a fixed order.
/// An empty list means the config can be turned into a descriptor.
pub fn validate(config: &ConnectionConfig) -> Vec<MissingField> {
    MANDATORY_FIELDS
        .iter()
        .filter(|(_, is_missing)| is_missing(config))
        .map(|&(name, _)| MissingField(name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(fields: &[MissingField]) -> Vec<&'static str> {
        fields.iter().map(|f| f.name()).collect()
    }

    fn complete() -> ConnectionConfig {
        ConnectionConfig {
            host: "localhost".to_string(),
            port: 5432,
            user: "lemmy".to_string(),
            password: "secret".to_string(),
            database: "lemmy".to_string(),
            ..ConnectionConfig::default()
        }
    }

    #[test]
    fn test_complete_config_is_valid() {
        assert!(validate(&complete()).is_empty());
    }

    #[test]
    fn test_empty_password_is_allowed() {
        let config = ConnectionConfig {
            password: String::new(),
            pool_size: None,
            ..complete()
        };

        assert!(validate(&config).is_empty());
    }

    #[test]
    fn test_reports_every_missing_field() {
        assert_eq!(
            names(&validate(&ConnectionConfig::default())),
            ["host", "port", "user", "database"]
        );
    }

    #[test]
    fn test_reports_only_missing_fields() {
        let config = ConnectionConfig {
            host: String::new(),
            database: String::new(),
            ..complete()
        };

        assert_eq!(names(&validate(&config)), ["host", "database"]);
    }

    #[test]
    fn test_zero_port_is_missing() {
        let config = ConnectionConfig {
            port: 0,
            ..complete()
        };

        assert_eq!(names(&validate(&config)), ["port"]);
    }

    #[test]
    fn test_display() {
        assert_eq!(MissingField("user").to_string(), "user");
    }
}
