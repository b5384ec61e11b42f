use crate::configs::{ConfigSource, Resolver};
use crate::errors::FlairsError;

/// Execute the check command
///
/// Locates and validates the database configuration without printing any
/// credentials. Fails with the classified error when nothing usable is found.
pub fn execute() -> Result<(), FlairsError> {
    let resolver = Resolver::from_std_env();
    let source = resolver.locate()?;

    let origin = source.origin();
    let location = match &source {
        ConfigSource::File { path, .. } => format!("{origin}: {}", path.display()),
        ConfigSource::ConnectionString { .. } => origin.to_string(),
    };

    let descriptor = resolver.resolve_source(source)?;
    tracing::debug!(descriptor = %descriptor.redacted(), "Database configuration resolved");

    println!("{location}: ok");
    Ok(())
}
