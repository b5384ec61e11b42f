use crate::configs::Resolver;
use crate::errors::FlairsError;

/// Execute the dsn command
///
/// Resolves the database connection descriptor and prints it on stdout.
///
/// # Arguments
/// * `reveal` - If true, prints the password; otherwise it is masked
pub fn execute(reveal: bool) -> Result<(), FlairsError> {
    let resolver = Resolver::from_std_env();
    let descriptor = resolver.resolve()?;

    if reveal {
        println!("{}", descriptor.as_str());
    } else {
        println!("{}", descriptor.redacted());
    }
    Ok(())
}
