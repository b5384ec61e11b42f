use clap::{CommandFactory, Parser, Subcommand};

use crate::{errors::FlairsError, verbs};

#[derive(Debug, Parser)]
#[command(
    name = "flairs",
    version,
    about = "Flairs - user flairs for Lemmy",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn execute() -> Result<(), FlairsError> {
        let args = Cli::parse();

        match &args.command {
            Some(Commands::Dsn { reveal }) => verbs::dsn::execute(*reveal),
            Some(Commands::Check) => verbs::check::execute(),
            None => {
                Cli::command().print_help()?;
                Ok(())
            }
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Print the connection string for Lemmy's database")]
    Dsn {
        #[arg(long, help = "Show the password instead of masking it")]
        reveal: bool,
    },

    #[command(about = "Check that Lemmy's database configuration is usable")]
    Check,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_dsn_reveal() {
        let cli = Cli::try_parse_from(["flairs", "dsn", "--reveal"]).unwrap();

        assert!(matches!(cli.command, Some(Commands::Dsn { reveal: true })));
    }

    #[test]
    fn test_parse_no_subcommand() {
        let cli = Cli::try_parse_from(["flairs"]).unwrap();

        assert!(cli.command.is_none());
    }

    #[test]
    fn test_version_flag() {
        let err = Cli::try_parse_from(["flairs", "--version"]).unwrap_err();

        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}
