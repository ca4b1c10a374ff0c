//! Command-line argument definitions using clap.

use clap::{ArgGroup, Parser};
use nh_sync::DEFAULT_EXPORT_FILE;
use std::path::PathBuf;

/// QRadar Network Hierarchy Suite
///
/// Export the network hierarchy to a CSV file, import it back, or inspect
/// domains and the console version. One action per invocation.
#[derive(Parser, Debug)]
#[command(name = "nhsuite")]
#[command(author, version, about, long_about = None)]
#[command(group(
    ArgGroup::new("action")
        .args(["export_file", "import_file", "check_domain", "check_version"])
        .multiple(false)
))]
pub struct Cli {
    /// Export network hierarchy to a CSV file (network_hierarchy.csv if no name is given)
    #[arg(
        short = 'e',
        long,
        value_name = "FILENAME",
        num_args = 0..=1,
        default_missing_value = DEFAULT_EXPORT_FILE
    )]
    pub export_file: Option<PathBuf>,

    /// Import network hierarchy from a CSV file
    #[arg(short = 'i', long, value_name = "IMPORT_FILENAME")]
    pub import_file: Option<PathBuf>,

    /// Fetch and display domain information
    #[arg(long)]
    pub check_domain: bool,

    /// Retrieve and display current system information
    #[arg(long)]
    pub check_version: bool,

    /// Configuration file (default: ./config.txt)
    #[arg(short, long, env = "NHSUITE_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Append logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// The one thing this invocation does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Export(PathBuf),
    Import(PathBuf),
    CheckDomain,
    CheckVersion,
}

impl Cli {
    /// Selected action, `None` when no action flag was given
    #[must_use]
    pub fn action(&self) -> Option<Action> {
        if let Some(path) = &self.export_file {
            Some(Action::Export(path.clone()))
        } else if let Some(path) = &self.import_file {
            Some(Action::Import(path.clone()))
        } else if self.check_domain {
            Some(Action::CheckDomain)
        } else if self.check_version {
            Some(Action::CheckVersion)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("nhsuite").chain(args.iter().copied()))
    }

    #[test]
    fn test_export_without_value_uses_default_file() {
        let cli = parse(&["--export-file"]).unwrap();
        assert_eq!(
            cli.action(),
            Some(Action::Export(PathBuf::from("network_hierarchy.csv")))
        );
    }

    #[test]
    fn test_export_with_value() {
        let cli = parse(&["-e", "out.csv"]).unwrap();
        assert_eq!(cli.action(), Some(Action::Export(PathBuf::from("out.csv"))));
    }

    #[test]
    fn test_import_requires_value() {
        assert!(parse(&["--import-file"]).is_err());
        let cli = parse(&["-i", "in.csv"]).unwrap();
        assert_eq!(cli.action(), Some(Action::Import(PathBuf::from("in.csv"))));
    }

    #[test]
    fn test_actions_are_exclusive() {
        assert!(parse(&["--check-domain", "--check-version"]).is_err());
        assert!(parse(&["-e", "out.csv", "-i", "in.csv"]).is_err());
    }

    #[test]
    fn test_no_action() {
        let cli = parse(&["--verbose"]).unwrap();
        assert_eq!(cli.action(), None);
    }

    #[test]
    fn test_inspector_flags() {
        assert_eq!(parse(&["--check-domain"]).unwrap().action(), Some(Action::CheckDomain));
        assert_eq!(
            parse(&["--check-version"]).unwrap().action(),
            Some(Action::CheckVersion)
        );
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
