//! # CLI Argument Definitions
//!
//! Command-line structure of `geocoord`, built with `clap` derive.

use clap::{Parser, Subcommand, ValueEnum};
use geofeed_domain::config::OutputFormat;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "geocoord")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Parse and validate typed latitude/longitude pairs")]
pub(crate) struct Cli {
    /// Configuration file (defaults to ./geofeed.* when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum)]
    pub(crate) format: Option<FormatArg>,

    /// Fractional digits in text output
    #[arg(long, global = true, value_name = "DIGITS")]
    pub(crate) precision: Option<usize>,

    /// Log debug diagnostics
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub(crate) verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub(crate) quiet: bool,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Parse each input and print the coordinate
    Parse {
        /// Inputs such as "51.50851, -0.12572"; read from stdin (one per line) when omitted
        inputs: Vec<String>,
    },
    /// Print whether each input is a valid coordinate
    Check {
        /// Inputs to validate; read from stdin when omitted
        inputs: Vec<String>,
    },
    /// Print each input after glyph and whitespace normalization
    Normalize {
        /// Inputs to normalize; read from stdin when omitted
        inputs: Vec<String>,
    },
}

impl Command {
    pub(crate) fn inputs(&self) -> &[String] {
        match self {
            Self::Parse { inputs } | Self::Check { inputs } | Self::Normalize { inputs } => inputs,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_follow_the_subcommand() {
        let cli = Cli::try_parse_from(["geocoord", "parse", "1,2", "--format", "json", "-q"])
            .expect("arguments should parse");
        assert_eq!(cli.format, Some(FormatArg::Json));
        assert!(cli.quiet);
        assert_eq!(cli.command.inputs(), ["1,2".to_owned()]);
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["geocoord", "-v", "-q", "check"]).is_err());
    }

    #[test]
    fn negative_looking_inputs_need_a_separator() {
        let cli = Cli::try_parse_from(["geocoord", "parse", "--", "-33.86882, 151.20929"])
            .expect("arguments after -- are positional");
        assert_eq!(cli.command.inputs(), ["-33.86882, 151.20929".to_owned()]);
    }
}
