use clap::{Args, Parser, Subcommand};
use orgtable::model::{Column, SortDirection};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "orgtable",
    bin_name = "orgtable",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Filter, sort and page through organization records", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,
}

/// Where the records come from.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Read records from a JSON file instead of the configured endpoint
    #[arg(long, value_name = "FILE")]
    pub from: Option<PathBuf>,

    /// Do not fetch; show the last snapshot only
    #[arg(long, conflicts_with = "from")]
    pub offline: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render one page of the table
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Keep companies whose name contains this text
        #[arg(short, long)]
        company: Option<String>,

        /// Keep companies whose industries contain this text
        #[arg(short, long)]
        industry: Option<String>,

        /// Column to sort by (name, industries, amount, round, valuation, stage, year)
        #[arg(short, long, value_name = "COLUMN")]
        sort: Option<Column>,

        /// Sort direction: asc, desc or none (defaults to the column's natural direction)
        #[arg(short, long, requires = "sort")]
        direction: Option<SortDirection>,

        /// Page number, starting at 1
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
        page: Option<u64>,

        /// Rows per page
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        page_size: Option<u64>,

        /// Print the page as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Browse interactively; type `help` at the prompt for commands
    #[command(alias = "b", display_order = 2)]
    Browse {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Show or change configuration
    #[command(display_order = 3)]
    Config {
        #[command(subcommand)]
        action: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate a commented sample `orgtable.toml`
    Gen {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print one configuration value
    Get { key: String },

    /// Persist a configuration value
    Set { key: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_naked_invocation() {
        let cli = parse(&["orgtable"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_list_arguments() {
        let cli = parse(&[
            "orgtable", "list", "--company", "acme", "--sort", "valuation", "--direction",
            "asc", "--page", "2", "--page-size", "5", "--json", "-vv",
        ]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Commands::List {
                company,
                sort,
                direction,
                page,
                page_size,
                json,
                ..
            }) => {
                assert_eq!(company.as_deref(), Some("acme"));
                assert_eq!(sort, Some(Column::RoundValuationUsd));
                assert_eq!(direction, Some(SortDirection::Ascending));
                assert_eq!(page, Some(2));
                assert_eq!(page_size, Some(5));
                assert!(json);
            }
            other => panic!("expected list, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Cli::try_parse_from(["orgtable", "list", "--sort", "colour"]).is_err());
        assert!(Cli::try_parse_from(["orgtable", "list", "--page", "0"]).is_err());
        assert!(Cli::try_parse_from(["orgtable", "list", "--direction", "asc"]).is_err());
        assert!(
            Cli::try_parse_from(["orgtable", "list", "--offline", "--from", "x.json"]).is_err()
        );
    }

    #[test]
    fn test_config_subcommands() {
        let cli = parse(&["orgtable", "config", "set", "page_size", "10"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                action: Some(ConfigCommands::Set { .. })
            })
        ));
        let cli = parse(&["orgtable", "config"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config { action: None })
        ));
    }
}
