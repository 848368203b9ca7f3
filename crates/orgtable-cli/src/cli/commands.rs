//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Initialize logging, then the API with its configured source
//! 3. **Dispatch**: Route commands to handlers
//! 4. **Output Formatting**: Table or JSON via `render`

use super::browse;
use super::logging::init_logging;
use super::render::{render_json, render_page};
use super::setup::{Cli, Commands, ConfigCommands, SourceArgs};
use anyhow::{anyhow, Result};
use clap::Parser;
use clapfig::{Clapfig, ConfigAction, SearchPath};
use orgtable::api::ListQuery;
use orgtable::config::OrgTableConfig;
use orgtable::init::{config_search_paths, data_dir, initialize, InitOptions, OrgTableContext, CONFIG_FILE};
use orgtable::model::{Column, SortDirection};
use std::io;
use std::path::PathBuf;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        None => handle_list(&ListQuery::default(), false, &SourceArgs::default()),
        Some(Commands::List {
            company,
            industry,
            sort,
            direction,
            page,
            page_size,
            json,
            source,
        }) => {
            let query = list_query(company, industry, sort, direction, page, page_size);
            handle_list(&query, json, &source)
        }
        Some(Commands::Browse { source }) => handle_browse(&source),
        Some(Commands::Config { action }) => handle_config_command(action.as_ref()),
    }
}

/// Translates 1-based CLI numbers into a [`ListQuery`].
fn list_query(
    company: Option<String>,
    industry: Option<String>,
    sort: Option<Column>,
    direction: Option<SortDirection>,
    page: Option<u64>,
    page_size: Option<u64>,
) -> ListQuery {
    ListQuery {
        company,
        industry,
        sort: sort.map(|column| (column, direction)),
        page: page.map(|p| i64::try_from(p.saturating_sub(1)).unwrap_or(i64::MAX)),
        page_size: page_size.map(|n| usize::try_from(n).unwrap_or(usize::MAX)),
    }
}

/// Build the context, seed it from the snapshot and (unless offline) fetch.
fn open(source: &SourceArgs) -> Result<OrgTableContext> {
    let options = InitOptions {
        project_dir: std::env::current_dir().ok(),
        from_file: source.from.clone(),
    };
    let mut ctx = initialize(&options)?;

    if ctx.config.snapshot {
        ctx.api.restore_snapshot();
    }
    if !source.offline {
        ctx.api.refresh();
    }
    Ok(ctx)
}

fn handle_list(query: &ListQuery, json: bool, source: &SourceArgs) -> Result<()> {
    let mut ctx = open(source)?;
    let provenance = browse::provenance(&ctx.api);
    let view = ctx.api.list(query);

    if json {
        println!("{}", render_json(view)?);
    } else {
        print!("{}", render_page(view, &provenance));
    }
    Ok(())
}

fn handle_browse(source: &SourceArgs) -> Result<()> {
    let mut ctx = open(source)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    browse::run_loop(&mut ctx.api, stdin.lock(), &mut stdout)?;
    Ok(())
}

/// Search paths for reading config: global data dir, then the working directory.
fn load_paths() -> Result<Vec<SearchPath>> {
    let global = data_dir()?;
    let cwd = std::env::current_dir().ok();
    Ok(config_search_paths(&global, cwd.as_deref()))
}

/// `config set` always writes the global file.
fn set_paths() -> Result<Vec<SearchPath>> {
    Ok(vec![SearchPath::Path(data_dir()?)])
}

fn handle_config_command(action: Option<&ConfigCommands>) -> Result<()> {
    match action {
        None => {
            // Bare `orgtable config`: show all resolved values
            let config: OrgTableConfig = Clapfig::builder()
                .app_name("orgtable")
                .file_name(CONFIG_FILE)
                .search_paths(load_paths()?)
                .no_env()
                .strict(false)
                .load()
                .unwrap_or_default();

            let table = toml::Value::try_from(&config)?;
            if let toml::Value::Table(t) = table {
                for (k, v) in &t {
                    println!("{} = {}", k, format_toml_value(v));
                }
            }
            Ok(())
        }
        Some(ConfigCommands::Gen { output }) => {
            let action = ConfigAction::Gen {
                output: output.clone(),
            };
            print!("{}", handle_config_action(&action, load_paths()?)?);
            Ok(())
        }
        Some(ConfigCommands::Get { key }) => {
            let action = ConfigAction::Get {
                key: key.clone(),
                scope: None,
            };
            println!("{}", handle_config_action(&action, load_paths()?)?);
            Ok(())
        }
        Some(ConfigCommands::Set { key, value }) => {
            let global: PathBuf = data_dir()?;
            std::fs::create_dir_all(&global)?;
            let action = ConfigAction::Set {
                key: key.clone(),
                value: value.clone(),
                scope: None,
            };
            println!("{}", handle_config_action(&action, set_paths()?)?);
            Ok(())
        }
    }
}

fn handle_config_action(action: &ConfigAction, paths: Vec<SearchPath>) -> Result<String> {
    let result = Clapfig::builder::<OrgTableConfig>()
        .app_name("orgtable")
        .file_name(CONFIG_FILE)
        .search_paths(paths)
        .no_env()
        .strict(false)
        .handle(action)
        .map_err(|e| anyhow!(e.to_string()))?;
    Ok(result.to_string())
}

/// Format a TOML value for display.
fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => format!("\"{}\"", s),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_converts_page_to_zero_based() {
        let query = list_query(None, None, None, None, Some(3), Some(10));
        assert_eq!(query.page, Some(2));
        assert_eq!(query.page_size, Some(10));
        assert_eq!(query.sort, None);
    }

    #[test]
    fn test_list_query_sort_pairs_direction() {
        let query = list_query(
            Some("acme".into()),
            None,
            Some(Column::Amount),
            Some(SortDirection::Ascending),
            None,
            None,
        );
        assert_eq!(query.company.as_deref(), Some("acme"));
        assert_eq!(
            query.sort,
            Some((Column::Amount, Some(SortDirection::Ascending)))
        );
        assert_eq!(query.page, None);
    }

    #[test]
    fn test_format_toml_value() {
        assert_eq!(
            format_toml_value(&toml::Value::String("x".into())),
            "\"x\""
        );
        assert_eq!(format_toml_value(&toml::Value::Integer(20)), "20");
        assert_eq!(format_toml_value(&toml::Value::Boolean(true)), "true");
    }
}
