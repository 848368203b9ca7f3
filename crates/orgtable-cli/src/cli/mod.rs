//! # CLI Behavior
//!
//! This is **one possible UI client** for orgtable, not the application itself.
//!
//! ## Naked Execution (`orgtable`)
//!
//! Running `orgtable` with no arguments renders the first page, same as `orgtable list`.
//!
//! ## Where Records Come From
//!
//! 1. The last snapshot (if snapshots are enabled) seeds the table.
//! 2. Then the configured endpoint is fetched. On success the fetched records replace the
//!    snapshot ones; on failure the snapshot ones stay and the footer says so.
//!
//! `--from FILE` reads a JSON file instead of the endpoint. `--offline` skips step 2.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Context wiring and per-command handlers
//! - `browse`: The interactive read-eval-render loop
//! - `render`: Table layout and JSON output
//! - `styles`: Terminal styling constants
//! - `logging`: tracing subscriber setup

mod browse;
mod commands;
mod logging;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
