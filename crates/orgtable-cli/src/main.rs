//! # Orgtable CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this file only
//! invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/orgtable/`: Core library: record loading, the view pipeline, sessions.
//! - `crates/orgtable-cli/`: This CLI tool, depends on the `orgtable` library.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/orgtable-cli/src/cli/)                   │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Interactive loop (browse.rs)                             │
//! │  - Terminal/JSON rendering (render.rs, styles.rs)           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/orgtable/src/api.rs)                     │
//! │  - ListQuery / Action in, PageView out                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI layer is responsible for
//! **all** user-facing concerns: argument parsing, logging setup, rendering and exit
//! codes.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
