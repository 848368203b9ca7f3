//! # Orgtable Architecture
//!
//! Orgtable is a **UI-agnostic table view engine** over a remotely fetched collection of
//! company records. It is a library that happens to have a CLI client, not the other way
//! around.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (orgtable-cli)                                         │
//! │  - Parses arguments, renders pages, runs the browse loop    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API + Session (api.rs, session.rs)                         │
//! │  - Owns the store, the ViewState and the view cache         │
//! │  - Turns user actions into state transitions                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Pure pipeline (derive, filter, sort, paginate, view)       │
//! │  - records + ViewState → PageView                           │
//! │  - No I/O, never fails                                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store + collaborators (store/, source/)                    │
//! │  - RecordStore: whole-collection loads, snapshot fallback   │
//! │  - RecordSource: HTTP, file, memory                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments and returns regular Rust
//! types. It never writes to stdout/stderr and never exits the process. Diagnostics go
//! through `tracing`; whoever embeds the library decides where they end up.
//!
//! ## Numbers Hidden in Text
//!
//! `amount` and `round_valuation_usd` arrive as free text: `"1500000"`, `"1000-2000"`,
//! `"undisclosed"`. Their numeric meaning is computed on demand by [`derive`] and never
//! stored. Anything unparsable becomes `NotANumber`, renders as `N/A` and sorts last in
//! either direction.
//!
//! ## Module Overview
//!
//! - [`model`]: `Record`, `Column`, `SortDirection`.
//! - [`derive`]: Range midpoints, currency formatting, tag-list normalization.
//! - [`filter`], [`sort`], [`paginate`]: The pipeline stages.
//! - [`view`]: `ViewState`, `compose` and the memoizing `ViewCache`.
//! - [`session`]: `Action` and the interaction handler.
//! - [`store`], [`source`]: Loading and snapshot persistence.
//! - [`config`], [`init`]: Configuration and production wiring.

pub mod api;
pub mod config;
pub mod derive;
pub mod error;
pub mod filter;
pub mod init;
pub mod model;
pub mod paginate;
pub mod session;
pub mod sort;
pub mod source;
pub mod store;
pub mod view;

#[cfg(test)]
pub(crate) mod test_utils;
