//! # Interaction Handler
//!
//! A [`Session`] is the single owner of the mutable pieces of a running table: the
//! [`RecordStore`], the current [`ViewState`] and a [`ViewCache`]. Every user intent is
//! an [`Action`]; [`Session::apply`] performs the matching state transition (or a reload)
//! and hands back the recomputed [`PageView`].
//!
//! After each recomputation the stored page index is settled to the index the view
//! actually shows. A request for page 9 of 3 therefore leaves the session on page 3, and
//! a following "previous" lands on page 2.
//!
//! ## Browse Commands
//!
//! [`Action`] parses from the one-line commands an interactive client accepts:
//!
//! ```text
//! company <term>     industry <term>     sort <column>     sort <column> <asc|desc|none>
//! next               prev                page <n>          size <n>
//! clear              reload
//! ```
//!
//! `page` takes a 1-based page number. A missing filter term clears that filter.

use std::str::FromStr;

use crate::error::{OrgTableError, Result};
use crate::model::{Column, SortDirection};
use crate::source::RecordSource;
use crate::store::{LoadOutcome, RecordStore, SnapshotBackend};
use crate::view::{PageView, ViewCache, ViewState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetCompanyFilter(String),
    SetIndustryFilter(String),
    ClearFilters,
    ToggleSort(Column),
    SetSort(Column, SortDirection),
    NextPage,
    PreviousPage,
    /// Zero-based.
    GoToPage(i64),
    SetPageSize(usize),
    Reload,
}

impl FromStr for Action {
    type Err = OrgTableError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_lowercase().as_str() {
            "company" | "c" => Ok(Action::SetCompanyFilter(rest.to_string())),
            "industry" | "i" => Ok(Action::SetIndustryFilter(rest.to_string())),
            "clear" => Ok(Action::ClearFilters),
            "sort" | "s" => parse_sort(rest),
            "next" | "n" => Ok(Action::NextPage),
            "prev" | "previous" | "p" => Ok(Action::PreviousPage),
            "page" => {
                let number: i64 = parse_number(rest, "page")?;
                Ok(Action::GoToPage(number.saturating_sub(1)))
            }
            "size" => Ok(Action::SetPageSize(parse_number(rest, "size")?)),
            "reload" | "r" => Ok(Action::Reload),
            "" => Err(OrgTableError::Input("Empty command".to_string())),
            other => Err(OrgTableError::Input(format!("Unknown command: {}", other))),
        }
    }
}

fn parse_sort(args: &str) -> Result<Action> {
    let mut parts = args.split_whitespace();
    let column: Column = parts
        .next()
        .ok_or_else(|| OrgTableError::Input("sort needs a column".to_string()))?
        .parse()?;
    match parts.next() {
        Some(direction) => Ok(Action::SetSort(column, direction.parse()?)),
        None => Ok(Action::ToggleSort(column)),
    }
}

fn parse_number<T: FromStr>(raw: &str, what: &str) -> Result<T> {
    raw.parse()
        .map_err(|_| OrgTableError::Input(format!("{} needs a number, got '{}'", what, raw)))
}

pub struct Session<S: RecordSource, B: SnapshotBackend> {
    store: RecordStore<S, B>,
    state: ViewState,
    cache: ViewCache,
    last_load: Option<LoadOutcome>,
}

impl<S: RecordSource, B: SnapshotBackend> Session<S, B> {
    pub fn new(store: RecordStore<S, B>, state: ViewState) -> Self {
        Self {
            store,
            state,
            cache: ViewCache::new(),
            last_load: None,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn store(&self) -> &RecordStore<S, B> {
        &self.store
    }

    /// Outcome of the most recent reload issued through this session.
    pub fn last_load(&self) -> Option<&LoadOutcome> {
        self.last_load.as_ref()
    }

    pub fn restore_snapshot(&mut self) -> bool {
        self.store.restore_snapshot()
    }

    pub fn reload(&mut self) -> &LoadOutcome {
        self.last_load.insert(self.store.load())
    }

    /// The view for the current state, settling the page index to the one shown.
    pub fn view(&mut self) -> &PageView {
        let version = self.store.version();
        let view = self.cache.view(self.store.records(), version, &self.state);
        if view.page_index as i64 != self.state.page.index {
            self.state = self.state.clone().settled(view);
        }
        self.cache.view(self.store.records(), version, &self.state)
    }

    pub fn apply(&mut self, action: Action) -> &PageView {
        let state = self.state.clone();
        self.state = match action {
            Action::SetCompanyFilter(term) => state.with_company_filter(term),
            Action::SetIndustryFilter(term) => state.with_industry_filter(term),
            Action::ClearFilters => state.cleared_filters(),
            Action::ToggleSort(column) => state.toggle_sort(column),
            Action::SetSort(column, direction) => state.with_sort(column, direction),
            Action::NextPage => {
                let page_count = self.view().page_count;
                self.state.clone().next_page(page_count)
            }
            Action::PreviousPage => {
                let page_count = self.view().page_count;
                self.state.clone().previous_page(page_count)
            }
            Action::GoToPage(index) => state.go_to_page(index),
            Action::SetPageSize(size) => state.with_page_size(size),
            Action::Reload => {
                self.reload();
                state
            }
        };
        self.view()
    }
}
