//! # API Facade
//!
//! The API layer is a **thin facade** over the [`Session`]. It is the single entry point
//! for every table operation, regardless of the UI being used.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: Filtering, sorting and paging live in their own modules.
//! - **I/O operations**: No stdout, stderr, or terminal formatting.
//! - **Presentation concerns**: Returns [`PageView`] data, not strings.
//!
//! ## Generic Over Collaborators
//!
//! `OrgTableApi<S, B>` is generic over the fetch source and the snapshot backend:
//! - Production: `OrgTableApi<ConfiguredSource, FsSnapshot>` (see [`crate::init`])
//! - Testing: `OrgTableApi<MemSource, MemSnapshot>`

use crate::model::{Column, SortDirection};
use crate::session::{Action, Session};
use crate::source::RecordSource;
use crate::store::{DataOrigin, LoadOutcome, RecordStore, SnapshotBackend};
use crate::view::{PageView, ViewState};

/// One-shot page request, as issued by a non-interactive client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub company: Option<String>,
    pub industry: Option<String>,
    pub sort: Option<(Column, Option<SortDirection>)>,
    /// Zero-based.
    pub page: Option<i64>,
    pub page_size: Option<usize>,
}

impl ListQuery {
    fn actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        if let Some(term) = &self.company {
            actions.push(Action::SetCompanyFilter(term.clone()));
        }
        if let Some(term) = &self.industry {
            actions.push(Action::SetIndustryFilter(term.clone()));
        }
        if let Some((column, direction)) = self.sort {
            actions.push(Action::SetSort(
                column,
                direction.unwrap_or_else(|| column.first_direction()),
            ));
        }
        if let Some(size) = self.page_size {
            actions.push(Action::SetPageSize(size));
        }
        if let Some(page) = self.page {
            actions.push(Action::GoToPage(page));
        }
        actions
    }
}

pub struct OrgTableApi<S: RecordSource, B: SnapshotBackend> {
    session: Session<S, B>,
}

impl<S: RecordSource, B: SnapshotBackend> OrgTableApi<S, B> {
    pub fn new(store: RecordStore<S, B>, initial: ViewState) -> Self {
        Self {
            session: Session::new(store, initial),
        }
    }

    /// Seed the table from the last snapshot, if any.
    pub fn restore_snapshot(&mut self) -> bool {
        self.session.restore_snapshot()
    }

    pub fn refresh(&mut self) -> &LoadOutcome {
        self.session.reload()
    }

    pub fn view(&mut self) -> &PageView {
        self.session.view()
    }

    pub fn apply(&mut self, action: Action) -> &PageView {
        self.session.apply(action)
    }

    /// Applies every part of `query` on top of the current state.
    pub fn list(&mut self, query: &ListQuery) -> &PageView {
        for action in query.actions() {
            self.session.apply(action);
        }
        self.session.view()
    }

    pub fn state(&self) -> &ViewState {
        self.session.state()
    }

    pub fn store(&self) -> &RecordStore<S, B> {
        self.session.store()
    }

    pub fn origin(&self) -> DataOrigin {
        self.session.store().origin()
    }

    pub fn last_load(&self) -> Option<&LoadOutcome> {
        self.session.last_load()
    }
}
