//! # View State and View Composer
//!
//! [`ViewState`] is the whole of the user-controlled state: two filter terms, one sort
//! column with its direction, and a page request. It is a plain value; every transition
//! ([`ViewState::with_company_filter`], [`ViewState::toggle_sort`],
//! [`ViewState::next_page`], ...) consumes the old state and returns a new one.
//!
//! [`compose`] turns the raw collection plus a state into a render-ready [`PageView`]:
//!
//! ```text
//! records ─▶ filter(company, industry) ─▶ sort(column, direction) ─▶ paginate(index, size)
//!                                                                        │
//!                                                     display formatting ▼
//!                                                                    PageView
//! ```
//!
//! The raw collection is only borrowed; nothing upstream of the page is mutated.
//!
//! ## Sort Toggle Cycle
//!
//! Toggling a column that is not the active one activates it in its first direction
//! (ascending for text columns, descending for numeric ones). Toggling the active
//! column steps first direction → opposite direction → unsorted, then starts over.
//!
//! ## Memoization
//!
//! [`ViewCache`] keeps the last composed view keyed by `(records version, ViewState)`.
//! It is an optimization only: a hit returns exactly what [`compose`] would.

use serde::{Deserialize, Serialize};

use crate::derive::display_cell;
use crate::filter::filter;
use crate::model::{Column, Record, SortDirection};
use crate::paginate::{clamp_index, paginate};
use crate::sort::sort;

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const DEFAULT_SORT_COLUMN: Column = Column::RoundValuationUsd;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortState {
    pub column: Column,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(column: Column, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// Direction shown for `column`: the active direction on the active column,
    /// unsorted everywhere else.
    pub fn indicator(&self, column: Column) -> SortDirection {
        if self.column == column {
            self.direction
        } else {
            SortDirection::Unsorted
        }
    }
}

impl Default for SortState {
    fn default() -> Self {
        Self::new(DEFAULT_SORT_COLUMN, SortDirection::Descending)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRequest {
    /// Zero-based; may be out of range until the next composition clamps it.
    pub index: i64,
    pub size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            index: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewState {
    pub company_filter: String,
    pub industry_filter: String,
    pub sort: SortState,
    pub page: PageRequest,
}

impl ViewState {
    /// Initial state: no filters, `sort_column` in its first direction, page 0.
    pub fn new(sort_column: Column, page_size: usize) -> Self {
        Self {
            sort: SortState::new(sort_column, sort_column.first_direction()),
            page: PageRequest {
                index: 0,
                size: page_size.max(1),
            },
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_company_filter(mut self, term: impl Into<String>) -> Self {
        self.company_filter = term.into();
        self
    }

    #[must_use]
    pub fn with_industry_filter(mut self, term: impl Into<String>) -> Self {
        self.industry_filter = term.into();
        self
    }

    #[must_use]
    pub fn with_sort(mut self, column: Column, direction: SortDirection) -> Self {
        self.sort = SortState::new(column, direction);
        self
    }

    #[must_use]
    pub fn toggle_sort(mut self, column: Column) -> Self {
        let current = self.sort;
        let direction = if current.column != column || current.direction == SortDirection::Unsorted
        {
            column.first_direction()
        } else if current.direction == column.first_direction() {
            current.direction.opposite()
        } else {
            SortDirection::Unsorted
        };
        self.sort = SortState::new(column, direction);
        self
    }

    /// Advances one page; a no-op on the last page.
    #[must_use]
    pub fn next_page(mut self, page_count: usize) -> Self {
        let current = clamp_index(self.page.index, page_count);
        if current + 1 < page_count {
            self.page.index = (current + 1) as i64;
        }
        self
    }

    /// Goes back one page from the displayed one; a no-op on the first page.
    #[must_use]
    pub fn previous_page(mut self, page_count: usize) -> Self {
        let current = clamp_index(self.page.index, page_count);
        self.page.index = current.saturating_sub(1) as i64;
        self
    }

    #[must_use]
    pub fn go_to_page(mut self, index: i64) -> Self {
        self.page.index = index;
        self
    }

    /// Changes the page size, keeping the first visible row on screen.
    #[must_use]
    pub fn with_page_size(mut self, size: usize) -> Self {
        let size = size.max(1);
        let top_row = self.page.index.max(0).saturating_mul(self.page.size as i64);
        self.page.index = top_row / size as i64;
        self.page.size = size;
        self
    }

    /// Records the index a composition actually displayed.
    #[must_use]
    pub fn settled(mut self, view: &PageView) -> Self {
        self.page.index = view.page_index as i64;
        self
    }

    #[must_use]
    pub fn cleared_filters(mut self) -> Self {
        self.company_filter.clear();
        self.industry_filter.clear();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnHeader {
    pub column: Column,
    pub label: &'static str,
    pub sort: SortDirection,
}

/// One rendered row: display strings in [`Column::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub cells: Vec<String>,
}

impl Row {
    pub fn from_record(record: &Record) -> Self {
        Self {
            cells: Column::ALL
                .iter()
                .map(|column| display_cell(record, *column))
                .collect(),
        }
    }

    pub fn cell(&self, column: Column) -> &str {
        Column::ALL
            .iter()
            .position(|c| *c == column)
            .and_then(|i| self.cells.get(i))
            .map_or("", String::as_str)
    }
}

/// Everything a renderer needs for one page, with no further derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<Row>,
    pub page_index: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub total_records: usize,
    pub matched_records: usize,
}

impl PageView {
    pub fn has_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.page_index + 1 < self.page_count
    }
}

pub fn compose(records: &[Record], state: &ViewState) -> PageView {
    let filtered = filter(records, &state.company_filter, &state.industry_filter);
    let ordered = sort(&filtered, state.sort.column, state.sort.direction);
    let page = paginate(&ordered, state.page.index, state.page.size);

    PageView {
        columns: Column::ALL
            .iter()
            .map(|column| ColumnHeader {
                column: *column,
                label: column.label(),
                sort: state.sort.indicator(*column),
            })
            .collect(),
        rows: page.rows.iter().map(|record| Row::from_record(record)).collect(),
        page_index: page.clamped_index,
        page_count: page.page_count,
        page_size: state.page.size.max(1),
        total_records: records.len(),
        matched_records: filtered.len(),
    }
}

#[derive(Debug)]
struct CacheEntry {
    version: u64,
    state: ViewState,
    view: PageView,
}

#[derive(Debug, Default)]
pub struct ViewCache {
    entry: Option<CacheEntry>,
}

impl ViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_cached(&self, version: u64, state: &ViewState) -> bool {
        self.entry
            .as_ref()
            .is_some_and(|e| e.version == version && e.state == *state)
    }

    pub fn view(&mut self, records: &[Record], version: u64, state: &ViewState) -> &PageView {
        let entry = match self.entry.take() {
            Some(entry) if entry.version == version && entry.state == *state => entry,
            _ => CacheEntry {
                version,
                state: state.clone(),
                view: compose(records, state),
            },
        };
        &self.entry.insert(entry).view
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}
