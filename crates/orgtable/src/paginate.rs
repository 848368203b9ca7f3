//! Pagination arithmetic.
//!
//! `page_count = max(1, ceil(len / size))`, and any requested index (including negative
//! ones or ones past the end, e.g. after a filter shrank the collection) is clamped into
//! `0..page_count` before slicing. A page size of 0 is treated as 1.

use crate::model::Record;

#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    pub rows: Vec<&'a Record>,
    pub page_count: usize,
    pub clamped_index: usize,
}

pub fn page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

pub fn clamp_index(page_index: i64, page_count: usize) -> usize {
    let last = page_count.saturating_sub(1);
    usize::try_from(page_index.max(0)).map_or(last, |index| index.min(last))
}

pub fn paginate<'a>(records: &[&'a Record], page_index: i64, page_size: usize) -> Page<'a> {
    let size = page_size.max(1);
    let page_count = page_count(records.len(), size);
    let clamped_index = clamp_index(page_index, page_count);

    let start = (clamped_index * size).min(records.len());
    let end = (start + size).min(records.len());

    Page {
        rows: records[start..end].to_vec(),
        page_count,
        clamped_index,
    }
}
