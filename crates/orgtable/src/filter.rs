//! Record filtering.
//!
//! Two independent, case-insensitive substring predicates combined with AND: one over the
//! company `name`, one over `industries`. An empty term matches every record.
//!
//! Filtering borrows from the input collection and never reorders it, so surviving
//! records keep their relative input order, and applying the two terms one after the
//! other (in either order) gives the same result as applying both at once.

use crate::model::Record;

/// A pair of filter terms, case-folded once up front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    company: String,
    industry: String,
}

impl RecordFilter {
    pub fn new(company: &str, industry: &str) -> Self {
        Self {
            company: company.to_lowercase(),
            industry: industry.to_lowercase(),
        }
    }

    /// True if neither term restricts anything.
    pub fn is_empty(&self) -> bool {
        self.company.is_empty() && self.industry.is_empty()
    }

    pub fn matches(&self, record: &Record) -> bool {
        contains_folded(&record.name, &self.company)
            && contains_folded(&record.industries, &self.industry)
    }
}

fn contains_folded(haystack: &str, folded_term: &str) -> bool {
    folded_term.is_empty() || haystack.to_lowercase().contains(folded_term)
}

/// Keeps the records whose name contains `company` and whose industries contain
/// `industry`, ignoring case.
pub fn filter<'a, R>(records: R, company: &str, industry: &str) -> Vec<&'a Record>
where
    R: IntoIterator<Item = &'a Record>,
{
    let predicate = RecordFilter::new(company, industry);
    records
        .into_iter()
        .filter(|record| predicate.matches(record))
        .collect()
}
