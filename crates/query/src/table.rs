//! Response table state and pipeline
//!
//! [`ResponseQuery`] is what the "saved responses" screen remembers between
//! renders: search term, housing-type filter, sort column and direction,
//! page. [`ResponseQuery::run`] applies search → category filter → sort →
//! paginate and returns an owned [`ResponsePage`].
//!
//! ## Page Reset
//!
//! Changing the term, the category or the page size puts the table back on
//! page 1, so narrowing the results never strands the user on a page that
//! no longer exists.

use crate::filter::{filter_by_category, search, CategoryFilter};
use crate::page::{page_count, paginate};
use crate::sort::{sort_by, SortDirection, SortKey};
pub use intake_core::catalog::DEFAULT_PAGE_SIZE;
use intake_core::{FieldSchema, FormRecord};
use serde::{Deserialize, Serialize};


/// Table state of the saved-responses screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseQuery {
    term: String,
    category: CategoryFilter,
    sort_key: SortKey,
    direction: SortDirection,
    page: usize,
    page_size: usize,
}

impl Default for ResponseQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ResponseQuery {
    /// Newest forms first, page 1, no search, every category
    pub fn new(page_size: usize) -> Self {
        ResponseQuery {
            term: String::new(),
            category: CategoryFilter::All,
            sort_key: SortKey::SubmittedAt,
            direction: SortDirection::Descending,
            page: 1,
            page_size,
        }
    }

    /// Current search term
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Current category filter
    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    /// Current sort column
    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    /// Current sort direction
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Current 1-based page
    pub fn page(&self) -> usize {
        self.page
    }

    /// Rows per page
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Set the search term and go back to page 1
    pub fn set_term(&mut self, term: impl Into<String>) -> &mut Self {
        self.term = term.into();
        self.page = 1;
        self
    }

    /// Set the category filter and go back to page 1
    pub fn set_category(&mut self, category: impl Into<CategoryFilter>) -> &mut Self {
        self.category = category.into();
        self.page = 1;
        self
    }

    /// Set the page size and go back to page 1
    pub fn set_page_size(&mut self, page_size: usize) -> &mut Self {
        self.page_size = page_size;
        self.page = 1;
        self
    }

    /// Jump to a page; out-of-range pages render empty
    pub fn set_page(&mut self, page: usize) -> &mut Self {
        self.page = page;
        self
    }

    /// Sort explicitly
    pub fn set_sort(&mut self, key: SortKey, direction: SortDirection) -> &mut Self {
        self.sort_key = key;
        self.direction = direction;
        self
    }

    /// Column-header click: flip direction on the active column, otherwise
    /// switch to `key` ascending
    pub fn toggle_sort(&mut self, key: SortKey) -> &mut Self {
        if self.sort_key == key {
            self.direction = self.direction.toggled();
        } else {
            self.sort_key = key;
            self.direction = SortDirection::Ascending;
        }
        self
    }

    /// Run the pipeline over `records`
    pub fn run(&self, records: &[FormRecord], schema: &FieldSchema) -> ResponsePage {
        let matched = search(records, schema, &self.term);
        let filtered = filter_by_category(matched, &schema.housing_type, &self.category);
        let sorted = sort_by(filtered, schema, self.sort_key, self.direction);
        let rows = paginate(&sorted, self.page, self.page_size)
            .iter()
            .map(|record| (*record).clone())
            .collect();

        ResponsePage {
            records: rows,
            page: self.page,
            page_size: self.page_size,
            page_count: page_count(sorted.len(), self.page_size),
            total_filtered: sorted.len(),
            total: records.len(),
        }
    }
}

/// What an empty table should say
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmptyState {
    /// Rows to show
    None,
    /// Nothing has been saved yet
    NoForms,
    /// Forms exist but the search or filter excludes all of them
    NoMatches,
}

/// One rendered page of the response table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsePage {
    /// Rows of this page, owned copies
    pub records: Vec<FormRecord>,
    /// 1-based page shown
    pub page: usize,
    /// Rows per page
    pub page_size: usize,
    /// Pages available after filtering
    pub page_count: usize,
    /// Records passing search and filter
    pub total_filtered: usize,
    /// Records in the collection
    pub total: usize,
}

impl ResponsePage {
    /// Whether this page has no rows
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether a later page exists
    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }

    /// Whether an earlier page exists
    pub fn has_previous(&self) -> bool {
        self.page > 1 && self.page_count > 0
    }

    /// Which empty-state message applies
    pub fn empty_state(&self) -> EmptyState {
        if self.total == 0 {
            EmptyState::NoForms
        } else if self.total_filtered == 0 {
            EmptyState::NoMatches
        } else {
            EmptyState::None
        }
    }
}
