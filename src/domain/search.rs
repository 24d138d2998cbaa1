//! Search input and the page-wide search state.

use serde::Serialize;

use crate::domain::deal::Deal;
use crate::domain::types::{City, Platform, SearchQuery, TypeConstraintError};

/// Parameters of one search request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchParams {
    pub city: City,
    pub query: SearchQuery,
    pub platform: Platform,
}

impl SearchParams {
    /// Validates raw city and query text.
    pub fn new(
        city: impl Into<String>,
        query: impl Into<String>,
        platform: Platform,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            city: City::new(city)?,
            query: SearchQuery::new(query)?,
            platform,
        })
    }
}

/// Snapshot of the search lifecycle.
///
/// Every transition consumes the previous snapshot and returns a new one, so
/// `has_searched` can only move from `false` to `true` and `is_loading` is
/// never set together with `error`.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchState {
    pub is_loading: bool,
    pub error: Option<String>,
    pub results: Vec<Deal>,
    pub has_searched: bool,
}

/// What the presentation layer should display for a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchView {
    Idle,
    Loading,
    Failed,
    Empty,
    Results,
}

impl SearchState {
    /// A search was submitted. Previous results stay until it resolves.
    pub fn dispatched(self) -> Self {
        Self {
            is_loading: true,
            error: None,
            results: self.results,
            has_searched: true,
        }
    }

    /// The search resolved with `results` (possibly none).
    pub fn completed(self, results: Vec<Deal>) -> Self {
        Self {
            is_loading: false,
            error: None,
            results,
            has_searched: true,
        }
    }

    /// The search failed; results are dropped.
    pub fn failed(self, message: impl Into<String>) -> Self {
        Self {
            is_loading: false,
            error: Some(message.into()),
            results: Vec::new(),
            has_searched: true,
        }
    }

    pub fn view(&self) -> SearchView {
        if self.is_loading {
            SearchView::Loading
        } else if self.error.is_some() {
            SearchView::Failed
        } else if !self.has_searched {
            SearchView::Idle
        } else if self.results.is_empty() {
            SearchView::Empty
        } else {
            SearchView::Results
        }
    }
}
