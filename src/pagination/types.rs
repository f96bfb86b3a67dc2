//! Pagination types
//!
//! Defines the request window, the offset policy and the cursor state.

use crate::catalog::Page;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Number of books requested per page unless configured otherwise
pub const DEFAULT_LIMIT: u32 = 10;

/// What to do with an offset that falls below zero
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OffsetPolicy {
    /// Clamp at zero before the request is issued
    #[default]
    Clamp,
    /// Send the offset unchanged and let the server validate it
    PassThrough,
}

impl OffsetPolicy {
    /// Apply the policy to a requested offset
    pub fn apply(self, offset: i64) -> i64 {
        match self {
            Self::Clamp => offset.max(0),
            Self::PassThrough => offset,
        }
    }
}

/// Navigation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Forward by one page
    Next,
    /// Back by one page
    Previous,
}

// ============================================================================
// Page Request
// ============================================================================

/// Parameters of a single page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Start index of the window
    pub offset: i64,
    /// Window size
    pub limit: u32,
    /// Ask the server to embed author and category records
    pub expand: bool,
}

impl PageRequest {
    /// Create an expanded request
    pub fn new(offset: i64, limit: u32) -> Self {
        Self {
            offset,
            limit,
            expand: true,
        }
    }

    /// Set the expand flag
    #[must_use]
    pub fn expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    /// Query parameters for this request.
    ///
    /// `expand` is omitted rather than sent as `false`: the server treats
    /// any value it receives as a request to expand.
    pub fn query_params(&self) -> HashMap<String, String> {
        let mut params = HashMap::new();
        params.insert("limit".to_string(), self.limit.to_string());
        params.insert("offset".to_string(), self.offset.to_string());
        if self.expand {
            params.insert("expand".to_string(), "true".to_string());
        }
        params
    }
}

// ============================================================================
// Pagination State
// ============================================================================

/// Tracks the displayed window and request statistics
#[derive(Debug, Clone)]
pub struct PaginationState {
    /// Offset of the page currently displayed
    pub offset: i64,
    /// Page size
    pub limit: u32,
    /// Negative offset handling
    pub policy: OffsetPolicy,
    /// Server reported a following page for the displayed window
    pub has_next: bool,
    /// Server reported a preceding page for the displayed window
    pub has_previous: bool,
    /// Total records, when the server reports it
    pub total: Option<u64>,
    /// Pages rendered so far
    pub pages_loaded: u64,
    /// Requests that failed
    pub failed_requests: u64,
    /// Responses discarded because a newer request was issued
    pub stale_responses: u64,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT, OffsetPolicy::default())
    }
}

impl PaginationState {
    /// Create state positioned at offset 0
    pub fn new(limit: u32, policy: OffsetPolicy) -> Self {
        Self {
            offset: 0,
            limit,
            policy,
            has_next: false,
            has_previous: false,
            total: None,
            pages_loaded: 0,
            failed_requests: 0,
            stale_responses: 0,
        }
    }

    /// Offset one page away from the displayed one, with the policy applied
    pub fn target_offset(&self, direction: Direction) -> i64 {
        let step = i64::from(self.limit);
        let target = match direction {
            Direction::Next => self.offset.saturating_add(step),
            Direction::Previous => self.offset.saturating_sub(step),
        };
        self.policy.apply(target)
    }

    /// Build the request for an explicit offset
    pub fn request_for(&self, offset: i64, expand: bool) -> PageRequest {
        PageRequest::new(self.policy.apply(offset), self.limit).expand(expand)
    }

    /// Record a rendered page; the cursor moves to the rendered window
    pub fn record_page<T>(&mut self, offset: i64, page: &Page<T>) {
        self.offset = offset;
        self.has_next = page.has_next();
        self.has_previous = page.has_previous();
        if page.count.is_some() {
            self.total = page.count;
        }
        self.pages_loaded += 1;
    }

    /// Record a failed request; the cursor stays where it was
    pub fn record_failure(&mut self) {
        self.failed_requests += 1;
    }

    /// Record a discarded response
    pub fn record_stale(&mut self) {
        self.stale_responses += 1;
    }

    /// One-based number of the displayed page
    pub fn page_number(&self) -> i64 {
        if self.limit == 0 {
            return 1;
        }
        self.offset.div_euclid(i64::from(self.limit)) + 1
    }
}
