//! Pagination options and process-wide defaults
//!
//! [`PaginateOptions`] is the caller-facing option bag: every field is
//! optional, and hard defaults are applied only when a page is computed.
//! A process-wide default bag can be installed with [`set_default_options`];
//! it fills in whatever fields a call site leaves unset.

use crate::types::JsonValue;
use serde::{Deserialize, Serialize};
use std::sync::{LazyLock, PoisonError, RwLock};

/// Number of documents per page when no limit is given
pub const DEFAULT_LIMIT: u64 = 10;

// ============================================================================
// Options
// ============================================================================

/// Options controlling a single pagination call
///
/// All fields are optional. Unset fields fall back to the process-wide
/// defaults, then to the hard defaults (`limit = 10`, `lean = false`,
/// `lean_with_id = true`, `aggregate = false`).
///
/// `offset` and `page` are mutually exclusive in effect: a nonzero `offset`
/// wins, otherwise a nonzero `page` is used, otherwise the first page is
/// returned. A zero value counts as unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaginateOptions {
    /// Projection spec forwarded opaquely to the find query
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select: Option<JsonValue>,

    /// Sort spec forwarded opaquely to the query
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<JsonValue>,

    /// Reference-expansion specs, applied in order by the collection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub populate: Option<Vec<JsonValue>>,

    /// Ask the collection for plain data documents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lean: Option<bool>,

    /// When lean, attach a string `id` derived from each document's `_id`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lean_with_id: Option<bool>,

    /// Number of documents to skip before the page starts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,

    /// 1-based page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,

    /// Maximum number of documents on the page; zero disables the fetch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,

    /// Treat the query as an aggregation pipeline instead of a filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregate: Option<bool>,
}

impl PaginateOptions {
    /// Create an empty option bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the projection spec
    pub fn select(mut self, spec: impl Into<JsonValue>) -> Self {
        self.select = Some(spec.into());
        self
    }

    /// Set the sort spec
    pub fn sort(mut self, spec: impl Into<JsonValue>) -> Self {
        self.sort = Some(spec.into());
        self
    }

    /// Add a reference-expansion spec
    pub fn populate(mut self, spec: impl Into<JsonValue>) -> Self {
        self.populate.get_or_insert_with(Vec::new).push(spec.into());
        self
    }

    /// Request plain data documents
    pub fn lean(mut self, lean: bool) -> Self {
        self.lean = Some(lean);
        self
    }

    /// Control the `id` attachment for lean documents
    pub fn lean_with_id(mut self, lean_with_id: bool) -> Self {
        self.lean_with_id = Some(lean_with_id);
        self
    }

    /// Set the skip position
    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Set the 1-based page number
    pub fn page(mut self, page: u64) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Switch between filter and pipeline interpretation of the query
    pub fn aggregate(mut self, aggregate: bool) -> Self {
        self.aggregate = Some(aggregate);
        self
    }

    /// Merge this bag over `defaults`, field by field
    ///
    /// Fields set on `self` win; unset fields take the value from
    /// `defaults`. Neither bag is mutated.
    pub fn merged_over(&self, defaults: &PaginateOptions) -> PaginateOptions {
        PaginateOptions {
            select: self.select.clone().or_else(|| defaults.select.clone()),
            sort: self.sort.clone().or_else(|| defaults.sort.clone()),
            populate: self.populate.clone().or_else(|| defaults.populate.clone()),
            lean: self.lean.or(defaults.lean),
            lean_with_id: self.lean_with_id.or(defaults.lean_with_id),
            offset: self.offset.or(defaults.offset),
            page: self.page.or(defaults.page),
            limit: self.limit.or(defaults.limit),
            aggregate: self.aggregate.or(defaults.aggregate),
        }
    }
}

// ============================================================================
// Process-Wide Defaults
// ============================================================================

static DEFAULT_OPTIONS: LazyLock<RwLock<PaginateOptions>> =
    LazyLock::new(|| RwLock::new(PaginateOptions::default()));

/// Install process-wide default options
///
/// Every subsequent pagination call merges its options over this bag.
/// Passing `PaginateOptions::default()` restores the hard defaults.
pub fn set_default_options(options: PaginateOptions) {
    let mut guard = DEFAULT_OPTIONS
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = options;
}

/// Snapshot the current process-wide default options
pub fn default_options() -> PaginateOptions {
    DEFAULT_OPTIONS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}
