//! Pagination types: the result envelope and resolved parameters

use crate::options::{PaginateOptions, DEFAULT_LIMIT};
use crate::types::JsonValue;
use serde::{Deserialize, Serialize};

// ============================================================================
// Result Envelope
// ============================================================================

/// One page of results plus pagination metadata
///
/// Which metadata fields are present depends on how the page was requested:
///
/// - `total` and `pages` are exact-count fields, available in filter mode
///   only; pipeline mode reports `has_next` instead.
/// - `offset` is set when the position came from an offset (and on the
///   default first page); `page` when it came from a page number (ditto).
///
/// Serialized field names are camelCase (`hasNext`), and absent fields are
/// omitted rather than written as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Documents on this page
    pub docs: Vec<JsonValue>,

    /// Exact number of matching documents, when an exact count was taken
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,

    /// Page size the request resolved to
    pub limit: u64,

    /// Skip position, when the request was offset-addressed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,

    /// 1-based page number, when the request was page-addressed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,

    /// Total number of pages, for page-addressed requests with a count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<u64>,

    /// Whether more records exist past this page (pipeline mode)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_next: Option<bool>,
}

// ============================================================================
// Resolved Parameters
// ============================================================================

/// Pagination parameters resolved for a single call
///
/// Collapses the `offset` / `page` / `limit` option fields into the skip
/// position actually sent to the store, and remembers which addressing mode
/// produced it so the envelope can echo the right fields back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    /// Resolved page size
    pub limit: u64,

    /// Documents to skip before the page starts
    pub skip: u64,

    /// Offset to echo in the envelope, if offset-addressed
    pub offset: Option<u64>,

    /// Page number to echo in the envelope, if page-addressed
    pub page: Option<u64>,
}

impl PageParams {
    /// Resolve the addressing fields of an option bag
    ///
    /// A zero `offset` or `page` counts as absent. A nonzero `offset` wins
    /// over `page`; a nonzero `page` maps to `skip = (page - 1) * limit`;
    /// with neither given, the default path addresses the first page both
    /// ways (`offset = 0` and `page = 1`).
    pub fn resolve(options: &PaginateOptions) -> Self {
        let limit = options.limit.unwrap_or(DEFAULT_LIMIT);
        let offset = options.offset.filter(|&offset| offset > 0);
        let page = options.page.filter(|&page| page > 0);

        match (offset, page) {
            (Some(offset), _) => Self {
                limit,
                skip: offset,
                offset: Some(offset),
                page: None,
            },
            (None, Some(page)) => Self {
                limit,
                skip: (page - 1) * limit,
                offset: None,
                page: Some(page),
            },
            (None, None) => Self {
                limit,
                skip: 0,
                offset: Some(0),
                page: Some(1),
            },
        }
    }

    /// Total page count for `total` matching documents
    ///
    /// Present only for page-addressed requests with a nonzero total and a
    /// nonzero limit; everything else yields `None` and the envelope omits
    /// the field.
    pub fn pages_for(&self, total: u64) -> Option<u64> {
        if self.page.is_some() && total > 0 && self.limit > 0 {
            Some(total.div_ceil(self.limit))
        } else {
            None
        }
    }
}
