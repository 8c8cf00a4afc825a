//! Collection trait and find-query assembly
//!
//! Defines the [`Collection`] trait that backing stores implement, the
//! [`FindQuery`] bundle the paginator hands to them, and the
//! [`PaginateExt`] extension that puts `.paginate()` on every collection.
//!
//! docpage never talks to a database directly. It assembles queries and
//! delegates execution through this trait; any failure an implementation
//! returns is propagated to the caller unchanged.

use crate::error::Result;
use crate::options::PaginateOptions;
use crate::pagination::{paginate, Page};
use crate::types::JsonValue;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

// ============================================================================
// Find Query
// ============================================================================

/// A fully-assembled find operation
///
/// The paginator builds one of these per call and hands it to
/// [`Collection::find`] in a single invocation. Filter, projection and sort
/// specs are opaque to docpage; implementations interpret them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FindQuery {
    /// Filter predicate selecting the matching documents
    pub filter: JsonValue,

    /// Projection spec, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select: Option<JsonValue>,

    /// Sort spec, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<JsonValue>,

    /// Number of matching documents to skip
    pub skip: u64,

    /// Maximum number of documents to return
    pub limit: u64,

    /// Whether plain data documents were requested
    pub lean: bool,

    /// Reference-expansion specs, in application order
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub populate: Vec<JsonValue>,
}

// ============================================================================
// Collection Trait
// ============================================================================

/// Capabilities the paginator requires from a backing store
#[async_trait]
pub trait Collection: Send + Sync {
    /// Counts the documents matching `filter`
    async fn count(&self, filter: &JsonValue) -> Result<u64>;

    /// Executes an assembled find query and returns the documents
    async fn find(&self, query: &FindQuery) -> Result<Vec<JsonValue>>;

    /// Runs an aggregation pipeline and returns its output records
    async fn aggregate(&self, pipeline: &[JsonValue]) -> Result<Vec<JsonValue>>;
}

// ============================================================================
// Paginate Extension
// ============================================================================

/// Adds `.paginate()` to every [`Collection`]
///
/// Blanket-implemented, so implementing [`Collection`] is enough:
///
/// ```rust,ignore
/// use docpage::{PaginateExt, PaginateOptions};
///
/// let page = store
///     .paginate(&json!({ "active": true }), &PaginateOptions::new().page(2))
///     .await?;
/// ```
#[async_trait]
pub trait PaginateExt: Collection {
    /// Computes one page of results for `query` under `options`
    ///
    /// Equivalent to calling [`paginate`] with this collection.
    async fn paginate(&self, query: &JsonValue, options: &PaginateOptions) -> Result<Page> {
        paginate(self, query, options).await
    }
}

impl<C: Collection + ?Sized> PaginateExt for C {}
