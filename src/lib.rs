//! # docpage
//!
//! A minimal, Rust-native pagination layer for document collections.
//! One call computes a page of documents plus its metadata envelope.
//!
//! ## Features
//!
//! - **Two query modes**: filter predicates or aggregation pipelines
//! - **Offset and page addressing**: a nonzero offset wins, 1-based page
//!   numbers otherwise, first page by default
//! - **Concurrent execution**: the document fetch and the size query run
//!   together and join fail-fast
//! - **Lean ids**: optionally attach a string `id` derived from `_id`
//! - **Process-wide defaults**: install an option bag once, every call
//!   merges over it
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use docpage::{PaginateExt, PaginateOptions};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> docpage::Result<()> {
//!     let posts = MyCollection::connect("posts").await?;
//!
//!     // Second page of ten, newest first
//!     let options = PaginateOptions::new()
//!         .sort(json!({ "created_at": -1 }))
//!         .page(2)
//!         .limit(10);
//!
//!     let page = posts
//!         .paginate(&json!({ "published": true }), &options)
//!         .await?;
//!     println!("{} of {} posts", page.docs.len(), page.total.unwrap_or(0));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                   paginate(query, options)                   │
//! │       merge defaults → resolve offset / page / limit         │
//! └──────────────────────────────────────────────────────────────┘
//! ┌──────────────────┬───────────────────┬───────────────────────┐
//! │   Filter mode    │   Pipeline mode   │       Envelope        │
//! ├──────────────────┼───────────────────┼───────────────────────┤
//! │ find(skip,limit) │ split at $match   │ docs, total?, limit   │
//! │ count(filter)    │ probe limit + 1   │ offset?, page?        │
//! │ fail-fast join   │ fail-fast join    │ pages?, hasNext?      │
//! └──────────────────┴───────────────────┴───────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Add docs before 1.0 release

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for docpage
pub mod error;

/// Common types and type aliases
pub mod types;

/// Pagination options and process-wide defaults
pub mod options;

/// Collection trait and find-query assembly
pub mod collection;

/// Pagination computation
pub mod pagination;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export the whole calling surface
pub use collection::{Collection, FindQuery, PaginateExt};
pub use options::{default_options, set_default_options, PaginateOptions, DEFAULT_LIMIT};
pub use pagination::{paginate, Page, PageParams};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
