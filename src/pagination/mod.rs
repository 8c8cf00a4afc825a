//! Pagination module
//!
//! The core page computation: parameter resolution, concurrent execution,
//! envelope assembly.
//!
//! # Overview
//!
//! A page is computed in one round over the backing collection:
//!
//! - Filter mode (the default) runs the find query and an exact count
//!   concurrently and reports `total`, plus `pages` for page-addressed
//!   requests.
//! - Pipeline mode splits the caller's aggregation pipeline, runs the paged
//!   pipeline and a `limit + 1` probe concurrently, and reports `has_next`
//!   instead of a count.
//!
//! The two queries of a call are joined fail-fast: the first error aborts
//! the call and is returned unchanged.

mod pipeline;
mod types;

pub use pipeline::{
    split_index, split_pipeline, stage_kind, SplitPipelines, StageKind, MATCH_KEY,
};
pub use types::{Page, PageParams};

use crate::collection::{Collection, FindQuery};
use crate::error::Result;
use crate::options::{default_options, PaginateOptions};
use crate::types::JsonValue;
use tracing::{debug, warn};

/// Compute one page of results for `query` under `options`
///
/// `options` is merged over the process-wide defaults first (see
/// [`set_default_options`](crate::options::set_default_options)), then
/// resolved: a nonzero `offset` wins over `page`, an unset `limit` falls
/// back to 10, and a `limit` of zero disables the document fetch while the
/// size query still runs.
///
/// In filter mode `query` is a filter predicate handed to
/// [`Collection::find`] and [`Collection::count`]. With `aggregate` set,
/// `query` is an aggregation pipeline (a JSON array of stages) and both the
/// paged pipeline and its probe go through [`Collection::aggregate`]; no
/// count is taken in that mode.
///
/// When `lean` is set (and `lean_with_id` is not disabled), every returned
/// document gains a string `id` derived from its `_id`.
pub async fn paginate<C>(
    collection: &C,
    query: &JsonValue,
    options: &PaginateOptions,
) -> Result<Page>
where
    C: Collection + ?Sized,
{
    let options = options.merged_over(&default_options());
    let params = PageParams::resolve(&options);
    let aggregate = options.aggregate.unwrap_or(false);

    debug!(
        "Paginating: mode={}, skip={}, limit={}",
        if aggregate { "pipeline" } else { "filter" },
        params.skip,
        params.limit
    );

    let (mut docs, size) = if aggregate {
        fetch_with_probe(collection, query, &options, params).await?
    } else {
        fetch_with_count(collection, query, &options, params).await?
    };

    if options.lean.unwrap_or(false) && options.lean_with_id.unwrap_or(true) {
        attach_lean_ids(&mut docs);
    }

    let (total, has_next) = match size {
        SizeInfo::Total(total) => (Some(total), None),
        SizeInfo::HasNext(has_next) => (None, Some(has_next)),
    };

    Ok(Page {
        docs,
        total,
        limit: params.limit,
        offset: params.offset,
        page: params.page,
        pages: total.and_then(|total| params.pages_for(total)),
        has_next,
    })
}

/// How the size of the full result set was determined
enum SizeInfo {
    /// Exact count of matching documents (filter mode)
    Total(u64),
    /// Whether at least one record exists past the page (pipeline mode)
    HasNext(bool),
}

/// Filter mode: find query and exact count, concurrently
async fn fetch_with_count<C>(
    collection: &C,
    filter: &JsonValue,
    options: &PaginateOptions,
    params: PageParams,
) -> Result<(Vec<JsonValue>, SizeInfo)>
where
    C: Collection + ?Sized,
{
    let fetch = async {
        if params.limit == 0 {
            return Ok(Vec::new());
        }
        let query = FindQuery {
            filter: filter.clone(),
            select: options.select.clone(),
            sort: options.sort.clone(),
            skip: params.skip,
            limit: params.limit,
            lean: options.lean.unwrap_or(false),
            populate: options.populate.clone().unwrap_or_default(),
        };
        collection.find(&query).await
    };

    let (docs, total) = futures::try_join!(fetch, collection.count(filter))?;
    debug!("Filter fetch complete: {} docs, total={}", docs.len(), total);
    Ok((docs, SizeInfo::Total(total)))
}

/// Pipeline mode: paged pipeline and has-next probe, concurrently
async fn fetch_with_probe<C>(
    collection: &C,
    query: &JsonValue,
    options: &PaginateOptions,
    params: PageParams,
) -> Result<(Vec<JsonValue>, SizeInfo)>
where
    C: Collection + ?Sized,
{
    let stages: &[JsonValue] = match query.as_array() {
        Some(stages) => stages,
        None => {
            warn!("Pipeline query is not an array; running paging stages only");
            &[]
        }
    };
    let pipelines = split_pipeline(stages, options.sort.as_ref(), params.skip, params.limit);

    let fetch = async {
        if params.limit == 0 {
            return Ok(Vec::new());
        }
        collection.aggregate(&pipelines.paging).await
    };

    let (docs, probe) = futures::try_join!(fetch, collection.aggregate(&pipelines.probe))?;
    let has_next = probe.len() as u64 > params.limit;
    debug!(
        "Pipeline fetch complete: {} docs, has_next={}",
        docs.len(),
        has_next
    );
    Ok((docs, SizeInfo::HasNext(has_next)))
}

/// Attach a string `id` to every document that carries an `_id`
///
/// String ids are copied verbatim; other values are rendered as compact
/// JSON text. Documents without an `_id` are left untouched.
fn attach_lean_ids(docs: &mut [JsonValue]) {
    for doc in docs.iter_mut() {
        let Some(object) = doc.as_object_mut() else {
            continue;
        };
        let Some(id) = object.get("_id") else {
            continue;
        };
        let id = match id {
            JsonValue::String(id) => id.clone(),
            other => other.to_string(),
        };
        object.insert("id".to_string(), JsonValue::String(id));
    }
}
