//! Aggregation-pipeline splitting
//!
//! Pipeline mode pages an arbitrary caller pipeline by inserting paging
//! stages (`$sort`, `$skip`, `$limit`) right after the pipeline's first
//! `$match` stage, so paging happens as early as the filter allows while
//! later stages still see the paged records. Two variants are built from
//! the same split: the paging pipeline itself, and an over-fetch twin whose
//! limit is one higher, used to decide whether a next page exists.

use crate::types::JsonValue;
use serde_json::json;

/// Stage key that marks the primary filtering stage
pub const MATCH_KEY: &str = "$match";

// ============================================================================
// Stage Classification
// ============================================================================

/// Classification of a single pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageKind {
    /// The stage carries the filtering key (`$match`)
    Match,
    /// Any other stage
    Other,
}

/// Classify a stage by the presence of the filtering key
///
/// Non-object stages (and objects without `$match`) are `Other`.
pub fn stage_kind(stage: &JsonValue) -> StageKind {
    match stage.as_object() {
        Some(object) if object.contains_key(MATCH_KEY) => StageKind::Match,
        _ => StageKind::Other,
    }
}

/// Index at which the paging stages are inserted
///
/// Right after the first `$match` stage, or the very start of the pipeline
/// when no `$match` exists. Later `$match` stages do not move the split.
pub fn split_index(stages: &[JsonValue]) -> usize {
    stages
        .iter()
        .position(|stage| stage_kind(stage) == StageKind::Match)
        .map_or(0, |index| index + 1)
}

// ============================================================================
// Pipeline Assembly
// ============================================================================

/// The paging pipeline and its over-fetch twin
#[derive(Debug, Clone, PartialEq)]
pub struct SplitPipelines {
    /// Pipeline producing the page of records
    pub paging: Vec<JsonValue>,

    /// Same pipeline with `$limit` one higher, for the has-next probe
    pub probe: Vec<JsonValue>,
}

/// Build both pipelines from the caller's stages
///
/// Inserted at the split point, in order: `$sort` (only when a sort spec is
/// given), `$skip`, `$limit`. Every caller stage is preserved; stages after
/// the split run on the paged records.
pub fn split_pipeline(
    stages: &[JsonValue],
    sort: Option<&JsonValue>,
    skip: u64,
    limit: u64,
) -> SplitPipelines {
    let at = split_index(stages);
    SplitPipelines {
        paging: assemble(stages, at, sort, skip, limit),
        probe: assemble(stages, at, sort, skip, limit + 1),
    }
}

fn assemble(
    stages: &[JsonValue],
    at: usize,
    sort: Option<&JsonValue>,
    skip: u64,
    limit: u64,
) -> Vec<JsonValue> {
    let mut pipeline = Vec::with_capacity(stages.len() + 3);
    pipeline.extend_from_slice(&stages[..at]);
    if let Some(sort) = sort {
        pipeline.push(json!({ "$sort": sort }));
    }
    pipeline.push(json!({ "$skip": skip }));
    pipeline.push(json!({ "$limit": limit }));
    pipeline.extend_from_slice(&stages[at..]);
    pipeline
}
