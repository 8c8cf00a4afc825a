//! Common types used throughout docpage
//!
//! This module contains shared type aliases used across multiple modules.
//! Documents, filters, projections and sort specs are all carried as opaque
//! JSON values; docpage never inspects them beyond what pagination needs.

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;
