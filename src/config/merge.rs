//! Deep merge of template configuration
//!
//! Used to layer a derived template's config over its base template's
//! config. Semantics:
//!
//! - Both values are mappings: merged key by key, recursively
//! - Anything else: the overlay value replaces the base value wholesale,
//!   including sequences and values of a different type
//! - Keys present on one side only are carried over unchanged
//!
//! Key order is the base keys in their original order followed by the
//! overlay-only keys in theirs.
//!
//! ```text
//! Base:    {settings: {deployment_targets: [agent_engine, cloud_run], tags: [adk]}}
//! Overlay: {settings: {deployment_targets: [cloud_run]}, name: my_agent}
//! Result:  {settings: {deployment_targets: [cloud_run], tags: [adk]}, name: my_agent}
//! ```

use serde_yaml::{Mapping, Value};

/// Merge `overlay` over `base`, returning a new mapping
///
/// Neither input is modified.
pub fn merge(base: &Mapping, overlay: &Mapping) -> Mapping {
    let mut merged = base.clone();
    for (key, overlay_value) in overlay {
        let value = match base.get(key) {
            Some(base_value) => merge_values(base_value, overlay_value),
            None => overlay_value.clone(),
        };
        // Replacing an existing key keeps its position
        merged.insert(key.clone(), value);
    }
    merged
}

/// Merge two values: recursive for mappings, overlay wins otherwise
pub fn merge_values(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            Value::Mapping(merge(base_map, overlay_map))
        }
        (_, overlay) => overlay.clone(),
    }
}
