//! Codec operations over flat parameter mappings
//!
//! Each operation reads a borrowed mapping and builds a fresh output value.

use super::pattern::parse_member_key;
use crate::error::{Error, Result};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use tracing::warn;

// ============================================================================
// List decoding
// ============================================================================

/// Decode a flat member-list encoding into an ordered list of field maps
///
/// Every key of the form `<prefix>.member.<index>.<field>` contributes its
/// value to the record at `<index>`; records are returned in ascending index
/// order. Indices need not be contiguous or start at 1.
///
/// ```
/// use formation_api::params::extract_param_list;
/// use std::collections::HashMap;
///
/// let params = HashMap::from([
///     ("M.member.1.MetricName".to_string(), "buffers".to_string()),
///     ("M.member.2.MetricName".to_string(), "cpu".to_string()),
/// ]);
/// let members = extract_param_list(&params, "M");
/// assert_eq!(members[0]["MetricName"], "buffers");
/// assert_eq!(members[1]["MetricName"], "cpu");
/// ```
///
/// Keys that do not match the grammar, including keys with a non-integer
/// index segment, are skipped. If one index defines the same field twice the
/// last-processed value wins; which write is last depends on the input
/// mapping's iteration order.
pub fn extract_param_list(
    params: &HashMap<String, String>,
    prefix: &str,
) -> Vec<Map<String, Value>> {
    let mut members: BTreeMap<u64, Map<String, Value>> = BTreeMap::new();

    for (name, value) in params {
        if let Some(key) = parse_member_key(name, prefix) {
            members
                .entry(key.index)
                .or_default()
                .insert(key.field.to_string(), Value::String(value.clone()));
        }
    }

    members.into_values().collect()
}

// ============================================================================
// Pair decoding
// ============================================================================

/// Decode a flat parameter-pair encoding into a key/value map
///
/// List items appear as two sibling entries per index:
///
/// ```text
/// Prefix.member.1.Name=somekey
/// Prefix.member.1.Value=somevalue
/// Prefix.member.2.Name=anotherkey
/// Prefix.member.2.Value=othervalue
/// ```
///
/// Every entry whose field equals `key_field` supplies a logical key; the
/// sibling entry at the same index whose field equals `value_field` supplies
/// the logical value.
///
/// A key entry with no sibling value entry is a malformed pair. Policy: the
/// pair is skipped with a warning naming the offending prefix and index, and
/// decoding continues over the remaining entries. A request-decoding
/// boundary should survive one bad element rather than reject the whole
/// request.
pub fn extract_param_pairs(
    params: &HashMap<String, String>,
    prefix: &str,
    key_field: &str,
    value_field: &str,
) -> Map<String, Value> {
    let mut pairs = Map::new();

    for (name, key) in params {
        let Some(member) = parse_member_key(name, prefix) else {
            continue;
        };
        if member.field != key_field {
            continue;
        }

        // Rebuild the sibling key from the raw index segment, not the
        // parsed integer: `01` and `1` are the same index but different keys
        let sibling = format!("{prefix}.member.{}.{value_field}", member.index_str);
        match params.get(&sibling) {
            Some(value) => {
                pairs.insert(key.clone(), Value::String(value.clone()));
            }
            None => {
                let err = Error::missing_pair_value(prefix, member.index, value_field);
                warn!("skipping malformed parameter pair: {err}");
            }
        }
    }

    pairs
}

// ============================================================================
// Key remapping
// ============================================================================

/// Project a mapping through a static rename table
///
/// For every `source → destination` entry in `table`, the output binds
/// `destination` to the input's value at `source`. Input keys absent from
/// the table are dropped.
///
/// # Errors
///
/// Fails with [`Error::MissingRenameSource`] when any table source key is
/// absent from the input; callers rely on the renamed set being complete, so
/// the whole call fails rather than returning a partial map.
pub fn remap_keys(
    table: &HashMap<String, String>,
    input: &Map<String, Value>,
) -> Result<Map<String, Value>> {
    let mut result = Map::new();

    for (source, destination) in table {
        let value = input
            .get(source)
            .ok_or_else(|| Error::missing_rename_source(source))?;
        result.insert(destination.clone(), value.clone());
    }

    Ok(result)
}

// ============================================================================
// Response envelope
// ============================================================================

/// Wrap an engine result payload in the protocol response envelope
///
/// ```
/// use formation_api::params::format_response;
/// use serde_json::json;
///
/// let response = format_response("ListThings", json!([1, 2, 3]));
/// assert_eq!(response, json!({"ListThingsResponse": {"ListThingsResult": [1, 2, 3]}}));
/// ```
pub fn format_response(action: &str, result: Value) -> Value {
    let mut inner = Map::new();
    inner.insert(format!("{action}Result"), result);

    let mut outer = Map::new();
    outer.insert(format!("{action}Response"), Value::Object(inner));

    Value::Object(outer)
}
