//! Flat-parameter codec
//!
//! Query-string style cloud APIs encode lists and key/value pairs as flat,
//! indexed scalar parameters:
//!
//! ```text
//! MetricData.member.1.MetricName=buffers
//! MetricData.member.1.Unit=Bytes
//! MetricData.member.2.MetricName=cpu
//! MetricData.member.2.Unit=Percent
//! ```
//!
//! # Overview
//!
//! The params module provides:
//! - `parse_member_key` - the shared key grammar used by both decoders
//! - `extract_param_list` - flat parameters → ordered list of field maps
//! - `extract_param_pairs` - flat parameters → key/value map
//! - `remap_keys` - project a map through a static rename table
//! - `format_response` - wrap a result payload in the response envelope
//!
//! All operations are pure, single-pass and construct fresh output values;
//! the input mapping is never retained or mutated.

mod codec;
mod pattern;

pub use codec::{extract_param_list, extract_param_pairs, format_response, remap_keys};
pub use pattern::{parse_member_key, MemberKey};

#[cfg(test)]
mod tests;
