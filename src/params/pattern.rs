//! Key grammar for flat list parameters
//!
//! A structured parameter key has the shape
//! `<prefix> "." "member" "." <index> "." <field>`. The prefix is matched as
//! a literal string, never as a pattern, so caller-supplied prefixes cannot
//! inject matching behaviour.

/// A parameter key decomposed by [`parse_member_key`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberKey<'a> {
    /// List index, used only for ordering
    pub index: u64,
    /// Index segment as written in the key; non-canonical spellings like
    /// `01` must round-trip when reconstructing sibling keys
    pub index_str: &'a str,
    /// Field name, the remainder of the key after the index segment
    pub field: &'a str,
}

/// Parse a flat parameter key against the member-list grammar
///
/// Returns `None` for keys that do not structurally match, including keys
/// whose index segment is not a non-negative integer. Malformed indices are
/// a skip condition, never an error.
///
/// The field name is the entire remainder after the index segment and may
/// itself contain dots.
pub fn parse_member_key<'a>(key: &'a str, prefix: &str) -> Option<MemberKey<'a>> {
    let rest = key.strip_prefix(prefix)?;
    let rest = rest.strip_prefix(".member.")?;

    let (index_str, field) = rest.split_once('.')?;
    if field.is_empty() {
        return None;
    }

    let index: u64 = index_str.parse().ok()?;

    Some(MemberKey {
        index,
        index_str,
        field,
    })
}
