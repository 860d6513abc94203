//! Marker-segment rule for fetch and legacy requests.

use crate::prefix::Prefix;

/// Literal path prefix that marks a target for rewriting.
pub const MARKER: &str = "/api/";

/// Returns `prefix + target` (plain concatenation, no slash handling) when
/// `target` starts with [`MARKER`].
pub fn concat_marked(prefix: &Prefix, target: &str) -> Option<String> {
    if !target.starts_with(MARKER) {
        return None;
    }
    let mut out = String::with_capacity(prefix.as_str().len() + target.len());
    out.push_str(prefix.as_str());
    out.push_str(target);
    Some(out)
}
