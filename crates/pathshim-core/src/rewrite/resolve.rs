//! Resolution of a possibly relative path to an absolute one.

use url::Url;

/// Returns `path` unchanged if it already starts with `/`, otherwise the path
/// component of `path` resolved against `base`.
pub fn absolute_path(base: &Url, path: &str) -> Result<String, url::ParseError> {
    if path.starts_with('/') {
        return Ok(path.to_string());
    }
    let resolved = base.join(path)?;
    Ok(resolved.path().to_string())
}
