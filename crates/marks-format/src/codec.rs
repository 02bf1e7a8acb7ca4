use marks_core::error::FormatError;
use marks_core::types::Bookmark;

/// Decode a YAML sequence of `{id, url, tags}` mappings.
///
/// Empty or whitespace-only input is an empty collection, so a freshly created
/// file needs no seed content.
pub fn decode(bytes: &[u8]) -> Result<Vec<Bookmark>, FormatError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    let parsed: Option<Vec<Bookmark>> =
        serde_yaml::from_slice(bytes).map_err(|e| FormatError::Decode(e.to_string()))?;
    Ok(parsed.unwrap_or_default())
}

pub fn encode(bookmarks: &[Bookmark]) -> Result<Vec<u8>, FormatError> {
    let text = serde_yaml::to_string(bookmarks).map_err(|e| FormatError::Encode(e.to_string()))?;
    Ok(text.into_bytes())
}
