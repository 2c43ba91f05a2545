//! Comma-separated tag list helpers.

#[cfg(test)]
#[path = "tags_test.rs"]
mod tags_test;

/// Split a stored tag string into trimmed, non-empty tags.
pub fn split_tags(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Append AI-suggested tags to the tags the author already typed.
pub fn merge_tags(existing: &str, suggested: &[String]) -> String {
    let suggested = suggested
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    let existing = existing.trim();
    match (existing.is_empty(), suggested.is_empty()) {
        (_, true) => existing.to_owned(),
        (true, false) => suggested,
        (false, false) => format!("{existing}, {suggested}"),
    }
}
