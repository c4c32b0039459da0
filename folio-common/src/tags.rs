//! Tag list parsing

/// Split a comma-delimited tag string into trimmed, non-empty tag names
///
/// Order is preserved and duplicates are kept as written.
///
/// # Examples
/// ```
/// use folio_common::tags::parse_tags;
///
/// assert_eq!(parse_tags(Some(" Light, Sound ,,XR")), vec!["Light", "Sound", "XR"]);
/// assert!(parse_tags(None).is_empty());
/// ```
pub fn parse_tags(input: Option<&str>) -> Vec<String> {
    match input {
        Some(s) => s
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    }
}
