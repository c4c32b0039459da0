//! Tag vocabulary offered by the filter dropdown
//!
//! Only tags named in the priority list are ever offered, in list order, and
//! only while at least one eligible record carries them.

use std::collections::HashSet;

use crate::records::ProjectRecord;

/// Built-in priority order used when configuration does not override it
pub const DEFAULT_TAG_ORDER: [&str; 8] = [
    "Screens",
    "Materiality",
    "Light",
    "Optics",
    "Sound",
    "Gestures",
    "Multiplayer",
    "XR",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagVocabulary {
    order: Vec<String>,
}

impl Default for TagVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_TAG_ORDER.iter().map(|tag| tag.to_string()))
    }
}

impl TagVocabulary {
    /// Build from an ordered list; blank and repeated names are dropped
    pub fn new<I>(order: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut seen = HashSet::new();
        let order = order
            .into_iter()
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty() && seen.insert(tag.clone()))
            .collect();
        Self { order }
    }

    /// Full priority list
    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// Tags to offer for the given eligible records, in priority order
    pub fn available<'a, I>(&self, eligible: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a ProjectRecord>,
    {
        let present: HashSet<String> = eligible
            .into_iter()
            .flat_map(ProjectRecord::tag_list)
            .collect();

        self.order
            .iter()
            .filter(|tag| present.contains(*tag))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(tags: &[&str]) -> Vec<ProjectRecord> {
        tags.iter()
            .map(|t| ProjectRecord::from_json(&json!({"Project": "P", "Tags": t})).unwrap())
            .collect()
    }

    #[test]
    fn test_available_follows_priority_order() {
        let recs = records(&["XR, Light", "Screens"]);
        let vocab = TagVocabulary::default();
        assert_eq!(vocab.available(&recs), vec!["Screens", "Light", "XR"]);
    }

    #[test]
    fn test_unknown_tags_never_offered() {
        let recs = records(&["Robotics, Light", "Food"]);
        let vocab = TagVocabulary::default();
        assert_eq!(vocab.available(&recs), vec!["Light"]);
    }

    #[test]
    fn test_custom_order() {
        let vocab = TagVocabulary::new(vec![
            "Sound".to_string(),
            " Light ".to_string(),
            "Sound".to_string(),
            "".to_string(),
        ]);
        assert_eq!(vocab.order(), ["Sound", "Light"]);

        let recs = records(&["Light,Sound"]);
        assert_eq!(vocab.available(&recs), vec!["Sound", "Light"]);
    }

    #[test]
    fn test_no_records_no_options() {
        let vocab = TagVocabulary::default();
        assert!(vocab.available(&Vec::new()).is_empty());
    }
}
