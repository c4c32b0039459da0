//! Project records
//!
//! A record is one entry of a year group in the data document. Fields are
//! read leniently: a malformed field degrades to "absent" instead of failing
//! the whole document.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::dates::parse_date;
use crate::tags::parse_tags;

/// One project as it appears in the gallery
///
/// Serialized with the document's own field names so API consumers see the
/// same shape they authored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRecord {
    #[serde(rename = "Project", skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    #[serde(rename = "Video", skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,

    #[serde(rename = "Image", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(rename = "Date", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    #[serde(rename = "Team", skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,

    #[serde(rename = "Materials", skip_serializing_if = "Option::is_none")]
    pub materials: Option<String>,

    #[serde(rename = "Brief", skip_serializing_if = "Option::is_none")]
    pub brief: Option<String>,

    /// Absent in the document means active
    #[serde(rename = "Active")]
    pub active: bool,

    /// Key of the year group the record was flattened from
    #[serde(rename = "Year", skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

/// Media a card shows, in priority order video > image > placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Media<'a> {
    Video(&'a str),
    Image(&'a str),
    Placeholder,
}

impl Default for ProjectRecord {
    fn default() -> Self {
        Self {
            project: None,
            video: None,
            image: None,
            date: None,
            tags: None,
            team: None,
            materials: None,
            brief: None,
            active: true,
            year: None,
        }
    }
}

impl ProjectRecord {
    /// Build a record from one JSON object of the data document
    ///
    /// Returns `None` when the value is not an object.
    pub fn from_json(value: &Value) -> Option<Self> {
        let object = value.as_object()?;

        Some(Self {
            // Lowercase key is accepted when the canonical one is missing or empty
            project: text_field(object, "Project").or_else(|| text_field(object, "project")),
            video: text_field(object, "Video"),
            image: text_field(object, "Image"),
            date: text_field(object, "Date"),
            tags: text_field(object, "Tags"),
            team: text_field(object, "Team"),
            materials: text_field(object, "Materials"),
            brief: text_field(object, "Brief"),
            active: active_flag(object.get("Active")),
            year: text_field(object, "Year"),
        })
    }

    /// Project name, trimmed; `None` when missing or blank
    pub fn name(&self) -> Option<&str> {
        non_blank(self.project.as_deref())
    }

    /// Whether the record may be shown at all
    pub fn is_eligible(&self) -> bool {
        self.active && self.name().is_some()
    }

    /// Parsed date, `None` for absent or unrecognized formats
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(self.date.as_deref())
    }

    /// Parsed tag list
    pub fn tag_list(&self) -> Vec<String> {
        parse_tags(self.tags.as_deref())
    }

    /// True when at least one of `selected` appears in this record's tags
    pub fn matches_any(&self, selected: &[String]) -> bool {
        let tags = self.tag_list();
        selected.iter().any(|filter| tags.contains(filter))
    }

    /// Media to display on the card
    pub fn media(&self) -> Media<'_> {
        if let Some(video) = non_blank(self.video.as_deref()) {
            Media::Video(video)
        } else if let Some(image) = non_blank(self.image.as_deref()) {
            Media::Image(image)
        } else {
            Media::Placeholder
        }
    }

    /// True when hovering the card should drive video playback
    pub fn has_video(&self) -> bool {
        matches!(self.media(), Media::Video(_))
    }

    /// Year shown in the detail region
    ///
    /// Taken from the parsed date when it is valid, otherwise the year group
    /// the record came from.
    pub fn display_year(&self) -> Option<String> {
        match self.parsed_date() {
            Some(date) => Some(date.year().to_string()),
            None => non_blank(self.year.as_deref()).map(str::to_string),
        }
    }

    pub fn team_credit(&self) -> Option<&str> {
        non_blank(self.team.as_deref())
    }

    pub fn brief_text(&self) -> Option<&str> {
        non_blank(self.brief.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Read a string-ish field; numbers are kept in their textual form
fn text_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Only a literal `false` or `null` retires a record; any other value,
/// including strings like `"false"` and the number 0, leaves it shown
fn active_flag(value: Option<&Value>) -> bool {
    !matches!(value, Some(Value::Null) | Some(Value::Bool(false)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> ProjectRecord {
        ProjectRecord::from_json(&value).unwrap()
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(ProjectRecord::from_json(&json!("A")).is_none());
        assert!(ProjectRecord::from_json(&json!([1, 2])).is_none());
    }

    #[test]
    fn test_active_absent_means_eligible() {
        assert!(record(json!({"Project": "A"})).is_eligible());
    }

    #[test]
    fn test_active_false_never_eligible() {
        assert!(!record(json!({"Project": "A", "Active": false})).is_eligible());
        assert!(!record(json!({"Project": "A", "Active": null})).is_eligible());
    }

    #[test]
    fn test_active_truthy_values() {
        assert!(record(json!({"Project": "A", "Active": true})).is_eligible());
        assert!(record(json!({"Project": "A", "Active": "yes"})).is_eligible());
        assert!(record(json!({"Project": "A", "Active": 1})).is_eligible());
    }

    #[test]
    fn test_active_falsy_lookalikes_stay_eligible() {
        assert!(record(json!({"Project": "A", "Active": "false"})).is_eligible());
        assert!(record(json!({"Project": "A", "Active": "FALSE"})).is_eligible());
        assert!(record(json!({"Project": "A", "Active": 0})).is_eligible());
        assert!(record(json!({"Project": "A", "Active": ""})).is_eligible());
    }

    #[test]
    fn test_blank_project_not_eligible() {
        assert!(!record(json!({"Project": "   "})).is_eligible());
        assert!(!record(json!({"Video": "a.mp4"})).is_eligible());
    }

    #[test]
    fn test_lowercase_project_alias() {
        let r = record(json!({"project": "Lower"}));
        assert_eq!(r.name(), Some("Lower"));
        let r = record(json!({"Project": "Upper", "project": "Lower"}));
        assert_eq!(r.name(), Some("Upper"));
    }

    #[test]
    fn test_malformed_fields_degrade() {
        let r = record(json!({"Project": 42, "Tags": ["Light"], "Date": {"y": 2024}}));
        assert_eq!(r.name(), Some("42"));
        assert!(r.tag_list().is_empty());
        assert_eq!(r.parsed_date(), None);
    }

    #[test]
    fn test_media_priority() {
        let r = record(json!({"Project": "A", "Video": "v.mp4", "Image": "i.jpg"}));
        assert_eq!(r.media(), Media::Video("v.mp4"));

        let r = record(json!({"Project": "A", "Video": "  ", "Image": "i.jpg"}));
        assert_eq!(r.media(), Media::Image("i.jpg"));
        assert!(!r.has_video());

        let r = record(json!({"Project": "A"}));
        assert_eq!(r.media(), Media::Placeholder);
    }

    #[test]
    fn test_display_year_prefers_parsed_date() {
        let mut r = record(json!({"Project": "A", "Date": "01/03/2023"}));
        r.year = Some("2024".to_string());
        assert_eq!(r.display_year().as_deref(), Some("2023"));

        let mut r = record(json!({"Project": "A", "Date": "sometime"}));
        r.year = Some("2024".to_string());
        assert_eq!(r.display_year().as_deref(), Some("2024"));
    }

    #[test]
    fn test_matches_any_is_or() {
        let r = record(json!({"Project": "A", "Tags": "Light,Sound"}));
        assert!(r.matches_any(&["Sound".to_string()]));
        assert!(r.matches_any(&["Light".to_string(), "XR".to_string()]));
        assert!(!r.matches_any(&["XR".to_string()]));
        assert!(!r.matches_any(&[]));
    }
}
