//! Diary entry model

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Title used when an entry is saved with a blank title
pub const UNTITLED_TITLE: &str = "Untitled Entry";

/// Style identifier applied when no font is chosen
pub const DEFAULT_FONT_FAMILY: &str = "font-sans";

/// Style identifier applied when no text color is chosen
pub const DEFAULT_TEXT_COLOR: &str = "text-foreground";

/// One diary record, in the persisted JSON shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub mood: String,
    #[serde(with = "iso_millis")]
    pub date: DateTime<Utc>,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default = "default_text_color")]
    pub text_color: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Fields supplied when creating an entry; id and date are assigned by the store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEntry {
    pub title: String,
    pub content: String,
    pub mood: String,
    pub font_family: Option<String>,
    pub text_color: Option<String>,
    pub images: Option<Vec<String>>,
    pub tags: Vec<String>,
}

impl NewEntry {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        NewEntry {
            title: title.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn with_mood(mut self, mood: impl Into<String>) -> Self {
        self.mood = mood.into();
        self
    }

    /// True when neither title nor content holds anything but whitespace
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.content.trim().is_empty()
    }

    /// Build the full entry, filling every optional style field with its default
    pub fn into_entry(self, id: String, date: DateTime<Utc>) -> DiaryEntry {
        DiaryEntry {
            id,
            title: self.title,
            content: self.content,
            mood: self.mood,
            date,
            font_family: non_empty_or(self.font_family, DEFAULT_FONT_FAMILY),
            text_color: non_empty_or(self.text_color, DEFAULT_TEXT_COLOR),
            images: self.images.unwrap_or_default(),
            tags: self.tags,
        }
    }
}

/// Partial update. `None` leaves the field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub mood: Option<String>,
    pub font_family: Option<String>,
    pub text_color: Option<String>,
    pub images: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
}

impl EntryPatch {
    pub fn title(title: impl Into<String>) -> Self {
        EntryPatch {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Apply the supplied fields. `id` and `date` are never touched.
    pub fn apply_to(self, entry: &mut DiaryEntry) {
        if let Some(title) = self.title {
            entry.title = title;
        }
        if let Some(content) = self.content {
            entry.content = content;
        }
        if let Some(mood) = self.mood {
            entry.mood = mood;
        }
        if let Some(font_family) = self.font_family {
            entry.font_family = font_family;
        }
        if let Some(text_color) = self.text_color {
            entry.text_color = text_color;
        }
        if let Some(images) = self.images {
            entry.images = images;
        }
        if let Some(tags) = self.tags {
            entry.tags = tags;
        }
    }
}

/// Trimmed title, or the placeholder when it is blank
pub fn normalize_title(title: &str) -> String {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        UNTITLED_TITLE.to_string()
    } else {
        trimmed.to_string()
    }
}

fn non_empty_or(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => fallback.to_string(),
    }
}

fn default_font_family() -> String {
    DEFAULT_FONT_FAMILY.to_string()
}

fn default_text_color() -> String {
    DEFAULT_TEXT_COLOR.to_string()
}

/// ISO 8601 timestamps with millisecond precision and a `Z` suffix
/// (`2024-01-01T00:00:00.000Z`).
///
/// Reading accepts any RFC 3339 offset, a date-time without offset and a
/// bare date. The last two are taken as UTC.
pub mod iso_millis {
    use super::*;

    const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        let raw = raw.trim();
        if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
            return Some(date.with_timezone(&Utc));
        }
        if let Some(naive) = NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        {
            return Some(naive.and_utc());
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|day| day.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {}", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_into_entry_applies_defaults() {
        let entry = NewEntry::new("Morning", "text").into_entry("1".to_string(), sample_date());

        assert_eq!(entry.font_family, DEFAULT_FONT_FAMILY);
        assert_eq!(entry.text_color, DEFAULT_TEXT_COLOR);
        assert!(entry.images.is_empty());
        assert!(entry.tags.is_empty());
    }

    #[test]
    fn test_into_entry_keeps_supplied_style() {
        let draft = NewEntry {
            font_family: Some("font-serif".to_string()),
            text_color: Some("text-rose-500".to_string()),
            images: Some(vec!["data:image/png;base64,AA==".to_string()]),
            ..NewEntry::new("t", "c")
        };
        let entry = draft.into_entry("1".to_string(), sample_date());

        assert_eq!(entry.font_family, "font-serif");
        assert_eq!(entry.text_color, "text-rose-500");
        assert_eq!(entry.images.len(), 1);
    }

    #[test]
    fn test_empty_style_string_is_defaulted() {
        let draft = NewEntry {
            font_family: Some(String::new()),
            ..NewEntry::new("t", "c")
        };
        let entry = draft.into_entry("1".to_string(), sample_date());
        assert_eq!(entry.font_family, DEFAULT_FONT_FAMILY);
    }

    #[test]
    fn test_is_blank() {
        assert!(NewEntry::new("  ", "\n").is_blank());
        assert!(!NewEntry::new("", "x").is_blank());
        assert!(!NewEntry::new("x", "").is_blank());
    }

    #[test]
    fn test_patch_only_touches_supplied_fields() {
        let mut entry = NewEntry::new("Old", "body")
            .with_mood("😊")
            .into_entry("id-1".to_string(), sample_date());
        let before = entry.clone();

        EntryPatch::title("New").apply_to(&mut entry);

        assert_eq!(entry.title, "New");
        assert_eq!(entry.id, before.id);
        assert_eq!(entry.date, before.date);
        assert_eq!(entry.content, before.content);
        assert_eq!(entry.mood, before.mood);
    }

    #[test]
    fn test_normalize_title() {
        assert_eq!(normalize_title("   "), UNTITLED_TITLE);
        assert_eq!(normalize_title("  Day one "), "Day one");
    }

    #[test]
    fn test_serializes_camel_case_and_millis() {
        let entry = NewEntry::new("A", "").into_entry("1".to_string(), sample_date());
        let json = serde_json::to_string(&entry).unwrap();

        assert!(json.contains("\"fontFamily\":\"font-sans\""));
        assert!(json.contains("\"textColor\":\"text-foreground\""));
        assert!(json.contains("\"date\":\"2024-01-01T00:00:00.000Z\""));
        assert!(!json.contains("tags"));
    }

    #[test]
    fn test_deserializes_minimal_record() {
        let json = r#"{"id":"1","title":"A","content":"","date":"2024-01-01T00:00:00Z"}"#;
        let entry: DiaryEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.date, sample_date());
        assert_eq!(entry.mood, "");
        assert_eq!(entry.font_family, DEFAULT_FONT_FAMILY);
        assert_eq!(entry.text_color, DEFAULT_TEXT_COLOR);
        assert!(entry.images.is_empty());
    }

    #[test]
    fn test_reads_dates_without_offset() {
        let noon = Utc.with_ymd_and_hms(2024, 2, 1, 12, 30, 0).unwrap();

        assert_eq!(iso_millis::parse("2024-02-01T12:30:00"), Some(noon));
        assert_eq!(iso_millis::parse("2024-02-01 12:30:00.000"), Some(noon));
        assert_eq!(iso_millis::parse("2024-02-01T14:30:00+02:00"), Some(noon));
        assert_eq!(
            iso_millis::parse("2024-02-01"),
            Some(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(iso_millis::parse("2024-13-01"), None);
    }

    #[test]
    fn test_deserializes_record_without_title_or_content() {
        let json = r#"{"id":"1","date":"2024-01-01T00:00:00.000Z"}"#;
        let entry: DiaryEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.title, "");
        assert_eq!(entry.content, "");
    }

    #[test]
    fn test_deserialize_rejects_bad_date() {
        let json = r#"{"id":"1","title":"A","content":"","date":"yesterday"}"#;
        assert!(serde_json::from_str::<DiaryEntry>(json).is_err());
    }
}
