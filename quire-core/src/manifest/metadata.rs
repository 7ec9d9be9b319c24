use chrono::{DateTime, FixedOffset, NaiveDate, SecondsFormat};
use quire_model::{ReadingDirection, SeriesMetadata};
use serde::{Serialize, Serializer};

use crate::contributors::ContributorRoleMap;
use crate::manifest::WpLink;

/// Readium `readingProgression` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingProgression {
    Ltr,
    Rtl,
    Ttb,
}

impl ReadingProgression {
    /// Webtoon strips and vertical books both read top to bottom; Readium
    /// has no separate value for continuous scrolling, so they share `ttb`.
    pub const fn from_direction(direction: ReadingDirection) -> Self {
        match direction {
            ReadingDirection::LeftToRight => ReadingProgression::Ltr,
            ReadingDirection::RightToLeft => ReadingProgression::Rtl,
            ReadingDirection::Vertical => ReadingProgression::Ttb,
            ReadingDirection::Webtoon => ReadingProgression::Ttb,
        }
    }
}

/// RFC 3339 with a numeric offset, `+00:00` included, never `Z`.
fn serialize_offset_datetime<S>(
    value: &DateTime<FixedOffset>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::AutoSi, false))
}

/// An entry of `belongsTo.series`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesEntry {
    pub name: String,
    /// Absent when the stored sort number is not finite.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<f32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<WpLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BelongsTo {
    pub series: Vec<SeriesEntry>,
}

/// Publication metadata block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WpMetadata {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conforms_to: Option<String>,
    #[serde(serialize_with = "serialize_offset_datetime")]
    pub modified: DateTime<FixedOffset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(flatten)]
    pub contributors: ContributorRoleMap,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subject: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_progression: Option<ReadingProgression>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub number_of_pages: u32,
    pub belongs_to: BelongsTo,
}

impl WpMetadata {
    /// Folds series-level language and reading direction into the metadata.
    pub fn with_series_metadata(mut self, series: &SeriesMetadata) -> Self {
        self.language = series.language.clone();
        self.reading_progression = series
            .reading_direction
            .map(ReadingProgression::from_direction);
        self
    }

    pub fn with_conformance(mut self, profile: &str) -> Self {
        self.conforms_to = Some(profile.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_direction_mapping() {
        let cases = [
            (Some(ReadingDirection::LeftToRight), Some(ReadingProgression::Ltr)),
            (Some(ReadingDirection::RightToLeft), Some(ReadingProgression::Rtl)),
            (Some(ReadingDirection::Vertical), Some(ReadingProgression::Ttb)),
            (Some(ReadingDirection::Webtoon), Some(ReadingProgression::Ttb)),
            (None, None),
        ];

        for (direction, expected) in cases {
            assert_eq!(
                direction.map(ReadingProgression::from_direction),
                expected,
                "{direction:?}"
            );
        }
    }

    #[test]
    fn progression_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(ReadingProgression::Ttb).unwrap(),
            serde_json::json!("ttb")
        );
    }

    #[test]
    fn modified_uses_numeric_offsets() {
        let stored = NaiveDate::from_ymd_opt(2024, 5, 4)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();

        for (seconds, expected) in [
            (0, "2024-05-04T10:30:00+00:00"),
            (-5 * 3600, "2024-05-04T05:30:00-05:00"),
        ] {
            let offset = FixedOffset::east_opt(seconds).unwrap();
            let modified = DateTime::from_naive_utc_and_offset(stored, offset);
            let value =
                serialize_offset_datetime(&modified, serde_json::value::Serializer)
                    .unwrap();
            assert_eq!(value, serde_json::json!(expected));
        }
    }

    #[test]
    fn missing_position_is_omitted() {
        let entry = SeriesEntry {
            name: "Harbor".into(),
            position: None,
            links: Vec::new(),
        };
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            serde_json::json!({ "name": "Harbor" })
        );
    }
}
