use chrono::{NaiveDate, NaiveDateTime};

use crate::ids::{BookId, SeriesId};

/// A single credited person and the raw role string recorded for them.
///
/// Roles are whatever the metadata source wrote (`"writer"`, `"penciller"`,
/// an empty string...). Interpretation happens in the synthesizer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Author {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub role: String,
}

impl Author {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
        }
    }
}

/// Aggregated book-level metadata.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BookMetadata {
    pub title: String,
    pub summary: String,
    pub isbn: String,
    pub release_date: Option<NaiveDate>,
    pub tags: Vec<String>,
    pub authors: Vec<Author>,
    /// Position of the book inside its series.
    pub number_sort: f32,
}

impl Default for BookMetadata {
    fn default() -> Self {
        Self {
            title: String::new(),
            summary: String::new(),
            isbn: String::new(),
            release_date: None,
            tags: Vec::new(),
            authors: Vec::new(),
            number_sort: 0.0,
        }
    }
}

impl BookMetadata {
    /// The ISBN when one was recorded; blank values count as missing.
    pub fn isbn(&self) -> Option<&str> {
        (!self.isbn.trim().is_empty()).then_some(self.isbn.as_str())
    }
}

/// Profile-neutral summary of the analyzed book file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaSummary {
    /// Raw media type reported by analysis, e.g. `application/zip`.
    pub media_type: String,
    pub pages_count: u32,
}

/// Snapshot of a book as returned by the library lookups.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BookSummary {
    pub id: BookId,
    pub series_id: SeriesId,
    pub series_title: String,
    /// Last modification time as stored, in UTC without zone information.
    pub last_modified: NaiveDateTime,
    pub metadata: BookMetadata,
    pub media: MediaSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_isbn_is_missing() {
        let mut metadata = BookMetadata::default();
        assert_eq!(metadata.isbn(), None);

        metadata.isbn = "   ".into();
        assert_eq!(metadata.isbn(), None);

        metadata.isbn = "9781234567890".into();
        assert_eq!(metadata.isbn(), Some("9781234567890"));
    }
}
