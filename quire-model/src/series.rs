/// Direction in which a series is meant to be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ReadingDirection {
    LeftToRight,
    RightToLeft,
    Vertical,
    /// Continuous vertical strip.
    Webtoon,
}

/// Series-level settings that apply to every book of the series.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SeriesMetadata {
    /// BCP 47 language tag, copied as entered.
    pub language: Option<String>,
    pub reading_direction: Option<ReadingDirection>,
}

impl SeriesMetadata {
    pub fn new(
        language: Option<String>,
        reading_direction: Option<ReadingDirection>,
    ) -> Self {
        Self {
            language,
            reading_direction,
        }
    }
}
