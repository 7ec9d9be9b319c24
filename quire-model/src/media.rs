use std::fmt::{self, Display, Formatter};
use std::num::NonZeroU32;

use crate::error::ModelError;
use crate::ids::BookId;

/// Reading profile a book's content was analyzed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MediaProfile {
    /// Analysis did not settle on a reading profile.
    #[default]
    Generic,
    /// Image sequence (comic archives, fixed-layout books).
    Divina,
    /// PDF document; page images are rendered on demand.
    Pdf,
}

impl Display for MediaProfile {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MediaProfile::Generic => write!(f, "generic"),
            MediaProfile::Divina => write!(f, "divina"),
            MediaProfile::Pdf => write!(f, "pdf"),
        }
    }
}


/// Non-zero pixel dimensions of a page image.
///
/// Width and height travel together: a page either knows both or neither,
/// which is why pages hold an `Option<Dimension>` rather than two options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimension {
    pub width: NonZeroU32,
    pub height: NonZeroU32,
}

impl Dimension {
    pub const fn new(width: NonZeroU32, height: NonZeroU32) -> Self {
        Self { width, height }
    }

    pub const fn width_u32(self) -> u32 {
        self.width.get()
    }

    pub const fn height_u32(self) -> u32 {
        self.height.get()
    }
}

impl TryFrom<(u32, u32)> for Dimension {
    type Error = ModelError;

    fn try_from(value: (u32, u32)) -> Result<Self, Self::Error> {
        let (width, height) = value;
        match (NonZeroU32::new(width), NonZeroU32::new(height)) {
            (Some(width), Some(height)) => Ok(Self { width, height }),
            _ => Err(ModelError::ZeroDimension { width, height }),
        }
    }
}

/// One page of a book. Its 0-based index is its position in [`Media::pages`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Page {
    #[cfg_attr(feature = "serde", serde(default))]
    pub file_name: String,
    /// Content type of the page payload, e.g. `image/webp`.
    pub media_type: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub dimension: Option<Dimension>,
}

impl Page {
    pub fn new(
        file_name: impl Into<String>,
        media_type: impl Into<String>,
        dimension: Option<Dimension>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            dimension,
        }
    }

    pub fn width(&self) -> Option<u32> {
        self.dimension.map(Dimension::width_u32)
    }

    pub fn height(&self) -> Option<u32> {
        self.dimension.map(Dimension::height_u32)
    }
}

/// Analyzed content of a book file.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Media {
    pub book_id: BookId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub profile: MediaProfile,
    pub media_type: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pages: Vec<Page>,
    /// Total page count. For PDF media this is known even though
    /// `pages` is usually empty.
    pub page_count: u32,
}

impl Media {
    /// Media whose page list is the authoritative page sequence.
    ///
    /// `page_count` saturates at `u32::MAX` for page lists longer than that.
    pub fn with_pages(
        book_id: BookId,
        profile: MediaProfile,
        media_type: impl Into<String>,
        pages: Vec<Page>,
    ) -> Self {
        let page_count = saturating_page_count(pages.len());
        Self {
            book_id,
            profile,
            media_type: media_type.into(),
            pages,
            page_count,
        }
    }
}

fn saturating_page_count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}
