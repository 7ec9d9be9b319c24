use crate::media::MediaProfile;

/// Book container formats the library knows how to analyze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownMediaType {
    /// Comic book zip archive
    Zip,
    /// RAR archive of unknown version
    RarGeneric,
    /// RAR 4 archive
    Rar4,
    /// EPUB container
    Epub,
    /// PDF document
    Pdf,
}

impl KnownMediaType {
    pub const ALL: [KnownMediaType; 5] = [
        KnownMediaType::Zip,
        KnownMediaType::RarGeneric,
        KnownMediaType::Rar4,
        KnownMediaType::Epub,
        KnownMediaType::Pdf,
    ];

    /// Media type string as reported by file analysis.
    pub const fn media_type(self) -> &'static str {
        match self {
            KnownMediaType::Zip => "application/zip",
            KnownMediaType::RarGeneric => "application/x-rar-compressed",
            KnownMediaType::Rar4 => "application/x-rar-compressed; version=4",
            KnownMediaType::Epub => "application/epub+zip",
            KnownMediaType::Pdf => "application/pdf",
        }
    }

    pub const fn profile(self) -> MediaProfile {
        match self {
            KnownMediaType::Pdf => MediaProfile::Pdf,
            _ => MediaProfile::Divina,
        }
    }

    /// Media type advertised when the file is downloaded. Comic archives
    /// are re-labelled with their comic-book specific types.
    pub const fn export_type(self) -> &'static str {
        match self {
            KnownMediaType::Zip => "application/vnd.comicbook+zip",
            KnownMediaType::RarGeneric | KnownMediaType::Rar4 => {
                "application/vnd.comicbook-rar"
            }
            other => other.media_type(),
        }
    }

    /// Exact lookup; parameters and casing must match the analysis output.
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|known| known.media_type() == media_type)
    }
}

/// Encodings used for generated thumbnails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ImageType {
    #[default]
    Jpeg,
    Png,
    Webp,
}

impl ImageType {
    pub const fn media_type(self) -> &'static str {
        match self {
            ImageType::Jpeg => "image/jpeg",
            ImageType::Png => "image/png",
            ImageType::Webp => "image/webp",
        }
    }
}
