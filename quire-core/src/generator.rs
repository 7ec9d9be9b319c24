use std::fmt;
use std::sync::Arc;

use quire_contracts::prelude::{
    ContentProfileResolver, ImageConverter, PageExtractor,
};
use quire_model::{BookSummary, ImageType, Media, SeriesMetadata};

use crate::constants::segments;
use crate::error::Result;
use crate::manifest::PublicationManifest;
use crate::resolver::BuiltinProfiles;
use crate::time::ServerZone;
use crate::uri::UriBuilder;

/// Deployment-specific inputs of manifest generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorSettings {
    /// Root of the REST API, e.g. `https://host/ctx/api/v1`.
    pub api_root: UriBuilder,
    /// Root of the OPDS v2 feed, e.g. `https://host/ctx/opds/v2`.
    pub opds_root: UriBuilder,
    pub thumbnail_type: ImageType,
    pub zone: ServerZone,
}

impl GeneratorSettings {
    /// Default API and OPDS roots below the caller's context root.
    pub fn new(context_root: &UriBuilder) -> Self {
        Self {
            api_root: context_root.with_segments(segments::DEFAULT_API_ROOT),
            opds_root: context_root.with_segments(segments::DEFAULT_OPDS_ROOT),
            thumbnail_type: ImageType::default(),
            zone: ServerZone::default(),
        }
    }

    pub fn with_thumbnail_type(mut self, thumbnail_type: ImageType) -> Self {
        self.thumbnail_type = thumbnail_type;
        self
    }

    pub fn with_zone(mut self, zone: ServerZone) -> Self {
        self.zone = zone;
        self
    }

    pub fn with_api_root(mut self, api_root: UriBuilder) -> Self {
        self.api_root = api_root;
        self
    }

    pub fn with_opds_root(mut self, opds_root: UriBuilder) -> Self {
        self.opds_root = opds_root;
        self
    }
}

/// Which manifest to build.
#[derive(Debug, Clone, Copy)]
pub enum ManifestRequest<'a> {
    /// OPDS publication entry: acquisition links and a cover image.
    Opds {
        book: &'a BookSummary,
        include_series_link: bool,
    },
    /// Image-by-image reading manifest.
    Divina {
        book: &'a BookSummary,
        media: &'a Media,
        series: &'a SeriesMetadata,
    },
    /// WebPub manifest over the raw PDF pages.
    Pdf {
        book: &'a BookSummary,
        media: &'a Media,
        series: &'a SeriesMetadata,
    },
}

/// Synthesizes Readium manifests from library records.
///
/// Holds only immutable settings and shared collaborators, so one instance
/// can serve concurrent requests.
pub struct WebPubGenerator {
    pub(crate) settings: GeneratorSettings,
    pub(crate) converter: Arc<dyn ImageConverter>,
    pub(crate) extractor: Arc<dyn PageExtractor>,
    pub(crate) resolver: Arc<dyn ContentProfileResolver>,
}

impl fmt::Debug for WebPubGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebPubGenerator")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl WebPubGenerator {
    /// Generator resolving media types with [`BuiltinProfiles`].
    pub fn new(
        settings: GeneratorSettings,
        converter: Arc<dyn ImageConverter>,
        extractor: Arc<dyn PageExtractor>,
    ) -> Self {
        Self {
            settings,
            converter,
            extractor,
            resolver: Arc::new(BuiltinProfiles),
        }
    }

    pub fn with_resolver(
        mut self,
        resolver: Arc<dyn ContentProfileResolver>,
    ) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    pub fn generate(
        &self,
        request: ManifestRequest<'_>,
    ) -> Result<PublicationManifest> {
        match request {
            ManifestRequest::Opds {
                book,
                include_series_link,
            } => Ok(self.opds_publication(book, include_series_link)),
            ManifestRequest::Divina {
                book,
                media,
                series,
            } => self.divina_manifest(book, media, series),
            ManifestRequest::Pdf {
                book,
                media,
                series,
            } => Ok(self.pdf_manifest(book, media, series)),
        }
    }
}
