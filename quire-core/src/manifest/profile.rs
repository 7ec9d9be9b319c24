use std::borrow::Cow;

use quire_model::{BookSummary, Media, MediaProfile, SeriesMetadata};
use tracing::{debug, warn};

use crate::constants::{media_types, profiles};
use crate::error::{ManifestError, Result};
use crate::generator::WebPubGenerator;
use crate::links;
use crate::manifest::PublicationManifest;
use crate::reading_order;

impl WebPubGenerator {
    /// OPDS publication with a cover thumbnail. Carries no reading order.
    pub fn opds_publication(
        &self,
        book: &BookSummary,
        include_series_link: bool,
    ) -> PublicationManifest {
        let mut manifest = self.base_publication(book, include_series_link);
        manifest.images = links::thumbnail_links(
            &self.settings.api_root,
            &book.id,
            self.settings.thumbnail_type,
        );
        manifest
    }

    /// DIVINA manifest listing every page image.
    ///
    /// PDF media has no stored page list; its pages come from the page
    /// extractor, and an extraction failure fails the whole manifest.
    pub fn divina_manifest(
        &self,
        book: &BookSummary,
        media: &Media,
        series: &SeriesMetadata,
    ) -> Result<PublicationManifest> {
        let pages = if media.profile == MediaProfile::Pdf {
            let pages = self.extractor.dynamic_pages(media).map_err(|source| {
                warn!(book_id = %book.id, error = %source, "dynamic page extraction failed");
                ManifestError::PageExtraction {
                    book_id: book.id.clone(),
                    source,
                }
            })?;
            Cow::Owned(pages)
        } else {
            Cow::Borrowed(media.pages.as_slice())
        };

        let mut manifest = self.base_publication(book, false);
        manifest.media_type = media_types::DIVINA_JSON.to_string();
        manifest.metadata = manifest
            .metadata
            .with_series_metadata(series)
            .with_conformance(profiles::DIVINA);
        manifest.reading_order = reading_order::divina_reading_order(
            &self.settings.api_root,
            &book.id,
            &pages,
            self.converter.as_ref(),
        );
        manifest.resources = links::thumbnail_links(
            &self.settings.api_root,
            &book.id,
            self.settings.thumbnail_type,
        );

        debug!(
            book_id = %book.id,
            profile = %media.profile,
            pages = manifest.reading_order.len(),
            "generated divina manifest"
        );
        Ok(manifest)
    }

    /// WebPub manifest pointing at the raw PDF pages.
    pub fn pdf_manifest(
        &self,
        book: &BookSummary,
        media: &Media,
        series: &SeriesMetadata,
    ) -> PublicationManifest {
        let mut manifest = self.base_publication(book, false);
        manifest.media_type = media_types::WEBPUB_JSON.to_string();
        manifest.metadata = manifest
            .metadata
            .with_series_metadata(series)
            .with_conformance(profiles::PDF);
        manifest.reading_order = reading_order::pdf_reading_order(
            &self.settings.api_root,
            &book.id,
            media.page_count,
        );
        manifest.resources = links::thumbnail_links(
            &self.settings.api_root,
            &book.id,
            self.settings.thumbnail_type,
        );

        debug!(
            book_id = %book.id,
            pages = manifest.reading_order.len(),
            "generated pdf manifest"
        );
        manifest
    }

    /// The manifest matching the media's own profile: DIVINA for image
    /// books, PDF-as-WebPub for PDF. Generic media was not analyzed into a
    /// readable profile and has no manifest.
    pub fn preferred_manifest(
        &self,
        book: &BookSummary,
        media: &Media,
        series: &SeriesMetadata,
    ) -> Result<PublicationManifest> {
        match media.profile {
            MediaProfile::Divina => self.divina_manifest(book, media, series),
            MediaProfile::Pdf => Ok(self.pdf_manifest(book, media, series)),
            MediaProfile::Generic => Err(ManifestError::UnsupportedProfile {
                book_id: book.id.clone(),
                profile: media.profile,
            }),
        }
    }
}
