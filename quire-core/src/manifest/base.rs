use quire_model::BookSummary;

use crate::constants::{READIUM_CONTEXT, media_types};
use crate::contributors::ContributorRoleMap;
use crate::generator::WebPubGenerator;
use crate::links;
use crate::manifest::{BelongsTo, PublicationManifest, SeriesEntry, WpMetadata};

impl WebPubGenerator {
    /// Profile-agnostic OPDS publication shell shared by every manifest.
    pub fn base_publication(
        &self,
        book: &BookSummary,
        include_series_link: bool,
    ) -> PublicationManifest {
        PublicationManifest {
            media_type: media_types::OPDS_PUBLICATION_JSON.to_string(),
            context: READIUM_CONTEXT.to_string(),
            metadata: self.base_metadata(book, include_series_link),
            links: links::publication_links(
                book,
                &self.settings.api_root,
                self.resolver.as_ref(),
            ),
            images: Vec::new(),
            reading_order: Vec::new(),
            resources: Vec::new(),
        }
    }

    fn base_metadata(
        &self,
        book: &BookSummary,
        include_series_link: bool,
    ) -> WpMetadata {
        let metadata = &book.metadata;
        let series_links = if include_series_link {
            vec![links::series_link(&self.settings.opds_root, &book.series_id)]
        } else {
            Vec::new()
        };

        WpMetadata {
            title: metadata.title.clone(),
            identifier: metadata.isbn().map(|isbn| format!("urn:isbn:{isbn}")),
            conforms_to: None,
            modified: self
                .settings
                .zone
                .convert_or_now(book.last_modified, book.id.as_str()),
            published: metadata.release_date,
            language: None,
            contributors: ContributorRoleMap::from_authors(&metadata.authors),
            subject: metadata.tags.clone(),
            reading_progression: None,
            description: metadata.summary.clone(),
            number_of_pages: book.media.pages_count,
            belongs_to: BelongsTo {
                series: vec![SeriesEntry {
                    name: book.series_title.clone(),
                    position: Some(metadata.number_sort)
                        .filter(|position| position.is_finite()),
                    links: series_links,
                }],
            },
        }
    }
}
