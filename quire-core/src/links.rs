//! Link sets shared by every manifest profile.

use quire_contracts::profile::ContentProfileResolver;
use quire_model::{BookId, BookSummary, ImageType, MediaProfile, SeriesId};
use tracing::debug;

use crate::constants::{media_types, segments};
use crate::manifest::{LinkRel, WpLink};
use crate::uri::UriBuilder;

/// `<api root>/books/<id>`
pub fn book_root(api_root: &UriBuilder, book_id: &BookId) -> UriBuilder {
    api_root.with_segments([segments::BOOKS, book_id.as_str()])
}

/// Manifest type to advertise for a content profile. Anything that is not
/// DIVINA, including an unresolved profile, is served as plain WebPub.
pub fn manifest_media_type(profile: Option<MediaProfile>) -> &'static str {
    match profile {
        Some(MediaProfile::Divina) => media_types::DIVINA_JSON,
        Some(MediaProfile::Pdf) | Some(MediaProfile::Generic) | None => {
            media_types::WEBPUB_JSON
        }
    }
}

/// Self link(s) followed by the acquisition link, in that order.
///
/// PDF books get a second manifest link to their DIVINA rendition. The
/// acquisition type prefers the registered export type and falls back to
/// the raw media type.
pub fn publication_links(
    book: &BookSummary,
    api_root: &UriBuilder,
    resolver: &dyn ContentProfileResolver,
) -> Vec<WpLink> {
    let raw_type = book.media.media_type.as_str();
    let resolved = resolver.resolve(raw_type);
    if resolved.is_none() {
        debug!(book_id = %book.id, media_type = raw_type, "media type has no registered profile");
    }
    let profile = resolved.as_ref().map(|r| r.profile);
    let root = book_root(api_root, &book.id);

    let mut links = Vec::with_capacity(3);
    links.push(
        WpLink::new(
            root.with_segment(segments::MANIFEST).render(),
            manifest_media_type(profile),
        )
        .with_rel(LinkRel::SelfLink),
    );

    if profile == Some(MediaProfile::Pdf) {
        links.push(WpLink::new(
            root.with_segments([segments::MANIFEST, segments::DIVINA]).render(),
            media_types::DIVINA_JSON,
        ));
    }

    let acquisition_type = resolved
        .and_then(|r| r.export_type)
        .unwrap_or_else(|| raw_type.to_string());
    links.push(
        WpLink::new(root.with_segment(segments::FILE).render(), acquisition_type)
            .with_rel(LinkRel::Acquisition),
    );

    links
}

/// The single thumbnail link used for `images` and `resources`.
pub fn thumbnail_links(
    api_root: &UriBuilder,
    book_id: &BookId,
    thumbnail_type: ImageType,
) -> Vec<WpLink> {
    vec![WpLink::new(
        book_root(api_root, book_id)
            .with_segment(segments::THUMBNAIL)
            .render(),
        thumbnail_type.media_type(),
    )]
}

/// Link to a series' OPDS feed entry.
pub fn series_link(opds_root: &UriBuilder, series_id: &SeriesId) -> WpLink {
    WpLink::new(
        opds_root
            .with_segments([segments::SERIES, series_id.as_str()])
            .render(),
        media_types::OPDS_JSON,
    )
}
