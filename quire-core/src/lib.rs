//! # Quire Core
//!
//! Synthesizes Readium Web Publication manifests for books in a Quire
//! library: OPDS publication entries, DIVINA manifests for image-based
//! books, and WebPub manifests over raw PDF pages.
//!
//! The entry point is [`WebPubGenerator`]. It is a pure transformation of
//! already-loaded records; the only calls that leave the crate go to the
//! collaborators from [`quire_contracts`] (conversion capability, dynamic
//! PDF page extraction, content-type registry).
//!
//! ## Examples
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use quire_core::{
//!     AllowListConverter, GeneratorSettings, UriBuilder, WebPubGenerator,
//! };
//! use quire_model::{BookSummary, Media, Page};
//!
//! struct NoDynamicPages;
//!
//! impl quire_contracts::pages::PageExtractor for NoDynamicPages {
//!     fn dynamic_pages(&self, _media: &Media) -> anyhow::Result<Vec<Page>> {
//!         anyhow::bail!("pdf rendering is not available")
//!     }
//! }
//!
//! fn opds_entry(book: &BookSummary) -> Result<String, quire_core::ManifestError> {
//!     let root = UriBuilder::parse("https://library.example.org/")?;
//!     let generator = WebPubGenerator::new(
//!         GeneratorSettings::new(&root),
//!         Arc::new(AllowListConverter::with_extra_readable(["image/webp"])),
//!         Arc::new(NoDynamicPages),
//!     );
//!     generator.opds_publication(book, true).to_json()
//! }
//! ```
#![allow(missing_docs)]

pub mod constants;
pub mod contributors;
pub mod converter;
pub mod error;
pub mod generator;
pub mod links;
pub mod manifest;
pub mod reading_order;
pub mod resolver;
pub mod time;
pub mod uri;

pub use contributors::{ContributorRole, ContributorRoleMap, Role};
pub use converter::AllowListConverter;
pub use error::{ManifestError, Result};
pub use generator::{GeneratorSettings, ManifestRequest, WebPubGenerator};
pub use manifest::{
    BelongsTo, LinkRel, PublicationManifest, ReadingProgression, SeriesEntry,
    WpLink, WpMetadata,
};
pub use resolver::BuiltinProfiles;
pub use time::ServerZone;
pub use uri::UriBuilder;
