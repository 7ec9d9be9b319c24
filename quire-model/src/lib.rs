//! Record types consumed by the Quire manifest synthesizer.
//!
//! Everything here is a read-only snapshot handed over by the persistence
//! layer. Nothing in this crate performs I/O.
#![allow(missing_docs)]

pub use ::chrono;

pub mod book;
pub mod error;
pub mod ids;
pub mod media;
pub mod media_type;
pub mod series;

pub use book::{Author, BookMetadata, BookSummary, MediaSummary};
pub use error::{ModelError, Result as ModelResult};
pub use ids::{BookId, SeriesId};
pub use media::{Dimension, Media, MediaProfile, Page};
pub use media_type::{ImageType, KnownMediaType};
pub use series::{ReadingDirection, SeriesMetadata};
