use quire_model::{BookId, MediaProfile};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("page extraction failed for book {book_id}")]
    PageExtraction {
        book_id: BookId,
        #[source]
        source: anyhow::Error,
    },

    #[error("no manifest can be generated for book {book_id} with {profile} media")]
    UnsupportedProfile {
        book_id: BookId,
        profile: MediaProfile,
    },

    #[error("invalid base URI: {0}")]
    InvalidBaseUri(#[from] url::ParseError),

    #[error("base URI '{uri}' cannot carry path segments")]
    CannotBeABase { uri: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ManifestError>;
