/// JSON-LD context every Readium manifest points at.
pub const READIUM_CONTEXT: &str =
    "https://readium.org/webpub-manifest/context.jsonld";

/// Media types of the manifests and links this crate emits.
pub mod media_types {
    pub const OPDS_PUBLICATION_JSON: &str = "application/opds-publication+json";
    pub const OPDS_JSON: &str = "application/opds+json";
    pub const WEBPUB_JSON: &str = "application/webpub+json";
    pub const DIVINA_JSON: &str = "application/divina+json";
    pub const PDF: &str = "application/pdf";
    pub const JPEG: &str = "image/jpeg";
    pub const PNG: &str = "image/png";
    pub const GIF: &str = "image/gif";
}

/// `conformsTo` profile identifiers.
pub mod profiles {
    pub const DIVINA: &str =
        "https://readium.org/webpub-manifest/profiles/divina";
    pub const PDF: &str = "https://readium.org/webpub-manifest/profiles/pdf";
}

/// Image types every reading client is expected to display natively.
pub const RECOMMENDED_IMAGE_TYPES: [&str; 3] =
    [media_types::JPEG, media_types::PNG, media_types::GIF];

/// Path segments below the API and OPDS roots.
pub mod segments {
    pub const BOOKS: &str = "books";
    pub const SERIES: &str = "series";
    pub const MANIFEST: &str = "manifest";
    pub const DIVINA: &str = "divina";
    pub const FILE: &str = "file";
    pub const THUMBNAIL: &str = "thumbnail";
    pub const PAGES: &str = "pages";
    pub const RAW: &str = "raw";

    pub const DEFAULT_API_ROOT: [&str; 2] = ["api", "v1"];
    pub const DEFAULT_OPDS_ROOT: [&str; 2] = ["opds", "v2"];
}

/// Query parameter asking the page endpoint to transcode on the fly.
pub const CONVERT_PARAM: &str = "convert";
pub const CONVERT_JPEG: &str = "jpeg";
