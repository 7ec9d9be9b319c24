use quire_contracts::profile::{ContentProfileResolver, ResolvedMediaType};
use quire_model::KnownMediaType;

/// Resolves media types against the built-in [`KnownMediaType`] table.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinProfiles;

impl ContentProfileResolver for BuiltinProfiles {
    fn resolve(&self, media_type: &str) -> Option<ResolvedMediaType> {
        KnownMediaType::from_media_type(media_type).map(|known| {
            ResolvedMediaType::new(
                known.profile(),
                Some(known.export_type().to_string()),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quire_model::MediaProfile;

    #[test]
    fn resolves_known_types_with_export_type() {
        let resolved = BuiltinProfiles.resolve("application/zip").unwrap();
        assert_eq!(resolved.profile, MediaProfile::Divina);
        assert_eq!(
            resolved.export_type.as_deref(),
            Some("application/vnd.comicbook+zip")
        );

        let pdf = BuiltinProfiles.resolve("application/pdf").unwrap();
        assert_eq!(pdf.profile, MediaProfile::Pdf);
        assert_eq!(pdf.export_type.as_deref(), Some("application/pdf"));
    }

    #[test]
    fn unknown_types_do_not_resolve() {
        assert_eq!(BuiltinProfiles.resolve("application/x-cbt"), None);
        assert_eq!(BuiltinProfiles.resolve(""), None);
    }
}
