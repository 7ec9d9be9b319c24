use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::anyhow;
use quire_core::{
    AllowListConverter, GeneratorSettings, ServerZone, UriBuilder,
    constants::segments,
};
use quire_model::ImageType;
use serde::{Deserialize, Serialize};

use crate::error::ConfigLoadError;

/// Largest offset accepted, one minute short of a day.
const MAX_OFFSET_MINUTES: i32 = 24 * 60 - 1;

fn default_convertible_media_types() -> Vec<String> {
    [
        "image/webp",
        "image/bmp",
        "image/tiff",
        "image/jxl",
        "image/heif",
        "image/avif",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Source that produced the manifest configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ManifestConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// Deployment settings for manifest generation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ManifestConfig {
    /// Path segments of the REST API below the context root.
    pub api_root: Vec<String>,
    /// Path segments of the OPDS v2 feed below the context root.
    pub opds_root: Vec<String>,
    /// Encoding of generated thumbnails, advertised on thumbnail links.
    pub thumbnail_type: ImageType,
    /// Offset east of UTC used for `modified` timestamps. Unset means the
    /// host's local zone.
    pub utc_offset_minutes: Option<i32>,
    /// Page content types the server can transcode to JPEG on request.
    /// JPEG, PNG and GIF are always readable and need not be listed.
    #[serde(default = "default_convertible_media_types")]
    pub convertible_media_types: Vec<String>,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            api_root: segments::DEFAULT_API_ROOT.map(String::from).to_vec(),
            opds_root: segments::DEFAULT_OPDS_ROOT.map(String::from).to_vec(),
            thumbnail_type: ImageType::default(),
            utc_offset_minutes: None,
            convertible_media_types: default_convertible_media_types(),
        }
    }
}

impl ManifestConfig {
    /// Load configuration overrides using environment variables.
    /// Evaluation order:
    /// 1) `$QUIRE_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$QUIRE_CONFIG_JSON` (inline JSON),
    /// 3) the first existing default file,
    /// 4) defaults.
    pub fn load_from_env()
    -> Result<(Self, ManifestConfigSource), ConfigLoadError> {
        if let Ok(path_str) = env::var("QUIRE_CONFIG_PATH")
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, ManifestConfigSource::EnvPath(path)));
        }

        if let Ok(raw) = env::var("QUIRE_CONFIG_JSON")
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw, "QUIRE_CONFIG_JSON")?;
            return Ok((parsed, ManifestConfigSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file() {
            let config = Self::load_from_file(&path)?;
            return Ok((config, ManifestConfigSource::File(path)));
        }

        Ok((Self::default(), ManifestConfigSource::Default))
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let origin = path.display().to_string();

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents, &origin),
            Some("toml") | Some("tml") => {
                toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
                    origin,
                    source: err.into(),
                })
            }
            _ => Self::parse_from_str(&contents, &origin),
        }
    }

    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> Result<Self, ConfigLoadError> {
        // Try TOML first, then JSON for convenience.
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                ConfigLoadError::Parse {
                    origin: origin.to_string(),
                    source: anyhow!(
                        "toml error: {toml_err}; json error: {json_err}"
                    ),
                }
            })
        })
    }

    pub fn parse_json(raw: &str, origin: &str) -> Result<Self, ConfigLoadError> {
        serde_json::from_str(raw).map_err(|err| ConfigLoadError::Parse {
            origin: origin.to_string(),
            source: err.into(),
        })
    }

    fn find_default_file() -> Option<PathBuf> {
        const CANDIDATES: &[&str] = &[
            "quire.toml",
            "quire.json",
            "config/quire.toml",
            "config/quire.json",
        ];

        CANDIDATES
            .iter()
            .map(Path::new)
            .find(|path| path.exists())
            .map(|path| path.to_path_buf())
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        for (field, root) in
            [("api_root", &self.api_root), ("opds_root", &self.opds_root)]
        {
            if root.is_empty() || root.iter().any(|s| s.trim().is_empty()) {
                return Err(ConfigLoadError::EmptyRoot { field });
            }
        }

        if let Some(minutes) = self.utc_offset_minutes
            && !(-MAX_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(&minutes)
        {
            return Err(ConfigLoadError::OffsetOutOfRange { minutes });
        }

        Ok(())
    }

    pub fn zone(&self) -> ServerZone {
        self.utc_offset_minutes
            .map(ServerZone::FixedMinutes)
            .unwrap_or_default()
    }

    pub fn converter(&self) -> AllowListConverter {
        AllowListConverter::with_extra_readable(&self.convertible_media_types)
    }

    /// Generator settings rooted at the caller's context root.
    pub fn generator_settings(
        &self,
        context_root: &UriBuilder,
    ) -> GeneratorSettings {
        GeneratorSettings::new(context_root)
            .with_api_root(context_root.with_segments(&self.api_root))
            .with_opds_root(context_root.with_segments(&self.opds_root))
            .with_thumbnail_type(self.thumbnail_type)
            .with_zone(self.zone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quire_contracts::convert::ImageConverter;

    #[test]
    fn defaults_are_valid() {
        let config = ManifestConfig::default();
        config.validate().unwrap();
        assert_eq!(config.api_root, ["api", "v1"]);
        assert_eq!(config.opds_root, ["opds", "v2"]);
        assert_eq!(config.zone(), ServerZone::Local);
    }

    #[test]
    fn rejects_blank_roots_and_wild_offsets() {
        let config = ManifestConfig {
            api_root: vec!["api".into(), " ".into()],
            ..ManifestConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigLoadError::EmptyRoot { field: "api_root" })
        ));

        let config = ManifestConfig {
            opds_root: Vec::new(),
            ..ManifestConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigLoadError::EmptyRoot { field: "opds_root" })
        ));

        let config = ManifestConfig {
            utc_offset_minutes: Some(1440),
            ..ManifestConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigLoadError::OffsetOutOfRange { minutes: 1440 })
        ));
    }

    #[test]
    fn settings_follow_config() {
        let config = ManifestConfig {
            api_root: vec!["rest".into()],
            opds_root: vec!["feeds".into(), "opds".into()],
            thumbnail_type: ImageType::Png,
            utc_offset_minutes: Some(-300),
            ..ManifestConfig::default()
        };
        let root = UriBuilder::parse("https://example.org/ctx/").unwrap();
        let settings = config.generator_settings(&root);

        assert_eq!(settings.api_root.render(), "https://example.org/ctx/rest");
        assert_eq!(
            settings.opds_root.render(),
            "https://example.org/ctx/feeds/opds"
        );
        assert_eq!(settings.thumbnail_type, ImageType::Png);
        assert_eq!(settings.zone, ServerZone::FixedMinutes(-300));
    }

    #[test]
    fn converter_reads_configured_types() {
        let config = ManifestConfig {
            convertible_media_types: vec!["image/jxl".into()],
            ..ManifestConfig::default()
        };
        let converter = config.converter();
        assert!(converter.can_convert("image/jxl", "image/jpeg"));
        assert!(!converter.can_convert("image/webp", "image/jpeg"));
    }

    #[test]
    fn partial_documents_keep_defaults() {
        let config =
            ManifestConfig::parse_from_str("thumbnail_type = \"webp\"", "inline")
                .unwrap();
        assert_eq!(config.thumbnail_type, ImageType::Webp);
        assert_eq!(config.api_root, ["api", "v1"]);
        assert_eq!(
            config.convertible_media_types,
            default_convertible_media_types()
        );

        let config = ManifestConfig::parse_json(
            r#"{"utc_offset_minutes": 90}"#,
            "inline",
        )
        .unwrap();
        assert_eq!(config.utc_offset_minutes, Some(90));
    }

    #[test]
    fn unparseable_input_reports_both_formats() {
        let err = ManifestConfig::parse_from_str("{{ nope", "inline").unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("inline"));
        assert!(message.contains("toml error"));
        assert!(message.contains("json error"));
    }
}
