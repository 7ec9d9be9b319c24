use std::{path::PathBuf, sync::Arc};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use quire_config::{ConfigLoadError, Fixture, ManifestConfig};
use quire_core::{ManifestRequest, UriBuilder, WebPubGenerator};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "quire-manifest",
    about = "Render a Readium manifest from exported library records"
)]
struct Cli {
    /// JSON file with `book`, `media`, `series` and optional `dynamic_pages`
    #[arg(long)]
    fixture: PathBuf,
    /// Context root the manifest links are built under
    #[arg(long, default_value = "http://localhost:25600/")]
    base_url: String,
    #[arg(long, value_enum, default_value = "auto")]
    profile: ProfileArg,
    /// Link the series OPDS entry (OPDS profile only)
    #[arg(long)]
    series_link: bool,
    #[arg(long)]
    pretty: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ProfileArg {
    /// Pick DIVINA or PDF from the media profile
    Auto,
    Opds,
    Divina,
    Pdf,
}

fn main() -> Result<()> {
    let env_file_loaded = dotenvy::dotenv().is_ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let (config, source) = ManifestConfig::load_from_env()?;
    config.validate()?;
    info!(?source, env_file_loaded, "loaded manifest configuration");

    let fixture = Fixture::load(&cli.fixture)?;
    let context_root =
        UriBuilder::parse(&cli.base_url).map_err(ConfigLoadError::ContextRoot)?;
    let generator = WebPubGenerator::new(
        config.generator_settings(&context_root),
        Arc::new(config.converter()),
        Arc::new(fixture.page_extractor()),
    );

    let manifest = match cli.profile {
        ProfileArg::Auto => generator.preferred_manifest(
            &fixture.book,
            fixture.media()?,
            &fixture.series,
        )?,
        ProfileArg::Opds => generator.generate(ManifestRequest::Opds {
            book: &fixture.book,
            include_series_link: cli.series_link,
        })?,
        ProfileArg::Divina => generator.generate(ManifestRequest::Divina {
            book: &fixture.book,
            media: fixture.media()?,
            series: &fixture.series,
        })?,
        ProfileArg::Pdf => generator.generate(ManifestRequest::Pdf {
            book: &fixture.book,
            media: fixture.media()?,
            series: &fixture.series,
        })?,
    };

    info!(
        book_id = %fixture.book.id,
        media_type = manifest.media_type(),
        "rendered manifest"
    );
    let rendered = if cli.pretty {
        manifest.to_json_pretty()?
    } else {
        manifest.to_json()?
    };
    println!("{rendered}");
    Ok(())
}
