//! movies - movie browsing CLI over the movies API client.

/// Application configuration (TOML).
mod config;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
#[cfg(not(feature = "otel"))]
use tracing_subscriber::fmt;
#[cfg(feature = "otel")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "otel")]
use tracing_subscriber::util::SubscriberInitExt;
use url::Url;

use crate::config::{API_KEY_ENV, AppConfig};
use movies_api::poster::{DEFAULT_IMAGE_BASE_URL, PosterImage};
use movies_api::remote::{DEFAULT_BASE_URL, LocalMovieApi, MovieSummary, RemoteMovieClient};

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// List popular movies.
    Popular,
    /// List upcoming movies.
    Upcoming,
    /// Show movie details.
    Detail(MovieIdArgs),
    /// List trailers and clips of a movie.
    Videos(MovieIdArgs),
    /// Search movies by title.
    Search(SearchArgs),
    /// Resolve a poster image URL.
    Poster(PosterArgs),
    /// Write a config file with default settings.
    Init(InitArgs),
}

/// Arguments for subcommands addressing one movie.
#[derive(clap::Args)]
struct MovieIdArgs {
    /// Movie ID (e.g. "11").
    #[arg(long, required = true)]
    id: String,
}

/// Arguments for the `search` subcommand.
#[derive(clap::Args)]
struct SearchArgs {
    /// Search query (e.g. "star wars").
    #[arg(long, required = true)]
    query: String,
}

/// Arguments for the `poster` subcommand.
#[derive(clap::Args)]
struct PosterArgs {
    /// Relative poster path (e.g. "/6FfCtAuVAW8XJjZ7eWeLibRLWTw.jpg").
    #[arg(long)]
    path: Option<String>,
}

/// Arguments for the `init` subcommand.
#[derive(clap::Args)]
struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(long)]
    force: bool,
}

/// Loads config from `--dir` (or the default location) with env overrides.
///
/// # Errors
///
/// Returns an error if the config path cannot be resolved or parsed.
fn load_config(dir: Option<&Path>) -> Result<AppConfig> {
    let config_path = AppConfig::locate(dir).context("failed to resolve config path")?;
    let config = AppConfig::load(&config_path).context("failed to load config")?;
    Ok(config.with_env_overrides(std::env::var(API_KEY_ENV).ok()))
}

/// Builds a `RemoteMovieClient` from config.
///
/// # Errors
///
/// Returns an error if the base URL is invalid or the client fails to build.
#[instrument(skip_all)]
fn build_client(config: &AppConfig) -> Result<RemoteMovieClient> {
    let mut builder = RemoteMovieClient::builder().user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));
    if let Some(ref base_url) = config.api.base_url {
        let url = base_url
            .parse::<Url>()
            .with_context(|| format!("invalid api.base_url: {base_url}"))?;
        builder = builder.base_url(url);
    }
    if let Some(ref key) = config.api.api_key {
        builder = builder.api_key(key);
    }
    builder.build().context("failed to build movies API client")
}

/// Prints a movie list as a table.
fn print_movies(movies: &[MovieSummary]) {
    tracing::info!("ID\tReleaseDate\tVote\tTitle");
    for movie in movies {
        tracing::info!(
            "{}\t{}\t{:.1}\t{}",
            movie.id,
            movie.release_date.as_deref().unwrap_or("-"),
            movie.vote_average,
            movie.title,
        );
    }
    tracing::info!("Total: {} movies", movies.len());
}

/// Runs the `popular` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_popular(config: &AppConfig) -> Result<()> {
    let client = build_client(config)?;

    let movies = client
        .fetch_popular()
        .await
        .context("popular movies request failed")?;

    print_movies(&movies);
    Ok(())
}

/// Runs the `upcoming` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_upcoming(config: &AppConfig) -> Result<()> {
    let client = build_client(config)?;

    let movies = client
        .fetch_upcoming()
        .await
        .context("upcoming movies request failed")?;

    print_movies(&movies);
    Ok(())
}

/// Runs the `detail` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_detail(args: &MovieIdArgs, config: &AppConfig) -> Result<()> {
    let client = build_client(config)?;

    let detail = client
        .fetch_detail(&args.id)
        .await
        .context("movie detail request failed")?;

    let image_base = config
        .api
        .image_base_url
        .as_deref()
        .unwrap_or(DEFAULT_IMAGE_BASE_URL);
    let poster = PosterImage::resolve(image_base, detail.poster_path.as_deref())?;

    tracing::info!("ID: {}", detail.id);
    tracing::info!("Title: {}", detail.title);
    tracing::info!("Tagline: {}", detail.tagline.as_deref().unwrap_or("-"));
    tracing::info!(
        "Release Date: {}",
        detail.release_date.as_deref().unwrap_or("-")
    );
    tracing::info!("Status: {}", detail.status.as_deref().unwrap_or("-"));
    tracing::info!(
        "Runtime: {}min",
        detail
            .runtime
            .map_or_else(|| String::from("-"), |r| r.to_string())
    );
    tracing::info!(
        "Rating: {:.1} ({} votes)",
        detail.vote_average,
        detail.vote_count
    );
    tracing::info!(
        "Genres: {}",
        detail
            .genres
            .iter()
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    tracing::info!("Poster: {poster}");
    tracing::info!("---");
    tracing::info!("{}", detail.overview);

    Ok(())
}

/// Runs the `videos` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_videos(args: &MovieIdArgs, config: &AppConfig) -> Result<()> {
    let client = build_client(config)?;

    let videos = client
        .fetch_videos(&args.id)
        .await
        .context("movie videos request failed")?;

    tracing::info!("Type\t\tSite\tKey\t\tName");
    for video in &videos {
        tracing::info!(
            "{}\t\t{}\t{}\t{}",
            video.kind,
            video.site,
            video.key,
            video.name,
        );
    }
    tracing::info!("Total: {} videos", videos.len());

    Ok(())
}

/// Runs the `search` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_search(args: &SearchArgs, config: &AppConfig) -> Result<()> {
    let client = build_client(config)?;

    let movies = client
        .search(&args.query)
        .await
        .context("movie search request failed")?;

    print_movies(&movies);
    Ok(())
}

/// Runs the `poster` subcommand.
///
/// # Errors
///
/// Returns an error if the resolved poster URL is invalid.
#[instrument(skip_all)]
fn run_poster(args: &PosterArgs, config: &AppConfig) -> Result<()> {
    let image_base = config
        .api
        .image_base_url
        .as_deref()
        .unwrap_or(DEFAULT_IMAGE_BASE_URL);
    let poster = PosterImage::resolve(image_base, args.path.as_deref())?;

    tracing::info!("{poster}");
    Ok(())
}

/// Runs the `init` subcommand.
///
/// # Errors
///
/// Returns an error if the file exists (without `--force`) or cannot be written.
#[instrument(skip_all)]
fn run_init(args: &InitArgs, dir: Option<&Path>) -> Result<()> {
    let config_path = AppConfig::locate(dir).context("failed to resolve config path")?;
    if config_path.exists() && !args.force {
        bail!(
            "config already exists: {} (use --force to overwrite)",
            config_path.display()
        );
    }

    let mut config = AppConfig::default();
    config.api.base_url = Some(String::from(DEFAULT_BASE_URL));
    config.api.image_base_url = Some(String::from(DEFAULT_IMAGE_BASE_URL));
    config.save(&config_path).context("failed to save config")?;

    tracing::info!("Wrote {}", config_path.display());
    Ok(())
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    #[cfg(not(feature = "otel"))]
    {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .init();
    }

    #[cfg(feature = "otel")]
    {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

        let otel_layer = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .and_then(|_| {
                let exporter = opentelemetry_otlp::SpanExporter::builder()
                    .with_http()
                    .build()
                    .ok()?;

                let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
                    .with_simple_exporter(exporter)
                    .build();

                let tracer = opentelemetry::trace::TracerProvider::tracer(
                    &tracer_provider,
                    env!("CARGO_PKG_NAME"),
                );
                opentelemetry::global::set_tracer_provider(tracer_provider);

                Some(tracing_opentelemetry::layer().with_tracer(tracer))
            });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(otel_layer)
            .init();
    }

    let cli = Cli::parse();
    let dir = cli.dir.as_deref();
    match cli.command {
        Commands::Popular => run_popular(&load_config(dir)?).await,
        Commands::Upcoming => run_upcoming(&load_config(dir)?).await,
        Commands::Detail(args) => run_detail(&args, &load_config(dir)?).await,
        Commands::Videos(args) => run_videos(&args, &load_config(dir)?).await,
        Commands::Search(args) => run_search(&args, &load_config(dir)?).await,
        Commands::Poster(args) => run_poster(&args, &load_config(dir)?),
        Commands::Init(args) => run_init(&args, dir),
    }
}
