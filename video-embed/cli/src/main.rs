//! CLI for rendering video embed code.
//!
//! ## Usage
//!
//! ```bash
//! # Sized iframe for a YouTube URL
//! vembed youtube "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
//!
//! # Aspect-ratio viewport instead of width/height attributes
//! vembed vimeo 76979871 --responsive --width 640 --height 360
//!
//! # Service option overrides and a configuration file
//! vembed vine bjHh0zHdgZT -o embed=postcard --config embed.yaml
//!
//! # List the available services
//! vembed --list
//! ```

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use video_embed::{EmbedConfig, ServiceRegistry, VideoDimensions};

/// Render responsive iframe embed code for video hosting services
#[derive(Parser, Debug)]
#[command(name = "vembed", version, about, long_about = None)]
#[command(after_help = AFTER_HELP)]
struct Cli {
    /// Service to render with (see --list)
    #[arg(value_name = "SERVICE", required_unless_present = "list")]
    service: Option<String>,

    /// Video URL or ID
    #[arg(value_name = "REFERENCE", required_unless_present = "list")]
    reference: Option<String>,

    /// Player width, overriding the service default
    #[arg(long, value_name = "PX")]
    width: Option<f64>,

    /// Player height, overriding the service default
    #[arg(long, value_name = "PX")]
    height: Option<f64>,

    /// Explicit aspect ratio as height/width percentage (56.25 for 16:9)
    #[arg(long, value_name = "PERCENT")]
    aspect_ratio: Option<f64>,

    /// Configuration file (YAML, or JSON when it ends in .json)
    #[arg(short, long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Service option override; values are parsed as JSON, falling back to a string
    #[arg(short = 'o', long = "option", value_name = "KEY=VALUE", value_parser = parse_option)]
    options: Vec<(String, serde_json::Value)>,

    /// Wrap the player in an aspect-ratio viewport instead of sizing the iframe
    #[arg(long)]
    responsive: bool,

    /// Leave out the fullscreen permission flags
    #[arg(long)]
    no_fullscreen: bool,

    /// List the available services and exit
    #[arg(long)]
    list: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

const AFTER_HELP: &str = "\
EXAMPLES:
  vembed youtube dQw4w9WgXcQ                      # sized YouTube player
  vembed vimeo https://vimeo.com/76979871 --responsive --width 640 --height 360
  vembed vine bjHh0zHdgZT -o embed=postcard      # service option override
  vembed youtube dQw4w9WgXcQ --config embed.yaml  # switches and overrides from a file
  vembed --list                                   # built-in services
";

/// Parses `KEY=VALUE` into an option override.
fn parse_option(raw: &str) -> Result<(String, serde_json::Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got {raw:?}"))?;
    if key.is_empty() {
        return Err(format!("missing option name in {raw:?}"));
    }

    let value = serde_json::from_str(value)
        .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

/// Initialize tracing subscriber based on verbosity level.
///
/// Silent unless `-v` is given; `RUST_LOG` takes precedence over the level
/// picked from the verbosity count.
fn init_tracing(verbose: u8) {
    if verbose == 0 && std::env::var_os("RUST_LOG").is_none() {
        return;
    }

    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            1 => "warn,vembed=info,video_embed=info".to_string(),
            2 => "info,vembed=debug,video_embed=debug".to_string(),
            _ => "debug,vembed=trace,video_embed=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn load_config(cli: &Cli) -> Result<EmbedConfig> {
    let mut config = match &cli.config {
        Some(path) => EmbedConfig::from_path(path)
            .wrap_err_with(|| format!("Failed to load configuration from {:?}", path))?,
        None => EmbedConfig::default(),
    };

    if cli.responsive {
        config.environment.output_player_size = false;
        config.environment.output_player_aspect_ratio = true;
    }
    if cli.no_fullscreen {
        config.environment.allow_full_screen = false;
    }

    if let Some(service) = &cli.service
        && !cli.options.is_empty()
    {
        let overrides = config.services.entry(service.clone()).or_default();
        for (key, value) in &cli.options {
            overrides.insert(key.clone(), value.clone());
        }
    }

    Ok(config)
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let registry = ServiceRegistry::from_config(load_config(&cli)?);

    if cli.list {
        for name in registry.names() {
            println!("{name}");
        }
        return Ok(());
    }

    let (Some(service), Some(reference)) = (cli.service.as_deref(), cli.reference.as_deref()) else {
        return Err(eyre!("SERVICE and REFERENCE are required"));
    };

    let dimensions = VideoDimensions {
        width: cli.width,
        height: cli.height,
        aspect_ratio: cli.aspect_ratio,
    };

    tracing::info!(service, reference, "rendering embed code");
    let html = registry
        .render(service, reference, &dimensions)?
        .ok_or_else(|| eyre!("{service} does not recognise the reference {reference:?}"))?;

    print!("{html}");
    Ok(())
}
