//! Mapsight - map preview and statistics tools

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mapsight_core::color::Rgba;
use mapsight_core::layers::DrawLayerMask;
use mapsight_core::players::PlayerColorMode;
use mapsight_tools::commands::{self, PreviewOptions};

#[derive(Parser)]
#[command(name = "mapsight", version)]
#[command(about = "Preview and statistics tools for strategy-game maps")]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a map preview PNG from a bundle export
    Preview {
        /// Input map bundle (JSON export)
        #[arg(short, long)]
        input: PathBuf,
        /// Output PNG filename (+ path)
        #[arg(short, long)]
        output: PathBuf,
        /// Player colors
        #[arg(short = 'c', long = "playercolors", value_enum, default_value_t)]
        playercolors: PlayerColorsArg,
        /// Scavenger color (hex, e.g. 800000 or #80000080)
        #[arg(long, default_value = "#800000")]
        scavcolor: Rgba,
        /// Layers to draw: 'all' or a comma-separated subset of
        /// terrain,structures,oil
        #[arg(long, default_value = "all")]
        layers: DrawLayerMask,
    },
    /// Extract info / stats from a bundle export
    Info {
        /// Input map bundle (JSON export)
        #[arg(short, long)]
        input: PathBuf,
        /// Output JSON filename (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum PlayerColorsArg {
    /// One color for scavengers, one color for all players
    #[default]
    Simple,
    /// Distinct per-slot palette colors
    Distinct,
}

impl From<PlayerColorsArg> for PlayerColorMode {
    fn from(arg: PlayerColorsArg) -> Self {
        match arg {
            PlayerColorsArg::Simple => Self::Simple,
            PlayerColorsArg::Distinct => Self::Distinct,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing; -v raises the default level, RUST_LOG still wins.
    let default_filter = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .init();

    let result = match cli.command {
        Commands::Preview {
            input,
            output,
            playercolors,
            scavcolor,
            layers,
        } => commands::run_preview(
            &input,
            &output,
            PreviewOptions {
                mode: playercolors.into(),
                scavenger_color: scavcolor,
                layers,
            },
        ),
        Commands::Info { input, output } => commands::run_info(&input, output.as_deref()),
    };

    if let Err(e) = result {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
