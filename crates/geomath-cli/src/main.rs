mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "geomath", about = "Headless tools for the Geomathiques overlay")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show where each tool bitmap is found and its size
    Info(commands::info::InfoArgs),
    /// Key out white and enhance one image, as done for tool bitmaps
    Prepare(commands::prepare::PrepareArgs),
    /// Render a tool (or both combined tools) with a rotation and scale
    Render(commands::render::RenderArgs),
    /// Print or save the default configuration
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Prepare(args) => commands::prepare::run(args),
        Commands::Render(args) => commands::render::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
