// ===== echograde/src/main.rs =====
use clap::{Parser, Subcommand};
use echograde::catalog::SubstatCatalog;
use std::process;
use tracing::{error, info};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long)]
    catalog: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Grade equipped echoes from an exported document
    Grade(cmd::grade::GradeArgs),
    /// Show the substat range table in effect
    Ranges(cmd::ranges::RangesArgs),
}

fn main() {
    let cli = Cli::parse();

    // Tables and JSON own stdout; diagnostics go to stderr.
    if cli.debug {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .init();
    }

    info!("🚀 Initializing EchoGrade...");

    let catalog = if let Some(path) = &cli.catalog {
        info!("📐 Loading substat ranges: {}", path);
        SubstatCatalog::load_from_file(path).unwrap_or_else(|e| {
            error!("❌ Failed to load range table: {}", e);
            process::exit(1);
        })
    } else {
        SubstatCatalog::builtin()
    };

    let result = match cli.command {
        Commands::Grade(args) => cmd::grade::run(args, &catalog),
        Commands::Ranges(args) => cmd::ranges::run(args, &catalog),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
