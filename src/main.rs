use clap::{Parser, Subcommand};
use ngramalyzer::input::load_rows;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Tab-separated keyword report with a header line (`-` reads stdin)
    #[arg(global = true, short, long, default_value = "-")]
    input: String,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank n-grams and print the top of the list
    Analyze(cmd::analyze::AnalyzeArgs),
    /// Rank n-grams and write the full comma-delimited report
    Export(cmd::export::ExportArgs),
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    info!("🚀 Initializing N-Gramalyzer...");

    let rows = load_rows(&cli.input).unwrap_or_else(|e| {
        error!("❌ {}", e);
        process::exit(1);
    });

    let outcome = match cli.command {
        Commands::Analyze(args) => cmd::analyze::run(args, rows),
        Commands::Export(args) => cmd::export::run(args, rows),
    };

    if let Err(e) = outcome {
        error!("❌ {}", e);
        process::exit(1);
    }
}
