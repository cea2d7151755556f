// auspect-cli/src/main.rs
//
// This file defines the command-line interface (CLI) for the Auspect audio
// metadata inspection tool. It uses the `clap` crate to parse command-line
// arguments for the 'analyze' and 'tools' operations.
//
// Responsibilities include:
// - Defining CLI argument structures (`Cli`, `Commands`, `AnalyzeArgs`).
// - Parsing user-provided arguments and setting up logging.
// - Configuring the `auspect-core` analyzer from CLI arguments and defaults.
// - Invoking the core analysis logic and rendering the resulting report.
// - Managing process exit codes based on success or failure.

mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Auspect: audio metadata inspection tool",
    long_about = "Inspects audio files by probing them with ffprobe and reports \
                  container format, codec, sample rate, bit depth, bit rate, channel \
                  layout, duration, stream count, encoder tag, and file size."
)]
struct Cli {
    /// Path to the ffprobe executable (defaults to the first one on PATH)
    #[arg(long, global = true, value_name = "PATH")]
    ffprobe: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyzes one audio file and prints its metadata
    Analyze(AnalyzeArgs),
    /// Reports on the ffprobe installation
    Tools,
}

#[derive(Parser, Debug)]
struct AnalyzeArgs {
    /// Audio file to inspect
    #[arg(required = true, value_name = "FILE")]
    file: PathBuf,

    /// Print the report as JSON instead of labeled lines
    #[arg(long)]
    json: bool,

    /// Probe deadline in seconds
    #[arg(long, value_name = "SECS", default_value_t = 10)]
    timeout: u64,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze(args) => commands::analyze::execute(cli.ffprobe.as_deref(), &args),
        Commands::Tools => commands::tools::execute(cli.ffprobe.as_deref()),
    };

    if let Err(e) = result {
        output::print_error(&e.to_string());
        process::exit(1);
    }
}
