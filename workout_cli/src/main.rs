use clap::{Parser, Subcommand};
use std::path::PathBuf;
use workout_core::*;

#[derive(Parser)]
#[command(name = "workout")]
#[command(about = "Workout statistics from raw sensor readings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Print summaries as JSON lines
    #[arg(long, global = true)]
    json: bool,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize the built-in demo packages (default)
    Demo,

    /// Summarize a single package given on the command line
    Show {
        /// Workout type code (SWM, RUN, WLK; anything else computes no calories)
        code: String,

        /// Positional readings: action, duration (h), weight (kg), then
        /// height (cm) for WLK or pool length (m) and laps for SWM
        #[arg(allow_negative_numbers = true)]
        fields: Vec<f64>,
    },

    /// Summarize every package in a CSV or JSONL file
    Batch {
        /// Path to the package file
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    workout_core::logging::init(&config.logging);

    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output.format
    };

    let packages = match cli.command {
        Some(Commands::Show { code, fields }) => vec![SensorPackage::new(code, fields)],
        Some(Commands::Batch { path }) => load_packages(&path)?,
        Some(Commands::Demo) | None => default_packages(),
    };

    tracing::debug!("Summarizing {} packages", packages.len());

    for info in summarize(&packages)? {
        print_info(&info, format)?;
    }

    Ok(())
}

fn print_info(info: &InfoMessage, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", info),
        OutputFormat::Json => println!("{}", serde_json::to_string(info)?),
    }
    Ok(())
}
