use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod workflow;

#[derive(Parser)]
#[command(
    name = "poolchem",
    version,
    about = "Water chemistry recommendations for pool service visits"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute chemical recommendations for a visit file
    Recommend {
        /// YAML file with the pool profile and test readings
        #[arg(long)]
        visit: PathBuf,
        /// Override the default target ranges
        #[arg(long)]
        ranges: Option<PathBuf>,
        /// Override the default dose coefficients
        #[arg(long)]
        coefficients: Option<PathBuf>,
        /// Append the calculation to this CSV history file
        #[arg(long)]
        history: Option<PathBuf>,
        /// Print the calculation record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Classify a single reading as in, out or unknown
    Classify {
        /// Parameter id, e.g. ph or freeChlorine
        parameter: String,
        /// Reading; omit or leave empty when not yet entered
        value: Option<String>,
    },
    /// Show calculations stored in a CSV history file
    History { path: PathBuf },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Recommend {
            visit,
            ranges,
            coefficients,
            history,
            json,
        } => workflow::run_recommendation(&workflow::RecommendOptions {
            visit_path: &visit,
            ranges_path: ranges.as_deref(),
            coefficients_path: coefficients.as_deref(),
            history_path: history.as_deref(),
            json,
        }),
        Command::Classify { parameter, value } => {
            workflow::run_classify(&parameter, value.as_deref())
        }
        Command::History { path } => workflow::run_history(&path),
    }
}
