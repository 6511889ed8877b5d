use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "uhi-collector")]
#[command(about = "Urban Heat Island dataset collector for major Indian cities")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Collect the dataset for the whole city roster
    Collect {
        #[arg(
            short,
            long,
            help = "Output CSV file path [default: {output_dir}/uhi-dataset-{timestamp}.csv]"
        )]
        output_file: Option<PathBuf>,

        #[arg(long, help = "Seed for the estimator jitter (reproducible runs)")]
        seed: Option<u64>,

        #[arg(long, help = "Pause between provider calls, in milliseconds")]
        delay_ms: Option<u64>,

        #[arg(long, help = "Collect only the first N cities")]
        limit: Option<usize>,

        #[arg(
            long,
            default_value = "false",
            help = "Skip all network lookups and estimate from defaults"
        )]
        skip_network: bool,
    },

    /// Analyze a collected dataset: statistics, correlations, rankings
    Analyze {
        #[arg(short, long, help = "Dataset CSV file")]
        file: PathBuf,

        #[arg(long, default_value = "10", help = "How many cities to show per ranking")]
        top: usize,

        #[arg(long, help = "Also write a text summary report to this path")]
        report: Option<PathBuf>,
    },

    /// Display sample records from a dataset CSV
    Info {
        #[arg(short, long)]
        file: PathBuf,

        #[arg(short, long, default_value = "10")]
        sample: usize,
    },
}
