use clap::Parser;
use uhi_collector::cli::{run, Cli};
use uhi_collector::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli).await
}
