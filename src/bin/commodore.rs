use anyhow::Result;
use clap::Parser;
use commodore::cli::{run, CommodoreCli};
use tracing::debug;

fn log_level(verbosity: u8) -> tracing::Level {
    match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = CommodoreCli::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(cli.verbosity))
        .with_writer(std::io::stderr)
        .init();

    debug!("Starting commodore v{}", env!("CARGO_PKG_VERSION"));

    run(&cli).await?;
    Ok(())
}
