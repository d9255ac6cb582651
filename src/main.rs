use anyhow::Result;
use artikel::commands::Cli;
use artikel::libs::logging::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_tracing();
    Cli::menu().await
}
