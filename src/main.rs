use anyhow::Result;
use intake::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
