use anyhow::Result;
use degra_cal::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
