use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dirsum::cli::run().await
}
