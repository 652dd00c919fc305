use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    askwhy::cli::run().await
}
