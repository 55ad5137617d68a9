//! `storefront` binary. Setup lives in the library for testability.

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    storefront_cli::run().await
}
