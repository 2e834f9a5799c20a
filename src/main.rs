#[tokio::main]
async fn main() -> anyhow::Result<()> {
    contactd::run().await
}
