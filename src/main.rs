use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    artbot::run().await
}
