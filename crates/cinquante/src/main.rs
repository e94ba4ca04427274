use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    cinquante_lib::main().await
}
