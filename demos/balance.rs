use std::io;

use smmpanel::{ApiKey, Endpoint, SmmClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_url = std::env::var("SMM_API_URL").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMM_API_URL environment variable is required",
        )
    })?;
    let api_key = std::env::var("SMM_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMM_API_KEY environment variable is required",
        )
    })?;

    let client = SmmClient::new(Endpoint::parse(api_url)?, ApiKey::new(api_key)?);
    let balance = client.balance().await?;

    println!(
        "balance: {}, currency: {}",
        balance.get("balance").cloned().unwrap_or_default(),
        balance.get("currency").cloned().unwrap_or_default()
    );

    Ok(())
}
