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
    let services = client.services().await?;

    for service in &services {
        println!(
            "{:>6}  {}  (rate {}, min {}, max {})",
            service["service"], service["name"], service["rate"], service["min"], service["max"]
        );
    }
    println!("{} services", services.len());

    Ok(())
}
