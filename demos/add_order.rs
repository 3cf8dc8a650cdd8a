use std::io;

use smmpanel::{AddOrder, AddOrderOptions, ApiKey, Endpoint, ServiceId, SmmClient};

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
    let service = std::env::var("SMM_SERVICE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMM_SERVICE environment variable is required",
        )
    })?;
    let link = std::env::var("SMM_LINK").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMM_LINK environment variable is required",
        )
    })?;
    let quantity = std::env::var("SMM_QUANTITY")
        .unwrap_or_else(|_| "100".to_owned())
        .parse::<u64>()?;
    let comments = std::env::var("SMM_COMMENTS").ok();

    let client = SmmClient::new(Endpoint::parse(api_url)?, ApiKey::new(api_key)?);
    let request = AddOrder::new(
        ServiceId::new(service)?,
        link,
        quantity,
        AddOrderOptions {
            comments,
            ..Default::default()
        },
    )?;

    match client.add_order(&request).await {
        Ok(order) => println!("order: {}", order.get("order").cloned().unwrap_or_default()),
        Err(err) if err.is_api_error() => println!("panel rejected the order: {err}"),
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
