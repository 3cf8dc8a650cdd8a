use std::io;

use smmpanel::{ApiKey, Endpoint, OrderId, SmmClient};

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
    let orders_raw = std::env::var("SMM_ORDERS").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMM_ORDERS environment variable is required (comma-separated ids)",
        )
    })?;

    let orders = orders_raw
        .split(',')
        .map(OrderId::new)
        .collect::<Result<Vec<_>, _>>()?;

    let client = SmmClient::new(Endpoint::parse(api_url)?, ApiKey::new(api_key)?);
    if let [order] = orders.as_slice() {
        let status = client.order_status(order).await?;
        println!("{}: {:?}", order.as_str(), status);
    } else {
        let statuses = client.multi_order_status(&orders).await?;
        for (order, status) in &statuses {
            println!("{order}: {status}");
        }
    }

    Ok(())
}
