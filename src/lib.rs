//! Typed Rust client for SMM panel HTTP APIs.
//!
//! SMM panels expose a single endpoint that takes form-encoded POST requests with an
//! `action` field and answers with JSON: an object, an array, or `{"error": "..."}`.
//! The crate is split into a domain layer of strong types, a transport layer for the
//! wire format (form encoding and response interpretation), and a small client layer
//! that performs the HTTP call.
//!
//! ```rust,no_run
//! use smmpanel::{AddOrder, AddOrderOptions, ApiKey, Endpoint, ServiceId, SmmClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), smmpanel::SmmError> {
//!     let client = SmmClient::new(
//!         Endpoint::parse("https://panel.example/api/v2")?,
//!         ApiKey::new("...")?,
//!     );
//!     let balance = client.balance().await?;
//!     println!("balance: {}", balance["balance"]);
//!
//!     let request = AddOrder::new(
//!         ServiceId::from(1),
//!         "https://example.com/post",
//!         100,
//!         AddOrderOptions::default(),
//!     )?;
//!     match client.add_order(&request).await {
//!         Ok(order) => println!("order: {}", order["order"]),
//!         Err(err) if err.is_api_error() => eprintln!("rejected: {err}"),
//!         Err(err) => return Err(err),
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    DEFAULT_USER_AGENT, RawResponse, SmmClient, SmmClientBuilder, SmmError, TransportError,
};
pub use domain::{
    Action, AddOrder, AddOrderOptions, ApiKey, Endpoint, JsonKind, JsonList, JsonObject, OrderId,
    ParamValue, Params, RefillId, ServiceId, ValidationError,
};
pub use transport::{ResponseError, encode_form, interpret_list, interpret_object};
