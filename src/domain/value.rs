use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::validation::ValidationError;

#[derive(Clone, PartialEq, Eq, Hash)]
/// Panel API key (`key`).
///
/// Invariant: not blank. The token is opaque and kept exactly as given; `Debug` output
/// is redacted.
pub struct ApiKey(String);

impl ApiKey {
    /// Form field name used by SMM panels (`key`).
    pub const FIELD: &'static str = "key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the key as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Panel API endpoint, e.g. `https://panel.example/api/v2`.
///
/// Invariant: absolute `http` or `https` URL with a host.
pub struct Endpoint(Url);

impl Endpoint {
    /// Parse and validate an endpoint URL.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, ValidationError> {
        let input = input.as_ref().trim();
        if input.is_empty() {
            return Err(ValidationError::Empty { field: "endpoint" });
        }
        let url = Url::parse(input).map_err(|_| ValidationError::InvalidEndpoint {
            input: input.to_owned(),
        })?;
        Self::try_from(url)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }
}

impl TryFrom<Url> for Endpoint {
    type Error = ValidationError;

    fn try_from(url: Url) -> Result<Self, Self::Error> {
        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return Err(ValidationError::InvalidEndpoint {
                input: url.to_string(),
            });
        }
        Ok(Self(url))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
/// Panel order id (`order`), as returned by `add`.
///
/// Invariant: non-empty after trimming.
pub struct OrderId(String);

impl OrderId {
    /// Form field name for a single order (`order`).
    pub const FIELD: &'static str = "order";
    /// Form field name for a comma-joined order list (`orders`).
    pub const LIST_FIELD: &'static str = "orders";

    /// Create a validated [`OrderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated order id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for OrderId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl TryFrom<String> for OrderId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OrderId> for String {
    fn from(value: OrderId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
/// Panel refill id (`refill`), as returned by `refill`.
///
/// Invariant: non-empty after trimming.
pub struct RefillId(String);

impl RefillId {
    /// Form field name for a single refill (`refill`).
    pub const FIELD: &'static str = "refill";
    /// Form field name for a comma-joined refill list (`refills`).
    pub const LIST_FIELD: &'static str = "refills";

    /// Create a validated [`RefillId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated refill id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for RefillId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl TryFrom<String> for RefillId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RefillId> for String {
    fn from(value: RefillId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
/// Panel service id (`service`), as listed by `services`.
///
/// Invariant: non-empty after trimming.
pub struct ServiceId(String);

impl ServiceId {
    /// Form field name used by SMM panels (`service`).
    pub const FIELD: &'static str = "service";

    /// Create a validated [`ServiceId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated service id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for ServiceId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl TryFrom<String> for ServiceId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ServiceId> for String {
    fn from(value: ServiceId) -> Self {
        value.0
    }
}
