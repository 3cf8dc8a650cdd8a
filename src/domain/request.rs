use std::collections::BTreeMap;
use std::fmt;

use crate::domain::validation::ValidationError;
use crate::domain::value::ServiceId;

/// Actions understood by standard SMM panels (API v2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Services,
    Balance,
    Status,
    Refill,
    RefillStatus,
    Cancel,
    Add,
}

impl Action {
    /// Form field name carrying the action (`action`).
    pub const FIELD: &'static str = "action";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Services => "services",
            Self::Balance => "balance",
            Self::Status => "status",
            Self::Refill => "refill",
            Self::RefillStatus => "refill_status",
            Self::Cancel => "cancel",
            Self::Add => "add",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scalar request parameter value.
///
/// Values are sent using their default textual representation (`Display`), with no
/// locale-specific formatting.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Text(String),
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Int(value) => write!(f, "{value}"),
            Self::UInt(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
        }
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::UInt(value.into())
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Request parameters: name to optional scalar.
///
/// Absent values are kept in the map but never encoded, so callers can pass optional
/// fields through unconditionally. Names are unique; setting a name twice keeps the
/// last value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(BTreeMap<String, Option<ParamValue>>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a present value.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, Some(value.into()));
        self
    }

    /// Set a value that may be absent.
    pub fn with_optional<V: Into<ParamValue>>(
        mut self,
        name: impl Into<String>,
        value: Option<V>,
    ) -> Self {
        self.insert(name, value.map(Into::into));
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Option<ParamValue>) {
        self.0.insert(name.into(), value);
    }

    /// Present value for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name).and_then(Option::as_ref)
    }

    /// Number of entries, absent ones included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Present entries in name order.
    pub fn present(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0
            .iter()
            .filter_map(|(name, value)| value.as_ref().map(|value| (name.as_str(), value)))
    }
}

/// Optional fields of an `add` request.
///
/// `comments` is sent only when non-empty; `runs` and `interval` (drip-feed) only
/// when greater than zero.
#[derive(Debug, Clone, Default)]
pub struct AddOrderOptions {
    pub comments: Option<String>,
    pub runs: Option<u32>,
    pub interval: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct AddOrder {
    service: ServiceId,
    link: String,
    quantity: u64,
    options: AddOrderOptions,
}

impl AddOrder {
    pub const LINK_FIELD: &'static str = "link";
    pub const QUANTITY_FIELD: &'static str = "quantity";
    pub const COMMENTS_FIELD: &'static str = "comments";
    pub const RUNS_FIELD: &'static str = "runs";
    pub const INTERVAL_FIELD: &'static str = "interval";

    pub fn new(
        service: ServiceId,
        link: impl Into<String>,
        quantity: u64,
        options: AddOrderOptions,
    ) -> Result<Self, ValidationError> {
        let link = link.into();
        if link.trim().is_empty() {
            return Err(ValidationError::Empty {
                field: Self::LINK_FIELD,
            });
        }
        Ok(Self {
            service,
            link,
            quantity,
            options,
        })
    }

    pub fn service(&self) -> &ServiceId {
        &self.service
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn options(&self) -> &AddOrderOptions {
        &self.options
    }
}
