use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidEndpoint { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidEndpoint { input } => {
                write!(f, "invalid endpoint (expected absolute http(s) URL): {input}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
