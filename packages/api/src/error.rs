use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    InvalidPort(String),
    InvalidHost(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::InvalidPort(value) => write!(f, "Invalid PORT value: {}", value),
            ConfigError::InvalidHost(value) => write!(f, "Invalid HOST value: {}", value),
        }
    }
}

impl std::error::Error for ConfigError {}
