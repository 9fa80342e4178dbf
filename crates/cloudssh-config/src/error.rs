use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Error while reading config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Missing {key} for {account} cloud account")]
    MissingKey { account: String, key: &'static str },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
