use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown STORAGE_TYPE {0:?}, expected \"postgres\" or \"s3\"")]
    UnknownStorageType(String),
}
