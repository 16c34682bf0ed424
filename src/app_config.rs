use std::{env, fmt, str::FromStr};

use crate::error::ConfigError;
use crate::vars;

/// Snapshot of the storage settings in the environment.
///
/// Values are read once when the snapshot is built and never change
/// afterwards. Unset variables are `None`; nothing here is validated.
#[derive(PartialEq, Eq, Clone, Default)]
pub struct AppConfig {
    pub storage_type: Option<String>,
    pub s3_bucket: Option<String>,
    pub write_to_aws: bool,
    pub rds_host: Option<String>,
    pub prod_db_password: Option<String>,
    pub local_db_password: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        // Non-unicode values count as unset.
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the snapshot from `lookup`, which is called once per name in
    /// [`vars::ALL`] and for nothing else.
    pub fn from_lookup<F>(mut lookup: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let storage_type = lookup(vars::STORAGE_TYPE);
        let s3_bucket = lookup(vars::S3_BUCKET);
        let write_to_aws = parse_write_flag(lookup(vars::WRITE_TO_AWS).as_deref());
        let rds_host = lookup(vars::RDS_HOST);
        let prod_db_password = lookup(vars::PROD_DB_PASSWORD);
        let local_db_password = lookup(vars::LOCAL_DB_PASSWORD);
        AppConfig {
            storage_type,
            s3_bucket,
            write_to_aws,
            rds_host,
            prod_db_password,
            local_db_password,
        }
    }

    /// Typed view of `storage_type`. `Ok(None)` when it is unset.
    pub fn storage_backend(&self) -> Result<Option<StorageBackend>, ConfigError> {
        self.storage_type
            .as_deref()
            .map(StorageBackend::from_str)
            .transpose()
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("storage_type", &self.storage_type)
            .field("s3_bucket", &self.s3_bucket)
            .field("write_to_aws", &self.write_to_aws)
            .field("rds_host", &self.rds_host)
            .field("prod_db_password", &redact(&self.prod_db_password))
            .field("local_db_password", &redact(&self.local_db_password))
            .finish()
    }
}

fn redact(secret: &Option<String>) -> Option<&'static str> {
    secret.as_ref().map(|_| "[REDACTED]")
}

/// `true` only for the exact string `True`.
pub fn parse_write_flag(raw: Option<&str>) -> bool {
    raw == Some("True")
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum StorageBackend {
    Postgres,
    S3,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::Postgres => "postgres",
            StorageBackend::S3 => "s3",
        }
    }
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "postgres" => Ok(StorageBackend::Postgres),
            "s3" => Ok(StorageBackend::S3),
            other => Err(ConfigError::UnknownStorageType(other.to_string())),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
