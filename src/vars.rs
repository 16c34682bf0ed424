//! Names of every environment variable read by [`AppConfig`](crate::app_config::AppConfig).

/// Selects the storage backend, `postgres` or `s3`.
pub const STORAGE_TYPE: &str = "STORAGE_TYPE";

/// Bucket used when the storage backend is `s3`.
pub const S3_BUCKET: &str = "S3_BUCKET";

/// Enables writes to AWS. Only the exact value `True` turns it on.
pub const WRITE_TO_AWS: &str = "WRITE_TO_AWS";

/// Postgres host used when the storage backend is `postgres`.
pub const RDS_HOST: &str = "RDS_HOST";

pub const PROD_DB_PASSWORD: &str = "PROD_DB_PASSWORD";

pub const LOCAL_DB_PASSWORD: &str = "LOCAL_DB_PASSWORD";

/// All of the above, in the order they are read.
pub const ALL: [&str; 6] = [
    STORAGE_TYPE,
    S3_BUCKET,
    WRITE_TO_AWS,
    RDS_HOST,
    PROD_DB_PASSWORD,
    LOCAL_DB_PASSWORD,
];
