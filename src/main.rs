use std::process;

use log::{error, info, warn};

use storage_properties::app_config::{AppConfig, StorageBackend};
use storage_properties::logger::init_log;
use storage_properties::vars;

fn main() {
    dotenv::dotenv().ok();
    init_log();

    let config = AppConfig::from_env();
    println!("Loaded config {:?}", config);

    match config.storage_backend() {
        Ok(Some(backend)) => {
            info!("Storage backend: {}", backend);
            check_backend_settings(&config, backend);
        }
        Ok(None) => warn!("{} is not set, no storage backend selected", vars::STORAGE_TYPE),
        Err(err) => {
            error!("{}", err);
            process::exit(2);
        }
    }

    if config.write_to_aws {
        info!("Writes to AWS are enabled");
    }
}

fn check_backend_settings(config: &AppConfig, backend: StorageBackend) {
    let (name, value) = match backend {
        StorageBackend::S3 => (vars::S3_BUCKET, &config.s3_bucket),
        StorageBackend::Postgres => (vars::RDS_HOST, &config.rds_host),
    };
    if value.is_none() {
        warn!("{} is not set but storage backend is {}", name, backend);
    }
}
