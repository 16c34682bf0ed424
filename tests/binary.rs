use std::process::{Command, Output};

use storage_properties::vars;

fn run_with(pairs: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_storage-properties"));
    for name in vars::ALL {
        cmd.env_remove(name);
    }
    cmd.env("RUST_LOG", "info").envs(pairs.iter().copied());
    cmd.output().expect("failed to run storage-properties")
}

#[test]
fn unknown_storage_type_exits_with_status_2() {
    let output = run_with(&[("STORAGE_TYPE", "bogus")]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown STORAGE_TYPE \"bogus\""), "{stderr}");
}

#[test]
fn missing_bucket_for_s3_warns() {
    let output = run_with(&[("STORAGE_TYPE", "s3")]);
    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("S3_BUCKET is not set"), "{stderr}");
}

#[test]
fn missing_host_for_postgres_warns() {
    let output = run_with(&[("STORAGE_TYPE", "postgres"), ("S3_BUCKET", "uploads")]);
    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("RDS_HOST is not set"), "{stderr}");
}

#[test]
fn complete_config_runs_clean() {
    let output = run_with(&[
        ("STORAGE_TYPE", "s3"),
        ("S3_BUCKET", "uploads"),
        ("PROD_DB_PASSWORD", "prod-secret"),
    ]);
    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("is not set"), "{stderr}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("uploads"));
    assert!(!stdout.contains("prod-secret"));
}
