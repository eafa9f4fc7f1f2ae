//! Shared test utilities and mock infrastructure.

#![allow(dead_code)]

pub mod mock_upstream;

use std::path::PathBuf;

use tempfile::TempDir;

/// Write `content` to a config file inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// A v3.1-shaped country record as upstream would serve it.
pub fn upstream_record(cca2: &str, common: &str, region: &str) -> serde_json::Value {
    serde_json::json!({
        "name": { "common": common, "official": format!("Official {common}") },
        "cca2": cca2,
        "flags": { "svg": format!("https://flagcdn.com/{}.svg", cca2.to_lowercase()) },
        "idd": { "root": "+9", "suffixes": ["9"] },
        "region": region,
        "population": 1000
    })
}
