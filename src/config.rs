use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_DATA_FILE: &str = "data/recipe-data.csv";
const TEST_DATA_FILE: &str = "data/test-recipe-data.csv";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub data_file: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let host = env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("APP_PORT must be a valid u16")?;

        Ok(Self {
            host,
            port,
            data_file: resolve_data_file(),
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// Test runs always use the fixed fixture file; everything else honours
// DATA_FILE before falling back to the bundled dataset.
fn resolve_data_file() -> PathBuf {
    let test_mode = env::var("APP_ENV").is_ok_and(|value| value.eq_ignore_ascii_case("test"));
    if test_mode {
        return PathBuf::from(TEST_DATA_FILE);
    }

    env::var("DATA_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_FILE))
}
