// Runtime configuration, loaded from config.toml and VELORA_* environment
// variables via the 'config' crate.

use anyhow::Result;
use config::{Config, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub server_address: String,
    /// Base URL of the external prediction service.
    pub predictor_base_url: String,
    /// Optional path to a catalog JSON file overriding the embedded one.
    pub catalog_path: Option<String>,
}

impl Settings {
    pub fn new() -> Result<Self> {
        dotenv::dotenv().ok(); // Load .env file if present

        let builder = Config::builder()
            .set_default("server_address", "127.0.0.1:3000")?
            .set_default("predictor_base_url", "http://localhost:5000")?
            // Load from a configuration file (e.g., config.toml)
            .add_source(File::with_name("config").required(false))
            // Load from environment variables (e.g., VELORA_PREDICTOR_BASE_URL)
            .add_source(Environment::with_prefix("VELORA").separator("__"));

        let settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }
}
