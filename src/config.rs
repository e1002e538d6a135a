use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the SQLite database file
    pub database_path: String,

    /// Digest used in the openssl commands shown to publishers
    pub certificate_digest: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file (ignored when absent, e.g. in production)
        let _ = dotenvy::dotenv();

        Ok(Self {
            database_path: std::env::var("APPSTORE_DATABASE_PATH")
                .context("APPSTORE_DATABASE_PATH not set")?,

            certificate_digest: std::env::var("CERTIFICATE_DIGEST")
                .unwrap_or_else(|_| "sha512".to_string()),
        })
    }
}
