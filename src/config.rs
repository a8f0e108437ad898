use anyhow::{Context, Result};
use clap::Parser;
use std::env;

/// Centralized application configuration.
/// Combines environment variables and CLI arguments; read-only for the
/// process lifetime once built.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub bucket: String,
    pub region: String,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    pub endpoint: Option<String>,
    pub public_read_uploads: bool,
    pub app_env: String,
}

/// Command-line + environment configuration.
#[derive(Parser, Debug)]
#[command(author, version, about = "S3 file gateway API")]
pub struct Args {
    /// Host to bind to (overrides HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Bucket to serve (overrides S3_BUCKET_NAME)
    #[arg(long)]
    pub bucket: Option<String>,

    /// Bucket region (overrides S3_REGION)
    #[arg(long)]
    pub region: Option<String>,

    /// Custom S3-compatible endpoint (overrides S3_ENDPOINT_URL)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Request public-read visibility on uploaded objects
    /// (overrides UPLOAD_PUBLIC_READ)
    #[arg(long)]
    pub public_read_uploads: bool,
}

impl AppConfig {
    /// Parse environment variables + CLI args into AppConfig.
    pub fn from_env_and_args() -> Result<Self> {
        // Parse CLI once
        let args = Args::parse();

        // --- Environment fallback ---
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "production".into());

        // Development binds loopback by default; anything else binds wide.
        let default_host = if app_env == "development" {
            "127.0.0.1"
        } else {
            "0.0.0.0"
        };
        let env_host = env::var("HOST").unwrap_or_else(|_| default_host.into());

        let env_port = match env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("parsing PORT value `{}`", value))?,
            Err(env::VarError::NotPresent) => 3000,
            Err(err) => return Err(err).context("reading PORT"),
        };

        let bucket = match args.bucket {
            Some(bucket) => bucket,
            None => env::var("S3_BUCKET_NAME").context("S3_BUCKET_NAME must be set")?,
        };
        let env_region = env::var("S3_REGION").unwrap_or_else(|_| "us-east-1".into());

        let access_key = env::var("AWS_ACCESS_KEY").ok().filter(|v| !v.is_empty());
        let secret_key = env::var("AWS_SECRET_KEY").ok().filter(|v| !v.is_empty());
        let env_endpoint = env::var("S3_ENDPOINT_URL").ok().filter(|v| !v.is_empty());

        let env_public_read = env::var("UPLOAD_PUBLIC_READ")
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        // --- Merge ---
        Ok(Self {
            host: args.host.unwrap_or(env_host),
            port: args.port.unwrap_or(env_port),
            bucket,
            region: args.region.unwrap_or(env_region),
            access_key,
            secret_key,
            endpoint: args.endpoint.or(env_endpoint),
            public_read_uploads: args.public_read_uploads || env_public_read,
            app_env,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
