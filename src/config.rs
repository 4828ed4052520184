use anyhow::{Context, Result};
use clap::Parser;
use std::env;

/// Centralized application configuration.
/// Combines environment variables and CLI arguments.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub region: String,
    pub profile: Option<String>,
    pub bucket: String,
    pub upload_expiry_secs: u64,
    pub download_expiry_secs: u64,
}

/// Command-line + environment configuration.
#[derive(Parser, Debug)]
#[command(author, version, about = "Presigned-URL asset upload API")]
pub struct Args {
    /// Host to bind to (overrides ASSET_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides ASSET_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// AWS region of the asset bucket (overrides ASSET_REGION)
    #[arg(long)]
    pub region: Option<String>,

    /// Shared credentials profile (overrides ASSET_PROFILE)
    #[arg(long)]
    pub profile: Option<String>,

    /// S3 bucket holding uploaded assets (overrides ASSET_BUCKET)
    #[arg(long)]
    pub bucket: Option<String>,

    /// Upload URL lifetime in seconds (overrides ASSET_UPLOAD_EXPIRY_SECS)
    #[arg(long)]
    pub upload_expiry_secs: Option<u64>,

    /// Default download URL lifetime in seconds (overrides ASSET_DOWNLOAD_EXPIRY_SECS)
    #[arg(long)]
    pub download_expiry_secs: Option<u64>,
}

impl AppConfig {
    /// Parse environment variables + CLI args into AppConfig.
    pub fn from_env_and_args() -> Result<Self> {
        // Parse CLI once
        let args = Args::parse();

        // --- Environment fallback ---
        let env_host = env::var("ASSET_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let env_port = match env::var("ASSET_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("parsing ASSET_PORT value `{}`", value))?,
            Err(env::VarError::NotPresent) => 3000,
            Err(err) => return Err(err).context("reading ASSET_PORT"),
        };
        let env_region = env::var("ASSET_REGION").unwrap_or_else(|_| "us-east-1".into());
        let env_profile = env::var("ASSET_PROFILE").ok();
        let env_bucket = env::var("ASSET_BUCKET").ok();
        let env_upload_expiry = parse_expiry("ASSET_UPLOAD_EXPIRY_SECS", 900)?;
        let env_download_expiry = parse_expiry("ASSET_DOWNLOAD_EXPIRY_SECS", 60)?;

        // --- Merge ---
        let cfg = Self {
            host: args.host.unwrap_or(env_host),
            port: args.port.unwrap_or(env_port),
            region: args.region.unwrap_or(env_region),
            profile: args.profile.or(env_profile),
            bucket: args
                .bucket
                .or(env_bucket)
                .context("no bucket configured: set ASSET_BUCKET or pass --bucket")?,
            upload_expiry_secs: args.upload_expiry_secs.unwrap_or(env_upload_expiry),
            download_expiry_secs: args.download_expiry_secs.unwrap_or(env_download_expiry),
        };

        Ok(cfg)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_expiry(var: &str, default: u64) -> Result<u64> {
    match env::var(var) {
        Ok(value) => value
            .parse::<u64>()
            .with_context(|| format!("parsing {} value `{}`", var, value)),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(err) => Err(err).with_context(|| format!("reading {}", var)),
    }
}
