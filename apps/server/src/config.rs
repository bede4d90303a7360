use anyhow::Context;
use std::{net::SocketAddr, path::PathBuf, time::Duration};

use finmirror_sheets::DEFAULT_BASE_URL;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub settings_file: PathBuf,
    pub data_file: PathBuf,
    /// Period of the background export. Disabled when unset.
    pub export_interval: Option<Duration>,
    pub sheets_api_url: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("FM_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid FM_LISTEN_ADDR")?;
        let settings_file = std::env::var("FM_SETTINGS_FILE")
            .unwrap_or_else(|_| "./config/settings.yml".into())
            .into();
        let data_file = std::env::var("FM_DATA_FILE")
            .unwrap_or_else(|_| "./data/snapshot.json".into())
            .into();
        let export_interval = match std::env::var("FM_EXPORT_INTERVAL_SECS") {
            Ok(secs) => {
                let secs: u64 = secs
                    .trim()
                    .parse()
                    .context("Invalid FM_EXPORT_INTERVAL_SECS")?;
                (secs > 0).then(|| Duration::from_secs(secs))
            }
            Err(_) => None,
        };
        let sheets_api_url =
            std::env::var("FM_SHEETS_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let cors_allow = std::env::var("FM_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        // An export batch reads and writes every sheet sequentially.
        let timeout_ms: u64 = std::env::var("FM_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "300000".into())
            .parse()
            .unwrap_or(300_000);
        Ok(Self {
            listen_addr,
            settings_file,
            data_file,
            export_interval,
            sheets_api_url,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
        })
    }
}
