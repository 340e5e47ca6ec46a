use std::{net::SocketAddr, time::Duration};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub data_file: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub refresh_interval: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("PF_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3001".to_string())
            .parse()
            .expect("Invalid PF_LISTEN_ADDR");
        let data_file =
            std::env::var("PF_DATA_FILE").unwrap_or_else(|_| "./data/portfolio.json".into());
        let cors_allow = std::env::var("PF_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("PF_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        // Quote refresh cadence; 15 minutes keeps providers happy.
        let refresh_secs: u64 = std::env::var("PF_REFRESH_INTERVAL_SECS")
            .unwrap_or_else(|_| "900".into())
            .parse()
            .unwrap_or(900);
        Self {
            listen_addr,
            data_file,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            refresh_interval: Duration::from_secs(refresh_secs),
        }
    }
}
