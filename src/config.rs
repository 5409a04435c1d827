use dotenvy::dotenv;
use eyre::Result;
use std::{env, time::Duration};
use tracing::info;

#[derive(Debug, Clone)]
pub struct Config {
    pub backend_url: String,
    pub port: u16,
    pub fetch_timeout: Duration,   // deadline for each outbound call
    pub request_timeout: Duration, // deadline for a whole inbound request
}

pub fn load() -> Result<Config> {
    dotenv().ok(); // Load from .env file

    // Base URL of the remote data source (default: the bundled mock backend)
    let backend_url =
        env::var("BACKEND_URL").unwrap_or_else(|_| "http://127.0.0.1:4000".to_string());

    // API port (default: 8080)
    let port = match env::var("PORT") {
        Ok(raw) => raw.parse().unwrap_or(8080),
        Err(_) => {
            info!("No port set. Setting port to 8080.");
            8080
        }
    };

    // Per outbound call deadline in seconds (default: 15)
    let fetch_timeout_secs: u64 = env::var("FETCH_TIMEOUT_SECS")
        .unwrap_or_else(|_| "15".to_string())
        .parse()
        .unwrap_or(15);

    // Whole inbound request deadline in seconds (default: 200)
    let request_timeout_secs: u64 = env::var("REQUEST_TIMEOUT_SECS")
        .unwrap_or_else(|_| "200".to_string())
        .parse()
        .unwrap_or(200);

    let cfg = Config {
        backend_url,
        port,
        fetch_timeout: Duration::from_secs(fetch_timeout_secs),
        request_timeout: Duration::from_secs(request_timeout_secs),
    };

    info!("Loaded config: {:?}", cfg);

    Ok(cfg)
}
