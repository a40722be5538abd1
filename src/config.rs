use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub owner: String,
    pub max_body_size: usize,
    pub log_level: String,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host: IpAddr = env_or("PORTFOLIO_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid PORTFOLIO_HOST: {e}"))?;

        let port: u16 = env_or("PORTFOLIO_PORT", "8000")
            .parse()
            .map_err(|e| format!("Invalid PORTFOLIO_PORT: {e}"))?;

        let owner = env_or("PORTFOLIO_OWNER", "Portfolio Owner");

        let max_body_size: usize = env_or("PORTFOLIO_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid PORTFOLIO_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("PORTFOLIO_LOG_LEVEL", "info");

        // Both optional: without DATABASE_URL the server runs with
        // persistence disabled.
        let database_url = std::env::var("DATABASE_URL").ok();
        let database_name = std::env::var("DATABASE_NAME").ok();

        Ok(Config {
            host,
            port,
            owner,
            max_body_size,
            log_level,
            database_url,
            database_name,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
