use anyhow::Context;

extern crate dotenv;
use dotenv::dotenv;
use std::env;

pub struct HttpConfig {
    pub host: String,
    pub port: u16,
}

impl HttpConfig {
    pub fn get_addr(&self) -> (&str, u16) {
        (&self.host, self.port)
    }
}

pub fn get_http_config() -> Result<HttpConfig, anyhow::Error> {
    // Load the environmental variables from .env file
    dotenv().ok();

    let host = env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("HTTP_PORT")
        .unwrap_or_else(|_| "8081".to_string())
        .parse::<u16>()
        .context("Could not parse HTTP_PORT. Please provide a valid, non-negative integer between 0 and 65535.")?;

    Ok(HttpConfig { host, port })
}
