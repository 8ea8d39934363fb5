use dotenvy::dotenv;
use std::env;

pub struct Config {
    /// Prefix of the `X-<app_name>-alert` family of response headers.
    pub app_name: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let app_name = match env::var("HOCKEYHERO_APP_NAME") {
            Ok(val) if !val.trim().is_empty() => val,
            _ => "hockeyheroApp".to_string(),
        };

        let port = match env::var("HOCKEYHERO_PORT") {
            Ok(val) => val.parse::<u16>().unwrap_or(8080),
            Err(_) => 8080,
        };

        Self { app_name, port }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: "hockeyheroApp".to_string(),
            port: 8080,
        }
    }
}
