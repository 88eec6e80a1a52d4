use std::env;

use crate::ai::config::AiConfig;
use crate::met::MET_BASE_URL;

#[derive(Clone)]
pub struct Config {
    pub db_url: String,
    pub met_base_url: String,
    pub ai: AiConfig,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let db_url = env::var("DB_URL").unwrap_or_else(|_| "sqlite:artbot.db".to_string());
        let met_base_url = env::var("MET_API_URL").unwrap_or_else(|_| MET_BASE_URL.to_string());
        let ai = AiConfig::from_env();
        Self {
            db_url,
            met_base_url,
            ai,
        }
    }
}
