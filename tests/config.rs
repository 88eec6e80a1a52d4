use artbot::ai::config::{AiConfig, DEFAULT_MODEL, DEFAULT_OLLAMA_URL};
use artbot::met::MET_BASE_URL;
use artbot::Config;
use serial_test::serial;

#[test]
#[serial]
fn ai_config_defaults() {
    std::env::remove_var("OLLAMA_URL");
    std::env::remove_var("OLLAMA_MODEL");
    let cfg = AiConfig::from_env();
    assert_eq!(cfg.base_url, DEFAULT_OLLAMA_URL);
    assert_eq!(cfg.model, DEFAULT_MODEL);
    assert!((cfg.temperature - 0.3).abs() < f32::EPSILON);
    assert!((cfg.top_p - 0.9).abs() < f32::EPSILON);
}

#[test]
#[serial]
fn ai_config_env_overrides() {
    std::env::set_var("OLLAMA_URL", "http://ollama.internal:11434");
    std::env::set_var("OLLAMA_MODEL", "llama3.2:1b");
    let cfg = AiConfig::from_env();
    assert_eq!(cfg.base_url, "http://ollama.internal:11434");
    assert_eq!(cfg.model, "llama3.2:1b");
    std::env::remove_var("OLLAMA_URL");
    std::env::remove_var("OLLAMA_MODEL");
}

#[test]
#[serial]
fn config_from_env_defaults() {
    std::env::remove_var("DB_URL");
    std::env::remove_var("MET_API_URL");
    std::env::remove_var("OLLAMA_URL");
    std::env::remove_var("OLLAMA_MODEL");
    let cfg = Config::from_env();
    assert_eq!(cfg.db_url, "sqlite:artbot.db");
    assert_eq!(cfg.met_base_url, MET_BASE_URL);
    assert_eq!(cfg.ai.model, DEFAULT_MODEL);
}

#[test]
#[serial]
fn config_from_env_custom_values() {
    std::env::set_var("DB_URL", "sqlite:test.db");
    std::env::set_var("MET_API_URL", "http://met.local");
    let cfg = Config::from_env();
    assert_eq!(cfg.db_url, "sqlite:test.db");
    assert_eq!(cfg.met_base_url, "http://met.local");
    std::env::remove_var("DB_URL");
    std::env::remove_var("MET_API_URL");
}
