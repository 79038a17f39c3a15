use std::env;
use std::path::PathBuf;

/// Server configuration derived from environment variables.
#[derive(Debug, Clone)]
pub struct CalcConfig {
    pub bind: String,
    pub port: u16,
    /// Directory holding the calculator UI (index.html and assets).
    pub static_dir: PathBuf,
}

fn env_str(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn env_u16(name: &str, default: u16) -> u16 {
    env::var(name)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

fn env_path(name: &str, default: &str) -> PathBuf {
    PathBuf::from(env_str(name, default))
}

impl CalcConfig {
    pub fn from_env() -> Self {
        Self {
            bind: env_str("QUICKCALC_BIND", "0.0.0.0"),
            port: env_u16("QUICKCALC_PORT", 8080),
            static_dir: env_path("QUICKCALC_STATIC_DIR", "static"),
        }
    }
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 8080,
            static_dir: PathBuf::from("static"),
        }
    }
}
