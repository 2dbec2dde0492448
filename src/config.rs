use crate::model::ConfigError;
use crate::similarity::SimilarityKind;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub banned_list_path: String,
    pub output_path: String,
    pub log_path: String,
    pub request_timeout_seconds: u64,
    pub user_agent: String,
    pub name_similarity: SimilarityKind,
    pub onefootball_url: String,
    pub wheresthematch_url: String,
    pub daddylive_url: String,
    pub daddylive_referer: String,
    pub allfootball_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            banned_list_path: "banned.txt".into(),
            output_path: "matches.txt".into(),
            log_path: "matches.log".into(),
            request_timeout_seconds: 15,
            user_agent: "Mozilla/5.0".into(),
            name_similarity: SimilarityKind::Indel,
            onefootball_url: "https://onefootball.com/en/matches".into(),
            wheresthematch_url: "https://www.wheresthematch.com/football-today/".into(),
            daddylive_url: "https://daddylivestream.com/schedule/schedule-generated.php".into(),
            daddylive_referer: "https://daddylivestream.com/".into(),
            allfootball_url: "https://m.allfootballapp.com/matchs".into(),
        }
    }
}

pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOrigin {
    File,
    Defaults,
}

/// Like [`load_config`], but an absent file means defaults.
/// Runs before logging is up, so the caller reports the origin.
pub fn load_config_or_default(path: &str) -> Result<(AppConfig, ConfigOrigin), ConfigError> {
    if !Path::new(path).exists() {
        return Ok((AppConfig::default(), ConfigOrigin::Defaults));
    }
    Ok((load_config(path)?, ConfigOrigin::File))
}
