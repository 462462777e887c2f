use crate::error::{Result, TemplateMatchError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use template_match_common::{ScoringPolicy, DEFAULT_EXACT_WEIGHT, DEFAULT_PHRASE_WEIGHT};

/// カタログパスを上書きする環境変数
pub const CATALOG_ENV: &str = "TEMPLATE_MATCH_CATALOG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog_path: Option<PathBuf>,
    pub exact_weight: u32,
    pub phrase_weight: u32,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            exact_weight: DEFAULT_EXACT_WEIGHT,
            phrase_weight: DEFAULT_PHRASE_WEIGHT,
            log_level: "warn".into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| TemplateMatchError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("template-match").join("config.json"))
    }

    /// 既定のカタログパス（環境変数を優先）
    pub fn catalog_path(&self) -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CATALOG_ENV) {
            if !path.trim().is_empty() {
                return Some(PathBuf::from(path));
            }
        }

        self.catalog_path.clone()
    }

    pub fn set_catalog_path(&mut self, path: PathBuf) -> Result<()> {
        self.catalog_path = Some(path);
        self.save()
    }

    pub fn policy(&self) -> ScoringPolicy {
        ScoringPolicy {
            exact_weight: self.exact_weight,
            phrase_weight: self.phrase_weight,
        }
    }
}
