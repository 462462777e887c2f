//! カタログ読み込みモジュール
//!
//! 優先順位: `--catalog` 指定 → 環境変数 → 設定ファイル → 組み込みカタログ

use crate::config::Config;
use crate::error::{Result, TemplateMatchError};
use std::path::Path;
use template_match_common::Catalog;

/// ファイルからカタログを読み込み（拡張子で形式を判定）
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        return Err(TemplateMatchError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    let catalog = match extension.as_deref() {
        Some("json") => Catalog::from_json(&content)
            .map_err(|e| TemplateMatchError::InvalidCatalog(format!("{}: {}", path.display(), e)))?,
        Some("csv") => Catalog::from_csv_str(&content)
            .map_err(|e| TemplateMatchError::InvalidCatalog(format!("{}: {}", path.display(), e)))?,
        _ => {
            return Err(TemplateMatchError::InvalidCatalog(format!(
                "未対応の形式です（json/csv）: {}",
                path.display()
            )))
        }
    };

    tracing::info!("カタログ読み込み: {} ({}件)", path.display(), catalog.len());
    Ok(catalog)
}

/// 指定パス・設定からカタログを決定
pub fn resolve_catalog(explicit: Option<&Path>, config: &Config) -> Result<Catalog> {
    if let Some(path) = explicit {
        return load_catalog(path);
    }

    match config.catalog_path() {
        Some(path) => load_catalog(&path),
        None => {
            tracing::debug!("カタログ未指定のため組み込みカタログを使用");
            Ok(Catalog::builtin())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file() {
        let result = load_catalog(Path::new("/nonexistent/catalog.json"));
        assert!(matches!(result, Err(TemplateMatchError::FileNotFound(_))));
    }
}
