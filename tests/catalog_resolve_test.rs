//! カタログ解決順序テスト
//!
//! 環境変数はプロセス共有のため、変更するケースは1つのテストにまとめて順に検証する。

use std::path::PathBuf;
use template_match::catalog::resolve_catalog;
use template_match::config::{Config, CATALOG_ENV};
use template_match::Catalog;
use tempfile::tempdir;

fn write_catalog(dir: &std::path::Path, name: &str, json: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, json).unwrap();
    path
}

#[test]
fn test_resolution_order() {
    let dir = tempdir().expect("Failed to create temp dir");
    let env_path = write_catalog(dir.path(), "env.json", r#"[{"id": 100, "tags": "env"}]"#);
    let config_path = write_catalog(dir.path(), "config.json", r#"[{"id": 200, "tags": "config"}]"#);

    let config = Config {
        catalog_path: Some(config_path.clone()),
        ..Default::default()
    };

    // 環境変数が設定ファイルより優先
    std::env::set_var(CATALOG_ENV, &env_path);
    assert_eq!(config.catalog_path(), Some(env_path.clone()));
    let catalog = resolve_catalog(None, &config).expect("カタログ解決失敗");
    assert!(catalog.find(100).is_some());
    assert!(catalog.find(200).is_none());

    // 空白だけの環境変数は無視
    std::env::set_var(CATALOG_ENV, "   ");
    assert_eq!(config.catalog_path(), Some(config_path.clone()));

    // 環境変数なし → 設定ファイルのパス
    std::env::remove_var(CATALOG_ENV);
    let catalog = resolve_catalog(None, &config).expect("カタログ解決失敗");
    assert_eq!(catalog.len(), 1);
    assert!(catalog.find(200).is_some());

    // どちらもなし → 組み込みカタログ
    let catalog = resolve_catalog(None, &Config::default()).expect("カタログ解決失敗");
    assert_eq!(catalog, Catalog::builtin());

    // 明示指定は環境変数より優先
    std::env::set_var(CATALOG_ENV, &env_path);
    let catalog = resolve_catalog(Some(&config_path), &Config::default()).expect("カタログ解決失敗");
    assert!(catalog.find(200).is_some());
    std::env::remove_var(CATALOG_ENV);
}
