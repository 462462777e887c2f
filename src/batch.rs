//! 一括照合モジュール
//!
//! カタログは読み取り専用なので、説明文ごとに並列で照合できる。
//! 出力は入力順を保つ。

use crate::error::Result;
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use template_match_common::{Catalog, MatchResult, Scorer, ScoringPolicy};

/// 一括照合の1件分
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchEntry {
    pub description: String,
    pub result: MatchResult,
}

/// 説明文リストをまとめて照合
pub fn match_batch(descriptions: &[String], catalog: &Catalog, policy: ScoringPolicy) -> Vec<BatchEntry> {
    let scorer = Scorer::new(policy);
    descriptions
        .par_iter()
        .map(|description| BatchEntry {
            description: description.clone(),
            result: scorer.find_best(description, catalog),
        })
        .collect()
}

/// 進捗バー付きで一括照合
pub fn match_batch_with_progress(
    descriptions: &[String],
    catalog: &Catalog,
    policy: ScoringPolicy,
) -> Vec<BatchEntry> {
    let pb = ProgressBar::new(descriptions.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar().template("{bar:40} {pos}/{len} {msg}") {
        pb.set_style(style);
    }

    let scorer = Scorer::new(policy);
    let entries = descriptions
        .par_iter()
        .progress_with(pb.clone())
        .map(|description| BatchEntry {
            description: description.clone(),
            result: scorer.find_best(description, catalog),
        })
        .collect();

    pb.finish_and_clear();
    entries
}

/// 説明文ファイルを読み込み（1行1件、空行は無視）
pub fn read_descriptions(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}
