//! 照合に使う型定義
//!
//! CLIとライブラリ利用側で共有される型:
//! - Template: カタログの1エントリ（ID + タグ文字列）
//! - MatchResult: 照合の最終結果
//! - TemplateScore: テンプレートごとの内訳（診断用）

use serde::{Deserialize, Serialize};

/// タグの区切り文字（カンマ + 半角スペース1つ）
pub const TAG_SEPARATOR: &str = ", ";

/// テンプレート
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: u32,

    /// タグ文字列（", " 区切り、表示用に元の大文字小文字を保持）
    #[serde(default)]
    pub tags: Option<String>,
}

impl Template {
    pub fn new(id: u32, tags: impl Into<String>) -> Self {
        Self {
            id,
            tags: Some(tags.into()),
        }
    }

    /// タグなしテンプレート
    pub fn untagged(id: u32) -> Self {
        Self { id, tags: None }
    }

    /// 照合対象になるか（タグが空でない）
    pub fn is_tagged(&self) -> bool {
        self.tags.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// 小文字化したフレーズタグを順序どおりに返す
    ///
    /// 空の断片（`"beach, "` の末尾など）は除外する。
    pub fn phrase_tags(&self) -> Vec<String> {
        match self.tags.as_deref() {
            Some(tags) if !tags.is_empty() => tags
                .to_lowercase()
                .split(TAG_SEPARATOR)
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// 表示用のタグ文字列
    pub fn display_tags(&self) -> &str {
        match self.tags.as_deref() {
            Some(tags) if !tags.is_empty() => tags,
            _ => "No tags",
        }
    }
}

/// 照合結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum MatchResult {
    #[serde(rename_all = "camelCase")]
    Matched { template_id: u32, score: u32 },
    NoMatch,
}

impl MatchResult {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Matched { .. })
    }

    pub fn template_id(&self) -> Option<u32> {
        match self {
            MatchResult::Matched { template_id, .. } => Some(*template_id),
            MatchResult::NoMatch => None,
        }
    }

    pub fn score(&self) -> u32 {
        match self {
            MatchResult::Matched { score, .. } => *score,
            MatchResult::NoMatch => 0,
        }
    }
}

impl std::fmt::Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchResult::Matched { template_id, score } => {
                write!(f, "template {} (score {})", template_id, score)
            }
            MatchResult::NoMatch => write!(f, "No matching template found"),
        }
    }
}

/// テンプレートごとのスコア内訳
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateScore {
    pub template_id: u32,
    /// 単語完全一致スコア
    pub exact: u32,
    /// フレーズ部分一致スコア
    pub phrase: u32,
    pub total: u32,
}
