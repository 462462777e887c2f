//! タグ照合スコアラー
//!
//! 説明文とテンプレートのタグの語彙的な重なりでスコアを付け、最良のテンプレートを選ぶ。
//! ネットワークも乱数も使わないため、同じ入力には常に同じ結果を返す。
//!
//! ## スコア
//! - 単語完全一致: 説明文の単語集合 ∩ タグ集合 の要素数 × `exact_weight`
//! - フレーズ部分一致: 説明文に部分文字列として含まれるタグ数（重複タグも数える）× `phrase_weight`
//!
//! 同点の場合はカタログ順で先に現れたテンプレートを採用する。

use crate::catalog::Catalog;
use crate::types::{MatchResult, Template, TemplateScore};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 単語完全一致の既定重み
pub const DEFAULT_EXACT_WEIGHT: u32 = 3;
/// フレーズ部分一致の既定重み
pub const DEFAULT_PHRASE_WEIGHT: u32 = 2;

/// スコアの重み設定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    pub exact_weight: u32,
    pub phrase_weight: u32,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            exact_weight: DEFAULT_EXACT_WEIGHT,
            phrase_weight: DEFAULT_PHRASE_WEIGHT,
        }
    }
}

/// 小文字化済みの説明文
struct PreparedDescription {
    text: String,
    words: HashSet<String>,
}

impl PreparedDescription {
    fn new(description: &str) -> Self {
        let text = description.to_lowercase();
        let words = text.split_whitespace().map(str::to_string).collect();
        Self { text, words }
    }
}

/// スコアラー
#[derive(Debug, Clone, Copy, Default)]
pub struct Scorer {
    policy: ScoringPolicy,
}

impl Scorer {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ScoringPolicy {
        self.policy
    }

    /// 1テンプレートのスコアを計算（タグなしは None）
    pub fn score_template(&self, description: &str, template: &Template) -> Option<TemplateScore> {
        let prepared = PreparedDescription::new(description);
        self.score_prepared(&prepared, template)
    }

    fn score_prepared(&self, prepared: &PreparedDescription, template: &Template) -> Option<TemplateScore> {
        if !template.is_tagged() {
            return None;
        }

        let tags = template.phrase_tags();

        let tag_set: HashSet<&str> = tags.iter().map(String::as_str).collect();
        let exact_hits = prepared
            .words
            .iter()
            .filter(|word| tag_set.contains(word.as_str()))
            .count() as u32;

        // リスト上の重複タグもそれぞれ数える
        let phrase_hits = tags
            .iter()
            .filter(|tag| prepared.text.contains(tag.as_str()))
            .count() as u32;

        // 重みは設定ファイル由来なので桁あふれは上限で止める
        let exact = exact_hits.saturating_mul(self.policy.exact_weight);
        let phrase = phrase_hits.saturating_mul(self.policy.phrase_weight);

        Some(TemplateScore {
            template_id: template.id,
            exact,
            phrase,
            total: exact.saturating_add(phrase),
        })
    }

    /// タグ付きテンプレート全件のスコアをカタログ順に返す
    pub fn rank(&self, description: &str, catalog: &Catalog) -> Vec<TemplateScore> {
        let prepared = PreparedDescription::new(description);
        catalog
            .iter()
            .filter_map(|template| self.score_prepared(&prepared, template))
            .collect()
    }

    /// 最もスコアの高いテンプレートを選ぶ
    pub fn find_best(&self, description: &str, catalog: &Catalog) -> MatchResult {
        let mut best: Option<TemplateScore> = None;

        for score in self.rank(description, catalog) {
            tracing::debug!(
                "Template {} score: {} (exact: {}, phrase: {})",
                score.template_id,
                score.total,
                score.exact,
                score.phrase
            );

            // 同点は先勝ち
            if score.total > best.map_or(0, |b| b.total) {
                best = Some(score);
            }
        }

        match best {
            Some(best) => MatchResult::Matched {
                template_id: best.template_id,
                score: best.total,
            },
            None => MatchResult::NoMatch,
        }
    }
}

/// 既定の重みで説明文をカタログと照合する
///
/// # Arguments
/// * `description` - 自由記述の説明文
/// * `catalog` - 照合対象のカタログ
///
/// # Returns
/// 最良のテンプレートとスコア、どれもスコアが0なら `NoMatch`
///
/// # Examples
/// ```
/// use template_match_common::{match_template, Catalog, MatchResult, Template};
///
/// let catalog = Catalog::new(vec![Template::new(1, "beach"), Template::new(6, "serene")]).unwrap();
/// let result = match_template("looking for a quiet beach getaway", &catalog);
/// assert_eq!(result, MatchResult::Matched { template_id: 1, score: 5 });
/// ```
pub fn match_template(description: &str, catalog: &Catalog) -> MatchResult {
    Scorer::default().find_best(description, catalog)
}
