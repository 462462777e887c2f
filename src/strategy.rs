//! 照合ストラテジー
//!
//! 2段構成:
//! 1. 一次ストラテジー（外部応答など、失敗や非決定性があり得る）
//! 2. フォールバック（キーワード照合、常に成功する）
//!
//! どちらも同じ `MatchResult` を返すため、個別に差し替えられる。

use crate::error::{Result, TemplateMatchError};
use crate::reply::parse_template_id;
use template_match_common::{Catalog, MatchResult, Scorer, ScoringPolicy};

/// 照合ストラテジー
pub trait MatchStrategy {
    fn name(&self) -> &str;

    fn select(&self, description: &str, catalog: &Catalog) -> Result<MatchResult>;
}

/// キーワード照合（決定的、失敗しない）
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordStrategy {
    scorer: Scorer,
}

impl KeywordStrategy {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self {
            scorer: Scorer::new(policy),
        }
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }
}

impl MatchStrategy for KeywordStrategy {
    fn name(&self) -> &str {
        "keyword"
    }

    fn select(&self, description: &str, catalog: &Catalog) -> Result<MatchResult> {
        Ok(self.scorer.find_best(description, catalog))
    }
}

/// 外部応答からテンプレートIDを読み取るストラテジー
///
/// `responder` は説明文とカタログを受け取り、自由形式の応答テキストを返す。
/// 応答中の最初の整数がカタログに存在すればそのテンプレートを採用し、
/// スコアはキーワード照合で再計算する。
pub struct ReplyStrategy<F> {
    responder: F,
    scorer: Scorer,
}

impl<F> ReplyStrategy<F>
where
    F: Fn(&str, &Catalog) -> Result<String>,
{
    pub fn new(responder: F) -> Self {
        Self {
            responder,
            scorer: Scorer::default(),
        }
    }

    pub fn with_policy(mut self, policy: ScoringPolicy) -> Self {
        self.scorer = Scorer::new(policy);
        self
    }
}

impl<F> MatchStrategy for ReplyStrategy<F>
where
    F: Fn(&str, &Catalog) -> Result<String>,
{
    fn name(&self) -> &str {
        "reply"
    }

    fn select(&self, description: &str, catalog: &Catalog) -> Result<MatchResult> {
        let reply = (self.responder)(description, catalog)?;

        let Some(id) = parse_template_id(&reply) else {
            tracing::debug!("応答にテンプレートIDがありません: {}", reply);
            return Ok(MatchResult::NoMatch);
        };

        match catalog.find(id) {
            Some(template) => {
                let score = self
                    .scorer
                    .score_template(description, template)
                    .map_or(0, |s| s.total);
                Ok(MatchResult::Matched {
                    template_id: id,
                    score,
                })
            }
            None => {
                tracing::warn!("Template with ID {} not found in the catalog", id);
                Ok(MatchResult::NoMatch)
            }
        }
    }
}

/// 一次ストラテジーが失敗したらフォールバックに切り替える
pub struct FallbackMatcher {
    primary: Box<dyn MatchStrategy>,
    fallback: Box<dyn MatchStrategy>,
}

impl FallbackMatcher {
    pub fn new(primary: Box<dyn MatchStrategy>, fallback: Box<dyn MatchStrategy>) -> Self {
        Self { primary, fallback }
    }

    /// キーワード照合をフォールバックにする
    pub fn with_keyword_fallback(primary: Box<dyn MatchStrategy>, policy: ScoringPolicy) -> Self {
        Self::new(primary, Box::new(KeywordStrategy::new(policy)))
    }
}

impl MatchStrategy for FallbackMatcher {
    fn name(&self) -> &str {
        "fallback"
    }

    fn select(&self, description: &str, catalog: &Catalog) -> Result<MatchResult> {
        match self.primary.select(description, catalog) {
            Ok(result) => Ok(result),
            Err(e) => {
                tracing::warn!(
                    "{} 照合に失敗、{} にフォールバック: {}",
                    self.primary.name(),
                    self.fallback.name(),
                    e
                );
                self.fallback.select(description, catalog)
            }
        }
    }
}

/// 常に失敗するストラテジー（一次ストラテジー未設定時のプレースホルダ）
#[derive(Debug, Clone, Default)]
pub struct Unavailable {
    reason: String,
}

impl Unavailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl MatchStrategy for Unavailable {
    fn name(&self) -> &str {
        "unavailable"
    }

    fn select(&self, _description: &str, _catalog: &Catalog) -> Result<MatchResult> {
        Err(TemplateMatchError::Strategy(self.reason.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_strategy() {
        let strategy = KeywordStrategy::default();
        let result = strategy
            .select("beach villas", &Catalog::builtin())
            .unwrap();
        assert!(result.is_match());
    }

    #[test]
    fn test_keyword_strategy_same_as_scorer() {
        let policy = ScoringPolicy { exact_weight: 5, phrase_weight: 1 };
        let catalog = Catalog::builtin();
        for description in ["quiet beach getaway", "eco yoga", "xyz", ""] {
            let expected = Scorer::new(policy).find_best(description, &catalog);
            let actual = KeywordStrategy::new(policy).select(description, &catalog).unwrap();
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn test_reply_strategy_picks_id() {
        let strategy = ReplyStrategy::new(|_: &str, _: &Catalog| Ok("The best match is 6.".to_string()));
        let result = strategy.select("a serene lake", &Catalog::builtin()).unwrap();
        assert_eq!(result, MatchResult::Matched { template_id: 6, score: 5 });
    }

    #[test]
    fn test_reply_strategy_unknown_id() {
        let strategy = ReplyStrategy::new(|_: &str, _: &Catalog| Ok("42".to_string()));
        let result = strategy.select("anything", &Catalog::builtin()).unwrap();
        assert_eq!(result, MatchResult::NoMatch);
    }

    #[test]
    fn test_reply_strategy_no_number() {
        let strategy = ReplyStrategy::new(|_: &str, _: &Catalog| Ok("No matching template found".to_string()));
        let result = strategy.select("anything", &Catalog::builtin()).unwrap();
        assert_eq!(result, MatchResult::NoMatch);
    }

    #[test]
    fn test_fallback_used_on_error() {
        let matcher = FallbackMatcher::with_keyword_fallback(
            Box::new(Unavailable::new("timeout")),
            ScoringPolicy::default(),
        );
        let result = matcher.select("a serene lake", &Catalog::builtin()).unwrap();
        assert_eq!(result, MatchResult::Matched { template_id: 6, score: 5 });
    }

    #[test]
    fn test_primary_result_kept_when_ok() {
        let primary = ReplyStrategy::new(|_: &str, _: &Catalog| Ok("9".to_string()));
        let matcher = FallbackMatcher::with_keyword_fallback(Box::new(primary), ScoringPolicy::default());
        let result = matcher.select("a serene lake", &Catalog::builtin()).unwrap();

        // 一次の結果を優先（スコア0でも採用）
        assert_eq!(result, MatchResult::Matched { template_id: 9, score: 0 });
    }

    #[test]
    fn test_responder_error_propagates() {
        let strategy = ReplyStrategy::new(|_: &str, _: &Catalog| {
            Err(TemplateMatchError::Strategy("rate limited".into()))
        });
        let result = strategy.select("beach", &Catalog::builtin());
        assert!(matches!(result, Err(TemplateMatchError::Strategy(_))));
    }
}
