//! Template Match Common Library
//!
//! CLIとライブラリ利用側で共有される型と照合ロジック

pub mod types;
pub mod catalog;
pub mod error;
pub mod scorer;

pub use types::{MatchResult, Template, TemplateScore, TAG_SEPARATOR};
pub use catalog::Catalog;
pub use error::{Error, Result};
pub use scorer::{match_template, Scorer, ScoringPolicy, DEFAULT_EXACT_WEIGHT, DEFAULT_PHRASE_WEIGHT};
