//! 外部応答からテンプレートIDを抽出
//!
//! 応答テキスト中で最初に現れる独立した整数をテンプレートIDとみなす。

use regex::Regex;

/// 応答テキストから最初のテンプレートIDを取り出す
pub fn parse_template_id(reply: &str) -> Option<u32> {
    lazy_static::lazy_static! {
        static ref ID_RE: Regex = Regex::new(r"\b\d+\b").unwrap();
    }

    ID_RE
        .find_iter(reply)
        .find_map(|m| m.as_str().parse::<u32>().ok())
}
