//! テンプレートカタログモジュール
//!
//! 照合対象のテンプレート一覧を管理する。
//! JSON/CSVから読み込み、照合中は不変のスナップショットとして扱う。
//! 並び順はタイブレークに使うため、読み込んだ順序をそのまま保持する。

use crate::error::{Error, Result};
use crate::types::Template;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// テンプレートカタログ
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    templates: Vec<Template>,
}

/// JSONの受け入れ形式（配列 または {"templates": [...]}）
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogJson {
    List(Vec<Template>),
    Wrapped { templates: Vec<Template> },
}

impl Catalog {
    /// テンプレート一覧からカタログを作成（ID重複はエラー）
    pub fn new(templates: Vec<Template>) -> Result<Self> {
        let mut seen = HashSet::new();
        for template in &templates {
            if !seen.insert(template.id) {
                return Err(Error::DuplicateTemplateId(template.id));
            }
        }
        Ok(Self { templates })
    }

    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let templates = match serde_json::from_str::<CatalogJson>(json)? {
            CatalogJson::List(templates) => templates,
            CatalogJson::Wrapped { templates } => templates,
        };
        Self::new(templates)
    }

    /// CSV文字列から読み込み
    ///
    /// ヘッダー行 `id,tags` を想定する。タグにカンマを含む場合はダブルクォートで囲む。
    /// タグ列が空の行はタグなしテンプレートになる。
    pub fn from_csv_str(content: &str) -> Result<Self> {
        let mut templates = Vec::new();
        let mut lines = content.lines().enumerate();

        // ヘッダー確認（空ファイルは空カタログ）
        if let Some((_, header)) = lines.next() {
            let columns: Vec<String> = parse_csv_line(header)
                .iter()
                .map(|c| c.trim_start_matches('\u{feff}').to_lowercase())
                .collect();
            if columns != ["id", "tags"] {
                return Err(Error::Parse(format!(
                    "1行目: ヘッダーは id,tags である必要があります: {}",
                    header
                )));
            }
        }

        for (line_no, line) in lines {
            if line.trim().is_empty() {
                continue;
            }

            let fields = parse_csv_line(line);
            let id = fields[0].parse::<u32>().map_err(|_| {
                Error::Parse(format!("{}行目: IDが不正です: {}", line_no + 1, fields[0]))
            })?;

            let tags = fields
                .get(1)
                .filter(|t| !t.is_empty())
                .map(|t| t.to_string());

            templates.push(Template { id, tags });
        }

        Self::new(templates)
    }

    /// 組み込みサンプルカタログ（旅行サイト向け）
    pub fn builtin() -> Self {
        let templates = vec![
            Template::new(4, "eco-friendly, eco, friendly, ecofriendly, nature, escapes, villas, retreats, yoga, sun, destinations, Tropical, Relaxation"),
            Template::new(3, "beach, island, sea, ocean, top destinations, escapes, villas, apartment, cottage, cabins, rentals, resorts"),
            Template::new(2, "journal, cottage, vacation, island, beach, villas, retreat"),
            Template::new(6, "serene"),
            Template::untagged(5),
            Template::new(1, "beach"),
            Template::new(7, "test"),
            Template::new(10, "Location, Centric"),
            Template::new(9, "property"),
        ];
        Self { templates }
    }

    /// IDでテンプレートを検索
    pub fn find(&self, id: u32) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// 全テンプレートを順序どおりに取得
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Template> {
        self.templates.iter()
    }

    /// タグを持つテンプレートのみ
    pub fn tagged(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter().filter(|t| t.is_tagged())
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Template;
    type IntoIter = std::slice::Iter<'a, Template>;

    fn into_iter(self) -> Self::IntoIter {
        self.templates.iter()
    }
}

/// CSV行をパース（ダブルクォート対応）
fn parse_csv_line(line: &str) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut in_quotes = false;
    let mut field_start = 0;

    for (i, c) in line.char_indices() {
        if c == '"' {
            in_quotes = !in_quotes;
        } else if c == ',' && !in_quotes {
            fields.push(trim_quotes(&line[field_start..i]));
            field_start = i + c.len_utf8();
        }
    }

    // 最後のフィールド
    fields.push(trim_quotes(&line[field_start..]));

    fields
}

fn trim_quotes(s: &str) -> &str {
    let s = s.trim();
    if s.starts_with('"') && s.ends_with('"') && s.len() >= 2 {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_CSV: &str = r#"id,tags
4,"eco-friendly, eco, friendly, yoga"
5,
1,beach
"#;

    #[test]
    fn test_load_csv() {
        let catalog = Catalog::from_csv_str(TEST_CSV).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog.find(4).unwrap().tags.as_deref(),
            Some("eco-friendly, eco, friendly, yoga")
        );
        assert_eq!(catalog.find(5).unwrap().tags, None);
        assert_eq!(catalog.find(1).unwrap().tags.as_deref(), Some("beach"));
    }

    #[test]
    fn test_load_csv_keeps_order() {
        let catalog = Catalog::from_csv_str(TEST_CSV).unwrap();
        let ids: Vec<u32> = catalog.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![4, 5, 1]);
    }

    #[test]
    fn test_load_csv_without_header() {
        let result = Catalog::from_csv_str("1,beach\n2,sea\n");
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_load_csv_header_case_insensitive() {
        let catalog = Catalog::from_csv_str("ID,Tags\n1,beach\n").unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_load_csv_empty() {
        assert!(Catalog::from_csv_str("").unwrap().is_empty());
    }

    #[test]
    fn test_load_csv_invalid_id() {
        let result = Catalog::from_csv_str("id,tags\nabc,beach\n");
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_load_json_list_and_wrapped() {
        let list = Catalog::from_json(r#"[{"id": 1, "tags": "beach"}, {"id": 5, "tags": null}]"#).unwrap();
        assert_eq!(list.len(), 2);

        let wrapped = Catalog::from_json(r#"{"templates": [{"id": 1, "tags": "beach"}]}"#).unwrap();
        assert_eq!(wrapped.len(), 1);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::new(vec![Template::new(1, "beach"), Template::new(1, "sea")]);
        assert!(matches!(result, Err(Error::DuplicateTemplateId(1))));
    }

    #[test]
    fn test_builtin() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog.tagged().count(), 8);
        assert!(catalog.find(5).is_some_and(|t| !t.is_tagged()));
        assert_eq!(catalog.templates()[0].id, 4);
    }

    #[test]
    fn test_parse_csv_line_quoted() {
        let fields = parse_csv_line(r#"3,"beach, island""#);
        assert_eq!(fields, vec!["3", "beach, island"]);
    }
}
