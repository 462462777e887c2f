use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateMatchError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("カタログファイルが不正: {0}")]
    InvalidCatalog(String),

    #[error("照合ストラテジーエラー: {0}")]
    Strategy(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] template_match_common::Error),
}

pub type Result<T> = std::result::Result<T, TemplateMatchError>;
