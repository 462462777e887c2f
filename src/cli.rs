use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "template-match")]
#[command(about = "説明文をタグ付きテンプレートに照合するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 説明文を1件照合
    Match {
        /// 説明文
        #[arg(required = true)]
        description: String,

        /// カタログファイル（json/csv）
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// テンプレートごとのスコア内訳を表示
        #[arg(long)]
        explain: bool,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 説明文ファイル（1行1件）を一括照合してJSONを出力
    Batch {
        /// 入力テキストファイル
        #[arg(required = true)]
        input: PathBuf,

        /// カタログファイル（json/csv）
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// 出力JSONファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// カタログ一覧を表示
    List {
        /// カタログファイル（json/csv）
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// 対話的に照合
    Interactive {
        /// カタログファイル（json/csv）
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// 既定のカタログファイルを設定
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
