//! 対話式照合モジュール

use crate::error::{Result, TemplateMatchError};
use crate::strategy::MatchStrategy;
use dialoguer::Input;
use template_match_common::{Catalog, MatchResult};

const SEPARATOR_WIDTH: usize = 50;

/// 終了コマンドか判定
pub fn is_exit_command(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "exit" | "quit" | "q")
}

/// カタログ一覧を表示
pub fn print_catalog(catalog: &Catalog) {
    println!("Available templates:");
    for template in catalog {
        println!("ID: {} - Tags: {}", template.id, template.display_tags());
    }
}

/// 照合結果の表示文字列
pub fn describe_result(result: &MatchResult, catalog: &Catalog) -> String {
    match result {
        MatchResult::Matched { template_id, score } => match catalog.find(*template_id) {
            Some(template) => format!(
                "Matched Template: ID {} - Tags: {} (score {})",
                template_id,
                template.display_tags(),
                score
            ),
            None => format!("Template with ID {} not found in the list.", template_id),
        },
        MatchResult::NoMatch => format!("Result: {}", result),
    }
}

/// 対話ループ
pub fn run_interactive(catalog: &Catalog, strategy: &dyn MatchStrategy) -> Result<()> {
    println!("Template Matching System");
    println!("{}", "=".repeat(SEPARATOR_WIDTH));
    print_catalog(catalog);
    println!("{}", "=".repeat(SEPARATOR_WIDTH));

    loop {
        let input: String = Input::new()
            .with_prompt("説明文を入力 (exit で終了)")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| TemplateMatchError::Prompt(e.to_string()))?;

        if is_exit_command(&input) {
            println!("終了します");
            break;
        }

        if input.trim().is_empty() {
            println!("説明文を入力してください");
            continue;
        }

        let result = strategy.select(&input, catalog)?;
        println!("{}", describe_result(&result, catalog));
        println!("{}", "=".repeat(SEPARATOR_WIDTH));
    }

    Ok(())
}
