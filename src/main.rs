use clap::Parser;
use template_match::{batch, catalog, cli, config, error, interactive, strategy};
use cli::{Cli, Commands};
use config::Config;
use error::{Result, TemplateMatchError};
use strategy::KeywordStrategy;
use template_match_common::Scorer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    init_logging(if cli.verbose { "debug" } else { config.log_level.as_str() })?;

    match cli.command {
        Commands::Match { description, catalog: catalog_path, explain, json } => {
            let catalog = catalog::resolve_catalog(catalog_path.as_deref(), &config)?;
            let scorer = Scorer::new(config.policy());

            if explain {
                for score in scorer.rank(&description, &catalog) {
                    println!(
                        "Template {} score: {} (exact: {}, phrase: {})",
                        score.template_id, score.total, score.exact, score.phrase
                    );
                }
            }

            let result = scorer.find_best(&description, &catalog);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", interactive::describe_result(&result, &catalog));
            }
        }

        Commands::Batch { input, catalog: catalog_path, output } => {
            eprintln!("📋 template-match - 一括照合\n");

            let catalog = catalog::resolve_catalog(catalog_path.as_deref(), &config)?;

            eprintln!("[1/2] 説明文を読み込み中...");
            let descriptions = batch::read_descriptions(&input)?;
            eprintln!("✔ {}件の説明文\n", descriptions.len());

            eprintln!("[2/2] 照合中...");
            let entries = batch::match_batch_with_progress(&descriptions, &catalog, config.policy());
            let matched = entries.iter().filter(|e| e.result.is_match()).count();
            eprintln!("✔ {}/{}件が一致\n", matched, entries.len());

            let json = serde_json::to_string_pretty(&entries)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!("✔ 結果を保存: {}", path.display());
                }
                None => println!("{}", json),
            }
        }

        Commands::List { catalog: catalog_path } => {
            let catalog = catalog::resolve_catalog(catalog_path.as_deref(), &config)?;
            interactive::print_catalog(&catalog);
        }

        Commands::Interactive { catalog: catalog_path } => {
            let catalog = catalog::resolve_catalog(catalog_path.as_deref(), &config)?;
            let strategy = KeywordStrategy::new(config.policy());
            interactive::run_interactive(&catalog, &strategy)?;
        }

        Commands::Config { set_catalog, show } => {
            let mut config = config;

            if let Some(path) = set_catalog {
                // 保存前に読めるか確認
                catalog::load_catalog(&path)?;
                config.set_catalog_path(path)?;
                println!("✔ カタログを設定しました");
            }

            if show {
                println!("設定:");
                println!(
                    "  カタログ: {}",
                    config
                        .catalog_path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "組み込み".into())
                );
                println!("  完全一致の重み: {}", config.exact_weight);
                println!("  部分一致の重み: {}", config.phrase_weight);
                println!("  ログレベル: {}", config.log_level);
            }
        }
    }

    Ok(())
}

/// ログ初期化（RUST_LOG を優先）
fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .map_err(|e| TemplateMatchError::Config(format!("ログ設定が不正: {}", e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    Ok(())
}
