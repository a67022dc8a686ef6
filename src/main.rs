use clap::Parser;
use query_gen::utils::{logger, validation::Validate};
use query_gen::{CliConfig, GeneratorEngine, LocalStorage};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting query-gen CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    println!("{}", "=".repeat(60));
    println!("Google Maps Query Generator - Elevator & Painting Services");
    println!("{}", "=".repeat(60));

    // 創建存儲和引擎並運行
    let storage = LocalStorage::new(config.output_dir.clone());
    let engine = GeneratorEngine::new(storage, config);

    match engine.run() {
        Ok(summary) => {
            println!("{}", "=".repeat(60));
            println!("✅ Total queries generated: {}", summary.total_queries());
            for report in &summary.reports {
                println!(
                    "   - {}: {} queries ({} × {}) -> {}",
                    report.category.label(),
                    report.queries_written,
                    report.template_count,
                    report.region_count,
                    report.output_path
                );
            }
            println!("{}", "=".repeat(60));
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Query generation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                query_gen::utils::error::ErrorSeverity::Low => 0,
                query_gen::utils::error::ErrorSeverity::Medium => 2,
                query_gen::utils::error::ErrorSeverity::High => 1,
                query_gen::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
