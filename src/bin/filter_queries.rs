use clap::Parser;
use query_gen::core::filter;
use query_gen::utils::{logger, validation::Validate};
use query_gen::FilterConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = FilterConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("🚀 Starting query filter");

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    println!("📖 Reading {}...", config.queries_file);

    match filter::filter_query_file(
        &config.queries_file,
        &config.completed_file,
        &config.output_file,
    ) {
        Ok(report) => {
            println!("✅ Saved remaining queries to: {}", config.output_file);
            println!();
            println!("📈 Statistics:");
            println!("   Total in file: {}", report.total);
            println!("   Completed: {}", report.completed);
            println!("   Remaining: {}", report.remaining);
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Query filtering failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(1);
        }
    }

    Ok(())
}
