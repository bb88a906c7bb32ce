use clap::Parser;
use ctxgen::utils::error::ErrorSeverity;
use ctxgen::utils::{logger, validation::Validate};
use ctxgen::{CliConfig, CodegenError, CodegenPipeline, GeneratorEngine, LocalStorage};

fn report_failure(stage: &str, e: &CodegenError) -> ! {
    tracing::error!(
        "❌ {} failed: {} (Category: {:?}, Severity: {:?})",
        stage,
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Medium => 2, // 可重試
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting ctxgen");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => report_failure("Loading configuration", &e),
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        report_failure("Configuration validation", &e);
    }

    let storage = LocalStorage::new(".");
    let pipeline = CodegenPipeline::new(storage, config);
    let engine = GeneratorEngine::new(pipeline);

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no files will be written");
        match engine.preview().await {
            Ok(tables) => {
                println!("{}", serde_json::to_string_pretty(&tables)?);
                return Ok(());
            }
            Err(e) => report_failure("Sheet parsing", &e),
        }
    }

    match engine.run().await {
        Ok(report) => {
            tracing::info!("✅ Generation completed successfully!");
            println!(
                "✅ {} types, {} data variables, {} bound constants",
                report.type_count, report.data_count, report.constant_count
            );
            println!("📁 {}", report.interface_path);
            println!("📁 {}", report.implementation_path);
        }
        Err(e) => report_failure("Generation", &e),
    }

    Ok(())
}
