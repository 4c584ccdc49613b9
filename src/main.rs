use clap::Parser;
use syoboi_sorting::core::ConfigProvider;
use syoboi_sorting::utils::{logger, validation::Validate};
use syoboi_sorting::{
    user_agent, CliConfig, JsonConfig, LocalStorage, SortEngine, SortError, SortPipeline,
    SyoboiClient,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting syoboi-sorting");
    tracing::debug!("CLI config: {:?}", args);

    if let Err(e) = args.validate() {
        fail(e);
    }

    // 載入設定；找不到就結束
    tracing::info!("📁 Loading configuration from: {}", args.config);
    let config = match JsonConfig::from_file(&args.config).and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => fail(e),
    };
    tracing::info!("📂 Root directory: {}", config.root_dir());

    let client = SyoboiClient::new(args.endpoint.clone(), user_agent());
    tracing::info!("📡 Title source: {}", client.endpoint());
    let storage = LocalStorage::new(config.root_dir());
    let pipeline = SortPipeline::new(client, storage).with_dry_run(args.dry_run);
    let engine = SortEngine::new(pipeline);

    let report = match engine.run().await {
        Ok(report) => report,
        Err(e) => fail(e),
    };

    if let Some(reason) = &report.listing_error {
        tracing::debug!("Root directory could not be listed: {}", reason);
    }
    for failure in &report.directory_failures {
        tracing::debug!("mkdir {} failed: {}", failure.path.display(), failure.reason);
    }

    if report.dry_run {
        println!(
            "🔍 Dry run: {} of {} entries would be moved",
            report.planned(),
            report.listed
        );
    } else {
        println!(
            "✅ Done: {} moved, {} failed ({} titles, {} entries scanned)",
            report.moved(),
            report.failed(),
            report.catalog_size,
            report.listed
        );
    }

    Ok(())
}

fn fail(e: SortError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
