use clap::Parser;
use shipping_calc::core::ConfigProvider;
use shipping_calc::utils::error::ErrorSeverity;
use shipping_calc::utils::{logger, validation::Validate};
use shipping_calc::{BatchConfig, BatchQuotePipeline, LocalStorage, QuoteEngine};

#[derive(Parser)]
#[command(name = "batch-quote")]
#[command(about = "Quote every order in a CSV/JSON file using a TOML configuration")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "batch-quote.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the input file from config
    #[arg(long)]
    input: Option<String>,

    /// Override the output directory from config
    #[arg(long)]
    output: Option<String>,

    /// Dry run - show what would be processed without executing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 載入 TOML 配置
    let mut config = match BatchConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if config.json_logs() {
        logger::init_json_logger(config.log_level());
    } else {
        logger::init_cli_logger(args.verbose || config.log_level() == Some("debug"));
    }

    tracing::info!("🚀 Starting batch quote run");
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    // 應用命令列覆蓋設定
    if let Some(input) = args.input.clone() {
        tracing::info!("🔧 Input overridden to: {}", input);
        config.input.path = input;
    }
    if let Some(output) = args.output.clone() {
        tracing::info!("🔧 Output overridden to: {}", output);
        config.output.path = output;
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No quotes will be written");
        return Ok(());
    }

    let storage = LocalStorage::new(".".to_string());
    let pipeline = BatchQuotePipeline::new(storage, config);
    let engine = QuoteEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Batch quote completed successfully!");
            println!("✅ Batch quote completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Batch quote failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &BatchConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!("  Batch: {} v{}", config.batch.name, config.batch.version);
    if let Some(description) = &config.batch.description {
        println!("  Description: {}", description);
    }
    println!(
        "  Input: {} ({})",
        config.input_path(),
        config.input_format()
    );
    println!("  Output: {}", config.output_path());
    println!("  Formats: {}", config.output_formats().join(", "));

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}
