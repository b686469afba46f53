use clap::Parser;
use food_order::core::ConfigProvider;
use food_order::utils::{logger, validation::Validate};
use food_order::{load_menu, CliConfig, LocalMenuFile, MenuApp, OrderingSystem, StreamConsole};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose, config.log_format);

    tracing::info!("Starting food-order CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 合併設定並驗證
    let settings = match config.settings().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let source = LocalMenuFile::new(settings.menu_file());
    tracing::debug!("Menu file: {}", source.path().display());
    let system = OrderingSystem::new(load_menu(&source), settings.currency_symbol());

    let mut app = MenuApp::new(system, StreamConsole::stdio());
    if let Err(e) = app.run() {
        tracing::error!("❌ Session aborted: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    Ok(())
}
