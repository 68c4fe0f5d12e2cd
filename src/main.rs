use anyhow::Context;
use clap::Parser;
use plateau_mowers::utils::{logger, validation::Validate};
use plateau_mowers::{CliConfig, LocalStorage, MissionRunner, TomlConfig};

fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    // 載入 TOML 配置，命令列參數優先
    if let Some(path) = config.config.clone() {
        let toml = TomlConfig::from_file(&path)
            .with_context(|| format!("Failed to load config file '{}'", path))?;
        if let Err(e) = toml.validate() {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
        config.merge_toml(&toml);
    }

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting plateau-mowers");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let runner = MissionRunner::new(LocalStorage::default(), config);

    match runner.run() {
        Ok(_) => {
            tracing::info!("✅ Mission completed");
        }
        Err(e) => {
            tracing::error!("❌ Mission failed: {} (Category: {:?})", e, e.category());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
