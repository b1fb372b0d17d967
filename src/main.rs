use anyhow::Context;
use clap::Parser;
use contacts_csv::config::LogFormat;
use contacts_csv::core::ConfigProvider;
use contacts_csv::utils::{logger, validation::Validate};
use contacts_csv::{
    CliConfig, EtlEngine, EtlError, LocalStorage, RunOutcome, SqlCsvPipeline, TomlConfig,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    match cli.log_format {
        LogFormat::Text => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }

    tracing::info!("Starting contacts-csv");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let exit_code = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let mut config = TomlConfig::from_file(path)
                .with_context(|| format!("failed to load config file '{}'", path))?;
            config.apply_cli_overrides(&cli);
            let monitor = config.monitoring_enabled();
            execute(config, &cli, monitor).await
        }
        None => execute(cli.clone(), &cli, cli.monitor).await,
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}

async fn execute<C: ConfigProvider + Validate>(config: C, cli: &CliConfig, monitor: bool) -> i32 {
    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        return report_failure(&e);
    }

    if monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let preview_limit = config.preview_limit();
    let storage = LocalStorage::new(cli.work_dir.as_str());
    let pipeline = match SqlCsvPipeline::new(storage, config) {
        Ok(pipeline) => pipeline,
        Err(e) => return report_failure(&e),
    };

    let engine = EtlEngine::new_with_monitoring(pipeline, monitor)
        .with_preview_limit(preview_limit)
        .with_dry_run(cli.dry_run);

    match engine.run().await {
        Ok(RunOutcome::SourceMissing { source }) => {
            tracing::warn!("Nothing written: {} does not exist", source);
            0
        }
        Ok(RunOutcome::Completed(report)) => {
            tracing::info!(
                "✅ Conversion completed: {} found, {} written to {}",
                report.found,
                report.written,
                report.target
            );
            0
        }
        Ok(RunOutcome::DryRun(report)) => {
            tracing::info!("🔍 Dry run completed: {} contacts found", report.found);
            0
        }
        Err(e) => report_failure(&e),
    }
}

fn report_failure(e: &EtlError) -> i32 {
    tracing::error!(
        "❌ Conversion failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    e.severity().exit_code()
}
