use clap::Parser;
use template_etl::core::ConfigProvider;
use template_etl::utils::error::ErrorSeverity;
use template_etl::utils::{logger, validation::Validate};
use template_etl::{CliConfig, EtlEngine, LocalStorage, TemplatePipeline, TomlConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting template-etl CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 配置來源：TOML 檔案優先，否則使用命令列參數
    let run_result = match config.config.clone() {
        Some(path) => match TomlConfig::from_path(std::path::Path::new(&path)) {
            Ok(file_config) => {
                tracing::info!(
                    "Loaded pipeline '{}' v{} from {}",
                    file_config.pipeline.name,
                    file_config.pipeline.version,
                    path
                );
                run_pipeline(file_config, monitor_enabled).await
            }
            Err(e) => Err(e),
        },
        None => match config.validate() {
            Ok(()) => run_pipeline(config, monitor_enabled).await,
            Err(e) => Err(e),
        },
    };

    match run_result {
        Ok(output_path) => {
            tracing::info!("✅ Template extraction completed successfully!");
            println!("✅ Template extraction completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Template extraction failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
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

async fn run_pipeline<C>(config: C, monitor_enabled: bool) -> template_etl::Result<String>
where
    C: ConfigProvider + 'static,
{
    let storage = LocalStorage::new(".".to_string());
    let pipeline = TemplatePipeline::new(storage, config)?;

    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);
    engine.run().await
}
