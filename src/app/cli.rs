use crate::app::{build_engine, DemoSelection};
use crate::config::CliArgs;
use crate::utils::error::{AlgoError, Result};
use crate::utils::{logger, validation::Validate};
use std::process::ExitCode;

/// Shared entry point for the demo executables.
pub fn run(selection: DemoSelection, args: CliArgs) -> ExitCode {
    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting small-algos ({:?})", selection);
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    match execute(selection, &args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_failure(&e),
    }
}

fn execute(selection: DemoSelection, args: &CliArgs) -> Result<()> {
    let config = args.load_config()?;

    // 驗證配置
    config.validate()?;
    tracing::debug!("Configuration validated: {:?}", config);

    if config.monitoring_enabled() {
        tracing::info!("🔍 System monitoring enabled");
    }

    let mut engine = build_engine(&config, selection)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summaries = engine.run(&mut out)?;

    tracing::info!("✅ {} demo(s) completed", summaries.len());
    Ok(())
}

fn report_failure(e: &AlgoError) -> ExitCode {
    tracing::error!(
        "❌ Demo failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    match u8::try_from(e.exit_code()) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(code) => ExitCode::from(code),
        Err(_) => ExitCode::FAILURE,
    }
}
