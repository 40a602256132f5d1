use std::process::ExitCode;

use clap::Parser;
use dotenvy::dotenv;
use tracing::{error, info, warn};
use uuid::Uuid;

fn load_config() -> configs::AppConfig {
    match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(e) => {
            // logging is not up yet
            eprintln!("warning: invalid configuration, using defaults: {e:#}");
            let mut cfg = configs::AppConfig::default();
            cfg.apply_env();
            if cfg.normalize_and_validate().is_err() {
                cfg = configs::AppConfig::default();
            }
            cfg
        }
    }
}

fn main() -> ExitCode {
    dotenv().ok();
    let cli = cli::Cli::parse();
    let cfg = load_config();
    common::utils::logging::init_logging(&cfg.logging.format);

    let run_id = Uuid::new_v4();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(service = "cms", event = "panic", %run_id, message = %info, "unhandled panic occurred");
    }));

    let rt = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "cms", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(service = "cms", event = "start", %run_id, version, "cms starting");

    rt.block_on(async move {
        tokio::select! {
            res = cli::run(cli, cfg) => match res {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    warn!(service = "cms", event = "command_failed", error = %e, "command failed");
                    eprintln!("Error: {e:#}");
                    ExitCode::FAILURE
                }
            },
            _ = tokio::signal::ctrl_c() => {
                info!(service = "cms", event = "interrupted", %run_id, "received Ctrl+C");
                ExitCode::from(130)
            }
        }
    })
}
