// devkit-rs: Developer Workflow Utilities
//
// SPDX-FileCopyrightText: 2026 devkit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Command Dispatch
//!   Version | Options | Inis | Test | Export
//! ```

use std::process::ExitCode;

use devkit_rs::cli::global::GlobalOptions;
use devkit_rs::cli::{self, Command};
use devkit_rs::cmd::config::{run_inis_command, run_options_command};
use devkit_rs::cmd::export::run_export_command;
use devkit_rs::cmd::test::run_test_command;
use devkit_rs::config::Config;
use devkit_rs::config::loader::ConfigLoader;
use devkit_rs::logging::init_logging;
use devkit_rs::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli).await
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::INFO);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

async fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            load_config(&cli.global).map(|config| run_options_command(&config))
        }
        Some(Command::Inis) => match build_config_loader(&cli.global) {
            Ok(loader) => {
                run_inis_command(&loader.format_loaded_files());
                Ok(())
            }
            Err(e) => Err(e),
        },
        Some(Command::Test(args)) => match load_config(&cli.global) {
            Ok(config) => match run_test_command(args, &config, config.global.dry).await {
                Ok(code) => return ExitCode::from(code),
                Err(e) => Err(e),
            },
            Err(e) => Err(e),
        },
        Some(Command::Export(args)) => match load_config(&cli.global) {
            Ok(config) => run_export_command(args, &config, config.global.dry).await,
            Err(e) => Err(e),
        },
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(devkit_rs::error::bail_out("no command specified").into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> devkit_rs::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        loader = loader.add_toml_file_optional("devkit.toml");
    }
    for config_path in &global.configs {
        loader = loader.add_toml_file(config_path);
    }
    loader = loader.with_env_prefix("DEVKIT");

    for option in global.to_config_overrides() {
        let Some((key, value)) = option.split_once('=') else {
            anyhow::bail!("invalid option '{option}', expected 'section.key=value'");
        };
        loader = loader.set(key, value)?;
    }

    Ok(loader)
}

fn load_config(global: &GlobalOptions) -> devkit_rs::error::Result<Config> {
    let loader = build_config_loader(global)?;
    loader.build().map_err(|e| {
        eprintln!("Failed to load config: {e}");
        e
    })
}
