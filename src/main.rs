use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use marine_fuel_toolbox::{app, cli::Cli, config, i18n};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// 프로그램의 엔트리 포인트. 로깅과 설정을 준비한 뒤 명령을 실행한다.
fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_CONFIG_PATH));

    let mut cfg = match config::load_from(&config_path) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("{}: {err}", i18n::Translator::new("ko").t(i18n::keys::ERROR_PREFIX));
            return ExitCode::FAILURE;
        }
    };
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, cfg.locale_dir.as_deref());

    match app::run(cli, &mut cfg, &config_path, &tr) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
