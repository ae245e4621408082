use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, warn, Level};
use tracing_subscriber::{fmt, EnvFilter};

use unit_converter::app::{self, AppError};
use unit_converter::config::{self, DEFAULT_CONFIG_PATH};
use unit_converter::ui_cli::Cli;
use unit_converter::units;

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 하위 명령을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    match try_run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<ExitCode, AppError> {
    let path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let cfg = config::load_or_default(&path)?;
    init_logging(&cfg.logging.level);

    units::validate_tables()?;
    debug!(config = %path.display(), "unit tables validated");

    let stdin = io::stdin();
    let stdout = io::stdout();
    app::run(cli.command, &cfg, &path, &mut stdin.lock(), &mut stdout.lock())
}

/// 설정의 로그 레벨로 구독자를 설치한다. `RUST_LOG`가 있으면 그 지시자만 사용한다.
fn init_logging(level: &str) {
    let parsed = parse_level(level);
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = log_filter(rust_log.as_deref(), parsed.unwrap_or(Level::INFO));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if parsed.is_none() {
        warn!(level, "unrecognised logging.level, falling back to info");
    }
}

fn parse_level(level: &str) -> Option<Level> {
    match level.trim().to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

/// 비어 있지 않고 해석 가능한 `RUST_LOG` 지시자가 설정 레벨보다 우선한다.
fn log_filter(env_directives: Option<&str>, level: Level) -> EnvFilter {
    env_directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| {
            EnvFilter::builder()
                .with_default_directive(level.into())
                .parse_lossy("")
        })
}
