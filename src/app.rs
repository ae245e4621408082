use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use thiserror::Error;
use tracing::{info, warn};

use crate::category::Category;
use crate::config::{Config, ConfigError, OutputFormat};
use crate::conversion::{self, ConversionError, ConversionRequest, ConversionResponse};
use crate::ui_cli::{self, Commands, ConfigAction, ConvertArgs};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    /// 요청 JSON 해석 오류
    #[error("요청 JSON 오류: {0}")]
    Json(#[from] serde_json::Error),
    /// 이미 존재하는 설정 파일을 덮어쓰려 함
    #[error("설정 파일이 이미 존재함: {0} (--force로 덮어쓰기)")]
    ConfigExists(String),
}

/// 하위 명령을 실행하고 프로세스 종료 코드를 돌려준다.
///
/// `input`은 파일 없이 호출한 `request`와 `interactive`가 읽는 입력이다.
pub fn run<R: BufRead, W: Write>(
    command: Commands,
    config: &Config,
    config_path: &Path,
    input: &mut R,
    out: &mut W,
) -> Result<ExitCode, AppError> {
    match command {
        Commands::Convert(args) => handle_convert(out, &args, config),
        Commands::Units { category } => {
            let only = category
                .as_deref()
                .map(|s| {
                    s.parse::<Category>()
                        .map_err(|e| ConversionError::UnsupportedCategory(e.0))
                })
                .transpose()?;
            ui_cli::write_units(out, only)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Request { file } => {
            let body = match file {
                Some(path) => fs::read_to_string(path)?,
                None => {
                    let mut buf = String::new();
                    input.read_to_string(&mut buf)?;
                    buf
                }
            };
            handle_request(out, &body)
        }
        Commands::Interactive => {
            ui_cli::run_interactive(input, out)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Config {
            action: ConfigAction::Init { force },
        } => {
            if config_path.exists() && !force {
                return Err(AppError::ConfigExists(config_path.display().to_string()));
            }
            Config::default().save(config_path)?;
            info!(path = %config_path.display(), "wrote default configuration");
            writeln!(out, "{}", config_path.display())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// 단일 값을 변환해 출력한다. 변환 실패는 응답으로 출력하고 종료 코드로만 알린다.
pub fn handle_convert<W: Write>(
    out: &mut W,
    args: &ConvertArgs,
    config: &Config,
) -> Result<ExitCode, AppError> {
    let format = if args.json {
        OutputFormat::Json
    } else {
        config.output.format
    };
    let outcome = conversion::convert(&args.category, args.value, &args.from, &args.to);
    if let Err(err) = &outcome {
        warn!(category = %args.category, error = %err, "conversion rejected");
    }
    let response = ConversionResponse::from_outcome(&args.category, outcome);
    ui_cli::write_response(out, &response, format)?;
    Ok(exit_code(&response))
}

/// JSON 요청 본문 하나를 처리해 JSON 응답을 출력한다.
pub fn handle_request<W: Write>(out: &mut W, body: &str) -> Result<ExitCode, AppError> {
    let request: ConversionRequest = serde_json::from_str(body)?;
    let response = request.respond();
    if !response.is_success() {
        warn!(category = %request.category, "conversion request rejected");
    }
    ui_cli::write_response(out, &response, OutputFormat::Json)?;
    Ok(exit_code(&response))
}

fn exit_code(response: &ConversionResponse) -> ExitCode {
    if response.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
