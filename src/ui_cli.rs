//! 명령행 인터페이스. 인자 정의와 출력/대화형 메뉴를 담당한다.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::category::Category;
use crate::config::OutputFormat;
use crate::conversion::{self, ConversionResponse};
use crate::units;

/// 단위 변환기
#[derive(Debug, Parser)]
#[command(name = "unit_converter")]
#[command(version)]
#[command(about = "Convert values between length, weight, temperature, volume, area and speed units", long_about = None)]
pub struct Cli {
    /// 설정 파일 경로 (기본: unit_converter.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// 사용 가능한 하위 명령
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert a single value
    Convert(ConvertArgs),

    /// List categories and their unit symbols
    Units {
        /// Only list this category
        category: Option<String>,
    },

    /// Read a JSON conversion request from a file (or stdin) and print the JSON response
    Request {
        /// Request file; stdin when omitted
        file: Option<PathBuf>,
    },

    /// Menu-driven conversion prompt
    Interactive,

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// length, weight, temperature, volume, area or speed
    pub category: String,

    /// Value to convert
    #[arg(allow_negative_numbers = true)]
    pub value: f64,

    /// Source unit symbol (e.g. mi, kg, C)
    pub from: String,

    /// Target unit symbol (e.g. km, lb, F)
    pub to: String,

    /// Print the JSON response regardless of the configured format
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// 변환 응답을 지정한 형식으로 출력한다.
pub fn write_response<W: Write>(
    out: &mut W,
    response: &ConversionResponse,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, response)?;
            writeln!(out)
        }
        OutputFormat::Text => match response {
            ConversionResponse::Success(result) => writeln!(out, "{}", result.formula),
            ConversionResponse::Failure { error, .. } => writeln!(out, "변환 실패: {error}"),
        },
    }
}

/// 카테고리별 단위 기호 목록을 출력한다.
pub fn write_units<W: Write>(out: &mut W, only: Option<Category>) -> io::Result<()> {
    let categories: Vec<Category> = match only {
        Some(c) => vec![c],
        None => Category::ALL.to_vec(),
    };
    for c in categories {
        writeln!(
            out,
            "{c} (기준: {}): {}",
            c.base_unit(),
            units::symbols(c).join(", ")
        )?;
    }
    Ok(())
}

/// 대화형 메뉴를 실행한다. 입력이 끝나거나 0을 고르면 종료한다.
pub fn run_interactive<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<()> {
    loop {
        writeln!(out, "\n=== 단위 변환기 ===")?;
        for (i, c) in Category::ALL.iter().enumerate() {
            writeln!(out, "{}) {}", i + 1, c)?;
        }
        writeln!(out, "0) 종료")?;

        let Some(sel) = read_line(input, out, "메뉴 선택: ")? else {
            return Ok(());
        };
        let category = match sel.trim() {
            "0" => return Ok(()),
            s => match map_category(s) {
                Some(c) => c,
                None => {
                    writeln!(out, "잘못된 입력입니다. 다시 선택하세요.")?;
                    continue;
                }
            },
        };

        writeln!(out, "사용 가능한 단위: {}", units::symbols(category).join(", "))?;
        let Some(value) = read_f64(input, out, "값 입력: ")? else {
            return Ok(());
        };
        let Some(from) = read_line(input, out, "입력 단위: ")? else {
            return Ok(());
        };
        let Some(to) = read_line(input, out, "변환 단위: ")? else {
            return Ok(());
        };

        let outcome = conversion::convert_in(category, value, from.trim(), to.trim());
        let response = ConversionResponse::from_outcome(category.as_str(), outcome);
        write_response(out, &response, OutputFormat::Text)?;
    }
}

fn map_category(s: &str) -> Option<Category> {
    let n: usize = s.parse().ok()?;
    n.checked_sub(1).and_then(|i| Category::ALL.get(i).copied())
}

fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf))
}

fn read_f64<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<f64>> {
    loop {
        let Some(s) = read_line(input, out, prompt)? else {
            return Ok(None);
        };
        match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => return Ok(Some(v)),
            _ => writeln!(out, "숫자를 입력하세요.")?,
        }
    }
}
