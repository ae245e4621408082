//! 단위 변환 엔진.
//!
//! 카테고리 문자열과 단위 기호를 받아 환산값을 돌려주는 순수 함수 모음이다.
//! 상태나 입출력이 없으므로 어느 스레드에서든 동시에 호출해도 된다.

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;
use tracing::debug;

use crate::category::Category;
use crate::units::*;

/// 반환값에 적용하는 소수점 자릿수.
pub const OUTPUT_DECIMALS: i32 = 6;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// 여섯 가지 카테고리에 속하지 않는 문자열
    #[error("지원하지 않는 카테고리: {0}")]
    UnsupportedCategory(String),
    /// 카테고리 표에 없는 단위 기호
    #[error("{category} 카테고리에서 알 수 없는 단위: {unit}")]
    UnknownUnit { category: Category, unit: String },
    /// NaN 또는 무한대 입력
    #[error("유한한 숫자가 아닌 값: {0}")]
    NonFiniteValue(f64),
    /// 0 이하이거나 유한하지 않은 환산 계수
    #[error("{category} 단위 {unit}의 환산 계수가 잘못됨: {factor}")]
    InvalidFactor {
        category: Category,
        unit: &'static str,
        factor: f64,
    },
    /// 한 카테고리 안에서 겹치는 단위 기호
    #[error("{category} 카테고리에 중복된 단위 기호: {unit}")]
    DuplicateUnit {
        category: Category,
        unit: &'static str,
    },
}

/// 호스트 계층에서 넘어오는 변환 요청.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub category: String,
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
}

impl ConversionRequest {
    pub fn new(
        category: impl Into<String>,
        value: f64,
        from_unit: impl Into<String>,
        to_unit: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            value,
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
        }
    }

    pub fn convert(&self) -> Result<ConversionResult, ConversionError> {
        convert(&self.category, self.value, &self.from_unit, &self.to_unit)
    }

    /// 변환을 수행하고 성공/실패 여부와 관계없이 응답 형태로 감싼다.
    pub fn respond(&self) -> ConversionResponse {
        ConversionResponse::from_outcome(&self.category, self.convert())
    }
}

/// 변환 성공 결과. `converted_value`만 반올림되어 있다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub original_value: f64,
    pub original_unit: String,
    pub converted_value: f64,
    pub converted_unit: String,
    pub category: Category,
    pub formula: String,
}

/// 호스트 계층으로 돌려주는 응답. 성공이면 결과 필드 전체, 실패면 오류 메시지와 카테고리를 담는다.
///
/// 직렬화하면 변형에 따라 `success` 필드가 `true`/`false`로 붙는다.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionResponse {
    Success(ConversionResult),
    Failure { error: String, category: String },
}

#[derive(Serialize)]
struct SuccessBody<'a> {
    success: bool,
    #[serde(flatten)]
    result: &'a ConversionResult,
}

#[derive(Serialize)]
struct FailureBody<'a> {
    success: bool,
    error: &'a str,
    category: &'a str,
}

impl Serialize for ConversionResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ConversionResponse::Success(result) => SuccessBody {
                success: true,
                result,
            }
            .serialize(serializer),
            ConversionResponse::Failure { error, category } => FailureBody {
                success: false,
                error,
                category,
            }
            .serialize(serializer),
        }
    }
}

impl ConversionResponse {
    pub fn from_outcome(
        category: &str,
        outcome: Result<ConversionResult, ConversionError>,
    ) -> Self {
        match outcome {
            Ok(result) => ConversionResponse::Success(result),
            Err(err) => ConversionResponse::Failure {
                error: err.to_string(),
                category: category.to_string(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ConversionResponse::Success(_))
    }
}

/// 카테고리 문자열을 해석한 뒤 변환한다.
///
/// 카테고리는 `length`, `weight`, `temperature`, `volume`, `area`, `speed` 중 하나이며
/// 대소문자는 구분하지 않는다.
pub fn convert(
    category: &str,
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<ConversionResult, ConversionError> {
    let kind = category.parse::<Category>().map_err(|e| {
        debug!(category = %e.0, "unsupported category");
        ConversionError::UnsupportedCategory(e.0)
    })?;
    convert_in(kind, value, from_unit, to_unit)
}

/// 이미 해석된 카테고리로 변환하고 반올림된 결과를 만든다.
pub fn convert_in(
    category: Category,
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<ConversionResult, ConversionError> {
    let (raw, from, to) = resolve_and_convert(category, value, from_unit, to_unit)?;
    let converted = round_output(raw);
    debug!(%category, value, from, to, converted, "unit conversion");
    Ok(ConversionResult {
        original_value: value,
        original_unit: from.to_string(),
        converted_value: converted,
        converted_unit: to.to_string(),
        category,
        formula: format!("{value} {from} = {converted} {to}"),
    })
}

/// 반올림하지 않은 환산값. 변환을 이어 붙일 때 사용한다.
pub fn convert_value(
    category: Category,
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<f64, ConversionError> {
    resolve_and_convert(category, value, from_unit, to_unit).map(|(raw, _, _)| raw)
}

/// 결과를 소수점 여섯째 자리로 반올림한다. 배율을 곱해 넘치는 큰 값은 그대로 둔다.
pub fn round_output(value: f64) -> f64 {
    let scale = 10f64.powi(OUTPUT_DECIMALS);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / scale;
    // -0.0 정규화
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

fn resolve_and_convert(
    category: Category,
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<(f64, &'static str, &'static str), ConversionError> {
    if !value.is_finite() {
        return Err(ConversionError::NonFiniteValue(value));
    }
    match category {
        Category::Length => linear(category, value, from_unit, to_unit, convert_length),
        Category::Weight => linear(category, value, from_unit, to_unit, convert_weight),
        Category::Volume => linear(category, value, from_unit, to_unit, convert_volume),
        Category::Area => linear(category, value, from_unit, to_unit, convert_area),
        Category::Speed => linear(category, value, from_unit, to_unit, convert_speed),
        Category::Temperature => {
            let from = parse_temperature_unit(from_unit)?;
            let to = parse_temperature_unit(to_unit)?;
            Ok((
                convert_temperature(value, from, to),
                from.symbol(),
                to.symbol(),
            ))
        }
    }
}

fn linear<U: LinearUnit>(
    category: Category,
    value: f64,
    from_unit: &str,
    to_unit: &str,
    convert_fn: fn(f64, U, U) -> f64,
) -> Result<(f64, &'static str, &'static str), ConversionError> {
    let from = parse_linear_unit::<U>(category, from_unit)?;
    let to = parse_linear_unit::<U>(category, to_unit)?;
    check_factor(category, from)?;
    check_factor(category, to)?;
    Ok((convert_fn(value, from, to), from.symbol(), to.symbol()))
}

fn parse_linear_unit<U: LinearUnit>(category: Category, s: &str) -> Result<U, ConversionError> {
    U::from_symbol(s).ok_or_else(|| unknown_unit(category, s))
}

fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    TemperatureUnit::from_symbol(s).ok_or_else(|| unknown_unit(Category::Temperature, s))
}

fn unknown_unit(category: Category, unit: &str) -> ConversionError {
    debug!(%category, unit, "unknown unit");
    ConversionError::UnknownUnit {
        category,
        unit: unit.to_string(),
    }
}
