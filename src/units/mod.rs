//! 카테고리별 단위 정의와 환산 계수 표.
//!
//! 선형 카테고리는 모두 "기준 단위로의 계수" 하나로 표현한다.
//! 온도만 오프셋이 있으므로 [`temperature`]에서 따로 처리한다.

pub mod area;
pub mod length;
pub mod speed;
pub mod temperature;
pub mod volume;
pub mod weight;

pub use area::{convert_area, AreaUnit};
pub use length::{convert_length, LengthUnit};
pub use speed::{convert_speed, SpeedUnit};
pub use temperature::{convert_temperature, TemperatureUnit};
pub use volume::{convert_volume, VolumeUnit};
pub use weight::{convert_weight, WeightUnit};

use crate::category::Category;
use crate::conversion::ConversionError;

/// 곱셈 계수 하나로 기준 단위와 오가는 단위.
pub trait LinearUnit: Copy + Sized + 'static {
    /// 표에 등록된 순서대로의 전체 단위.
    const ALL: &'static [Self];

    fn symbol(self) -> &'static str;

    /// 기준 단위로 가는 계수. 항상 0보다 커야 한다.
    fn factor(self) -> f64;

    /// 앞뒤 공백을 무시하고 대소문자 구분 없이 기호를 찾는다.
    fn from_symbol(s: &str) -> Option<Self> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|u| u.symbol().eq_ignore_ascii_case(wanted))
    }
}

/// `base = value * factor[from]`, `result = base / factor[to]`.
pub fn convert_linear<U: LinearUnit>(value: f64, from: U, to: U) -> f64 {
    let base = value * from.factor();
    base / to.factor()
}

/// 카테고리에서 사용 가능한 단위 기호를 표 순서대로 돌려준다.
pub fn symbols(category: Category) -> Vec<&'static str> {
    match category {
        Category::Length => symbols_of::<LengthUnit>(),
        Category::Weight => symbols_of::<WeightUnit>(),
        Category::Temperature => TemperatureUnit::ALL.iter().map(|u| u.symbol()).collect(),
        Category::Volume => symbols_of::<VolumeUnit>(),
        Category::Area => symbols_of::<AreaUnit>(),
        Category::Speed => symbols_of::<SpeedUnit>(),
    }
}

fn symbols_of<U: LinearUnit>() -> Vec<&'static str> {
    U::ALL.iter().map(|u| u.symbol()).collect()
}

/// 기동 시 한 번 호출해 단위 표 전체를 검증한다.
///
/// 모든 계수가 유한한 양수인지, 카테고리 안에서 기호가 겹치지 않는지,
/// 온도 기호 C/F/K가 모두 해석되는지 확인한다.
pub fn validate_tables() -> Result<(), ConversionError> {
    validate_table::<LengthUnit>(Category::Length)?;
    validate_table::<WeightUnit>(Category::Weight)?;
    validate_table::<VolumeUnit>(Category::Volume)?;
    validate_table::<AreaUnit>(Category::Area)?;
    validate_table::<SpeedUnit>(Category::Speed)?;

    for symbol in ["C", "F", "K"] {
        if TemperatureUnit::from_symbol(symbol).is_none() {
            return Err(ConversionError::UnknownUnit {
                category: Category::Temperature,
                unit: symbol.to_string(),
            });
        }
    }
    Ok(())
}

fn validate_table<U: LinearUnit>(category: Category) -> Result<(), ConversionError> {
    for (i, unit) in U::ALL.iter().enumerate() {
        check_factor(category, *unit)?;
        let duplicated = U::ALL[..i]
            .iter()
            .any(|prev| prev.symbol().eq_ignore_ascii_case(unit.symbol()));
        if duplicated {
            return Err(ConversionError::DuplicateUnit {
                category,
                unit: unit.symbol(),
            });
        }
    }
    Ok(())
}

/// 0, 음수, 비유한 계수는 나눗셈에 들어가기 전에 거부한다.
pub fn check_factor<U: LinearUnit>(category: Category, unit: U) -> Result<f64, ConversionError> {
    let factor = unit.factor();
    if factor.is_finite() && factor > 0.0 {
        Ok(factor)
    } else {
        Err(ConversionError::InvalidFactor {
            category,
            unit: unit.symbol(),
            factor,
        })
    }
}
