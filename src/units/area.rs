use super::{convert_linear, LinearUnit};

/// 면적 단위. 내부 기준은 제곱미터이다.
///
/// 기호는 길이 기호를 그대로 쓰고 "제곱"을 암묵적으로 뜻한다(`ft` = ft²).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaUnit {
    SquareMillimeter,
    SquareCentimeter,
    SquareMeter,
    SquareKilometer,
    SquareInch,
    SquareFoot,
    SquareYard,
    Acre,
}

impl LinearUnit for AreaUnit {
    const ALL: &'static [Self] = &[
        AreaUnit::SquareMillimeter,
        AreaUnit::SquareCentimeter,
        AreaUnit::SquareMeter,
        AreaUnit::SquareKilometer,
        AreaUnit::SquareInch,
        AreaUnit::SquareFoot,
        AreaUnit::SquareYard,
        AreaUnit::Acre,
    ];

    fn symbol(self) -> &'static str {
        match self {
            AreaUnit::SquareMillimeter => "mm",
            AreaUnit::SquareCentimeter => "cm",
            AreaUnit::SquareMeter => "m",
            AreaUnit::SquareKilometer => "km",
            AreaUnit::SquareInch => "in",
            AreaUnit::SquareFoot => "ft",
            AreaUnit::SquareYard => "yd",
            AreaUnit::Acre => "acre",
        }
    }

    fn factor(self) -> f64 {
        match self {
            AreaUnit::SquareMillimeter => 1e-6,
            AreaUnit::SquareCentimeter => 0.0001,
            AreaUnit::SquareMeter => 1.0,
            AreaUnit::SquareKilometer => 1e6,
            AreaUnit::SquareInch => 0.00064516,
            AreaUnit::SquareFoot => 0.092903,
            AreaUnit::SquareYard => 0.836127,
            AreaUnit::Acre => 4046.86,
        }
    }
}

/// 면적을 변환한다.
pub fn convert_area(value: f64, from: AreaUnit, to: AreaUnit) -> f64 {
    convert_linear(value, from, to)
}
