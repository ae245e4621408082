use super::{convert_linear, LinearUnit};

/// 질량 단위. 내부 기준은 킬로그램이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightUnit {
    Milligram,
    Gram,
    Kilogram,
    Tonne,
    Ounce,
    Pound,
    Stone,
}

impl LinearUnit for WeightUnit {
    const ALL: &'static [Self] = &[
        WeightUnit::Milligram,
        WeightUnit::Gram,
        WeightUnit::Kilogram,
        WeightUnit::Tonne,
        WeightUnit::Ounce,
        WeightUnit::Pound,
        WeightUnit::Stone,
    ];

    fn symbol(self) -> &'static str {
        match self {
            WeightUnit::Milligram => "mg",
            WeightUnit::Gram => "g",
            WeightUnit::Kilogram => "kg",
            WeightUnit::Tonne => "t",
            WeightUnit::Ounce => "oz",
            WeightUnit::Pound => "lb",
            WeightUnit::Stone => "st",
        }
    }

    fn factor(self) -> f64 {
        match self {
            WeightUnit::Milligram => 1e-6,
            WeightUnit::Gram => 0.001,
            WeightUnit::Kilogram => 1.0,
            WeightUnit::Tonne => 1000.0,
            WeightUnit::Ounce => 0.0283495,
            WeightUnit::Pound => 0.453592,
            WeightUnit::Stone => 6.35029,
        }
    }
}

/// 질량을 변환한다.
pub fn convert_weight(value: f64, from: WeightUnit, to: WeightUnit) -> f64 {
    convert_linear(value, from, to)
}
