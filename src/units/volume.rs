use super::{convert_linear, LinearUnit};

/// 체적 단위. 내부 기준은 리터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeUnit {
    Milliliter,
    Liter,
    Gallon,
    Quart,
    Pint,
    Cup,
    FluidOunce,
}

impl LinearUnit for VolumeUnit {
    const ALL: &'static [Self] = &[
        VolumeUnit::Milliliter,
        VolumeUnit::Liter,
        VolumeUnit::Gallon,
        VolumeUnit::Quart,
        VolumeUnit::Pint,
        VolumeUnit::Cup,
        VolumeUnit::FluidOunce,
    ];

    fn symbol(self) -> &'static str {
        match self {
            VolumeUnit::Milliliter => "ml",
            VolumeUnit::Liter => "l",
            VolumeUnit::Gallon => "gal",
            VolumeUnit::Quart => "qt",
            VolumeUnit::Pint => "pt",
            VolumeUnit::Cup => "cup",
            VolumeUnit::FluidOunce => "fl oz",
        }
    }

    // US 액량 단위 기준
    fn factor(self) -> f64 {
        match self {
            VolumeUnit::Milliliter => 0.001,
            VolumeUnit::Liter => 1.0,
            VolumeUnit::Gallon => 3.78541,
            VolumeUnit::Quart => 0.946353,
            VolumeUnit::Pint => 0.473176,
            VolumeUnit::Cup => 0.236588,
            VolumeUnit::FluidOunce => 0.0295735,
        }
    }
}

/// 체적을 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    convert_linear(value, from, to)
}
