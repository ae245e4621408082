use super::{convert_linear, LinearUnit};

/// 속도 단위. 내부 기준은 m/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedUnit {
    MeterPerSecond,
    KilometerPerHour,
    MilePerHour,
    FootPerSecond,
    Knot,
}

impl LinearUnit for SpeedUnit {
    const ALL: &'static [Self] = &[
        SpeedUnit::MeterPerSecond,
        SpeedUnit::KilometerPerHour,
        SpeedUnit::MilePerHour,
        SpeedUnit::FootPerSecond,
        SpeedUnit::Knot,
    ];

    fn symbol(self) -> &'static str {
        match self {
            SpeedUnit::MeterPerSecond => "m/s",
            SpeedUnit::KilometerPerHour => "km/h",
            SpeedUnit::MilePerHour => "mph",
            SpeedUnit::FootPerSecond => "ft/s",
            SpeedUnit::Knot => "knot",
        }
    }

    fn factor(self) -> f64 {
        match self {
            SpeedUnit::MeterPerSecond => 1.0,
            SpeedUnit::KilometerPerHour => 0.277778,
            SpeedUnit::MilePerHour => 0.44704,
            SpeedUnit::FootPerSecond => 0.3048,
            SpeedUnit::Knot => 0.514444,
        }
    }
}

/// 속도를 변환한다.
pub fn convert_speed(value: f64, from: SpeedUnit, to: SpeedUnit) -> f64 {
    convert_linear(value, from, to)
}
