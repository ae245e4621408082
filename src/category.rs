use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 변환을 지원하는 물리량 종류. 닫힌 집합이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Volume,
    Area,
    Speed,
}

impl Category {
    /// 표시 순서대로 나열한 전체 카테고리.
    pub const ALL: [Category; 6] = [
        Category::Length,
        Category::Weight,
        Category::Temperature,
        Category::Volume,
        Category::Area,
        Category::Speed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Temperature => "temperature",
            Category::Volume => "volume",
            Category::Area => "area",
            Category::Speed => "speed",
        }
    }

    /// 카테고리의 기준 단위 기호. 온도는 섭씨를 기준으로 정규화한다.
    pub fn base_unit(self) -> &'static str {
        match self {
            Category::Length => "m",
            Category::Weight => "kg",
            Category::Temperature => "C",
            Category::Volume => "l",
            Category::Area => "m",
            Category::Speed => "m/s",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 목록에 없는 카테고리 문자열.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
