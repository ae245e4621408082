//! 단위 변환 엔진을 라이브러리로 분리하여 CLI 외의 호스트(웹 계층 등)에서도 그대로 쓰도록 한다.

pub mod app;
pub mod category;
pub mod config;
pub mod conversion;
pub mod ui_cli;
pub mod units;

pub use category::Category;
pub use conversion::{
    convert, convert_in, convert_value, ConversionError, ConversionRequest, ConversionResponse,
    ConversionResult,
};
