//! 단위 정의 및 변환 모듈 모음.

pub mod mass;
pub mod power;

use thiserror::Error;

pub use mass::{convert_mass, MassUnit};
pub use power::{convert_power, PowerUnit};

/// 단위 문자열 파싱 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitParseError {
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
}
