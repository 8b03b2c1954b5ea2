use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::UnitParseError;

/// 연료 질량 단위. 내부 기준은 metric ton이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassUnit {
    Tonne,
    Kilogram,
    /// long ton (2240 lb)
    LongTon,
}

fn to_tonne(value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Tonne => value,
        MassUnit::Kilogram => value / 1000.0,
        MassUnit::LongTon => value * 1.016_047,
    }
}

fn from_tonne(value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Tonne => value,
        MassUnit::Kilogram => value * 1000.0,
        MassUnit::LongTon => value / 1.016_047,
    }
}

/// 질량을 변환한다.
pub fn convert_mass(value: f64, from: MassUnit, to: MassUnit) -> f64 {
    from_tonne(to_tonne(value, from), to)
}

impl MassUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            MassUnit::Tonne => "t",
            MassUnit::Kilogram => "kg",
            MassUnit::LongTon => "LT",
        }
    }
}

impl FromStr for MassUnit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "t" | "ton" | "tonne" => Ok(MassUnit::Tonne),
            "kg" => Ok(MassUnit::Kilogram),
            "lt" | "long-ton" => Ok(MassUnit::LongTon),
            other => Err(UnitParseError::UnknownUnit(other.to_string())),
        }
    }
}
