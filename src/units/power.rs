use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::UnitParseError;

/// 출력 단위. 내부 기준은 MW이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUnit {
    Megawatt,
    Kilowatt,
    /// 미터마력(PS)
    MetricHorsepower,
    /// 영국마력(hp)
    Horsepower,
}

fn to_mw(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Megawatt => value,
        PowerUnit::Kilowatt => value / 1000.0,
        PowerUnit::MetricHorsepower => value * 0.000_735_499,
        PowerUnit::Horsepower => value * 0.000_745_700,
    }
}

fn from_mw(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Megawatt => value,
        PowerUnit::Kilowatt => value * 1000.0,
        PowerUnit::MetricHorsepower => value / 0.000_735_499,
        PowerUnit::Horsepower => value / 0.000_745_700,
    }
}

/// 출력을 변환한다.
pub fn convert_power(value: f64, from: PowerUnit, to: PowerUnit) -> f64 {
    from_mw(to_mw(value, from), to)
}

impl PowerUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            PowerUnit::Megawatt => "MW",
            PowerUnit::Kilowatt => "kW",
            PowerUnit::MetricHorsepower => "PS",
            PowerUnit::Horsepower => "hp",
        }
    }
}

impl FromStr for PowerUnit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mw" => Ok(PowerUnit::Megawatt),
            "kw" => Ok(PowerUnit::Kilowatt),
            "ps" | "metric-hp" => Ok(PowerUnit::MetricHorsepower),
            "hp" | "bhp" => Ok(PowerUnit::Horsepower),
            other => Err(UnitParseError::UnknownUnit(other.to_string())),
        }
    }
}
