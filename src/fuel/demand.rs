use serde::{Deserialize, Serialize};

use super::error::{FuelCalcError, FuelCalcResult};

/// 하루 최대 운항 시간 [h]
pub const MAX_HOURS_PER_DAY: f64 = 24.0;

/// 선박 운항 프로파일.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipProfile {
    /// 운전 출력 [MW]
    pub power_mw: f64,
    /// 하루 운항 시간 [h], (0, 24]
    pub hours_per_day: f64,
}

impl Default for ShipProfile {
    fn default() -> Self {
        Self {
            power_mw: 60.0,
            hours_per_day: 24.0,
        }
    }
}

impl ShipProfile {
    pub fn new(power_mw: f64, hours_per_day: f64) -> Self {
        Self {
            power_mw,
            hours_per_day,
        }
    }

    /// 출력과 운항 시간이 허용 범위인지 확인한다. 범위를 벗어나도 클램프하지 않는다.
    pub fn validate(&self) -> FuelCalcResult<()> {
        if !self.power_mw.is_finite() || self.power_mw <= 0.0 {
            return Err(FuelCalcError::InvalidInput("출력(MW)은 0보다 커야 합니다"));
        }
        if !self.hours_per_day.is_finite()
            || self.hours_per_day <= 0.0
            || self.hours_per_day > MAX_HOURS_PER_DAY
        {
            return Err(FuelCalcError::InvalidInput(
                "운항 시간은 0 초과 24 이하이어야 합니다",
            ));
        }
        Ok(())
    }
}

/// 선박 출력과 운항 시간으로 일일 에너지 수요 [MJ/day]를 계산한다.
///
/// MW→kW 환산 후 시간을 곱한 kW·h 값을 그대로 MJ로 취급한다
/// (`power_mw * 1e3 * hours_per_day`). 연소율, 비용, 배출량이 모두 이 관례를
/// 기준으로 맞춰져 있으므로 3.6 배 보정을 하지 않는다.
pub fn compute_energy_demand(ship: &ShipProfile) -> FuelCalcResult<f64> {
    ship.validate()?;
    let energy = ship.power_mw * 1e3 * ship.hours_per_day;
    if !energy.is_finite() {
        return Err(FuelCalcError::InvalidInput("에너지 수요가 표현 범위를 넘습니다"));
    }
    Ok(energy)
}

/// 외부에서 받은 일일 에너지 수요 [MJ/day]가 유한한 양수인지 확인한다.
pub fn validate_energy(energy_per_day_mj: f64) -> FuelCalcResult<()> {
    if !energy_per_day_mj.is_finite() || energy_per_day_mj <= 0.0 {
        return Err(FuelCalcError::InvalidInput("에너지 수요는 0보다 큰 유한값이어야 합니다"));
    }
    Ok(())
}
