use serde::{Deserialize, Serialize};

use super::demand::validate_energy;
use super::error::{FuelCalcError, FuelCalcResult};
use super::properties::FuelProfile;

/// 연료 소비 및 배출 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Consumption {
    /// 연료 소비율 [ton/day]
    pub burn_rate: f64,
    /// 연료비 [$/day]
    pub fuel_cost: f64,
    /// 온실가스 배출량 [tCO2e/day]
    pub emissions: f64,
}

/// 일일 에너지 수요와 연료 물성으로 연소율, 연료비, 배출량을 계산한다.
///
/// 효율은 분모에 들어가므로 효율이 낮을수록 같은 에너지에 더 많은 연료가 든다.
pub fn compute_consumption(energy_per_day_mj: f64, fuel: &FuelProfile) -> FuelCalcResult<Consumption> {
    validate_energy(energy_per_day_mj)?;
    fuel.validate()?;
    let eff = fuel.efficiency();
    let burn_rate = energy_per_day_mj / (fuel.lower_heating_value * 1000.0 * eff);
    let fuel_cost = burn_rate * fuel.price_per_ton;
    // g/MJ × MJ → g, ÷1e6 → ton
    let emissions = energy_per_day_mj * fuel.carbon_intensity / 1e6;
    if !(burn_rate.is_finite() && fuel_cost.is_finite() && emissions.is_finite()) {
        return Err(FuelCalcError::InvalidFuelData("소비량 계산 결과가 표현 범위를 넘습니다"));
    }
    Ok(Consumption {
        burn_rate,
        fuel_cost,
        emissions,
    })
}
