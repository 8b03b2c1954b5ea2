use serde::{Deserialize, Serialize};
use tracing::debug;

use super::compliance::{compute_compliance_cost, PolicyParameters};
use super::consumption::compute_consumption;
use super::demand::{compute_energy_demand, ShipProfile};
use super::error::{FuelCalcError, FuelCalcResult};
use super::properties::FuelProfile;

/// 연료 하나에 대한 최종 계산 결과. 매 계산마다 새로 만들어지고 변경되지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelResult {
    pub fuel: String,
    /// 연료 소비율 [ton/day]
    pub burn_rate: f64,
    /// 연료비 [$/day]
    pub fuel_cost: f64,
    /// 배출량 [tCO2e/day]
    pub emissions: f64,
    /// 탄소 부과금 [$/day]
    pub carbon_fee_cost: f64,
    /// 상각 투자비 [$/day]
    pub capex_per_day: f64,
    /// 인프라 비용 [$/day]
    pub infra_per_day: f64,
    /// 총 비용 = 연료비 + 부과금 + 상각 투자비 + 인프라 비용 [$/day]
    pub total_cost: f64,
}

/// 주어진 일일 에너지 수요로 연료 하나를 평가한다.
pub fn evaluate_fuel(
    energy_per_day_mj: f64,
    fuel: &FuelProfile,
    policy: &PolicyParameters,
) -> FuelCalcResult<FuelResult> {
    let consumption = compute_consumption(energy_per_day_mj, fuel)?;
    let compliance = compute_compliance_cost(energy_per_day_mj, fuel, policy)?;
    let total_cost = consumption.fuel_cost
        + compliance.carbon_fee_cost
        + compliance.capex_per_day
        + compliance.infra_per_day;
    if !total_cost.is_finite() {
        return Err(FuelCalcError::InvalidInput("총비용이 표현 범위를 넘습니다"));
    }

    let result = FuelResult {
        fuel: fuel.name.clone(),
        burn_rate: consumption.burn_rate,
        fuel_cost: consumption.fuel_cost,
        emissions: consumption.emissions,
        carbon_fee_cost: compliance.carbon_fee_cost,
        capex_per_day: compliance.capex_per_day,
        infra_per_day: compliance.infra_per_day,
        total_cost,
    };
    debug!(
        fuel = %result.fuel,
        burn_rate = result.burn_rate,
        total_cost = result.total_cost,
        "evaluated fuel"
    );
    Ok(result)
}

/// 모든 연료를 입력 순서대로 평가한다. 정렬은 표시 계층의 몫이다.
///
/// 첫 번째 오류가 그대로 호출자에게 전달된다.
pub fn evaluate_all(
    ship: &ShipProfile,
    fuels: &[FuelProfile],
    policy: &PolicyParameters,
) -> FuelCalcResult<Vec<FuelResult>> {
    let energy = compute_energy_demand(ship)?;
    evaluate_fuels(energy, fuels, policy)
}

/// 이미 계산된 에너지 수요로 여러 연료를 입력 순서대로 평가한다.
pub fn evaluate_fuels(
    energy_per_day_mj: f64,
    fuels: &[FuelProfile],
    policy: &PolicyParameters,
) -> FuelCalcResult<Vec<FuelResult>> {
    debug!(energy_mj_per_day = energy_per_day_mj, fuels = fuels.len(), "evaluating fuels");
    fuels
        .iter()
        .map(|fuel| evaluate_fuel(energy_per_day_mj, fuel, policy))
        .collect()
}
