//! 탄소집약도 규제 준수 비용("switch-or-pay") 계산.
//!
//! 기준 CI 대비 감축 목표를 넘는 초과분에만 톤당 탄소 부과금을 매기고,
//! 연료 전환에 필요한 설비 투자비는 자본회수계수로 일할 상각한다.

use serde::{Deserialize, Serialize};

use super::demand::validate_energy;
use super::error::{FuelCalcError, FuelCalcResult};
use super::properties::FuelProfile;

/// 규제 및 재무 파라미터.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolicyParameters {
    /// 기준 CI 대비 감축률 [%], [0, 100)
    pub ci_reduction_percent: f64,
    /// 규제 기준 CI [gCO2e/MJ]
    pub baseline_ci: f64,
    /// 목표 초과 배출 톤당 부과금 [$/tCO2e]
    pub carbon_fee_per_ton: f64,
    /// 상각 할인율 (0, 1)
    pub discount_rate: f64,
    /// 상각 기간 [년]
    pub amortization_years: u32,
    /// 연간 일수
    pub days_per_year: u32,
}

impl Default for PolicyParameters {
    fn default() -> Self {
        Self {
            ci_reduction_percent: 4.0,
            baseline_ci: 93.3,
            carbon_fee_per_ton: 380.0,
            discount_rate: 0.08,
            amortization_years: 20,
            days_per_year: 365,
        }
    }
}

impl PolicyParameters {
    /// 감축 목표 CI = 기준 CI × (1 - 감축률/100).
    pub fn ci_target(&self) -> f64 {
        self.baseline_ci * (1.0 - self.ci_reduction_percent / 100.0)
    }

    /// 파라미터 범위를 확인한다. 상각식 계산 전에 호출되어야 한다.
    pub fn validate(&self) -> FuelCalcResult<()> {
        if !self.discount_rate.is_finite() || self.discount_rate <= 0.0 || self.discount_rate >= 1.0
        {
            return Err(FuelCalcError::InvalidPolicy("할인율은 0 초과 1 미만이어야 합니다"));
        }
        if self.amortization_years == 0 {
            return Err(FuelCalcError::InvalidPolicy("상각 기간은 1년 이상이어야 합니다"));
        }
        if self.days_per_year == 0 {
            return Err(FuelCalcError::InvalidPolicy("연간 일수는 1 이상이어야 합니다"));
        }
        if !self.ci_reduction_percent.is_finite()
            || !(0.0..100.0).contains(&self.ci_reduction_percent)
        {
            return Err(FuelCalcError::InvalidPolicy("감축률은 0 이상 100 미만이어야 합니다"));
        }
        if !self.baseline_ci.is_finite() || self.baseline_ci <= 0.0 {
            return Err(FuelCalcError::InvalidPolicy("기준 CI는 0보다 커야 합니다"));
        }
        if !self.carbon_fee_per_ton.is_finite() || self.carbon_fee_per_ton < 0.0 {
            return Err(FuelCalcError::InvalidPolicy("탄소 부과금은 음수일 수 없습니다"));
        }
        Ok(())
    }
}

/// 규제 준수 비용 계산 결과 [$/day].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplianceCost {
    /// 목표 초과 CI 에 대한 탄소 부과금
    pub carbon_fee_cost: f64,
    /// 일할 상각된 설비 투자비
    pub capex_per_day: f64,
    /// 일일 인프라 비용
    pub infra_per_day: f64,
}

/// 자본회수계수 CRF = r / (1 - (1+r)^-n).
///
/// 분모는 `-expm1(-n·ln(1+r))` 로 계산한다. `1 + r` 이 1로 반올림될 만큼 작은
/// 할인율에서도 분모가 0이 되지 않고 CRF 는 1/n 에 수렴한다.
pub fn capital_recovery_factor(discount_rate: f64, years: u32) -> FuelCalcResult<f64> {
    if !discount_rate.is_finite() || discount_rate <= 0.0 || discount_rate >= 1.0 {
        return Err(FuelCalcError::InvalidPolicy("할인율은 0 초과 1 미만이어야 합니다"));
    }
    if years == 0 {
        return Err(FuelCalcError::InvalidPolicy("상각 기간은 1년 이상이어야 합니다"));
    }
    let denominator = -(-f64::from(years) * discount_rate.ln_1p()).exp_m1();
    let crf = discount_rate / denominator;
    if !crf.is_finite() || crf <= 0.0 {
        return Err(FuelCalcError::InvalidPolicy("자본회수계수를 계산할 수 없습니다"));
    }
    Ok(crf)
}

/// 설비 투자비를 일 단위 균등 비용으로 상각한다. 투자비가 0이면 상각식을 계산하지 않는다.
pub fn capex_per_day(capex: f64, policy: &PolicyParameters) -> FuelCalcResult<f64> {
    if capex <= 0.0 {
        return Ok(0.0);
    }
    if policy.days_per_year == 0 {
        return Err(FuelCalcError::InvalidPolicy("연간 일수는 1 이상이어야 합니다"));
    }
    let crf = capital_recovery_factor(policy.discount_rate, policy.amortization_years)?;
    let per_day = capex * crf / f64::from(policy.days_per_year);
    if !per_day.is_finite() {
        return Err(FuelCalcError::InvalidFuelData("일할 투자비가 표현 범위를 넘습니다"));
    }
    Ok(per_day)
}

/// 목표 CI 초과분 [gCO2e/MJ]. 목표 이하 연료는 0 (초과 달성분에 대한 크레딧 없음).
pub fn excess_carbon_intensity(fuel: &FuelProfile, policy: &PolicyParameters) -> f64 {
    (fuel.carbon_intensity - policy.ci_target()).max(0.0)
}

/// 한 연료에 대한 탄소 부과금, 상각 투자비, 인프라 비용을 계산한다.
pub fn compute_compliance_cost(
    energy_per_day_mj: f64,
    fuel: &FuelProfile,
    policy: &PolicyParameters,
) -> FuelCalcResult<ComplianceCost> {
    validate_energy(energy_per_day_mj)?;
    policy.validate()?;
    fuel.validate()?;

    let excess_tons_co2 = excess_carbon_intensity(fuel, policy) * energy_per_day_mj / 1e6;
    let carbon_fee_cost = excess_tons_co2 * policy.carbon_fee_per_ton;
    if !carbon_fee_cost.is_finite() {
        return Err(FuelCalcError::InvalidPolicy("탄소 부과금이 표현 범위를 넘습니다"));
    }

    Ok(ComplianceCost {
        carbon_fee_cost,
        capex_per_day: capex_per_day(fuel.capex(), policy)?,
        infra_per_day: fuel.infra_per_day(),
    })
}
