//! 선박 연료 물성 테이블.
//! 발열량(LHV)·단가·탄소집약도 값은 비교용 참고치이며 실제 계약 단가와 다를 수 있다.

use serde::{Deserialize, Serialize};

use super::error::{FuelCalcError, FuelCalcResult};

/// 연료 한 종류의 물성 및 비용 정보.
///
/// 선택 항목(`conversion_efficiency`, `capital_expenditure`, `daily_infra_cost`)은
/// 값이 없을 때 각각 1.0, 0, 0 으로 해석한다. 효율이 없다는 것은 0 효율이 아니라
/// 감쇄가 없다는 뜻이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelProfile {
    /// 표시용 이름(고유)
    pub name: String,
    /// 저위발열량 LHV [MJ/kg]
    pub lower_heating_value: f64,
    /// 연료 단가 [$/ton]
    pub price_per_ton: f64,
    /// 탄소집약도 CI [gCO2e/MJ]
    pub carbon_intensity: f64,
    /// 연료전지/엔진 변환 효율 (0, 1]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_efficiency: Option<f64>,
    /// 연료 전환에 필요한 일회성 설비 투자비 [$]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capital_expenditure: Option<f64>,
    /// 벙커링 인프라 등 상각과 무관한 일일 고정비 [$/day]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_infra_cost: Option<f64>,
}

impl FuelProfile {
    /// 필수 물성만으로 연료를 만든다.
    pub fn new(
        name: impl Into<String>,
        lower_heating_value: f64,
        price_per_ton: f64,
        carbon_intensity: f64,
    ) -> Self {
        Self {
            name: name.into(),
            lower_heating_value,
            price_per_ton,
            carbon_intensity,
            conversion_efficiency: None,
            capital_expenditure: None,
            daily_infra_cost: None,
        }
    }

    pub fn with_efficiency(mut self, efficiency: f64) -> Self {
        self.conversion_efficiency = Some(efficiency);
        self
    }

    pub fn with_capex(mut self, capex: f64) -> Self {
        self.capital_expenditure = Some(capex);
        self
    }

    pub fn with_daily_infra_cost(mut self, cost_per_day: f64) -> Self {
        self.daily_infra_cost = Some(cost_per_day);
        self
    }

    /// 설정 파일의 단가 덮어쓰기를 적용한다.
    pub fn with_price(mut self, price_per_ton: f64) -> Self {
        self.price_per_ton = price_per_ton;
        self
    }

    /// 변환 효율. 지정되지 않았으면 1.0.
    pub fn efficiency(&self) -> f64 {
        self.conversion_efficiency.unwrap_or(1.0)
    }

    /// 설비 투자비. 지정되지 않았으면 0.
    pub fn capex(&self) -> f64 {
        self.capital_expenditure.unwrap_or(0.0)
    }

    /// 일일 인프라 비용. 지정되지 않았으면 0.
    pub fn infra_per_day(&self) -> f64 {
        self.daily_infra_cost.unwrap_or(0.0)
    }

    /// 물성 값이 계산에 쓸 수 있는 범위인지 확인한다.
    /// 발열량과 효율은 나눗셈 전에 반드시 검사해야 한다.
    pub fn validate(&self) -> FuelCalcResult<()> {
        if !self.lower_heating_value.is_finite() || self.lower_heating_value <= 0.0 {
            return Err(FuelCalcError::InvalidFuelData("발열량(LHV)은 0보다 커야 합니다"));
        }
        let eff = self.efficiency();
        if !eff.is_finite() || eff <= 0.0 {
            return Err(FuelCalcError::InvalidFuelData("변환 효율은 0보다 커야 합니다"));
        }
        if eff > 1.0 {
            return Err(FuelCalcError::InvalidFuelData("변환 효율은 1 이하이어야 합니다"));
        }
        if !self.price_per_ton.is_finite() || self.price_per_ton < 0.0 {
            return Err(FuelCalcError::InvalidFuelData("연료 단가는 음수일 수 없습니다"));
        }
        if !self.carbon_intensity.is_finite() || self.carbon_intensity < 0.0 {
            return Err(FuelCalcError::InvalidFuelData("탄소집약도는 음수일 수 없습니다"));
        }
        if !self.capex().is_finite() || self.capex() < 0.0 {
            return Err(FuelCalcError::InvalidFuelData("설비 투자비는 음수일 수 없습니다"));
        }
        if !self.infra_per_day().is_finite() || self.infra_per_day() < 0.0 {
            return Err(FuelCalcError::InvalidFuelData("인프라 비용은 음수일 수 없습니다"));
        }
        Ok(())
    }
}

#[derive(Debug)]
struct FuelEntry {
    name: &'static str,
    lhv: f64,
    price: f64,
    ci: f64,
}

impl FuelEntry {
    const fn new(name: &'static str, lhv: f64, price: f64, ci: f64) -> Self {
        Self {
            name,
            lhv,
            price,
            ci,
        }
    }
}

static FUELS: &[FuelEntry] = &[
    FuelEntry::new("VLSFO", 42.7, 650.0, 91.0),
    FuelEntry::new("Gray Methanol", 20.0, 450.0, 85.0),
    FuelEntry::new("Green Methanol", 20.0, 950.0, 10.0),
    FuelEntry::new("Gray Ammonia", 18.6, 700.0, 90.0),
    FuelEntry::new("Green Ammonia", 18.6, 1200.0, 5.0),
    FuelEntry::new("Gray Hydrogen", 120.0, 3800.0, 90.0),
    FuelEntry::new("Green Hydrogen", 120.0, 4500.0, 3.0),
    FuelEntry::new("B30 Blend", 40.1, 800.0, 82.2),
    FuelEntry::new("FAME Biodiesel", 38.0, 1200.0, 35.0),
];

/// 내장 연료 테이블을 정의 순서대로 반환한다.
pub fn builtin_fuels() -> Vec<FuelProfile> {
    FUELS
        .iter()
        .map(|f| FuelProfile::new(f.name, f.lhv, f.price, f.ci))
        .collect()
}

/// 내장 테이블에서 이름(대소문자 무시)으로 연료를 찾는다.
pub fn find_fuel(name: &str) -> Option<FuelProfile> {
    let name = name.trim();
    FUELS
        .iter()
        .find(|f| f.name.eq_ignore_ascii_case(name))
        .map(|f| FuelProfile::new(f.name, f.lhv, f.price, f.ci))
}
