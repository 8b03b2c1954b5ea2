//! 계산 결과를 표/JSON으로 표시하는 어댑터.
//!
//! 엔진(`crate::fuel`)은 이 모듈에 의존하지 않는다. 순위 정렬, 기준 연료 대비
//! 비교, 세션 사용량 제한처럼 표시 계층에서만 의미 있는 처리를 여기서 한다.

use std::fmt::Write as _;

use serde::Serialize;
use thiserror::Error;

use crate::fuel::{
    compute_energy_demand, evaluate_fuels, FuelCalcResult, FuelProfile, FuelResult,
    PolicyParameters, ShipProfile,
};
use crate::i18n::{keys, Translator};
use crate::units::{convert_mass, MassUnit};

/// 렌더링 오류.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("JSON 직렬화 오류: {0}")]
    Json(#[from] serde_json::Error),
    #[error("출력 포맷 오류: {0}")]
    Format(#[from] std::fmt::Error),
}

/// 한 번의 비교 계산에 대한 입력 요약과 연료별 결과.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub ship: ShipProfile,
    pub policy: PolicyParameters,
    pub energy_per_day_mj: f64,
    pub ci_target: f64,
    pub results: Vec<FuelResult>,
}

impl Report {
    pub fn new(
        ship: ShipProfile,
        policy: PolicyParameters,
        energy_per_day_mj: f64,
        results: Vec<FuelResult>,
    ) -> Self {
        Self {
            ship,
            policy,
            energy_per_day_mj,
            ci_target: policy.ci_target(),
            results,
        }
    }

    /// 엔진을 호출해 보고서를 만든다. 에너지 수요는 한 번만 계산하며
    /// 결과 순서는 입력 연료 순서와 같다.
    pub fn evaluate(
        ship: &ShipProfile,
        fuels: &[FuelProfile],
        policy: &PolicyParameters,
    ) -> FuelCalcResult<Self> {
        let energy_per_day_mj = compute_energy_demand(ship)?;
        let results = evaluate_fuels(energy_per_day_mj, fuels, policy)?;
        Ok(Self::new(*ship, *policy, energy_per_day_mj, results))
    }

    /// 첫 번째 연료를 기준으로 한 switch-or-pay 비교.
    pub fn switch_or_pay(&self) -> Option<SwitchOrPay> {
        let reference = self.results.first()?;
        SwitchOrPay::against(&reference.fuel, &self.results)
    }
}

/// 총비용 오름차순으로 정렬한 참조 목록. 비용이 같으면 입력 순서를 유지한다.
pub fn rank_by_total_cost(results: &[FuelResult]) -> Vec<&FuelResult> {
    let mut ranked: Vec<&FuelResult> = results.iter().collect();
    ranked.sort_by(|a, b| a.total_cost.total_cmp(&b.total_cost));
    ranked
}

/// 기준 연료를 계속 쓰며 부과금을 내는 경우 대비 다른 연료로 전환했을 때의 차이.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwitchOption {
    pub fuel: String,
    pub total_cost: f64,
    /// 기준 연료 총비용 - 이 연료 총비용 [$/day]. 음수면 전환이 더 비싸다.
    pub saving_per_day: f64,
    /// 기준 연료 배출량 - 이 연료 배출량 [tCO2e/day]
    pub emission_cut: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwitchOrPay {
    pub reference: String,
    pub reference_total_cost: f64,
    pub options: Vec<SwitchOption>,
}

impl SwitchOrPay {
    /// `reference` 이름의 결과를 기준으로 나머지 연료를 비교한다. 기준이 없으면 None.
    pub fn against(reference: &str, results: &[FuelResult]) -> Option<Self> {
        let base = results
            .iter()
            .find(|r| r.fuel.eq_ignore_ascii_case(reference))?;
        let options = results
            .iter()
            .filter(|r| !std::ptr::eq(*r, base))
            .map(|r| SwitchOption {
                fuel: r.fuel.clone(),
                total_cost: r.total_cost,
                saving_per_day: base.total_cost - r.total_cost,
                emission_cut: base.emissions - r.emissions,
            })
            .collect();
        Some(Self {
            reference: base.fuel.clone(),
            reference_total_cost: base.total_cost,
            options,
        })
    }

    /// 절감액이 가장 큰 대안. 동률이면 앞선 연료.
    pub fn cheapest(&self) -> Option<&SwitchOption> {
        self.options.iter().fold(None, |best, o| match best {
            Some(b) if b.saving_per_day >= o.saving_per_day => Some(b),
            _ => Some(o),
        })
    }

    /// 기준 연료를 유지하는 편이 모든 대안보다 싼지 여부.
    pub fn pay_is_cheapest(&self) -> bool {
        self.options.iter().all(|o| o.saving_per_day <= 0.0)
    }
}

/// 세션 단위 계산 횟수 카운터. 엔진 밖에서 표시 계층이 명시적으로 들고 다닌다.
#[derive(Debug, Clone, Default)]
pub struct SessionUsage {
    count: u32,
    limit: Option<u32>,
}

impl SessionUsage {
    pub fn new(limit: Option<u32>) -> Self {
        Self { count: 0, limit }
    }

    /// 한 번의 계산을 기록한다. 제한에 걸리면 false를 반환하고 카운트하지 않는다.
    pub fn try_consume(&mut self) -> bool {
        match self.limit {
            Some(limit) if self.count >= limit => false,
            _ => {
                self.count += 1;
                true
            }
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn limit(&self) -> Option<u32> {
        self.limit
    }

    pub fn remaining(&self) -> Option<u32> {
        self.limit.map(|l| l.saturating_sub(self.count))
    }
}

/// 보고서 출력 방식. 표시 방식을 바꿔도 엔진에는 영향이 없다.
pub trait ReportRenderer {
    fn render(&self, report: &Report) -> Result<String, RenderError>;
}

/// 번역된 머리글을 쓰는 고정폭 텍스트 표.
pub struct TextTableRenderer<'a> {
    tr: &'a Translator,
    mass_unit: MassUnit,
    ranked: bool,
}

impl<'a> TextTableRenderer<'a> {
    pub fn new(tr: &'a Translator, mass_unit: MassUnit) -> Self {
        Self {
            tr,
            mass_unit,
            ranked: false,
        }
    }

    /// 총비용 오름차순으로 행을 정렬한다.
    pub fn ranked(mut self, ranked: bool) -> Self {
        self.ranked = ranked;
        self
    }
}

impl ReportRenderer for TextTableRenderer<'_> {
    fn render(&self, report: &Report) -> Result<String, RenderError> {
        let tr = self.tr;
        let mut out = String::new();
        writeln!(out, "{}", tr.t(keys::REPORT_HEADING))?;
        writeln!(
            out,
            "{}: {} MJ/day, {}: {:.3} gCO2e/MJ",
            tr.t(keys::REPORT_ENERGY_DEMAND),
            group_thousands(report.energy_per_day_mj),
            tr.t(keys::REPORT_CI_TARGET),
            report.ci_target
        )?;
        let burn_header = format!("{} [{}]", tr.t(keys::COL_BURN_RATE), self.mass_unit.symbol());
        writeln!(
            out,
            "{:<16} {:>14} {:>12} {:>10} {:>12} {:>12} {:>12} {:>13}",
            tr.t(keys::COL_FUEL),
            burn_header,
            tr.t(keys::COL_FUEL_COST),
            tr.t(keys::COL_EMISSIONS),
            tr.t(keys::COL_CARBON_FEE),
            tr.t(keys::COL_CAPEX),
            tr.t(keys::COL_INFRA),
            tr.t(keys::COL_TOTAL),
        )?;
        let rows: Vec<&FuelResult> = if self.ranked {
            rank_by_total_cost(&report.results)
        } else {
            report.results.iter().collect()
        };
        for r in rows {
            let burn = convert_mass(r.burn_rate, MassUnit::Tonne, self.mass_unit);
            writeln!(
                out,
                "{:<16} {:>14.2} {:>12} {:>10.2} {:>12} {:>12} {:>12} {:>13}",
                r.fuel,
                burn,
                group_thousands(r.fuel_cost),
                r.emissions,
                group_thousands(r.carbon_fee_cost),
                group_thousands(r.capex_per_day),
                group_thousands(r.infra_per_day),
                group_thousands(r.total_cost),
            )?;
        }

        if let Some(sop) = report.switch_or_pay() {
            writeln!(out, "{}", tr.t(keys::REPORT_SWITCH_OR_PAY))?;
            writeln!(
                out,
                "{}: {} (${}/day)",
                tr.t(keys::REPORT_REFERENCE),
                sop.reference,
                group_thousands(sop.reference_total_cost)
            )?;
            if let Some(best) = sop.cheapest().filter(|_| !sop.pay_is_cheapest()) {
                writeln!(
                    out,
                    "{}: {} | {}: ${} | {}: {:.2} tCO2e/day",
                    tr.t(keys::REPORT_CHEAPEST),
                    best.fuel,
                    tr.t(keys::REPORT_SAVING),
                    group_thousands(best.saving_per_day),
                    tr.t(keys::REPORT_EMISSION_CUT),
                    best.emission_cut
                )?;
            } else {
                writeln!(out, "{}: {}", tr.t(keys::REPORT_CHEAPEST), sop.reference)?;
            }
        }
        Ok(out)
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a Report,
    switch_or_pay: Option<SwitchOrPay>,
}

/// 보고서와 switch-or-pay 요약을 JSON으로 내보낸다.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl ReportRenderer for JsonRenderer {
    fn render(&self, report: &Report) -> Result<String, RenderError> {
        let doc = JsonReport {
            report,
            switch_or_pay: report.switch_or_pay(),
        };
        let s = if self.pretty {
            serde_json::to_string_pretty(&doc)?
        } else {
            serde_json::to_string(&doc)?
        };
        Ok(s)
    }
}

/// 정수 부분에 천 단위 구분기호를 넣어 반올림 표시한다. (예: 21920.4 → "21,920")
pub fn group_thousands(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}
