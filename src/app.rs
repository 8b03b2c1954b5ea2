use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

use crate::cli::{Cli, Command, CompareArgs, FuelOptionArgs, PolicyArgs, ShipArgs};
use crate::config::{Config, ConfigError};
use crate::fuel::{
    compute_energy_demand, evaluate_fuel, FuelCalcError, FuelProfile, PolicyParameters,
    ShipProfile,
};
use crate::i18n::{keys, Translator};
use crate::report::{
    JsonRenderer, RenderError, Report, ReportRenderer, SessionUsage, TextTableRenderer,
};
use crate::ui_cli;
use crate::units::{convert_mass, convert_power, MassUnit, PowerUnit};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 엔진 계산 오류
    #[error("계산 오류: {0}")]
    FuelCalc(#[from] FuelCalcError),
    /// 보고서 출력 오류
    #[error("출력 오류: {0}")]
    Render(#[from] RenderError),
    /// 내장 테이블에 없는 연료 이름
    #[error("알 수 없는 연료: {0}")]
    UnknownFuel(String),
    /// 세션 계산 횟수 제한 초과
    #[error("세션 계산 횟수 제한({0}회)에 도달했습니다")]
    UsageLimit(u32),
}

/// 명령행 인자에 따라 하위 명령을 실행한다. 하위 명령이 없으면 대화형 메뉴를 띄운다.
pub fn run(cli: Cli, config: &mut Config, config_path: &Path, tr: &Translator) -> Result<(), AppError> {
    match cli.command.unwrap_or(Command::Menu) {
        Command::Fuels => {
            print!("{}", render_fuel_table(tr, &config.fuel_table()));
            Ok(())
        }
        Command::Fuel { name, ship } => {
            let ship = apply_ship_args(config.ship, config.units.power, &ship);
            let fuel = lookup_fuel(&config.fuel_table(), &name)?;
            print!(
                "{}",
                render_single_fuel(tr, &ship, &fuel, &config.policy, config.units.mass)?
            );
            Ok(())
        }
        Command::Compare(args) => run_compare(config, &args, tr),
        Command::Menu => ui_cli::run_menu(config, config_path, tr),
    }
}

fn run_compare(config: &Config, args: &CompareArgs, tr: &Translator) -> Result<(), AppError> {
    let ship = apply_ship_args(config.ship, config.units.power, &args.ship);
    let policy = apply_policy_args(config.policy, &args.policy);
    let fuels = apply_fuel_options(config.fuel_table(), &args.fuel_options)?;
    let report = Report::evaluate(&ship, &fuels, &policy).inspect_err(|e| {
        warn!(error = %e, "comparison rejected");
    })?;

    if let Some(path) = &args.output {
        let json = JsonRenderer { pretty: true }.render(&report)?;
        fs::write(path, json)?;
        info!(path = %path.display(), "exported report");
    }

    let out = if args.json {
        JsonRenderer { pretty: true }.render(&report)?
    } else {
        TextTableRenderer::new(tr, args.mass_unit.unwrap_or(config.units.mass))
            .ranked(args.rank)
            .render(&report)?
    };
    println!("{out}");
    Ok(())
}

/// 세션 사용량을 한 번 소비한다. 제한에 걸리면 `AppError::UsageLimit`.
pub fn consume_usage(usage: &mut SessionUsage) -> Result<(), AppError> {
    if usage.try_consume() {
        return Ok(());
    }
    let limit = usage.limit().unwrap_or(usage.count());
    warn!(limit, "session evaluation limit reached");
    Err(AppError::UsageLimit(limit))
}

/// 설정값 위에 명령행 선박 사양을 덮어쓴다. 출력은 MW로 환산한다.
pub fn apply_ship_args(base: ShipProfile, default_unit: PowerUnit, args: &ShipArgs) -> ShipProfile {
    let unit = args.power_unit.unwrap_or(default_unit);
    ShipProfile {
        power_mw: args
            .power
            .map(|p| convert_power(p, unit, PowerUnit::Megawatt))
            .unwrap_or(base.power_mw),
        hours_per_day: args.hours_per_day.unwrap_or(base.hours_per_day),
    }
}

/// 설정값 위에 명령행 규제 파라미터를 덮어쓴다.
pub fn apply_policy_args(base: PolicyParameters, args: &PolicyArgs) -> PolicyParameters {
    PolicyParameters {
        ci_reduction_percent: args.ci_reduction_percent.unwrap_or(base.ci_reduction_percent),
        baseline_ci: args.baseline_ci.unwrap_or(base.baseline_ci),
        carbon_fee_per_ton: args.carbon_fee_per_ton.unwrap_or(base.carbon_fee_per_ton),
        discount_rate: args.discount_rate.unwrap_or(base.discount_rate),
        amortization_years: args.amortization_years.unwrap_or(base.amortization_years),
        days_per_year: args.days_per_year.unwrap_or(base.days_per_year),
    }
}

/// 연료별 투자비/효율/인프라 비용 지정을 테이블에 적용한다.
pub fn apply_fuel_options(
    mut fuels: Vec<FuelProfile>,
    opts: &FuelOptionArgs,
) -> Result<Vec<FuelProfile>, AppError> {
    for (name, capex) in &opts.capex {
        let fuel = find_mut(&mut fuels, name)?;
        fuel.capital_expenditure = Some(*capex);
    }
    for (name, eff) in &opts.efficiency {
        let fuel = find_mut(&mut fuels, name)?;
        fuel.conversion_efficiency = Some(*eff);
    }
    for (name, infra) in &opts.infra {
        let fuel = find_mut(&mut fuels, name)?;
        fuel.daily_infra_cost = Some(*infra);
    }
    Ok(fuels)
}

fn find_mut<'a>(fuels: &'a mut [FuelProfile], name: &str) -> Result<&'a mut FuelProfile, AppError> {
    fuels
        .iter_mut()
        .find(|f| f.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| AppError::UnknownFuel(name.to_string()))
}

/// 이름(대소문자 무시)으로 연료를 찾는다.
pub fn lookup_fuel(fuels: &[FuelProfile], name: &str) -> Result<FuelProfile, AppError> {
    fuels
        .iter()
        .find(|f| f.name.eq_ignore_ascii_case(name.trim()))
        .cloned()
        .ok_or_else(|| AppError::UnknownFuel(name.to_string()))
}

/// 연료 물성표 문자열을 만든다.
pub fn render_fuel_table(tr: &Translator, fuels: &[FuelProfile]) -> String {
    let mut out = format!(
        "{:<16} {:>10} {:>10} {:>10}\n",
        tr.t(keys::COL_FUEL),
        tr.t(keys::COL_LHV),
        tr.t(keys::COL_PRICE),
        tr.t(keys::COL_CI)
    );
    for f in fuels {
        out.push_str(&format!(
            "{:<16} {:>10.1} {:>10.0} {:>10.1}\n",
            f.name, f.lower_heating_value, f.price_per_ton, f.carbon_intensity
        ));
    }
    out
}

/// 단일 연료의 소비량, 비용, 배출량과 물성을 문자열로 만든다.
pub fn render_single_fuel(
    tr: &Translator,
    ship: &ShipProfile,
    fuel: &FuelProfile,
    policy: &PolicyParameters,
    mass_unit: MassUnit,
) -> Result<String, AppError> {
    let energy = compute_energy_demand(ship)?;
    let result = evaluate_fuel(energy, fuel, policy)?;
    let burn = convert_mass(result.burn_rate, MassUnit::Tonne, mass_unit);
    let properties = serde_json::to_string_pretty(fuel).map_err(RenderError::from)?;
    Ok(format!(
        "{heading}\n{fuel}\n{burn_label}: {burn:.2} {unit}\n{cost_label}: ${cost}\n{em_label}: {em:.2}\n{total_label}: ${total}\n{props_heading}\n{properties}\n",
        heading = tr.t(keys::FUEL_HEADING),
        fuel = result.fuel,
        burn_label = tr.t(keys::COL_BURN_RATE),
        unit = mass_unit.symbol(),
        cost_label = tr.t(keys::COL_FUEL_COST),
        cost = crate::report::group_thousands(result.fuel_cost),
        em_label = tr.t(keys::COL_EMISSIONS),
        em = result.emissions,
        total_label = tr.t(keys::COL_TOTAL),
        total = crate::report::group_thousands(result.total_cost),
        props_heading = tr.t(keys::FUEL_PROPERTIES),
    ))
}
