use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::units::{MassUnit, PowerUnit};

/// 선박 연료 비용·배출 및 탄소 규제 준수 비용 계산기.
#[derive(Debug, Parser)]
#[command(name = "marine_fuel_toolbox", version)]
pub struct Cli {
    /// 표시 언어 (auto, ko, en)
    #[arg(long, short = 'L', global = true, default_value = "auto")]
    pub lang: String,

    /// 설정 파일 경로 (기본: ./config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 내장 연료 물성표를 출력한다.
    Fuels,
    /// 연료 하나의 소비량, 연료비, 배출량을 계산한다.
    Fuel {
        /// 연료 이름 (예: VLSFO, "Green Ammonia")
        name: String,
        #[command(flatten)]
        ship: ShipArgs,
    },
    /// 모든 연료의 규제 준수 총비용을 비교한다.
    Compare(CompareArgs),
    /// 대화형 메뉴를 실행한다.
    Menu,
}

/// 선박 사양 덮어쓰기. 지정하지 않으면 설정 파일 값을 쓴다.
#[derive(Debug, Clone, Default, Args)]
pub struct ShipArgs {
    /// 선박 출력
    #[arg(long = "power")]
    pub power: Option<f64>,
    /// 출력 단위 (MW, kW, PS, hp)
    #[arg(long = "power-unit")]
    pub power_unit: Option<PowerUnit>,
    /// 하루 운항 시간 [h]
    #[arg(long = "hours")]
    pub hours_per_day: Option<f64>,
}

/// 규제 파라미터 덮어쓰기.
#[derive(Debug, Clone, Default, Args)]
pub struct PolicyArgs {
    /// 기준 CI 대비 감축률 [%]
    #[arg(long = "ci-reduction")]
    pub ci_reduction_percent: Option<f64>,
    /// 기준 CI [gCO2e/MJ]
    #[arg(long = "baseline-ci")]
    pub baseline_ci: Option<f64>,
    /// 목표 초과 톤당 부과금 [$/tCO2e]
    #[arg(long = "carbon-fee")]
    pub carbon_fee_per_ton: Option<f64>,
    /// 상각 할인율 (0~1)
    #[arg(long = "discount-rate")]
    pub discount_rate: Option<f64>,
    /// 상각 기간 [년]
    #[arg(long = "years")]
    pub amortization_years: Option<u32>,
    /// 연간 일수
    #[arg(long = "days-per-year")]
    pub days_per_year: Option<u32>,
}

/// 연료별 선택 항목 지정. 형식: `이름=값`.
#[derive(Debug, Clone, Default, Args)]
pub struct FuelOptionArgs {
    /// 설비 투자비 [$] (예: "Green Ammonia=10000000")
    #[arg(long = "capex", value_parser = parse_assignment)]
    pub capex: Vec<(String, f64)>,
    /// 변환 효율 (0, 1]
    #[arg(long = "efficiency", value_parser = parse_assignment)]
    pub efficiency: Vec<(String, f64)>,
    /// 일일 인프라 비용 [$/day]
    #[arg(long = "infra", value_parser = parse_assignment)]
    pub infra: Vec<(String, f64)>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct CompareArgs {
    #[command(flatten)]
    pub ship: ShipArgs,
    #[command(flatten)]
    pub policy: PolicyArgs,
    #[command(flatten)]
    pub fuel_options: FuelOptionArgs,
    /// 총비용 오름차순으로 정렬해 출력
    #[arg(long)]
    pub rank: bool,
    /// 표 대신 JSON으로 출력
    #[arg(long)]
    pub json: bool,
    /// 결과 JSON을 파일로 저장
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
    /// 소비량 표시 단위 (t, kg, LT)
    #[arg(long = "mass-unit")]
    pub mass_unit: Option<MassUnit>,
}

/// `이름=값` 형식을 파싱한다.
pub fn parse_assignment(s: &str) -> Result<(String, f64), String> {
    let (name, value) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{s}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing fuel name in '{s}'"));
    }
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("invalid number in '{s}'"))?;
    Ok((name.to_string(), value))
}
