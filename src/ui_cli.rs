use std::io::{self, Write};
use std::path::Path;

use tracing::warn;

use crate::app::{self, AppError};
use crate::config::Config;
use crate::fuel::ShipProfile;
use crate::i18n::{self, keys, Translator};
use crate::report::{Report, ReportRenderer, SessionUsage, TextTableRenderer};
use crate::units::{convert_power, PowerUnit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Compare,
    SingleFuel,
    FuelTable,
    Settings,
    Exit,
}

/// 대화형 메뉴 루프를 실행한다. 계산 횟수 제한은 세션 카운터로만 관리한다.
pub fn run_menu(config: &mut Config, config_path: &Path, tr: &Translator) -> Result<(), AppError> {
    let mut usage = SessionUsage::new(config.evaluation_limit);
    loop {
        match main_menu(tr)? {
            MenuChoice::Compare => match app::consume_usage(&mut usage) {
                Ok(()) => handle_compare(tr, config)?,
                Err(AppError::UsageLimit(_)) => println!("{}", tr.t(keys::USAGE_LIMIT_REACHED)),
                Err(e) => return Err(e),
            },
            MenuChoice::SingleFuel => match app::consume_usage(&mut usage) {
                Ok(()) => handle_single_fuel(tr, config)?,
                Err(AppError::UsageLimit(_)) => println!("{}", tr.t(keys::USAGE_LIMIT_REACHED)),
                Err(e) => return Err(e),
            },
            MenuChoice::FuelTable => {
                print!("{}", app::render_fuel_table(tr, &config.fuel_table()));
            }
            MenuChoice::Settings => {
                handle_settings(tr, config)?;
                config.save_to(config_path)?;
                println!("{}", tr.t(keys::SETTINGS_SAVED));
            }
            MenuChoice::Exit => {
                config.save_to(config_path)?;
                println!("{}", tr.t(keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_COMPARE));
    println!("{}", tr.t(keys::MAIN_MENU_SINGLE_FUEL));
    println!("{}", tr.t(keys::MAIN_MENU_FUEL_TABLE));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        if sel.is_empty() {
            // stdin 종료(EOF)
            return Ok(MenuChoice::Exit);
        }
        match sel.trim() {
            "1" => return Ok(MenuChoice::Compare),
            "2" => return Ok(MenuChoice::SingleFuel),
            "3" => return Ok(MenuChoice::FuelTable),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn handle_compare(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let ship = read_ship(tr, cfg)?;
    let mut policy = cfg.policy;
    policy.ci_reduction_percent = read_f64_or(
        tr,
        tr.t(keys::PROMPT_CI_REDUCTION),
        policy.ci_reduction_percent,
    )?;
    policy.carbon_fee_per_ton =
        read_f64_or(tr, tr.t(keys::PROMPT_CARBON_FEE), policy.carbon_fee_per_ton)?;

    // 잘못된 입력은 메뉴를 끝내지 않고 경고만 보여준다.
    match Report::evaluate(&ship, &cfg.fuel_table(), &policy) {
        Ok(report) => {
            let out = TextTableRenderer::new(tr, cfg.units.mass)
                .ranked(true)
                .render(&report)?;
            println!("{out}");
        }
        Err(e) => {
            warn!(error = %e, "interactive comparison rejected");
            println!("{}: {e}", tr.t(keys::ERROR_PREFIX));
        }
    }
    Ok(())
}

fn handle_single_fuel(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let fuels = cfg.fuel_table();
    let names: Vec<&str> = fuels.iter().map(|f| f.name.as_str()).collect();
    println!("{}", names.join(", "));
    let name = read_line(tr.t(keys::PROMPT_FUEL))?;
    let fuel = match app::lookup_fuel(&fuels, &name) {
        Ok(f) => f,
        Err(_) => {
            println!("{}", tr.t(keys::FUEL_UNKNOWN));
            return Ok(());
        }
    };
    let ship = read_ship(tr, cfg)?;
    match app::render_single_fuel(tr, &ship, &fuel, &cfg.policy, cfg.units.mass) {
        Ok(out) => print!("{out}"),
        Err(AppError::FuelCalc(e)) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
        Err(e) => return Err(e),
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    cfg.language = match sel.trim() {
        "1" => "auto".to_string(),
        "2" => "ko".to_string(),
        "3" => "en".to_string(),
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    };
    // 다음 실행부터 적용된다.
    let resolved = i18n::resolve_language(&cfg.language, None);
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), resolved);
    Ok(())
}

fn read_ship(tr: &Translator, cfg: &Config) -> Result<ShipProfile, AppError> {
    let unit = cfg.units.power;
    let default_power = convert_power(cfg.ship.power_mw, PowerUnit::Megawatt, unit);
    let power = read_f64_or(
        tr,
        &format!("{} [{}]", tr.t(keys::PROMPT_POWER), unit.symbol()),
        default_power,
    )?;
    let hours = read_f64_or(tr, tr.t(keys::PROMPT_HOURS), cfg.ship.hours_per_day)?;
    Ok(ShipProfile::new(
        convert_power(power, unit, PowerUnit::Megawatt),
        hours,
    ))
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

/// 숫자를 입력받는다. 빈 입력이면 기본값을 쓴다.
fn read_f64_or(tr: &Translator, label: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!(
            "{label} ({} {default}): ",
            tr.t(keys::PROMPT_KEEP_DEFAULT)
        ))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
