use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_COMPARE: &str = "main_menu.compare";
    pub const MAIN_MENU_SINGLE_FUEL: &str = "main_menu.single_fuel";
    pub const MAIN_MENU_FUEL_TABLE: &str = "main_menu.fuel_table";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const USAGE_LIMIT_REACHED: &str = "error.usage_limit_reached";

    pub const PROMPT_POWER: &str = "prompt.power";
    pub const PROMPT_HOURS: &str = "prompt.hours";
    pub const PROMPT_FUEL: &str = "prompt.fuel";
    pub const PROMPT_CI_REDUCTION: &str = "prompt.ci_reduction";
    pub const PROMPT_CARBON_FEE: &str = "prompt.carbon_fee";
    pub const PROMPT_KEEP_DEFAULT: &str = "prompt.keep_default";

    pub const REPORT_HEADING: &str = "report.heading";
    pub const REPORT_ENERGY_DEMAND: &str = "report.energy_demand";
    pub const REPORT_CI_TARGET: &str = "report.ci_target";
    pub const REPORT_SWITCH_OR_PAY: &str = "report.switch_or_pay";
    pub const REPORT_REFERENCE: &str = "report.reference";
    pub const REPORT_CHEAPEST: &str = "report.cheapest";
    pub const REPORT_SAVING: &str = "report.saving";
    pub const REPORT_EMISSION_CUT: &str = "report.emission_cut";

    pub const COL_FUEL: &str = "column.fuel";
    pub const COL_BURN_RATE: &str = "column.burn_rate";
    pub const COL_FUEL_COST: &str = "column.fuel_cost";
    pub const COL_EMISSIONS: &str = "column.emissions";
    pub const COL_CARBON_FEE: &str = "column.carbon_fee";
    pub const COL_CAPEX: &str = "column.capex";
    pub const COL_INFRA: &str = "column.infra";
    pub const COL_TOTAL: &str = "column.total";
    pub const COL_LHV: &str = "column.lhv";
    pub const COL_PRICE: &str = "column.price";
    pub const COL_CI: &str = "column.ci";

    pub const FUEL_HEADING: &str = "fuel.heading";
    pub const FUEL_PROPERTIES: &str = "fuel.properties";
    pub const FUEL_UNKNOWN: &str = "fuel.unknown";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 언어팩 → 선택 언어 → 한국어 → 키 순으로 폴백한다.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        let builtin = match self.lang {
            Language::En => en(key).or_else(|| ko(key)),
            Language::Ko => ko(key),
        };
        match builtin {
            Some(s) => s,
            None => key,
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_lang) {
        return Some(lang);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_lang(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 아래 key = "value".
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    walk(&format!("{prefix}.{k}"), v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== 선박 연료 비용·배출 계산기 ===",
        MAIN_MENU_COMPARE => "1) 전체 연료 비교 (switch-or-pay)",
        MAIN_MENU_SINGLE_FUEL => "2) 단일 연료 계산",
        MAIN_MENU_FUEL_TABLE => "3) 연료 물성표",
        MAIN_MENU_SETTINGS => "4) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        USAGE_LIMIT_REACHED => "이번 세션의 계산 횟수 제한에 도달했습니다.",
        PROMPT_POWER => "선박 출력",
        PROMPT_HOURS => "하루 운항 시간 [h]",
        PROMPT_FUEL => "연료 이름: ",
        PROMPT_CI_REDUCTION => "CI 감축률 [%]",
        PROMPT_CARBON_FEE => "탄소 부과금 [$/tCO2e]",
        PROMPT_KEEP_DEFAULT => "엔터=기본값",
        REPORT_HEADING => "\n-- 연료별 일일 비용 --",
        REPORT_ENERGY_DEMAND => "일일 에너지 수요",
        REPORT_CI_TARGET => "CI 목표",
        REPORT_SWITCH_OR_PAY => "\n-- 전환 또는 부과금 납부 --",
        REPORT_REFERENCE => "기준 연료",
        REPORT_CHEAPEST => "최저 총비용 연료",
        REPORT_SAVING => "일일 절감액",
        REPORT_EMISSION_CUT => "배출 감축",
        COL_FUEL => "연료",
        COL_BURN_RATE => "소비량/일",
        COL_FUEL_COST => "연료비 $/일",
        COL_EMISSIONS => "tCO2e/일",
        COL_CARBON_FEE => "부과금 $/일",
        COL_CAPEX => "투자비 $/일",
        COL_INFRA => "인프라 $/일",
        COL_TOTAL => "총비용 $/일",
        COL_LHV => "LHV MJ/kg",
        COL_PRICE => "단가 $/t",
        COL_CI => "CI g/MJ",
        FUEL_HEADING => "\n-- 단일 연료 결과 --",
        FUEL_PROPERTIES => "\n연료 물성",
        FUEL_UNKNOWN => "알 수 없는 연료입니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_OPTIONS => "1) 자동  2) 한국어  3) English",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Marine Fuel Cost & Emissions Calculator ===",
        MAIN_MENU_COMPARE => "1) Compare all fuels (switch-or-pay)",
        MAIN_MENU_SINGLE_FUEL => "2) Single fuel",
        MAIN_MENU_FUEL_TABLE => "3) Fuel properties",
        MAIN_MENU_SETTINGS => "4) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        USAGE_LIMIT_REACHED => "Evaluation limit for this session reached.",
        PROMPT_POWER => "Ship power",
        PROMPT_HOURS => "Operating hours per day [h]",
        PROMPT_FUEL => "Fuel name: ",
        PROMPT_CI_REDUCTION => "CI reduction [%]",
        PROMPT_CARBON_FEE => "Carbon fee [$/tCO2e]",
        PROMPT_KEEP_DEFAULT => "Enter=default",
        REPORT_HEADING => "\n-- Daily cost per fuel --",
        REPORT_ENERGY_DEMAND => "Daily energy demand",
        REPORT_CI_TARGET => "CI target",
        REPORT_SWITCH_OR_PAY => "\n-- Switch or pay --",
        REPORT_REFERENCE => "Reference fuel",
        REPORT_CHEAPEST => "Lowest total cost",
        REPORT_SAVING => "Daily saving",
        REPORT_EMISSION_CUT => "Emission cut",
        COL_FUEL => "Fuel",
        COL_BURN_RATE => "Burn/day",
        COL_FUEL_COST => "Fuel $/day",
        COL_EMISSIONS => "tCO2e/day",
        COL_CARBON_FEE => "Fee $/day",
        COL_CAPEX => "CapEx $/day",
        COL_INFRA => "Infra $/day",
        COL_TOTAL => "Total $/day",
        COL_LHV => "LHV MJ/kg",
        COL_PRICE => "Price $/t",
        COL_CI => "CI g/MJ",
        FUEL_HEADING => "\n-- Single fuel result --",
        FUEL_PROPERTIES => "\nFuel properties",
        FUEL_UNKNOWN => "Unknown fuel.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_OPTIONS => "1) Auto  2) 한국어  3) English",
        SETTINGS_PROMPT_CHANGE => "Number to change (Enter to cancel): ",
        SETTINGS_INVALID => "Invalid input, nothing changed.",
        SETTINGS_SAVED => "Settings saved.",
        _ => return None,
    })
}
