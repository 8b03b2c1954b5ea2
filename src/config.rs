use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

use crate::fuel::{builtin_fuels, FuelProfile, PolicyParameters, ShipProfile};
use crate::units::{MassUnit, PowerUnit};

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 입출력 표시 단위 설정.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayUnits {
    /// 선박 출력 입력 단위
    pub power: PowerUnit,
    /// 연료 소비율 표시 단위
    pub mass: MassUnit,
}

impl Default for DisplayUnits {
    fn default() -> Self {
        Self {
            power: PowerUnit::Megawatt,
            mass: MassUnit::Tonne,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 표시 언어(auto/ko/en)
    pub language: String,
    /// 대화형 세션당 계산 횟수 제한. 없으면 무제한.
    pub evaluation_limit: Option<u32>,
    /// 언어팩(`<lang>.toml`) 디렉터리. 없으면 ./locales 를 찾는다.
    pub locale_dir: Option<String>,
    pub units: DisplayUnits,
    /// 기본 선박 사양
    pub ship: ShipProfile,
    /// 기본 규제 파라미터
    pub policy: PolicyParameters,
    /// 연료 이름 → 단가[$/ton] 덮어쓰기
    pub prices: BTreeMap<String, f64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            evaluation_limit: None,
            locale_dir: None,
            units: DisplayUnits::default(),
            ship: ShipProfile::default(),
            policy: PolicyParameters::default(),
            prices: BTreeMap::new(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 지정한 경로의 설정을 로드한다. 파일이 없으면 기본값을 저장한 뒤 반환한다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        info!(path = %path.display(), "loaded config");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        info!(path = %path.display(), "created default config");
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 지정한 경로에 저장한다.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 내장 연료 테이블에 단가 덮어쓰기를 적용해 반환한다. 순서는 내장 테이블 순서를 따른다.
    pub fn fuel_table(&self) -> Vec<FuelProfile> {
        for name in self.prices.keys() {
            if !builtin_fuels()
                .iter()
                .any(|f| f.name.eq_ignore_ascii_case(name))
            {
                warn!(fuel = %name, "price override for unknown fuel ignored");
            }
        }
        builtin_fuels()
            .into_iter()
            .map(|fuel| match self.price_override(&fuel.name) {
                Some(price) => fuel.with_price(price),
                None => fuel,
            })
            .collect()
    }

    fn price_override(&self, fuel_name: &str) -> Option<f64> {
        self.prices
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(fuel_name))
            .map(|(_, price)| *price)
    }
}
