//! 연료 경제성·규제 준수 계산 엔진을 라이브러리로 분리하여 CLI 외의 표시 계층도 쉽게 붙인다.

pub mod app;
pub mod cli;
pub mod config;
pub mod fuel;
pub mod i18n;
pub mod report;
pub mod ui_cli;
pub mod units;
