//! 연료 경제성 및 규제 준수 비용 계산 엔진.
//! 입출력과 표시 로직 없이 순수 계산만 담당한다.

pub mod compliance;
pub mod consumption;
pub mod demand;
pub mod error;
pub mod evaluate;
pub mod properties;

pub use compliance::{
    capex_per_day, capital_recovery_factor, compute_compliance_cost, excess_carbon_intensity,
    ComplianceCost, PolicyParameters,
};
pub use consumption::{compute_consumption, Consumption};
pub use demand::{compute_energy_demand, validate_energy, ShipProfile};
pub use error::{FuelCalcError, FuelCalcResult};
pub use evaluate::{evaluate_all, evaluate_fuel, evaluate_fuels, FuelResult};
pub use properties::{builtin_fuels, find_fuel, FuelProfile};
