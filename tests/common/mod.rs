#![allow(dead_code)]

use marine_fuel_toolbox::fuel::{FuelProfile, PolicyParameters, ShipProfile};

pub fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

/// 60 MW, 24 h 운항.
pub fn reference_ship() -> ShipProfile {
    ShipProfile::new(60.0, 24.0)
}

pub fn vlsfo() -> FuelProfile {
    FuelProfile::new("VLSFO", 42.7, 650.0, 91.0)
}

/// 감축률 4%, 기준 93.3, 부과금 380 $/t, 8%/20년/365일.
pub fn reference_policy() -> PolicyParameters {
    PolicyParameters {
        ci_reduction_percent: 4.0,
        baseline_ci: 93.3,
        carbon_fee_per_ton: 380.0,
        discount_rate: 0.08,
        amortization_years: 20,
        days_per_year: 365,
    }
}
