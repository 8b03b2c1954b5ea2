mod common;

use common::{assert_close, reference_policy, reference_ship, vlsfo};
use marine_fuel_toolbox::fuel::{
    builtin_fuels, evaluate_all, evaluate_fuel, find_fuel, FuelCalcError, FuelProfile,
    PolicyParameters, ShipProfile,
};

#[test]
fn evaluate_fuel_combines_consumption_and_compliance() {
    let r = evaluate_fuel(1_440_000.0, &vlsfo(), &reference_policy()).expect("vlsfo");
    assert_eq!(r.fuel, "VLSFO");
    assert_close("burn", r.burn_rate, 33.723_653_395_784_545, 1e-12);
    assert_close("fee", r.carbon_fee_cost, 783.5904, 1e-9);
    assert_close("total", r.total_cost, 22_703.965_107_259_955, 1e-9);
    assert_eq!(
        r.total_cost,
        r.fuel_cost + r.carbon_fee_cost + r.capex_per_day + r.infra_per_day
    );
}

#[test]
fn evaluate_all_preserves_input_order() {
    let fuels = builtin_fuels();
    let results = evaluate_all(&reference_ship(), &fuels, &reference_policy()).expect("all");
    let names: Vec<&str> = results.iter().map(|r| r.fuel.as_str()).collect();
    let expected: Vec<&str> = fuels.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, expected);

    let mut reversed = fuels.clone();
    reversed.reverse();
    let results = evaluate_all(&reference_ship(), &reversed, &reference_policy()).expect("rev");
    assert_eq!(results.first().map(|r| r.fuel.as_str()), Some("FAME Biodiesel"));
}

#[test]
fn builtin_table_matches_reference_values() {
    let fuels = builtin_fuels();
    assert_eq!(fuels.len(), 9);
    let ammonia = find_fuel("green ammonia").expect("lookup ignores case");
    assert_eq!(ammonia.lower_heating_value, 18.6);
    assert_eq!(ammonia.price_per_ton, 1200.0);
    assert_eq!(ammonia.carbon_intensity, 5.0);
    assert_eq!(ammonia.efficiency(), 1.0);
    assert_eq!(ammonia.capex(), 0.0);
    assert!(find_fuel("Diesel").is_none());
}

#[test]
fn gray_hydrogen_pays_small_fee() {
    let fuel = find_fuel("Gray Hydrogen").expect("h2");
    let r = evaluate_fuel(1_440_000.0, &fuel, &reference_policy()).expect("h2");
    assert_close("fuel cost", r.fuel_cost, 45_600.0, 1e-12);
    assert_close("fee", r.carbon_fee_cost, 236.3904, 1e-9);
}

#[test]
fn repeated_evaluation_is_identical() {
    let fuels: Vec<FuelProfile> = builtin_fuels()
        .into_iter()
        .map(|f| f.with_capex(2_500_000.0).with_daily_infra_cost(300.0))
        .collect();
    let a = evaluate_all(&reference_ship(), &fuels, &reference_policy()).expect("a");
    let b = evaluate_all(&reference_ship(), &fuels, &reference_policy()).expect("b");
    assert_eq!(a, b);
}

#[test]
fn first_error_propagates_unmodified() {
    let fuels = vec![
        vlsfo(),
        FuelProfile::new("broken", 0.0, 100.0, 10.0),
        FuelProfile::new("also broken", 20.0, 100.0, 10.0).with_efficiency(0.0),
    ];
    let err = evaluate_all(&reference_ship(), &fuels, &reference_policy()).expect_err("broken");
    assert!(matches!(err, FuelCalcError::InvalidFuelData(_)));

    let err = evaluate_all(&ShipProfile::new(60.0, 30.0), &fuels, &reference_policy())
        .expect_err("ship checked first");
    assert!(matches!(err, FuelCalcError::InvalidInput(_)));

    let policy = PolicyParameters {
        discount_rate: 1.0,
        ..reference_policy()
    };
    let err = evaluate_all(&reference_ship(), &[vlsfo()], &policy).expect_err("policy");
    assert!(matches!(err, FuelCalcError::InvalidPolicy(_)));
}

#[test]
fn empty_fuel_list_yields_empty_results() {
    let results = evaluate_all(&reference_ship(), &[], &reference_policy()).expect("empty");
    assert!(results.is_empty());
}

#[test]
fn evaluate_fuel_rejects_poisoned_energy() {
    for energy in [f64::NAN, -1_440_000.0] {
        let err = evaluate_fuel(energy, &vlsfo(), &reference_policy()).expect_err("energy");
        assert!(matches!(err, FuelCalcError::InvalidInput(_)), "{energy}");
    }
}

#[test]
fn tiny_discount_rate_keeps_totals_finite() {
    let policy = PolicyParameters {
        discount_rate: 1e-17,
        ..reference_policy()
    };
    let r = evaluate_fuel(1_440_000.0, &vlsfo().with_capex(1e6), &policy).expect("tiny rate");
    assert!(r.capex_per_day.is_finite());
    assert!(r.total_cost.is_finite());
    assert_close("capex/day", r.capex_per_day, 1e6 / 20.0 / 365.0, 1e-9);
}

#[test]
fn huge_ship_fails_instead_of_infinite_totals() {
    let err = evaluate_all(&ShipProfile::new(1e306, 24.0), &builtin_fuels(), &reference_policy())
        .expect_err("overflow");
    assert!(matches!(err, FuelCalcError::InvalidInput(_)));
}
