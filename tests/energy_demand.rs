mod common;

use common::{assert_close, reference_ship};
use marine_fuel_toolbox::fuel::{compute_energy_demand, FuelCalcError, ShipProfile};

#[test]
fn sixty_megawatts_all_day() {
    let energy = compute_energy_demand(&reference_ship()).expect("valid ship");
    assert_eq!(energy, 1_440_000.0);
}

#[test]
fn partial_day_scales_with_hours() {
    let energy = compute_energy_demand(&ShipProfile::new(12.5, 10.0)).expect("valid ship");
    assert_close("energy", energy, 125_000.0, 1e-12);
}

#[test]
fn twenty_four_hours_is_inclusive() {
    assert!(compute_energy_demand(&ShipProfile::new(1.0, 24.0)).is_ok());
}

#[test]
fn rejects_out_of_range_ship() {
    let cases = [
        ShipProfile::new(0.0, 24.0),
        ShipProfile::new(-5.0, 24.0),
        ShipProfile::new(60.0, 0.0),
        ShipProfile::new(60.0, 24.5),
        ShipProfile::new(f64::NAN, 12.0),
        ShipProfile::new(60.0, f64::INFINITY),
    ];
    for ship in cases {
        let err = compute_energy_demand(&ship).expect_err("should reject");
        assert!(
            matches!(err, FuelCalcError::InvalidInput(_)),
            "{ship:?} gave {err:?}"
        );
    }
}

#[test]
fn overflowing_power_is_rejected() {
    let err = compute_energy_demand(&ShipProfile::new(1e306, 24.0)).expect_err("overflow");
    assert!(matches!(err, FuelCalcError::InvalidInput(_)));
}
