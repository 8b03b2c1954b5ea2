mod common;

use common::{assert_close, reference_policy, vlsfo};
use marine_fuel_toolbox::fuel::{
    capex_per_day, capital_recovery_factor, compute_compliance_cost, excess_carbon_intensity,
    FuelCalcError, FuelProfile, PolicyParameters,
};

const ENERGY: f64 = 1_440_000.0;

#[test]
fn ci_target_from_reduction() {
    assert_close("target", reference_policy().ci_target(), 89.568, 1e-12);
}

#[test]
fn vlsfo_pays_fee_on_excess() {
    let policy = reference_policy();
    assert_close("excess", excess_carbon_intensity(&vlsfo(), &policy), 1.432, 1e-9);
    let cost = compute_compliance_cost(ENERGY, &vlsfo(), &policy).expect("vlsfo");
    assert_close("fee", cost.carbon_fee_cost, 783.5904, 1e-9);
    assert_eq!(cost.capex_per_day, 0.0);
    assert_eq!(cost.infra_per_day, 0.0);
}

#[test]
fn fuels_below_target_owe_nothing() {
    let green = FuelProfile::new("Green Methanol", 20.0, 950.0, 10.0);
    let cost = compute_compliance_cost(ENERGY, &green, &reference_policy()).expect("green");
    assert_eq!(cost.carbon_fee_cost, 0.0);

    let at_target = FuelProfile::new("At target", 20.0, 950.0, reference_policy().ci_target());
    let cost = compute_compliance_cost(ENERGY, &at_target, &reference_policy()).expect("at");
    assert_eq!(cost.carbon_fee_cost, 0.0);
}

#[test]
fn capital_recovery_over_twenty_years() {
    let crf = capital_recovery_factor(0.08, 20).expect("crf");
    assert_close("crf", crf, 0.101_852_208_823_150_58, 1e-12);

    let per_day = capex_per_day(10_000_000.0, &reference_policy()).expect("capex");
    assert_close("capex/day", per_day, 2_790.471_474_606_865, 1e-9);
    assert!((per_day - 2_789.0).abs() < 2.0);
}

#[test]
fn capex_and_infra_flow_through() {
    let fuel = FuelProfile::new("Green Ammonia", 18.6, 1200.0, 5.0)
        .with_capex(10_000_000.0)
        .with_daily_infra_cost(1_500.0);
    let cost = compute_compliance_cost(ENERGY, &fuel, &reference_policy()).expect("ammonia");
    assert_close("capex/day", cost.capex_per_day, 2_790.471_474_606_865, 1e-9);
    assert_eq!(cost.infra_per_day, 1_500.0);
    assert_eq!(cost.carbon_fee_cost, 0.0);
}

#[test]
fn zero_capex_skips_annuity_even_for_degenerate_terms() {
    let degenerate = PolicyParameters {
        discount_rate: 0.0,
        amortization_years: 0,
        ..reference_policy()
    };
    assert_eq!(capex_per_day(0.0, &degenerate), Ok(0.0));
}

#[test]
fn rejects_degenerate_policy() {
    let bad = [
        PolicyParameters {
            discount_rate: 0.0,
            ..reference_policy()
        },
        PolicyParameters {
            discount_rate: 1.0,
            ..reference_policy()
        },
        PolicyParameters {
            discount_rate: -0.1,
            ..reference_policy()
        },
        PolicyParameters {
            amortization_years: 0,
            ..reference_policy()
        },
        PolicyParameters {
            days_per_year: 0,
            ..reference_policy()
        },
        PolicyParameters {
            ci_reduction_percent: 100.0,
            ..reference_policy()
        },
        PolicyParameters {
            baseline_ci: 0.0,
            ..reference_policy()
        },
    ];
    for policy in &bad {
        let err = compute_compliance_cost(ENERGY, &vlsfo(), policy).expect_err("should reject");
        assert!(matches!(err, FuelCalcError::InvalidPolicy(_)), "{policy:?}");
    }
    assert!(matches!(
        capital_recovery_factor(1.5, 10),
        Err(FuelCalcError::InvalidPolicy(_))
    ));
}

#[test]
fn tiny_discount_rate_tends_to_straight_line() {
    let crf = capital_recovery_factor(1e-17, 20).expect("tiny rate");
    assert_close("crf", crf, 1.0 / 20.0, 1e-9);

    let policy = PolicyParameters {
        discount_rate: 1e-17,
        ..reference_policy()
    };
    let per_day = capex_per_day(1_000_000.0, &policy).expect("capex");
    assert!(per_day.is_finite());
    assert_close("capex/day", per_day, 1_000_000.0 / 20.0 / 365.0, 1e-9);
}

#[test]
fn very_long_amortization_is_consistent() {
    let policy = PolicyParameters {
        amortization_years: u32::MAX,
        ..reference_policy()
    };
    assert_eq!(policy.validate(), Ok(()));
    let crf = capital_recovery_factor(policy.discount_rate, policy.amortization_years)
        .expect("long horizon");
    assert_close("crf", crf, 0.08, 1e-12);
    let cost = compute_compliance_cost(ENERGY, &vlsfo().with_capex(1e6), &policy).expect("cost");
    assert_close("capex/day", cost.capex_per_day, 1e6 * 0.08 / 365.0, 1e-9);
}

#[test]
fn rejects_non_positive_energy() {
    for energy in [0.0, -ENERGY, f64::NAN, f64::INFINITY] {
        let err = compute_compliance_cost(energy, &vlsfo(), &reference_policy())
            .expect_err("bad energy");
        assert!(matches!(err, FuelCalcError::InvalidInput(_)), "{energy}");
    }
}
