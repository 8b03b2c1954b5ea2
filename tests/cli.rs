mod common;

use clap::Parser;
use common::{reference_policy, reference_ship};
use marine_fuel_toolbox::app::{
    apply_fuel_options, apply_policy_args, apply_ship_args, consume_usage, lookup_fuel,
    render_fuel_table, render_single_fuel, AppError,
};
use marine_fuel_toolbox::cli::{parse_assignment, Cli, Command, FuelOptionArgs};
use marine_fuel_toolbox::fuel::{builtin_fuels, ShipProfile};
use marine_fuel_toolbox::i18n::Translator;
use marine_fuel_toolbox::report::SessionUsage;
use marine_fuel_toolbox::units::{MassUnit, PowerUnit};

#[test]
fn compare_flags_parse() {
    let cli = Cli::try_parse_from([
        "marine_fuel_toolbox",
        "--lang",
        "en",
        "compare",
        "--power",
        "30000",
        "--power-unit",
        "kW",
        "--hours",
        "12",
        "--carbon-fee",
        "500",
        "--capex",
        "Green Ammonia=10000000",
        "--capex",
        "Green Methanol=4000000",
        "--rank",
        "--mass-unit",
        "kg",
    ])
    .expect("parse");
    assert_eq!(cli.lang, "en");
    let Some(Command::Compare(args)) = cli.command else {
        panic!("expected compare");
    };
    assert!(args.rank);
    assert!(!args.json);
    assert_eq!(args.mass_unit, Some(MassUnit::Kilogram));
    assert_eq!(args.fuel_options.capex.len(), 2);

    let ship = apply_ship_args(reference_ship(), PowerUnit::Megawatt, &args.ship);
    assert!((ship.power_mw - 30.0).abs() < 1e-12);
    assert_eq!(ship.hours_per_day, 12.0);

    let policy = apply_policy_args(reference_policy(), &args.policy);
    assert_eq!(policy.carbon_fee_per_ton, 500.0);
    assert_eq!(policy.baseline_ci, 93.3);
    assert_eq!(policy.amortization_years, 20);
}

#[test]
fn no_subcommand_means_menu() {
    let cli = Cli::try_parse_from(["marine_fuel_toolbox"]).expect("parse");
    assert!(cli.command.is_none());
    assert_eq!(cli.lang, "auto");
}

#[test]
fn rejects_unknown_power_unit() {
    let res = Cli::try_parse_from(["marine_fuel_toolbox", "fuel", "VLSFO", "--power-unit", "GW"]);
    assert!(res.is_err());
}

#[test]
fn assignment_parsing() {
    assert_eq!(
        parse_assignment("Green Ammonia=1e7"),
        Ok(("Green Ammonia".to_string(), 1e7))
    );
    assert!(parse_assignment("VLSFO").is_err());
    assert!(parse_assignment("=5").is_err());
    assert!(parse_assignment("VLSFO=abc").is_err());
}

#[test]
fn fuel_options_apply_to_named_fuels() {
    let opts = FuelOptionArgs {
        capex: vec![("green ammonia".into(), 1.0e7)],
        efficiency: vec![("Green Hydrogen".into(), 0.55)],
        infra: vec![("VLSFO".into(), 250.0)],
    };
    let fuels = apply_fuel_options(builtin_fuels(), &opts).expect("apply");
    let ammonia = lookup_fuel(&fuels, "Green Ammonia").expect("ammonia");
    assert_eq!(ammonia.capex(), 1.0e7);
    let h2 = lookup_fuel(&fuels, "Green Hydrogen").expect("h2");
    assert_eq!(h2.efficiency(), 0.55);
    assert_eq!(fuels[0].infra_per_day(), 250.0);
    assert_eq!(fuels[1].capex(), 0.0);

    let bad = FuelOptionArgs {
        capex: vec![("Coal".into(), 1.0)],
        ..FuelOptionArgs::default()
    };
    assert!(matches!(
        apply_fuel_options(builtin_fuels(), &bad),
        Err(AppError::UnknownFuel(name)) if name == "Coal"
    ));
}

#[test]
fn single_fuel_reports_burn_cost_and_properties() {
    let tr = Translator::new("en");
    let fuel = lookup_fuel(&builtin_fuels(), " vlsfo ").expect("vlsfo");
    let out = render_single_fuel(
        &tr,
        &reference_ship(),
        &fuel,
        &reference_policy(),
        MassUnit::Tonne,
    )
    .expect("render");
    assert!(out.contains("Burn/day: 33.72 t"));
    assert!(out.contains("Fuel $/day: $21,920"));
    assert!(out.contains("tCO2e/day: 131.04"));
    assert!(out.contains("\"lower_heating_value\": 42.7"));
}

#[test]
fn single_fuel_surfaces_engine_errors() {
    let tr = Translator::new("en");
    let fuel = lookup_fuel(&builtin_fuels(), "VLSFO").expect("vlsfo");
    let res = render_single_fuel(
        &tr,
        &ShipProfile::new(60.0, 25.0),
        &fuel,
        &reference_policy(),
        MassUnit::Tonne,
    );
    assert!(matches!(res, Err(AppError::FuelCalc(_))));
}

#[test]
fn fuel_table_has_header_and_rows() {
    let tr = Translator::new("ko");
    let out = render_fuel_table(&tr, &builtin_fuels());
    assert_eq!(out.lines().count(), 10);
    assert!(out.starts_with("연료"));
    assert!(out.contains("FAME Biodiesel"));
}

#[test]
fn usage_limit_is_an_app_error() {
    let mut usage = SessionUsage::new(Some(1));
    assert!(consume_usage(&mut usage).is_ok());
    assert!(matches!(
        consume_usage(&mut usage),
        Err(AppError::UsageLimit(1))
    ));
    assert_eq!(usage.count(), 1);
}
