//! Tests for the fleet registry: tax rules, adjustments, removal and filters

use fleet::fleet::Fleet;
use fleet::input::VehicleForm;
use fleet::vehicle::{Vehicle, VehicleKind, BASE_TAX_RATE};

mod support;
use support::factory::{FleetFactory, VehicleFactory};

const EPSILON: f64 = 1e-9;

// ============================================================================
// TAX RULES
// ============================================================================

#[test]
fn test_tax_by_kind_across_prices() {
    for price in [0.0, 1.0, 999.99, 25000.0, 1_000_000.0] {
        let base = Vehicle::new("A", "B", price, 2020);
        let electric = Vehicle::electric("A", "B", price, 2020, 50.0, 300.0);
        let truck = Vehicle::truck("A", "B", price, 2020, 10.0, 9.0);

        assert!((base.calculate_tax() - price * 0.23).abs() < EPSILON);
        assert!((electric.calculate_tax() - price * 0.23 * 0.5).abs() < EPSILON);
        assert!((truck.calculate_tax() - price * 0.23 * 1.3).abs() < EPSILON);
    }
}

#[test]
fn test_variant_tax_derives_from_base_tax() {
    let truck = VehicleFactory::volvo_fh();
    assert!((truck.base_tax() - truck.price() * BASE_TAX_RATE).abs() < EPSILON);
    assert!(truck.calculate_tax() > truck.base_tax());

    let electric = VehicleFactory::model_3();
    assert!((electric.calculate_tax() * 2.0 - electric.base_tax()).abs() < EPSILON);
}

// ============================================================================
// ADJUSTMENTS
// ============================================================================

#[test]
fn test_adjustment_matches_formula_for_each_vehicle() {
    for percentage in [10.0, -15.0, 0.0, 100.0, 33.3] {
        let mut fleet = FleetFactory::sample();
        let originals: Vec<f64> = fleet.iter().map(|v| v.price()).collect();

        let count = fleet.apply_global_adjustment(percentage);
        assert_eq!(count, originals.len());

        for (vehicle, original) in fleet.iter().zip(&originals) {
            let expected = original * (1.0 - percentage / 100.0);
            assert!((vehicle.price() - expected).abs() < 1e-6);
        }
    }
}

#[test]
fn test_adjustment_changes_tax_proportionally() {
    let mut fleet = FleetFactory::one_of_each();
    let tax_before = fleet.summary().total_tax;
    fleet.apply_global_adjustment(50.0);
    assert!((fleet.summary().total_tax - tax_before / 2.0).abs() < 1e-6);
}

// ============================================================================
// REMOVAL
// ============================================================================

#[test]
fn test_remove_out_of_range_keeps_sequence() {
    let mut fleet = FleetFactory::sample();
    let before = fleet.vehicles().to_vec();
    for index in [10, 11, 1000] {
        assert!(fleet.remove(index).is_none());
    }
    assert_eq!(fleet.vehicles(), before.as_slice());
}

#[test]
fn test_remove_valid_index_shifts_down() {
    let mut fleet = FleetFactory::sample();
    let before = fleet.vehicles().to_vec();

    let removed = fleet.remove(4).unwrap();
    assert_eq!(removed, before[4]);
    assert_eq!(fleet.len(), 9);
    assert_eq!(&fleet.vehicles()[..4], &before[..4]);
    assert_eq!(&fleet.vehicles()[4..], &before[5..]);
}

// ============================================================================
// FILTERS AND SUMMARY
// ============================================================================

#[test]
fn test_filter_by_brand_any_case() {
    let fleet = FleetFactory::sample();
    assert_eq!(fleet.filter_by_brand("toyota"), fleet.filter_by_brand("TOYOTA"));
    assert_eq!(fleet.filter_by_brand("ToYoTa").len(), 1);
}

#[test]
fn test_filters_preserve_order_and_source() {
    let fleet = FleetFactory::sample();
    let trucks: Vec<_> = fleet
        .filter_by_kind(VehicleKind::Truck)
        .iter()
        .map(|v| v.brand())
        .collect();
    assert_eq!(trucks, vec!["Mercedes", "Volvo", "MAN"]);
    assert_eq!(fleet.len(), 10);

    let recent: Vec<_> = fleet.filter_by_year(2023).iter().map(|v| v.model()).collect();
    assert_eq!(recent, vec!["Model 3", "3 Series"]);
}

#[test]
fn test_summary_of_sample() {
    let summary = FleetFactory::sample().summary();
    assert_eq!(summary.total, 10);
    assert!((summary.total_value - 487000.0).abs() < EPSILON);
    assert_eq!(summary.counts_by_kind[&VehicleKind::Vehicle], 4);
    assert_eq!(summary.counts_by_kind[&VehicleKind::ElectricCar], 3);
    assert_eq!(summary.counts_by_kind[&VehicleKind::Truck], 3);
    assert!((summary.share_percent(VehicleKind::Truck) - 30.0).abs() < EPSILON);
}

#[test]
fn test_summary_only_counts_present_kinds() {
    let summary = FleetFactory::corolla_and_tesla().summary();
    assert_eq!(summary.counts_by_kind.len(), 2);
    assert!(!summary.counts_by_kind.contains_key(&VehicleKind::Truck));
}

#[test]
fn test_empty_summary() {
    let summary = Fleet::new().summary();
    assert_eq!(summary.total, 0);
    assert_eq!(summary.total_value, 0.0);
    assert_eq!(summary.total_tax, 0.0);
    assert!(summary.counts_by_kind.is_empty());
}

// ============================================================================
// FORM INPUT
// ============================================================================

#[test]
fn test_invalid_form_leaves_fleet_unchanged() {
    let mut fleet = FleetFactory::one_of_each();
    let form = VehicleForm {
        kind: "ElectricCar".to_string(),
        brand: "Kia".to_string(),
        model: "EV6".to_string(),
        price: "48000".to_string(),
        year: "2023".to_string(),
        battery_capacity: "77.4".to_string(),
        autonomy: "far".to_string(),
        ..VehicleForm::default()
    };

    if let Ok(vehicle) = form.into_vehicle() {
        fleet.add(vehicle);
    }
    assert_eq!(fleet.len(), 3);
}
