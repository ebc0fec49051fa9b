use approx::assert_relative_eq;
use poolchem_core::{
    classify,
    engine::balanced_sentinel,
    recommend, Direction, PoolChemError, RangeStatus, RangeTable,
};
use poolchem_schemas::{
    parameter::ParameterId,
    pool::{PoolProfile, PoolType},
    reading::TestReading,
    recommendation::{Amount, ChemicalRecommendation, Priority},
};

fn pool(volume_gallons: f64) -> PoolProfile {
    PoolProfile::new(volume_gallons, PoolType::Chlorine)
}

fn run(volume_gallons: f64, readings: &[(ParameterId, f64)]) -> Vec<ChemicalRecommendation> {
    let readings: Vec<TestReading> = readings
        .iter()
        .map(|(id, value)| TestReading::new(*id, *value))
        .collect();
    recommend(&pool(volume_gallons), &readings).unwrap()
}

#[test]
fn every_band_is_inclusive_at_both_ends() {
    let eps = 1e-6;
    for range in RangeTable::default().iter() {
        let id = range.parameter_id;
        assert_eq!(classify(id, Some(range.min)), RangeStatus::In);
        assert_eq!(classify(id, Some(range.max)), RangeStatus::In);
        assert_eq!(classify(id, Some(range.min - eps)), RangeStatus::Out(Direction::Low));
        assert_eq!(classify(id, Some(range.max + eps)), RangeStatus::Out(Direction::High));
    }
}

#[test]
fn midpoint_readings_return_only_the_balanced_sentinel() {
    let readings: Vec<TestReading> = RangeTable::default()
        .iter()
        .map(|r| TestReading::new(r.parameter_id, r.midpoint()))
        .collect();
    let recs = recommend(&pool(20000.0), &readings).unwrap();
    assert_eq!(recs, vec![balanced_sentinel()]);
}

#[test]
fn soda_ash_grows_as_ph_falls() {
    let near = run(20000.0, &[(ParameterId::Ph, 7.1)]);
    let far = run(20000.0, &[(ParameterId::Ph, 6.8)]);
    let near_oz = near[0].amount.quantity().unwrap();
    let far_oz = far[0].amount.quantity().unwrap();
    assert!(far_oz > near_oz, "{far_oz} should exceed {near_oz}");
}

#[test]
fn doubling_volume_doubles_every_dose() {
    let readings = [
        (ParameterId::Ph, 8.1),
        (ParameterId::FreeChlorine, 0.2),
        (ParameterId::TotalAlkalinity, 55.0),
        (ParameterId::CyanuricAcid, 12.0),
        (ParameterId::CalciumHardness, 90.0),
    ];
    let base = run(12500.0, &readings);
    let doubled = run(25000.0, &readings);
    assert_eq!(base.len(), 5);
    assert_eq!(base.len(), doubled.len());
    for (a, b) in base.iter().zip(&doubled) {
        assert_eq!(a.chemical_name, b.chemical_name);
        assert_relative_eq!(
            b.amount.quantity().unwrap(),
            2.0 * a.amount.quantity().unwrap(),
            max_relative = 1e-12
        );
    }
}

#[test]
fn only_present_readings_are_evaluated() {
    let readings = [
        TestReading::new(ParameterId::Ph, 6.5),
        TestReading::absent(ParameterId::FreeChlorine),
        TestReading::absent(ParameterId::TotalAlkalinity),
        TestReading::absent(ParameterId::CyanuricAcid),
        TestReading::absent(ParameterId::CalciumHardness),
    ];
    let recs = recommend(&pool(20000.0), &readings).unwrap();
    assert_eq!(recs.len(), 1);
    assert!(recs[0].reason_text.starts_with("pH"));

    let in_band = [TestReading::new(ParameterId::Ph, 7.4), TestReading::absent(ParameterId::FreeChlorine)];
    assert_eq!(recommend(&pool(20000.0), &in_band).unwrap(), vec![balanced_sentinel()]);
}

#[test]
fn identical_inputs_give_identical_output() {
    let readings = [
        (ParameterId::CalciumHardness, 420.0),
        (ParameterId::Ph, 7.8),
        (ParameterId::FreeChlorine, 4.2),
    ];
    let first = serde_json::to_string(&run(14000.0, &readings)).unwrap();
    let second = serde_json::to_string(&run(14000.0, &readings)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn scenario_low_ph_on_twenty_thousand_gallons() {
    let recs = run(20000.0, &[(ParameterId::Ph, 6.9)]);
    assert_eq!(recs.len(), 1);
    let rec = &recs[0];
    assert!(rec.chemical_name.contains("Soda Ash"));
    assert!(rec.reason_text.contains("6.9"));
    assert!(rec.reason_text.contains("7.2-7.6"));
    assert_eq!(rec.priority, Priority::High);
}

#[test]
fn scenario_all_mid_band_is_balanced() {
    let recs = run(
        20000.0,
        &[
            (ParameterId::Ph, 7.4),
            (ParameterId::FreeChlorine, 2.0),
            (ParameterId::TotalAlkalinity, 100.0),
            (ParameterId::CyanuricAcid, 40.0),
            (ParameterId::CalciumHardness, 200.0),
        ],
    );
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].chemical_name, "No chemicals needed");
    assert_eq!(recs[0].amount, Amount::Instruction("Pool chemistry is balanced".to_string()));
    assert_eq!(recs[0].reason_text, "All levels are within target ranges");
    assert_eq!(recs[0].priority, Priority::Low);
}

#[test]
fn scenario_very_high_chlorine_is_a_wait() {
    let recs = run(20000.0, &[(ParameterId::FreeChlorine, 6.0)]);
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].priority, Priority::Medium);
    match &recs[0].amount {
        Amount::Instruction(text) => assert!(text.starts_with("Wait")),
        other => panic!("expected a wait instruction, got {other:?}"),
    }
}

#[test]
fn scenario_high_cya_is_partial_drain() {
    let recs = run(20000.0, &[(ParameterId::CyanuricAcid, 110.0)]);
    assert_eq!(recs.len(), 1);
    assert!(recs[0].chemical_name.contains("drain"));
    assert_eq!(recs[0].priority, Priority::High);
    assert!(recs[0].amount.quantity().is_none());
}

#[test]
fn bad_volume_is_refused_before_any_dosing() {
    let readings = [TestReading::new(ParameterId::Ph, 6.0)];
    for volume in [0.0, -20000.0, f64::NAN] {
        let result = recommend(&pool(volume), &readings);
        assert!(matches!(result, Err(PoolChemError::InvalidPoolProfile(_))));
    }
}

#[test]
fn negative_readings_flow_through_the_formulas() {
    let recs = run(10000.0, &[(ParameterId::FreeChlorine, -1.0)]);
    let expected = 0.0000125 * 2.0 * 10000.0 * 16.0;
    assert_relative_eq!(recs[0].amount.quantity().unwrap(), expected, max_relative = 1e-12);
}
