use super::{ounces, product, reason, Deviation, DoseContext};
use poolchem_schemas::recommendation::{ChemicalRecommendation, DoseUnit, Priority};

pub fn recommend(reading: f64, ctx: &DoseContext<'_>) -> Option<ChemicalRecommendation> {
    let deviation = Deviation::of(ctx.range, reading)?;
    let reason_text = reason(ctx.range, reading, &deviation);
    let rec = match deviation {
        Deviation::Low(distance) => product(
            "Baking Soda (sodium bicarbonate)",
            ounces(ctx.coefficients.baking_soda_alkalinity_up, distance, ctx.volume_gallons),
            DoseUnit::Ounces,
            reason_text,
            Priority::Medium,
        ),
        Deviation::High(distance) => product(
            "Muriatic Acid",
            ounces(ctx.coefficients.muriatic_acid_alkalinity_down, distance, ctx.volume_gallons),
            DoseUnit::FluidOunces,
            reason_text,
            Priority::Medium,
        ),
    };
    Some(rec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dosage::coefficients::default_coefficients, ranges::RangeTable};
    use approx::assert_relative_eq;
    use poolchem_schemas::parameter::ParameterId;

    fn run(reading: f64) -> Option<ChemicalRecommendation> {
        let ranges = RangeTable::default();
        let coefficients = default_coefficients();
        let ctx = DoseContext {
            range: ranges.get(ParameterId::TotalAlkalinity),
            coefficients: &coefficients,
            volume_gallons: 10000.0,
        };
        recommend(reading, &ctx)
    }

    #[test]
    fn low_alkalinity_adds_baking_soda() {
        let rec = run(60.0).unwrap();
        assert!(rec.chemical_name.starts_with("Baking Soda"));
        assert_eq!(rec.priority, Priority::Medium);
        // 20 ppm short of 80 on 10k gallons: 0.000015 * 20 * 10000 * 16 = 48 oz
        assert_relative_eq!(rec.amount.quantity().unwrap(), 48.0, max_relative = 1e-9);
        assert_eq!(rec.reason_text, "Total alkalinity is too low (60). Target: 80-120 ppm");
    }

    #[test]
    fn high_alkalinity_adds_acid() {
        let rec = run(150.0).unwrap();
        assert_eq!(rec.chemical_name, "Muriatic Acid");
        assert_eq!(rec.priority, Priority::Medium);
        assert_relative_eq!(
            rec.amount.quantity().unwrap(),
            0.000016 * 30.0 * 10000.0 * 16.0,
            max_relative = 1e-9
        );
    }
}
