use super::{ounces, product, reason, Deviation, DoseContext};
use poolchem_schemas::recommendation::{
    Amount, ChemicalRecommendation, DoseUnit, Priority,
};

/// Above this level the pool should not be swum in until chlorine drops.
pub const VERY_HIGH_FREE_CHLORINE_PPM: f64 = 5.0;

pub fn recommend(reading: f64, ctx: &DoseContext<'_>) -> Option<ChemicalRecommendation> {
    let deviation = Deviation::of(ctx.range, reading)?;
    let reason_text = reason(ctx.range, reading, &deviation);
    let rec = match deviation {
        Deviation::Low(distance) => product(
            "Calcium Hypochlorite (65%)",
            ounces(ctx.coefficients.cal_hypo_chlorine_up, distance, ctx.volume_gallons),
            DoseUnit::Ounces,
            reason_text,
            Priority::High,
        ),
        // Nothing to add; chlorine comes down on its own with sun and time.
        Deviation::High(_) => {
            let wait = if reading > VERY_HIGH_FREE_CHLORINE_PPM {
                format!(
                    "Wait 24-48 hours and retest; no swimming until below {:.1} ppm",
                    VERY_HIGH_FREE_CHLORINE_PPM
                )
            } else {
                "Wait 24 hours and retest".to_string()
            };
            ChemicalRecommendation {
                chemical_name: "None (let chlorine dissipate)".to_string(),
                amount: Amount::Instruction(wait),
                reason_text: format!(
                    "{}. Stop chlorinating and leave the pool uncovered",
                    reason_text
                ),
                priority: Priority::Medium,
            }
        }
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
            range: ranges.get(ParameterId::FreeChlorine),
            coefficients: &coefficients,
            volume_gallons: 15000.0,
        };
        recommend(reading, &ctx)
    }

    #[test]
    fn low_chlorine_is_high_priority_shock() {
        let rec = run(0.5).unwrap();
        assert_eq!(rec.priority, Priority::High);
        assert!(rec.chemical_name.contains("Hypochlorite"));
        assert_relative_eq!(
            rec.amount.quantity().unwrap(),
            0.0000125 * 0.5 * 15000.0 * 16.0,
            max_relative = 1e-9
        );
        assert!(rec.reason_text.contains("(0.5)"));
        assert!(rec.reason_text.contains("1.0-3.0 ppm"));
    }

    #[test]
    fn moderately_high_chlorine_waits_a_day() {
        let rec = run(4.0).unwrap();
        assert_eq!(rec.priority, Priority::Medium);
        assert_eq!(rec.amount, Amount::Instruction("Wait 24 hours and retest".to_string()));
    }

    #[test]
    fn very_high_chlorine_adds_swim_warning_but_stays_medium() {
        let rec = run(6.0).unwrap();
        assert_eq!(rec.priority, Priority::Medium);
        assert!(rec.amount.quantity().is_none());
        assert!(rec.amount.to_string().contains("no swimming until below 5.0 ppm"));
        assert!(rec.reason_text.starts_with("Free chlorine is too high (6.0). Target: 1.0-3.0 ppm"));
    }
}
