use super::{drain_and_refill, ounces, product, reason, Deviation, DoseContext};
use poolchem_schemas::recommendation::{ChemicalRecommendation, DoseUnit, Priority};

pub fn recommend(reading: f64, ctx: &DoseContext<'_>) -> Option<ChemicalRecommendation> {
    let deviation = Deviation::of(ctx.range, reading)?;
    let reason_text = reason(ctx.range, reading, &deviation);
    let rec = match deviation {
        Deviation::Low(distance) => product(
            "Calcium Chloride",
            ounces(ctx.coefficients.calcium_chloride_hardness_up, distance, ctx.volume_gallons),
            DoseUnit::Ounces,
            reason_text,
            Priority::Low,
        ),
        Deviation::High(_) => drain_and_refill(ctx, reading, reason_text, Priority::Medium),
    };
    Some(rec)
}
