use super::{drain_and_refill, ounces, product, reason, Deviation, DoseContext};
use poolchem_schemas::recommendation::{ChemicalRecommendation, DoseUnit, Priority};

pub fn recommend(reading: f64, ctx: &DoseContext<'_>) -> Option<ChemicalRecommendation> {
    let deviation = Deviation::of(ctx.range, reading)?;
    let reason_text = reason(ctx.range, reading, &deviation);
    let rec = match deviation {
        Deviation::Low(distance) => product(
            "Stabilizer (cyanuric acid)",
            ounces(ctx.coefficients.stabilizer_cya_up, distance, ctx.volume_gallons),
            DoseUnit::Ounces,
            reason_text,
            Priority::Low,
        ),
        // No chemical lowers CYA.
        Deviation::High(_) => drain_and_refill(ctx, reading, reason_text, Priority::High),
    };
    Some(rec)
}
