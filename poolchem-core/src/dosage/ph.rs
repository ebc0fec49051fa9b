use super::{ounces, product, reason, Deviation, DoseContext};
use poolchem_schemas::recommendation::{ChemicalRecommendation, DoseUnit, Priority};

pub fn recommend(reading: f64, ctx: &DoseContext<'_>) -> Option<ChemicalRecommendation> {
    let deviation = Deviation::of(ctx.range, reading)?;
    let reason_text = reason(ctx.range, reading, &deviation);
    let rec = match deviation {
        Deviation::Low(distance) => product(
            "Soda Ash (sodium carbonate)",
            ounces(ctx.coefficients.soda_ash_ph_up, distance, ctx.volume_gallons),
            DoseUnit::Ounces,
            reason_text,
            Priority::High,
        ),
        Deviation::High(distance) => product(
            "Muriatic Acid",
            ounces(ctx.coefficients.muriatic_acid_ph_down, distance, ctx.volume_gallons),
            DoseUnit::FluidOunces,
            reason_text,
            Priority::High,
        ),
    };
    Some(rec)
}
