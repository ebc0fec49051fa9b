use serde::{Deserialize, Serialize};

/// Empirical dosing coefficients, in pounds of product per gallon of pool
/// water per unit of deviation from the target band.
///
/// Each coefficient is independent; none is derived from another.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoseCoefficients {
    pub soda_ash_ph_up: f64,
    pub muriatic_acid_ph_down: f64,
    pub cal_hypo_chlorine_up: f64,
    pub baking_soda_alkalinity_up: f64,
    pub muriatic_acid_alkalinity_down: f64,
    pub stabilizer_cya_up: f64,
    pub calcium_chloride_hardness_up: f64,
}

impl DoseCoefficients {
    pub fn named(&self) -> [(&'static str, f64); 7] {
        [
            ("sodaAshPhUp", self.soda_ash_ph_up),
            ("muriaticAcidPhDown", self.muriatic_acid_ph_down),
            ("calHypoChlorineUp", self.cal_hypo_chlorine_up),
            ("bakingSodaAlkalinityUp", self.baking_soda_alkalinity_up),
            ("muriaticAcidAlkalinityDown", self.muriatic_acid_alkalinity_down),
            ("stabilizerCyaUp", self.stabilizer_cya_up),
            ("calciumChlorideHardnessUp", self.calcium_chloride_hardness_up),
        ]
    }
}
