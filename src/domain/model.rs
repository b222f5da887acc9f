use crate::core::nectar::CalculationError;
use serde::{Deserialize, Serialize};

/// The four measurements a mixing step starts from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MixInputs {
    /// Starting pulp mass in kg
    pub initial_pulp_mass: f64,
    /// Brix of the pulp, percent soluble solids
    pub initial_brix: f64,
    /// Target nectar mass in kg
    pub final_nectar_mass: f64,
    /// Target Brix of the nectar
    pub final_brix: f64,
}

impl MixInputs {
    pub fn new(
        initial_pulp_mass: f64,
        initial_brix: f64,
        final_nectar_mass: f64,
        final_brix: f64,
    ) -> Self {
        Self {
            initial_pulp_mass,
            initial_brix,
            final_nectar_mass,
            final_brix,
        }
    }

    /// Parses raw field text. A field that is not a number fails with `InvalidInput`.
    pub fn parse(
        initial_pulp_mass: &str,
        initial_brix: &str,
        final_nectar_mass: &str,
        final_brix: &str,
    ) -> Result<Self, CalculationError> {
        Ok(Self {
            initial_pulp_mass: parse_field("initial_pulp_mass", initial_pulp_mass)?,
            initial_brix: parse_field("initial_brix", initial_brix)?,
            final_nectar_mass: parse_field("final_nectar_mass", final_nectar_mass)?,
            final_brix: parse_field("final_brix", final_brix)?,
        })
    }

    /// Field values paired with their names, in form order.
    pub fn fields(&self) -> [(&'static str, f64); 4] {
        [
            ("initial_pulp_mass", self.initial_pulp_mass),
            ("initial_brix", self.initial_brix),
            ("final_nectar_mass", self.final_nectar_mass),
            ("final_brix", self.final_brix),
        ]
    }
}

pub(crate) fn parse_field(field: &str, raw: &str) -> Result<f64, CalculationError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| CalculationError::InvalidInput {
            field: field.to_string(),
        })
}

/// How much water and sugar to add. `sugar_added` is negative when diluting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MixResult {
    pub water_added: f64,
    pub sugar_added: f64,
}

/// Configuration of one numeric form field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub label: String,
    pub minimum: f64,
    pub step: f64,
    pub default: f64,
}

impl FieldSpec {
    pub fn new(label: &str, default: f64) -> Self {
        Self {
            label: label.to_string(),
            minimum: 0.0,
            step: 0.1,
            default,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSpec {
    pub title: String,
    pub initial_pulp_mass: FieldSpec,
    pub initial_brix: FieldSpec,
    pub final_nectar_mass: FieldSpec,
    pub final_brix: FieldSpec,
}

impl FormSpec {
    pub fn fields(&self) -> [(&'static str, &FieldSpec); 4] {
        [
            ("initial_pulp_mass", &self.initial_pulp_mass),
            ("initial_brix", &self.initial_brix),
            ("final_nectar_mass", &self.final_nectar_mass),
            ("final_brix", &self.final_brix),
        ]
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields()
            .into_iter()
            .find(|(field, _)| *field == name)
            .map(|(_, spec)| spec)
    }

    pub fn defaults(&self) -> MixInputs {
        MixInputs::new(
            self.initial_pulp_mass.default,
            self.initial_brix.default,
            self.final_nectar_mass.default,
            self.final_brix.default,
        )
    }
}

impl Default for FormSpec {
    fn default() -> Self {
        Self {
            title: "Nectar Calculation".to_string(),
            initial_pulp_mass: FieldSpec::new("Initial Pulp Mass (kg)", 660.0),
            initial_brix: FieldSpec::new("Initial Brix (%)", 7.0),
            final_nectar_mass: FieldSpec::new("Final Nectar Mass (kg)", 800.0),
            final_brix: FieldSpec::new("Final Brix (%)", 12.0),
        }
    }
}
