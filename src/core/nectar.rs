//! Water and sugar balance for diluting and sweetening fruit pulp into nectar.
//!
//! Dissolved solids are conserved: added water carries no sugar, and the mass of
//! added sugar is already part of the final nectar mass target.
//!
//! ```text
//! initial_sugar = initial_pulp_mass * initial_brix / 100
//! final_sugar   = final_nectar_mass * final_brix / 100
//! sugar_added   = final_sugar - initial_sugar
//! water_added   = final_nectar_mass - initial_pulp_mass - sugar_added
//! ```

use crate::domain::model::{MixInputs, MixResult};
use crate::domain::ports::Calculator;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculationError {
    #[error("Invalid input. All parameters must be numeric.")]
    InvalidInput { field: String },

    #[error("Input mass values must be positive.")]
    NonPositiveMass,

    #[error("Brix values must be non-negative.")]
    NegativeBrix,

    #[error("The calculation resulted in negative water addition. Check your input.")]
    InfeasibleMix { water_added: f64 },

    #[error("An error occurred during calculations: {detail}")]
    UnexpectedArithmeticError { detail: String },
}

impl CalculationError {
    pub fn kind(&self) -> &'static str {
        match self {
            CalculationError::InvalidInput { .. } => "invalid_input",
            CalculationError::NonPositiveMass => "non_positive_mass",
            CalculationError::NegativeBrix => "negative_brix",
            CalculationError::InfeasibleMix { .. } => "infeasible_mix",
            CalculationError::UnexpectedArithmeticError { .. } => "unexpected_arithmetic_error",
        }
    }
}

/// Solves the mix balance. Checks run in order and the first failure wins:
/// finite inputs, positive masses, non-negative Brix, finite results, non-negative water.
pub fn compute(
    initial_pulp_mass: f64,
    initial_brix: f64,
    final_nectar_mass: f64,
    final_brix: f64,
) -> Result<MixResult, CalculationError> {
    let named = [
        ("initial_pulp_mass", initial_pulp_mass),
        ("initial_brix", initial_brix),
        ("final_nectar_mass", final_nectar_mass),
        ("final_brix", final_brix),
    ];
    if let Some((field, _)) = named.iter().find(|(_, value)| !value.is_finite()) {
        return Err(CalculationError::InvalidInput {
            field: field.to_string(),
        });
    }

    if initial_pulp_mass <= 0.0 || final_nectar_mass <= 0.0 {
        return Err(CalculationError::NonPositiveMass);
    }

    if initial_brix < 0.0 || final_brix < 0.0 {
        return Err(CalculationError::NegativeBrix);
    }

    let initial_sugar = initial_pulp_mass * (initial_brix / 100.0);
    let final_sugar = final_nectar_mass * (final_brix / 100.0);
    let sugar_added = final_sugar - initial_sugar;
    let water_added = final_nectar_mass - initial_pulp_mass - sugar_added;

    if !sugar_added.is_finite() || !water_added.is_finite() {
        return Err(CalculationError::UnexpectedArithmeticError {
            detail: format!(
                "non-finite result (water {}, sugar {})",
                water_added, sugar_added
            ),
        });
    }

    if water_added < 0.0 {
        return Err(CalculationError::InfeasibleMix { water_added });
    }

    Ok(MixResult {
        water_added,
        sugar_added,
    })
}

pub fn compute_mix(inputs: &MixInputs) -> Result<MixResult, CalculationError> {
    compute(
        inputs.initial_pulp_mass,
        inputs.initial_brix,
        inputs.final_nectar_mass,
        inputs.final_brix,
    )
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NectarCalculator;

impl Calculator for NectarCalculator {
    fn calculate(&self, inputs: &MixInputs) -> Result<MixResult, CalculationError> {
        compute_mix(inputs)
    }
}
