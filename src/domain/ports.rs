use crate::core::nectar::CalculationError;
use crate::domain::model::{MixInputs, MixResult};
use crate::utils::error::Result;

/// Source of the four field values for one calculation.
pub trait InputProvider {
    fn mix_inputs(&self) -> Result<MixInputs>;
}

pub trait Calculator {
    fn calculate(&self, inputs: &MixInputs) -> std::result::Result<MixResult, CalculationError>;
}

impl InputProvider for MixInputs {
    fn mix_inputs(&self) -> Result<MixInputs> {
        Ok(*self)
    }
}
