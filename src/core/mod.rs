pub mod engine;
pub mod nectar;

pub use crate::core::nectar::{CalculationError, NectarCalculator};
pub use crate::domain::model::{FieldSpec, FormSpec, MixInputs, MixResult};
pub use crate::domain::ports::{Calculator, InputProvider};
