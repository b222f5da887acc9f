pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::{Outcome, OutputFormat};
pub use config::toml_config::TomlConfig;
pub use crate::core::{
    engine::MixEngine,
    nectar::{compute, compute_mix, CalculationError, NectarCalculator},
};
pub use domain::model::{FieldSpec, FormSpec, MixInputs, MixResult};
pub use utils::error::{NectarError, Result};
