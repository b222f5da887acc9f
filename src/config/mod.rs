pub mod toml_config;

#[cfg(feature = "cli")]
use crate::app::{FieldValues, OutputFormat};
#[cfg(feature = "cli")]
use crate::domain::model::FormSpec;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "nectar-calc")]
#[command(about = "Water and sugar to add to fruit pulp for a target nectar mass and Brix")]
pub struct CliConfig {
    /// Initial Pulp Mass (kg)
    #[arg(long, allow_hyphen_values = true)]
    pub initial_pulp_mass: Option<String>,

    /// Initial Brix (%)
    #[arg(long, allow_hyphen_values = true)]
    pub initial_brix: Option<String>,

    /// Final Nectar Mass (kg)
    #[arg(long, allow_hyphen_values = true)]
    pub final_nectar_mass: Option<String>,

    /// Final Brix (%)
    #[arg(long, allow_hyphen_values = true)]
    pub final_brix: Option<String>,

    /// Path to a TOML form file (labels, minimums, steps, defaults)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Prompt for each field on stdin instead of reading the flags
    #[arg(short, long)]
    pub interactive: bool,

    /// Output format; overrides the form file
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn field_values<'a>(&self, form: &'a FormSpec) -> FieldValues<'a> {
        FieldValues::new(form)
            .with_initial_pulp_mass(self.initial_pulp_mass.clone())
            .with_initial_brix(self.initial_brix.clone())
            .with_final_nectar_mass(self.final_nectar_mass.clone())
            .with_final_brix(self.final_brix.clone())
    }
}
