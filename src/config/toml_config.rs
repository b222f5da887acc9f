use crate::app::presenter::OutputFormat;
use crate::domain::model::{FieldSpec, FormSpec};
use crate::utils::error::{NectarError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional form file. Every section and key may be left out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub form: Option<FormSection>,
    pub fields: Option<FieldsSection>,
    pub output: Option<OutputSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormSection {
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldsSection {
    pub initial_pulp_mass: Option<FieldOverride>,
    pub initial_brix: Option<FieldOverride>,
    pub final_nectar_mass: Option<FieldOverride>,
    pub final_brix: Option<FieldOverride>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldOverride {
    pub label: Option<String>,
    pub minimum: Option<f64>,
    pub step: Option<f64>,
    pub default: Option<f64>,
}

impl FieldOverride {
    fn apply(&self, spec: &mut FieldSpec) {
        if let Some(label) = &self.label {
            spec.label = label.clone();
        }
        if let Some(minimum) = self.minimum {
            spec.minimum = minimum;
        }
        if let Some(step) = self.step {
            spec.step = step;
        }
        if let Some(default) = self.default {
            spec.default = default;
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSection {
    pub format: Option<String>,
}

impl TomlConfig {
    /// Loads a form file from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(NectarError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| NectarError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| NectarError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Built-in form with this file's overrides applied.
    pub fn form_spec(&self) -> FormSpec {
        let mut form = FormSpec::default();

        if let Some(title) = self.form.as_ref().and_then(|f| f.title.clone()) {
            form.title = title;
        }

        if let Some(fields) = &self.fields {
            let pairs = [
                (&fields.initial_pulp_mass, &mut form.initial_pulp_mass),
                (&fields.initial_brix, &mut form.initial_brix),
                (&fields.final_nectar_mass, &mut form.final_nectar_mass),
                (&fields.final_brix, &mut form.final_brix),
            ];
            for (patch, spec) in pairs {
                if let Some(patch) = patch {
                    patch.apply(spec);
                }
            }
        }

        form
    }

    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        match self.output.as_ref().and_then(|o| o.format.as_deref()) {
            Some(raw) => Ok(Some(raw.parse()?)),
            None => Ok(None),
        }
    }

    pub fn validate_config(&self) -> Result<()> {
        let form = self.form_spec();
        validation::validate_non_empty_string("form.title", &form.title)?;

        for (name, spec) in form.fields() {
            let key = |attr: &str| format!("fields.{}.{}", name, attr);
            validation::validate_non_empty_string(&key("label"), &spec.label)?;
            validation::validate_finite(&key("minimum"), spec.minimum)?;
            validation::validate_positive(&key("step"), spec.step)?;
            validation::validate_at_least(&key("default"), spec.default, spec.minimum)?;
        }

        if let Some(format) = self.output.as_ref().and_then(|o| o.format.as_deref()) {
            validation::validate_one_of(
                "output.format",
                &format.trim().to_ascii_lowercase(),
                OutputFormat::NAMES,
            )?;
        }

        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_file_gives_builtin_form() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.form_spec(), FormSpec::default());
        assert!(config.output_format().unwrap().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_field_overrides_are_merged() {
        let toml_content = r#"
[form]
title = "Mango Nectar"

[fields.initial_pulp_mass]
default = 500.0
step = 0.5

[fields.final_brix]
label = "Target Brix (%)"
default = 14.0

[output]
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let form = config.form_spec();

        assert_eq!(form.title, "Mango Nectar");
        assert_eq!(form.initial_pulp_mass.default, 500.0);
        assert_eq!(form.initial_pulp_mass.step, 0.5);
        assert_eq!(form.initial_pulp_mass.label, "Initial Pulp Mass (kg)");
        assert_eq!(form.final_brix.label, "Target Brix (%)");
        assert_eq!(form.initial_brix, FormSpec::default().initial_brix);
        assert_eq!(config.output_format().unwrap(), Some(OutputFormat::Json));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("NECTAR_TEST_PULP_DEFAULT", "720.5");

        let toml_content = r#"
[fields.initial_pulp_mass]
default = ${NECTAR_TEST_PULP_DEFAULT}
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.form_spec().initial_pulp_mass.default, 720.5);

        std::env::remove_var("NECTAR_TEST_PULP_DEFAULT");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let toml_content = r#"
[form]
title = "${NECTAR_TEST_SURELY_UNSET_VAR}"
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.form_spec().title,
            "${NECTAR_TEST_SURELY_UNSET_VAR}"
        );
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let err = TomlConfig::from_toml_str("[fields\n").unwrap_err();
        assert!(matches!(err, NectarError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_validation() {
        let zero_step = TomlConfig::from_toml_str("[fields.final_brix]\nstep = 0.0\n").unwrap();
        let err = zero_step.validate().unwrap_err();
        assert!(err.to_string().contains("fields.final_brix.step"));

        let default_below_min = TomlConfig::from_toml_str(
            "[fields.initial_brix]\nminimum = 5.0\ndefault = 2.0\n",
        )
        .unwrap();
        assert!(default_below_min.validate().is_err());

        let bad_format = TomlConfig::from_toml_str("[output]\nformat = \"xml\"\n").unwrap();
        assert!(bad_format.validate().is_err());
        assert!(bad_format.output_format().is_err());

        let blank_label =
            TomlConfig::from_toml_str("[fields.initial_brix]\nlabel = \" \"\n").unwrap();
        assert!(blank_label.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[form]\ntitle = \"File Form\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.form_spec().title, "File Form");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TomlConfig::from_file("/definitely/not/here/form.toml").unwrap_err();
        assert!(matches!(err, NectarError::IoError(_)));
    }
}
