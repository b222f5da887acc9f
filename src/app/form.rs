use crate::domain::model::{parse_field, FormSpec, MixInputs};
use crate::domain::ports::InputProvider;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// Raw field text as typed by the user. Fields left empty take the form default.
#[derive(Debug, Clone)]
pub struct FieldValues<'a> {
    form: &'a FormSpec,
    initial_pulp_mass: Option<String>,
    initial_brix: Option<String>,
    final_nectar_mass: Option<String>,
    final_brix: Option<String>,
}

impl<'a> FieldValues<'a> {
    pub fn new(form: &'a FormSpec) -> Self {
        Self {
            form,
            initial_pulp_mass: None,
            initial_brix: None,
            final_nectar_mass: None,
            final_brix: None,
        }
    }

    pub fn with_initial_pulp_mass(mut self, raw: Option<String>) -> Self {
        self.initial_pulp_mass = raw;
        self
    }

    pub fn with_initial_brix(mut self, raw: Option<String>) -> Self {
        self.initial_brix = raw;
        self
    }

    pub fn with_final_nectar_mass(mut self, raw: Option<String>) -> Self {
        self.final_nectar_mass = raw;
        self
    }

    pub fn with_final_brix(mut self, raw: Option<String>) -> Self {
        self.final_brix = raw;
        self
    }
}

fn value_or_default(name: &str, raw: Option<&str>, default: f64) -> Result<f64> {
    match raw {
        Some(text) if !text.trim().is_empty() => Ok(parse_field(name, text)?),
        _ => Ok(default),
    }
}

impl InputProvider for FieldValues<'_> {
    fn mix_inputs(&self) -> Result<MixInputs> {
        Ok(MixInputs {
            initial_pulp_mass: value_or_default(
                "initial_pulp_mass",
                self.initial_pulp_mass.as_deref(),
                self.form.initial_pulp_mass.default,
            )?,
            initial_brix: value_or_default(
                "initial_brix",
                self.initial_brix.as_deref(),
                self.form.initial_brix.default,
            )?,
            final_nectar_mass: value_or_default(
                "final_nectar_mass",
                self.final_nectar_mass.as_deref(),
                self.form.final_nectar_mass.default,
            )?,
            final_brix: value_or_default(
                "final_brix",
                self.final_brix.as_deref(),
                self.form.final_brix.default,
            )?,
        })
    }
}

/// Asks for each field in turn. An empty answer (or end of input) keeps the default.
pub fn prompt_inputs<R: BufRead, W: Write>(
    form: &FormSpec,
    reader: &mut R,
    writer: &mut W,
) -> Result<MixInputs> {
    writeln!(writer, "{}", form.title)?;

    let mut answers = Vec::with_capacity(4);
    for (_, spec) in form.fields() {
        write!(writer, "{} [{}]: ", spec.label, spec.default)?;
        writer.flush()?;

        let mut line = String::new();
        reader.read_line(&mut line)?;
        answers.push(line.trim().to_string());
    }

    let mut answers = answers.into_iter();
    FieldValues::new(form)
        .with_initial_pulp_mass(answers.next())
        .with_initial_brix(answers.next())
        .with_final_nectar_mass(answers.next())
        .with_final_brix(answers.next())
        .mix_inputs()
}
