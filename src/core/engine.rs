use crate::core::{Calculator, FormSpec, InputProvider, MixResult};
use crate::utils::error::Result;

pub struct MixEngine<C: Calculator> {
    calculator: C,
    form: FormSpec,
}

impl<C: Calculator> MixEngine<C> {
    pub fn new(calculator: C, form: FormSpec) -> Self {
        Self { calculator, form }
    }

    pub fn form(&self) -> &FormSpec {
        &self.form
    }

    pub fn run<P: InputProvider + ?Sized>(&self, provider: &P) -> Result<MixResult> {
        let inputs = provider.mix_inputs()?;
        tracing::debug!("Mix inputs: {:?}", inputs);

        // Below-minimum values are passed through unclamped.
        for (name, value) in inputs.fields() {
            if let Some(spec) = self.form.field(name) {
                if value < spec.minimum {
                    tracing::warn!(
                        "⚠️ {} = {} is below the form minimum of {}",
                        spec.label,
                        value,
                        spec.minimum
                    );
                }
            }
        }

        match self.calculator.calculate(&inputs) {
            Ok(result) => {
                tracing::info!(
                    "✅ Mix solved: water {:.2} kg, sugar {:.2} kg",
                    result.water_added,
                    result.sugar_added
                );
                Ok(result)
            }
            Err(e) => {
                // The host prints this one to the user.
                tracing::debug!("Mix calculation failed ({}): {}", e.kind(), e);
                Err(e.into())
            }
        }
    }
}
