use crate::core::nectar::CalculationError;
use crate::domain::model::MixInputs;
use serde_json::Value;

/// Reads the four fields from a JSON event. A field that is missing or not a
/// JSON number fails with `InvalidInput` naming that field.
pub fn inputs_from_event(event: &Value) -> Result<MixInputs, CalculationError> {
    let number = |field: &str| {
        event
            .get(field)
            .and_then(Value::as_f64)
            .ok_or_else(|| CalculationError::InvalidInput {
                field: field.to_string(),
            })
    };

    Ok(MixInputs {
        initial_pulp_mass: number("initial_pulp_mass")?,
        initial_brix: number("initial_brix")?,
        final_nectar_mass: number("final_nectar_mass")?,
        final_brix: number("final_brix")?,
    })
}
