// Host-facing layer: collecting field values and presenting outcomes.

pub mod event;
pub mod form;
pub mod presenter;

pub use event::inputs_from_event;
pub use form::{prompt_inputs, FieldValues};
pub use presenter::{Outcome, OutputFormat};
