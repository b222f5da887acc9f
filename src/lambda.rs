use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use nectar_calc::app::inputs_from_event;
use nectar_calc::utils::logger;
use nectar_calc::{FormSpec, MixEngine, NectarCalculator, NectarError, Outcome};
use serde_json::Value;

async fn function_handler(event: LambdaEvent<Value>) -> Result<Outcome, Error> {
    tracing::info!("Starting nectar calculation");

    let engine = MixEngine::new(NectarCalculator, FormSpec::default());

    // Calculation failures, bad fields included, are answers, not handler errors.
    let calculation = inputs_from_event(&event.payload)
        .map_err(NectarError::from)
        .and_then(|inputs| engine.run(&inputs));
    let outcome = Outcome::from_run(calculation)?;

    tracing::info!("Nectar calculation finished: {:?}", outcome.status);
    Ok(outcome)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}
