use nectar_calc::app::inputs_from_event;
use nectar_calc::app::presenter::OutputFormat;
use nectar_calc::{
    compute, CalculationError, FormSpec, MixEngine, MixInputs, NectarCalculator, NectarError,
    Outcome,
};

fn run_through_engine(inputs: MixInputs) -> Outcome {
    let engine = MixEngine::new(NectarCalculator, FormSpec::default());
    Outcome::from_run(engine.run(&inputs)).expect("no host error for plain inputs")
}

#[test]
fn test_reference_batch_messages() {
    let outcome = run_through_engine(MixInputs::new(660.0, 7.0, 800.0, 12.0));

    assert!(outcome.is_success());
    assert_eq!(
        outcome.messages,
        vec![
            "Amount of water to add: 90.20 kg".to_string(),
            "Amount of sugar to add: 49.80 kg".to_string(),
        ]
    );
}

#[test]
fn test_shrinking_batch_reports_negative_water() {
    let outcome = run_through_engine(MixInputs::new(100.0, 10.0, 50.0, 5.0));

    assert!(!outcome.is_success());
    assert!(outcome.result.is_none());
    assert_eq!(outcome.error_kind.as_deref(), Some("infeasible_mix"));
    assert_eq!(
        outcome.messages,
        vec![
            "Error: The calculation resulted in negative water addition. Check your input."
                .to_string()
        ]
    );
}

#[test]
fn test_nothing_to_add() {
    let outcome = run_through_engine(MixInputs::new(100.0, 0.0, 100.0, 0.0));
    assert_eq!(
        outcome.render(OutputFormat::Text).unwrap(),
        "Amount of water to add: 0.00 kg\nAmount of sugar to add: 0.00 kg"
    );
}

#[test]
fn test_negative_pulp_mass_has_no_result() {
    let outcome = run_through_engine(MixInputs::new(-5.0, 7.0, 800.0, 12.0));
    assert_eq!(outcome.error_kind.as_deref(), Some("non_positive_mass"));
    assert!(outcome.result.is_none());
    assert_eq!(
        outcome.messages,
        vec!["Error: Input mass values must be positive.".to_string()]
    );
}

#[test]
fn test_validation_order() {
    // Non-finite input is reported before anything else.
    assert!(matches!(
        compute(f64::NAN, -1.0, 0.0, -1.0),
        Err(CalculationError::InvalidInput { .. })
    ));
    // Mass before Brix.
    assert_eq!(
        compute(0.0, -1.0, 10.0, 5.0),
        Err(CalculationError::NonPositiveMass)
    );
    // Brix before feasibility.
    assert_eq!(
        compute(100.0, -1.0, 50.0, 5.0),
        Err(CalculationError::NegativeBrix)
    );
}

#[test]
fn test_json_outcome_carries_the_numbers() {
    let outcome = run_through_engine(MixInputs::new(660.0, 7.0, 800.0, 12.0));
    let json: serde_json::Value =
        serde_json::from_str(&outcome.render(OutputFormat::Json).unwrap()).unwrap();

    assert_eq!(json["status"], "success");
    let water = json["result"]["water_added"].as_f64().unwrap();
    let sugar = json["result"]["sugar_added"].as_f64().unwrap();
    assert!((water - 90.2).abs() < 1e-9);
    assert!((sugar - 49.8).abs() < 1e-9);
    assert!(json.get("error_kind").is_none());
}

#[test]
fn test_mix_inputs_deserialize_from_event_json() {
    let inputs: MixInputs = serde_json::from_str(
        r#"{"initial_pulp_mass": 660.0, "initial_brix": 7.0, "final_nectar_mass": 800.0, "final_brix": 12.0}"#,
    )
    .unwrap();
    assert_eq!(inputs, MixInputs::new(660.0, 7.0, 800.0, 12.0));
}

#[test]
fn test_event_with_text_field_is_an_invalid_input_outcome() {
    let event = serde_json::json!({
        "initial_pulp_mass": "abc",
        "initial_brix": 7.0,
        "final_nectar_mass": 800.0,
        "final_brix": 12.0
    });
    let engine = MixEngine::new(NectarCalculator, FormSpec::default());
    let run = inputs_from_event(&event)
        .map_err(NectarError::from)
        .and_then(|inputs| engine.run(&inputs));

    let outcome = Outcome::from_run(run).unwrap();
    assert!(!outcome.is_success());
    assert_eq!(outcome.error_kind.as_deref(), Some("invalid_input"));
    assert_eq!(
        outcome.messages,
        vec!["Error: Invalid input. All parameters must be numeric.".to_string()]
    );
}

#[test]
fn test_event_missing_fields_is_an_invalid_input_outcome() {
    let event = serde_json::json!({ "initial_pulp_mass": 660.0 });
    let outcome = Outcome::failure(&inputs_from_event(&event).unwrap_err());
    assert_eq!(outcome.error_kind.as_deref(), Some("invalid_input"));
}
