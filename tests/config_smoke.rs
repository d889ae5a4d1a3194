use tagfall_engine::{SimConfig, Simulation};

#[test]
fn facade_applies_config_json() {
    let sim = Simulation::new();
    sim.set_container(800.0, 600.0);
    sim.load_config_json(r#"{"gravity": 0.6, "wallBounce": 0.3}"#.to_string())
        .expect("valid config should load");

    let echoed = sim.config_json();
    assert!(echoed.contains("\"gravity\":0.6"), "echo was {}", echoed);
    assert!(echoed.contains("\"wallBounce\":0.3"), "echo was {}", echoed);
}

#[test]
fn config_rejects_invalid_tunings() {
    assert!(SimConfig::from_json("{not json").is_err());
    assert!(SimConfig::from_json(r#"{"solverIterations": 0}"#).is_err());
    assert!(SimConfig::from_json(r#"{"wakeSpeed": 0.1}"#).is_err());
}

#[test]
fn default_config_round_trips() {
    let config = SimConfig::default();
    let echoed = SimConfig::from_json(&config.to_json()).unwrap();
    assert_eq!(echoed, config);
}
