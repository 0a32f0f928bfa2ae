use mdexport::infrastructure::observability::TracingConfig;
use mdexport::presentation::Environment;
use mdexport::presentation::config::LoggingSettings;

#[test]
fn given_logging_settings_when_building_config_then_fields_are_carried_over() {
    let logging = LoggingSettings {
        level: "warn".to_string(),
        json: true,
    };

    let config = TracingConfig::from_settings(&logging, Environment::Prod);

    assert_eq!(config.environment, "prod");
    assert!(config.json_format);
    assert_eq!(config.default_filter, "warn");
}

#[test]
fn given_default_config_when_created_then_filter_targets_crate() {
    let config = TracingConfig::default();
    assert!(config.default_filter.contains("mdexport=debug"));
    assert!(!config.environment.is_empty());
}
