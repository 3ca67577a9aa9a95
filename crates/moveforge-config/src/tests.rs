//! Tests for solver configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        distance = 3
        strategy = "multiset"
        first_only = true
        start_k = 4

        [termination]
        seconds_spent_limit = 30
        move_count_limit = 20

        [progress]
        interval_seconds = 60
    "#;

    let config = SolverConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.distance, 3);
    assert_eq!(config.strategy, Strategy::Multiset);
    assert!(config.first_only);
    assert_eq!(config.start_k, 4);
    assert_eq!(config.pruning, PruningMode::Lenient);
    assert_eq!(config.move_count_limit(), Some(20));
    assert_eq!(config.progress.interval(), Duration::from_secs(60));
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        distance: 1
        strategy: reduction
        pruning: strict
        termination:
          minutes_spent_limit: 2
    "#;

    let config = SolverConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.strategy, Strategy::Reduction);
    assert_eq!(config.pruning, PruningMode::Strict);
    assert_eq!(config.time_limit(), Some(Duration::from_secs(120)));
}

#[test]
fn test_empty_document_uses_defaults() {
    let config = SolverConfig::from_toml_str("").unwrap();
    assert_eq!(config, SolverConfig::default());
    assert_eq!(config.start_k, 1);
    assert_eq!(config.progress.interval_seconds, 300);
    assert_eq!(config.time_limit(), None);
}

#[test]
fn test_builder() {
    let config = SolverConfig::new()
        .with_distance(2)
        .with_strategy(Strategy::Multiset)
        .with_pruning(PruningMode::Strict)
        .with_first_only(true)
        .with_start_k(3)
        .with_termination_seconds(60)
        .with_move_count_limit(9)
        .with_progress_interval(Duration::from_secs(5));

    assert_eq!(config.distance, 2);
    assert_eq!(config.time_limit(), Some(Duration::from_secs(60)));
    assert_eq!(config.move_count_limit(), Some(9));
    assert_eq!(config.progress.interval_seconds, 5);
    assert!(config.validate().is_ok());
}

#[test]
fn test_validation_rejects_bad_distance() {
    let err = SolverConfig::from_toml_str("distance = 0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    let err = SolverConfig::from_toml_str("distance = 2\nstrategy = \"reduction\"").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_unknown_strategy_is_parse_error() {
    let err = SolverConfig::from_toml_str("strategy = \"greedy\"").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_strategy_resolution() {
    assert_eq!(Strategy::Auto.resolve(1), Strategy::Reduction);
    assert_eq!(Strategy::Auto.resolve(4), Strategy::Multiset);
    assert_eq!(Strategy::Multiset.resolve(1), Strategy::Multiset);
    assert_eq!(
        SolverConfig::new().with_distance(2).effective_strategy(),
        Strategy::Multiset
    );
}

#[test]
fn test_missing_file_is_io_error() {
    let err = SolverConfig::load("/nonexistent/moveforge.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_pruning_modes() {
    let strict = SolverConfig::from_toml_str("pruning = \"strict\"").unwrap();
    assert_eq!(strict.pruning, PruningMode::Strict);
    assert_eq!(strict.pruning.to_string(), "strict");
    assert_eq!(SolverConfig::default().pruning, PruningMode::Lenient);
}

#[test]
fn test_huge_time_limit_saturates() {
    let termination = TerminationConfig {
        seconds_spent_limit: Some(u64::MAX),
        minutes_spent_limit: Some(u64::MAX),
        move_count_limit: None,
    };
    assert_eq!(termination.time_limit(), Some(Duration::from_secs(u64::MAX)));
}
