use std::fs;
use std::path::PathBuf;

use tempfile::tempdir;
use triadcore::{ConfigError, MatchConfig, Rule, StrategyKind};

#[test]
fn defaults() {
    let cfg = MatchConfig::default();
    assert_eq!(cfg.hand_size, 5);
    assert_eq!(cfg.rule, Rule::standard());
    assert_eq!(cfg.own, StrategyKind::Tactical);
    assert_eq!(cfg.cards, PathBuf::from("data/cards.json"));
    assert!(cfg.validate().is_ok());
}

#[test]
fn partial_toml_keeps_defaults() {
    let cfg = MatchConfig::from_toml(
        r#"
        seed = 42
        opponent = "random"

        [rule]
        elemental = true
        "#,
    )
    .expect("parse");

    assert_eq!(cfg.seed, Some(42));
    assert_eq!(cfg.opponent, StrategyKind::Random);
    assert_eq!(cfg.own, StrategyKind::Tactical);
    assert!(cfg.rule.elemental);
    assert!(cfg.rule.same, "unset toggles keep the standard rule");
    assert_eq!(cfg.hand_size, 5);
}

#[test]
fn invalid_hand_size_rejected() {
    let err = MatchConfig::from_toml("hand_size = 0").unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
    let err = MatchConfig::from_toml("hand_size = 10").unwrap_err();
    assert_eq!(
        err.to_string(),
        "config validation error: hand_size must be in 1..=9, got 10"
    );
}

#[test]
fn bad_toml_is_parse_error() {
    let err = MatchConfig::from_toml("own = 3").unwrap_err();
    assert!(matches!(err, ConfigError::TomlParse(_)));
}

#[test]
fn load_from_file_and_fallback() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("match.toml");
    fs::write(&path, "hand_size = 4\nown = \"random\"\n").unwrap();

    let cfg = MatchConfig::load(&path).expect("load");
    assert_eq!(cfg.hand_size, 4);
    assert_eq!(cfg.own, StrategyKind::Random);

    let missing = dir.path().join("missing.toml");
    assert!(matches!(MatchConfig::load(&missing), Err(ConfigError::FileRead { .. })));
    assert_eq!(MatchConfig::load_or_default(&missing).unwrap(), MatchConfig::default());
}

#[test]
fn rule_toggle_parsing() {
    let r = Rule::from_toggles("elemental, Same,plus,");
    assert!(r.elemental && r.same && r.plus);
    assert!(!r.open && !r.combo && !r.sudden_death && !r.random);
    assert_eq!(Rule::from_toggles("none"), Rule::from_toggles(""));
}
