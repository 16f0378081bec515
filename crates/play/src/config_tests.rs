use super::*;

#[test]
fn test_empty_file_gives_defaults() {
    let config = PlayConfig::from_toml("").unwrap();
    assert_eq!(config, PlayConfig::default());
    assert_eq!(config.opponent_delay(), Duration::from_millis(600));
    assert_eq!(config.opponent(), Color::Black);
}

#[test]
fn test_partial_file_overrides_keys() {
    let config = PlayConfig::from_toml(
        r#"
        human = "black"
        opponent_delay_ms = 0
        seed = 99
        unicode = false
        "#,
    )
    .unwrap();
    assert_eq!(config.human, Color::Black);
    assert_eq!(config.opponent(), Color::White);
    assert_eq!(config.opponent_delay_ms, 0);
    assert_eq!(config.seed, Some(99));
    assert!(!config.unicode);
    assert!(config.bell);
}

#[test]
fn test_rejects_unknown_keys_and_bad_values() {
    assert!(PlayConfig::from_toml("castling = true").is_err());
    assert!(PlayConfig::from_toml("human = \"green\"").is_err());
    assert!(PlayConfig::from_toml("max_plies = 0").is_err());
}

#[test]
fn test_load_reports_path() {
    let err = PlayConfig::load(Path::new("/nonexistent/chess_play.toml")).unwrap_err();
    assert!(format!("{err:#}").contains("/nonexistent/chess_play.toml"));
}

#[test]
fn test_sample_file_matches_defaults() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("chess_play.toml");
    assert_eq!(PlayConfig::load(&path).unwrap(), PlayConfig::default());
}
