use std::fs;

use bouncy::core::config::config::GameConfig;

#[test]
fn default_config_validates_cleanly() {
    let warnings = GameConfig::default().validate();
    assert!(
        warnings.is_empty(),
        "defaults should produce no warnings, got: {warnings:?}"
    );
}

#[test]
fn layered_override_merges_key_by_key() {
    let dir = tempfile::tempdir().expect("tempdir");
    let base = dir.path().join("game.ron");
    let local = dir.path().join("local.ron");
    fs::write(
        &base,
        r#"
        (
            window: (
                width: 800.0,
                height: 600.0,
                title: "Base",
            ),
            balls: (
                max_count: 32,
            ),
        )
    "#,
    )
    .expect("write base ron");
    fs::write(
        &local,
        r#"
        (
            balls: (
                max_count: 8,
            ),
            attractor: (
                enabled: false,
            ),
        )
    "#,
    )
    .expect("write local ron");

    let (cfg, used, errors) = GameConfig::load_layered([&base, &local]);
    assert!(errors.is_empty(), "expected clean load, got: {errors:?}");
    assert_eq!(used.len(), 2, "both layers should be consumed");
    assert_eq!(cfg.window.title, "Base");
    assert_eq!(cfg.balls.max_count, 8, "local layer overrides base");
    assert!(!cfg.attractor.enabled, "local layer reaches nested sections");
    assert_eq!(
        cfg.balls.radius,
        GameConfig::default().balls.radius,
        "keys absent from every layer keep their defaults"
    );
}

#[test]
fn missing_file_degrades_to_defaults_with_error() {
    let (cfg, used, errors) = GameConfig::load_layered(["/definitely/not/here.ron"]);
    assert_eq!(cfg, GameConfig::default());
    assert!(used.is_empty());
    assert_eq!(errors.len(), 1, "one read error expected, got: {errors:?}");
}

#[test]
fn unknown_falloff_is_warned_not_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("game.ron");
    fs::write(
        &path,
        r#"
        (
            attractor: (
                falloff: "Sideways",
            ),
        )
    "#,
    )
    .expect("write ron");
    let (cfg, _used, errors) = GameConfig::load_layered([&path]);
    assert!(errors.is_empty(), "unknown falloff must not break loading: {errors:?}");
    let joined = cfg.validate().join("\n");
    assert!(
        joined.contains("attractor.falloff"),
        "expected a falloff warning, got: {joined}"
    );
}

#[test]
fn single_file_load_rejects_bad_ron() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("game.ron");
    fs::write(&path, "( window: ( width: ").expect("write ron");
    let err = GameConfig::load_from_file(&path).expect_err("truncated RON must fail");
    assert!(err.contains("parse RON"), "unexpected error text: {err}");

    fs::write(&path, "( window: ( width: 320.0 ) )").expect("write ron");
    let cfg = GameConfig::load_from_file(&path).expect("valid RON loads");
    assert_eq!(cfg.window.width, 320.0);
}

#[test]
fn auto_close_rename_is_honored() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("game.ron");
    fs::write(
        &path,
        r#"
        (
            window: (
                autoClose: 2.5,
            ),
        )
    "#,
    )
    .expect("write ron");
    let (cfg, _used, errors) = GameConfig::load_layered([&path]);
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(cfg.window.auto_close, 2.5);
}
