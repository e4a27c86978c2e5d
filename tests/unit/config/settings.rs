use super::*;
use crate::scene::starfield::DriftMode;

#[test]
fn empty_object_yields_defaults() {
    let cfg = FaceConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, FaceConfig::default());
    assert_eq!(cfg.field.star_count, 150);
    assert_eq!(cfg.field.nebula_count, 8);
}

#[test]
fn full_config_parses() {
    let cfg = FaceConfig::from_json_str(
        r##"{
            "width": 320,
            "height": 200,
            "variant": "energy",
            "fps": { "num": 30, "den": 1 },
            "seed": 42,
            "mouth_scale": 0.4,
            "eye_scale": 0.8,
            "color": "#34a853",
            "clear_rgba": [0, 0, 0, 255],
            "field": { "star_count": 20, "nebula_count": 3, "drift": "unbounded" }
        }"##,
    )
    .unwrap();
    assert_eq!(cfg.variant, Variant::Energy);
    assert_eq!(cfg.fps, Fps::new(30, 1).unwrap());
    assert_eq!(cfg.field.drift, DriftMode::Unbounded);
    assert_eq!(cfg.render_settings().clear_rgba, Some([0, 0, 0, 255]));
    assert_eq!(cfg.face_params().color.as_deref(), Some("#34a853"));
}

#[test]
fn unknown_fields_are_rejected() {
    let err = FaceConfig::from_json_str(r#"{"widht": 10}"#).unwrap_err();
    assert!(matches!(err, FaceError::Config(_)));
}

#[test]
fn invalid_values_fail_validation() {
    for json in [
        r#"{"width": 0}"#,
        r#"{"height": 70000}"#,
        r#"{"fps": {"num": 30, "den": 0}}"#,
        r#"{"agent": "nobody"}"#,
    ] {
        let err = FaceConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, FaceError::Validation(_)), "{json}: {err}");
    }

    let cfg = FaceConfig {
        mouth_scale: f64::NAN,
        ..FaceConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn agent_preset_supplies_color_unless_overridden() {
    let mut cfg = FaceConfig {
        agent: Some("mortanas-ai-press-bot".to_string()),
        ..FaceConfig::default()
    };
    assert_eq!(cfg.resolved_color().as_deref(), Some("#4285f4"));

    cfg.color = Some("#ea4335".to_string());
    assert_eq!(cfg.resolved_color().as_deref(), Some("#ea4335"));

    assert_eq!(FaceConfig::default().resolved_color(), None);
}

#[test]
fn seed_override_applies_only_valid_values() {
    let mut cfg = FaceConfig::default();
    cfg.apply_overrides_from(|k| (k == SEED_ENV).then(|| " 99 ".to_string()));
    assert_eq!(cfg.seed, 99);

    cfg.apply_overrides_from(|_| Some("not-a-number".to_string()));
    assert_eq!(cfg.seed, 99);

    cfg.apply_overrides_from(|_| None);
    assert_eq!(cfg.seed, 99);
}

#[test]
fn missing_file_is_a_config_error() {
    let err = FaceConfig::from_json_path("definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("definitely/not/here.json"));
}
