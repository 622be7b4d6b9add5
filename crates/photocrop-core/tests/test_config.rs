use photocrop_core::config::{EditorConfig, InitialRegion};
use photocrop_core::error::CropError;
use photocrop_core::geometry::RelativeRect;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[test]
fn test_editor_config_defaults() {
    let config = EditorConfig::default();
    assert_eq!(config.hover_margin, 5.0);
    assert_eq!(config.min_fraction, 0.02);
    assert_eq!(config.initial_region, InitialRegion::Centered);
    assert!(config.validate().is_ok());
}

#[test]
fn test_initial_region_rects() {
    assert_eq!(
        InitialRegion::Centered.rect(),
        Some(RelativeRect::centered(0.35))
    );
    assert_eq!(InitialRegion::FullFrame.rect(), Some(RelativeRect::FULL));
    assert_eq!(InitialRegion::Empty.rect(), None);
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn test_validate_rejects_negative_margin() {
    let config = EditorConfig {
        hover_margin: -1.0,
        ..EditorConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert!(matches!(err, CropError::InvalidConfig(_)));
    assert!(err.to_string().contains("hover_margin"));
}

#[test]
fn test_validate_rejects_nan_margin() {
    let config = EditorConfig {
        hover_margin: f64::NAN,
        ..EditorConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_min_fraction_bounds() {
    for bad in [0.0, -0.1, 1.5, f64::NAN] {
        let config = EditorConfig {
            min_fraction: bad,
            ..EditorConfig::default()
        };
        assert!(config.validate().is_err(), "accepted {bad}");
    }

    let config = EditorConfig {
        min_fraction: 1.0,
        ..EditorConfig::default()
    };
    assert!(config.validate().is_ok());
}

// ---------------------------------------------------------------------------
// Serde
// ---------------------------------------------------------------------------

#[test]
fn test_config_serde_round_trip() {
    let config = EditorConfig {
        hover_margin: 8.0,
        min_fraction: 0.05,
        initial_region: InitialRegion::Empty,
    };
    let json = serde_json::to_string(&config).unwrap();
    let back: EditorConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_config_missing_fields_use_defaults() {
    let config: EditorConfig = serde_json::from_str(r#"{ "hover_margin": 3.0 }"#).unwrap();
    assert_eq!(config.hover_margin, 3.0);
    assert_eq!(config.min_fraction, 0.02);
    assert_eq!(config.initial_region, InitialRegion::Centered);
}
