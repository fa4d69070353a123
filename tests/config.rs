//! Configuration and persistence tests
//!
//! Tests for config paths, config file round trips and the saved state.

mod common;

use carddeck::config::{CascadeConfig, LogLevel};
use carddeck::config_paths;
use carddeck::panel::Side;
use carddeck::persistence::SavedState;
use carddeck::transition::{AnimationBackend, Easing};
use carddeck::{PanelController, PanelError, RecordingHook};
use common::{open_settled, two_layer_chain};

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
    }
}

#[test]
fn test_state_file_is_json_in_config_dir() {
    if let (Some(dir), Some(state)) = (config_paths::config_dir(), config_paths::state_file()) {
        assert!(state.starts_with(&dir));
        assert!(state.to_string_lossy().ends_with("state.json"));
    }
}

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("carddeck"));
    }
}

// ========================================================================
// Cascade Config Tests
// ========================================================================

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");

    let config = CascadeConfig {
        side: Side::Start,
        collapsed_width: 24,
        slide_duration_ms: 250,
        touch_activation_width: 32,
        top_inset: 20,
        animation: AnimationBackend::Interpolated {
            easing: Easing::EaseOutCubic,
        },
        log_level: LogLevel::Debug,
    };
    config.save_to(&path).unwrap();

    let loaded = CascadeConfig::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_load_rejects_invalid_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "collapsed_width: -10\n").unwrap();

    let err = CascadeConfig::load_from(&path).unwrap_err();
    assert_eq!(
        err.downcast_ref::<PanelError>(),
        Some(&PanelError::InvalidGeometry {
            field: "collapsed_width",
            value: -10
        })
    );
}

#[test]
fn test_load_reports_parse_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "side: sideways\n").unwrap();

    let err = CascadeConfig::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config"));
}

#[test]
fn test_load_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(CascadeConfig::load_from(&dir.path().join("absent.yaml")).is_err());
}

#[test]
fn test_top_inset_propagates_to_children() {
    let config = CascadeConfig {
        top_inset: 24,
        ..Default::default()
    };
    let c = PanelController::with_widths(config, &[300, 300, 300], RecordingHook::default())
        .unwrap();
    let padding: Vec<_> = c.chain().iter().map(|l| l.panel.padding_top()).collect();
    assert_eq!(padding, vec![0, 24, 24]);
}

#[test]
fn test_negative_width_rejected_at_construction() {
    let result =
        PanelController::with_widths(CascadeConfig::default(), &[300, -1], RecordingHook::default());
    assert!(matches!(
        result,
        Err(PanelError::InvalidGeometry { field: "width", .. })
    ));
}

#[test]
fn test_lone_panel_rejected_at_construction() {
    let result =
        PanelController::with_widths(CascadeConfig::default(), &[300], RecordingHook::default());
    assert!(matches!(result, Err(PanelError::TooFewPanels(1))));
}

// ========================================================================
// Saved State Tests
// ========================================================================

#[test]
fn test_state_survives_reconstruction() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut c = two_layer_chain(Side::End);
    open_settled(&mut c, 1);
    c.save_state().save(&path).unwrap();

    let mut fresh = two_layer_chain(Side::End);
    assert!(!fresh.was_ever_opened());
    fresh.restore_state(SavedState::load(&path));
    assert!(fresh.was_ever_opened());
    // Offsets always start closed
    assert!(!fresh.is_any_opened());
}
