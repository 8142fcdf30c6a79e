use super::*;
use crate::axis::Axis;

#[test]
fn defaults_follow_free_scroller() {
    let config = TouchConfig::default();
    assert_eq!(config.axis, AxisSet::XY);
    assert!(config.momentum);
    assert!(!config.lock);
    assert_eq!(config.min_px_for_momentum, 3.0);
    assert_eq!(config.max_points_for_momentum, 3);
    assert_eq!(config.max_time_diff_for_momentum_ms, 66);
}

#[test]
fn lock_on_two_axes_is_dropped() {
    let config = TouchConfig::new().with_lock(true).validate().unwrap();
    assert!(!config.lock);
    assert!(!config.capture);
}

#[test]
fn lock_on_single_axis_forces_capture() {
    let config = TouchConfig::new()
        .with_axis(Axis::X)
        .with_lock(true)
        .validate()
        .unwrap();
    assert!(config.lock);
    assert!(config.capture);
}

#[test]
fn rejects_degenerate_values() {
    assert_eq!(
        TouchConfig::new().with_axis(AxisSet::NONE).validate(),
        Err(ConfigError::EmptyAxis)
    );
    assert_eq!(
        TouchConfig::new().with_max_points_for_momentum(0).validate(),
        Err(ConfigError::ZeroMomentumSamples)
    );
    assert!(matches!(
        TouchConfig::new().with_min_px_for_momentum(-1.0).validate(),
        Err(ConfigError::InvalidMinDistance(_))
    ));
    assert!(TouchConfig::new()
        .with_min_px_for_momentum(f32::NAN)
        .validate()
        .is_err());
}

#[test]
fn error_messages_name_the_problem() {
    assert_eq!(
        ConfigError::InvalidAxis('z').to_string(),
        "unknown axis 'z'; expected 'x' or 'y'"
    );
}
