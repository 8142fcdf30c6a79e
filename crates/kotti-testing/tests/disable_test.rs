use kotti_core::{TouchConfig, TouchEventKind};
use kotti_foundation::TouchResponse;
use kotti_testing::{GestureRobot, FRAME_MS};

#[test]
fn disabling_mid_gesture_emits_one_touch_end() {
    let mut robot = GestureRobot::new(TouchConfig::default()).expect("valid config");
    robot.press(1, 0.0, 0.0);
    robot.drag(1, &[(10.0, 0.0), (20.0, 0.0)], FRAME_MS);

    robot.tracker_mut().disable_scrolling(true);
    assert!(!robot.tracker().is_touch_active());
    assert_eq!(robot.count(TouchEventKind::TouchEnd), 1);

    let pushes_before = robot.count(TouchEventKind::PushBy);
    let responses = robot.drag(1, &[(30.0, 0.0), (40.0, 0.0)], FRAME_MS);
    robot.release(1);

    assert!(responses.iter().all(|r| *r == TouchResponse::PASS));
    assert_eq!(robot.count(TouchEventKind::PushBy), pushes_before);
    assert_eq!(robot.count(TouchEventKind::TouchEnd), 1);
    assert_eq!(robot.count(TouchEventKind::TouchEndWithMomentum), 0);
}

#[test]
fn disabling_while_idle_is_silent() {
    let mut robot = GestureRobot::new(TouchConfig::default()).expect("valid config");
    robot.tracker_mut().set_enabled(false);
    robot.press(1, 0.0, 0.0);

    assert!(robot.events().is_empty());
}

#[test]
fn re_enabling_tracks_the_next_gesture() {
    let mut robot = GestureRobot::new(TouchConfig::default()).expect("valid config");
    robot.press(1, 0.0, 0.0);
    robot.tracker_mut().disable_scrolling(true);
    robot.release(1);
    robot.tracker_mut().disable_scrolling(false);
    robot.clear_log();

    robot.flick_x(1, 0.0, 60.0, 3, 0.0);

    assert_eq!(
        robot.kinds(),
        vec![
            TouchEventKind::TouchStart,
            TouchEventKind::PushBy,
            TouchEventKind::PushBy,
            TouchEventKind::PushBy,
            TouchEventKind::TouchEnd,
            TouchEventKind::TouchEndWithMomentum,
        ]
    );
}

#[test]
fn re_enabling_mid_gesture_keeps_the_ended_gesture_silent() {
    let mut robot = GestureRobot::new(TouchConfig::default()).expect("valid config");
    robot.press(1, 0.0, 0.0);
    robot.drag(1, &[(10.0, 0.0), (20.0, 0.0)], FRAME_MS);

    robot.tracker_mut().disable_scrolling(true);
    robot.tracker_mut().disable_scrolling(false);
    robot.drag(1, &[(30.0, 0.0), (40.0, 0.0), (50.0, 0.0)], FRAME_MS);
    robot.release(1);

    assert_eq!(
        robot.kinds(),
        vec![
            TouchEventKind::TouchStart,
            TouchEventKind::PushBy,
            TouchEventKind::PushBy,
            TouchEventKind::TouchEnd,
        ]
    );
    assert!(!robot.tracker().is_touch_active());

    robot.clear_log();
    robot.flick_x(2, 0.0, 60.0, 3, 0.0);
    assert_eq!(robot.count(TouchEventKind::TouchStart), 1);
    assert_eq!(robot.count(TouchEventKind::TouchEnd), 1);
}
