use super::*;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn linear_is_proportional() {
    assert!(close(ease_linear(0.0, 10.0, 100.0, 200.0), 10.0));
    assert!(close(ease_linear(50.0, 10.0, 100.0, 200.0), 35.0));
    assert!(close(ease_linear(200.0, 10.0, 100.0, 200.0), 110.0));
}

#[test]
fn out_cubic_front_loads_progress() {
    // 1 - 0.5^3 = 0.875
    assert!(close(ease_out_cubic(50.0, 0.0, 100.0, 100.0), 87.5));
    assert!(close(ease_out_cubic(0.0, 0.0, 100.0, 100.0), 0.0));
    assert!(close(ease_out_cubic(100.0, 0.0, 100.0, 100.0), 100.0));
    assert!(ease_out_cubic(25.0, 0.0, 1.0, 100.0) > ease_linear(25.0, 0.0, 1.0, 100.0));
}

#[test]
fn elapsed_past_duration_clamps() {
    assert!(close(ease_out_cubic(300.0, 5.0, -20.0, 100.0), -15.0));
    assert!(close(Easing::Linear.transform(-1.0), 0.0));
}

#[test]
fn zero_duration_jumps_to_end() {
    assert!(close(ease_linear(0.0, 3.0, 4.0, 0.0), 7.0));
    assert!(close(Easing::OutCubic.interpolate(10.0, 3.0, 4.0, 0.0), 7.0));
}

#[test]
fn out_cubic_is_monotonic() {
    let mut previous = Easing::OutCubic.transform(0.0);
    for step in 1..=20 {
        let value = Easing::OutCubic.transform(step as f32 / 20.0);
        assert!(value >= previous);
        previous = value;
    }
}
