use super::*;

fn tween(start: (f64, f64), target: (f64, f64), start_at: u64, duration: u64) -> Tween {
    Tween::new(
        Point::new(start.0, start.1),
        Point::new(target.0, target.1),
        Millis(start_at),
        Millis(duration),
        Ease::Linear,
    )
}

#[test]
fn snaps_to_target_at_and_after_duration() {
    let tw = tween((0.0, 0.0), (100.0, 40.0), 1_000, 500);
    assert_eq!(tw.position_at(Millis(1_500)), Point::new(100.0, 40.0));
    assert_eq!(tw.position_at(Millis(9_999)), Point::new(100.0, 40.0));
    assert!(tw.is_done(Millis(1_500)));
    assert!(!tw.is_done(Millis(1_499)));
}

#[test]
fn halfway_is_the_midpoint() {
    let tw = tween((10.0, 20.0), (110.0, 60.0), 0, 500);
    let p = tw.position_at(Millis(250));
    assert!((p.x - 60.0).abs() < 1e-9);
    assert!((p.y - 40.0).abs() < 1e-9);
}

#[test]
fn before_start_holds_the_start_position() {
    let tw = tween((5.0, 5.0), (50.0, 50.0), 2_000, 500);
    assert_eq!(tw.position_at(Millis(100)), Point::new(5.0, 5.0));
}

#[test]
fn zero_duration_is_an_instant_snap() {
    let tw = tween((1.0, 2.0), (3.0, 4.0), 100, 0);
    assert_eq!(tw.position_at(Millis(100)), Point::new(3.0, 4.0));
    assert!(tw.is_done(Millis(100)));
}
