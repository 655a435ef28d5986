use super::*;

const CANVAS: Canvas = Canvas {
    width: 400,
    height: 200,
};

#[test]
fn spawn_lands_on_the_entrance_circle() {
    let mut rng = Rng64::new(1);
    for _ in 0..50 {
        let p = Particle::spawn(CANVAS, 1.0, &mut rng);
        let center = CANVAS.center();
        let d = (p.position() - center).hypot();
        assert!((d - 100.0).abs() < 1e-9, "distance {d} off the circle");
    }
}

#[test]
fn spawn_radius_respects_the_scaled_range() {
    let mut rng = Rng64::new(2);
    for _ in 0..200 {
        let p = Particle::spawn(CANVAS, 2.0, &mut rng);
        assert!((4.0..=14.0).contains(&p.radius()));
    }
}

#[test]
fn move_interpolates_linearly_and_snaps_at_duration() {
    let mut rng = Rng64::new(3);
    let mut p = Particle::spawn(CANVAS, 1.0, &mut rng);
    let start = p.position();
    let target = Point::new(start.x + 100.0, start.y - 50.0);

    p.move_to(target, Millis(1_000));
    assert!(p.is_moving());

    p.step(Millis(1_250));
    let mid = p.position();
    assert!((mid.x - (start.x + 50.0)).abs() < 1e-9);
    assert!((mid.y - (start.y - 25.0)).abs() < 1e-9);

    p.step(Millis(1_500));
    assert_eq!(p.position(), target);
    assert!(!p.is_moving());
}

#[test]
fn retarget_restarts_from_the_current_position() {
    let mut rng = Rng64::new(4);
    let mut p = Particle::spawn(CANVAS, 1.0, &mut rng);

    p.move_to(Point::new(0.0, 0.0), Millis(0));
    p.step(Millis(250));
    let halfway = p.position();

    let next = Point::new(300.0, 300.0);
    p.move_to(next, Millis(250));
    p.step(Millis(250));
    assert_eq!(p.position(), halfway);

    p.step(Millis(500));
    let mid = halfway.midpoint(next);
    assert!((p.position().x - mid.x).abs() < 1e-9);
    assert!((p.position().y - mid.y).abs() < 1e-9);

    p.step(Millis(750));
    assert_eq!(p.position(), next);
}

#[test]
fn step_without_a_move_is_a_no_op() {
    let mut rng = Rng64::new(5);
    let mut p = Particle::spawn(CANVAS, 1.0, &mut rng);
    let pos = p.position();
    p.step(Millis(10_000));
    assert_eq!(p.position(), pos);
}
