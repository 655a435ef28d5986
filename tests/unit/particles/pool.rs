use super::*;

const CANVAS: Canvas = Canvas {
    width: 600,
    height: 300,
};

fn targets(coords: &[(u32, u32)]) -> Vec<TargetPoint> {
    coords.iter().map(|&(x, y)| TargetPoint { x, y }).collect()
}

#[test]
fn growing_keeps_existing_particles_and_spawns_the_deficit() {
    let mut rng = Rng64::new(11);
    let mut pool = ParticlePool::new();

    pool.reconcile(&targets(&[(6, 6), (12, 6)]), CANVAS, 1.0, Millis(0), &mut rng);
    assert_eq!(pool.len(), 2);
    let kept: Vec<(f64, kurbo::Point)> = pool
        .particles()
        .iter()
        .map(|p| (p.radius(), p.position()))
        .collect();

    pool.reconcile(
        &targets(&[(6, 6), (12, 6), (18, 6), (24, 6), (30, 6)]),
        CANVAS,
        1.0,
        Millis(100),
        &mut rng,
    );
    assert_eq!(pool.len(), 5);
    for (i, (radius, pos)) in kept.into_iter().enumerate() {
        assert_eq!(pool.particles()[i].radius(), radius);
        assert_eq!(pool.particles()[i].position(), pos);
    }
    assert!(pool.particles().iter().all(|p| p.is_moving()));
}

#[test]
fn shrinking_truncates_from_the_tail() {
    let mut rng = Rng64::new(12);
    let mut pool = ParticlePool::new();

    pool.reconcile(
        &targets(&[(0, 0), (6, 0), (12, 0), (18, 0), (24, 0)]),
        CANVAS,
        1.0,
        Millis(0),
        &mut rng,
    );
    let radii: Vec<f64> = pool.particles().iter().map(|p| p.radius()).collect();

    pool.reconcile(&targets(&[(0, 6), (6, 6)]), CANVAS, 1.0, Millis(50), &mut rng);
    assert_eq!(pool.len(), 2);
    assert_eq!(pool.particles()[0].radius(), radii[0]);
    assert_eq!(pool.particles()[1].radius(), radii[1]);
}

#[test]
fn particles_arrive_at_their_index_assigned_targets() {
    let mut rng = Rng64::new(13);
    let mut pool = ParticlePool::new();
    let ts = targets(&[(6, 6), (42, 6), (6, 42)]);

    pool.reconcile(&ts, CANVAS, 1.0, Millis(0), &mut rng);
    pool.step(Millis(500));
    for (p, t) in pool.particles().iter().zip(&ts) {
        assert_eq!(p.position(), t.to_point());
    }
}

#[test]
fn empty_target_set_empties_the_pool() {
    let mut rng = Rng64::new(14);
    let mut pool = ParticlePool::new();
    pool.reconcile(&targets(&[(6, 6)]), CANVAS, 1.0, Millis(0), &mut rng);
    pool.reconcile(&[], CANVAS, 1.0, Millis(10), &mut rng);
    assert!(pool.is_empty());
}
