use flappy::constants::physics::{
    DAMPING, GRAVITY, GROUND_Y, MAX_VERTICAL_VELOCITY, MIN_VERTICAL_VELOCITY,
};
use flappy::systems::physics::step_bird;
use glam::Vec2;

const RADIUS: f32 = 25.5;

#[test]
fn test_single_step_from_rest() {
    let mut pos = Vec2::new(100.0, 300.0);
    let mut vel = Vec2::ZERO;

    step_bird(&mut pos, &mut vel, RADIUS, 0.1);

    // Gravity applies before integration, then damping after
    let expected_vel = GRAVITY.y * 0.1 * DAMPING.powf(0.1 * 60.0);
    assert!((pos.y - (300.0 + GRAVITY.y * 0.1 * 0.1)).abs() < 0.05);
    assert!((vel.y - expected_vel).abs() < 0.05);
    assert_eq!(pos.x, 100.0);
    assert_eq!(vel.x, 0.0);
}

#[test]
fn test_fall_speed_is_clamped() {
    let mut pos = Vec2::new(100.0, 300.0);
    let mut vel = Vec2::new(0.0, 2000.0);

    step_bird(&mut pos, &mut vel, RADIUS, 0.001);

    // Clamped to terminal velocity before integration; only damping pulls
    // it back under afterwards
    assert!(vel.y <= MAX_VERTICAL_VELOCITY);
    assert!(vel.y > MAX_VERTICAL_VELOCITY * 0.99);
    assert!((pos.y - (300.0 + MAX_VERTICAL_VELOCITY * 0.001)).abs() < 0.01);
}

#[test]
fn test_rise_speed_is_clamped() {
    let mut pos = Vec2::new(100.0, 300.0);
    let mut vel = Vec2::new(0.0, -2000.0);

    step_bird(&mut pos, &mut vel, RADIUS, 0.001);

    assert!(vel.y >= MIN_VERTICAL_VELOCITY);
    assert!(vel.y < MIN_VERTICAL_VELOCITY * 0.99);
}

#[test]
fn test_landing_pins_to_ground() {
    let mut pos = Vec2::new(100.0, GROUND_Y - RADIUS - 5.0);
    let mut vel = Vec2::new(0.0, 500.0);

    step_bird(&mut pos, &mut vel, RADIUS, 0.1);

    assert_eq!(pos.y, GROUND_Y - RADIUS);
    assert_eq!(vel.y, 0.0);
}

#[test]
fn test_grounded_bird_stays_grounded() {
    let mut pos = Vec2::new(100.0, GROUND_Y - RADIUS);
    let mut vel = Vec2::ZERO;

    // Gravity pushes it below the floor each step; the clamp pins it back
    for _ in 0..10 {
        step_bird(&mut pos, &mut vel, RADIUS, 1.0 / 60.0);
        assert_eq!(pos.y, GROUND_Y - RADIUS);
        assert_eq!(vel.y, 0.0);
    }
}

#[test]
fn test_ceiling_pins_and_zeroes_velocity() {
    let mut pos = Vec2::new(100.0, RADIUS + 2.0);
    let mut vel = Vec2::new(0.0, -400.0);

    step_bird(&mut pos, &mut vel, RADIUS, 0.05);

    assert_eq!(pos.y, RADIUS);
    assert_eq!(vel.y, 0.0);
}

#[test]
fn test_flap_then_fall_trajectory_peaks() {
    let mut pos = Vec2::new(100.0, 384.0);
    let mut vel = Vec2::new(0.0, -400.0);

    // Simulate roughly a second at 60 Hz; the bird should rise, peak, and
    // come back down past its starting height
    let mut min_y = pos.y;
    for _ in 0..60 {
        step_bird(&mut pos, &mut vel, RADIUS, 1.0 / 60.0);
        min_y = min_y.min(pos.y);
    }

    assert!(min_y < 384.0 - 50.0, "bird never rose: min_y={min_y}");
    assert!(pos.y > min_y, "bird never fell back: pos.y={}", pos.y);
    assert!(vel.y > 0.0, "bird should be falling after a second");
}

#[test]
fn test_horizontal_velocity_is_untouched_by_clamps() {
    let mut pos = Vec2::new(100.0, 300.0);
    let mut vel = Vec2::new(30.0, 0.0);

    step_bird(&mut pos, &mut vel, RADIUS, 0.1);

    // Damping and clamping apply to the vertical axis only
    assert_eq!(vel.x, 30.0);
    assert!((pos.x - 103.0).abs() < 0.001);
}
