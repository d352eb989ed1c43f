use bevy_ecs::{
    query::With,
    system::{Query, Res},
};
use glam::Vec2;

use crate::constants::physics::{DAMPING, GRAVITY, GROUND_Y, MAX_VERTICAL_VELOCITY, MIN_VERTICAL_VELOCITY};
use crate::systems::components::{Collider, DeltaTime, PlayerControlled, Position, RunState, Velocity};

/// Advances the bird by one step of `dt` seconds.
///
/// Order matters and is load-bearing for the exact trajectory:
/// gravity, velocity clamp, integration, damping, then the position clamp.
/// Hitting the floor or ceiling pins the position and zeroes the vertical
/// velocity; there is no bounce.
pub fn step_bird(position: &mut Vec2, velocity: &mut Vec2, radius: f32, dt: f32) {
    *velocity += GRAVITY * dt;
    velocity.y = velocity.y.clamp(MIN_VERTICAL_VELOCITY, MAX_VERTICAL_VELOCITY);

    *position += *velocity * dt;

    // Damping is defined per 60 Hz frame; exponentiate so the decay rate
    // does not depend on the actual frame rate.
    velocity.y *= DAMPING.powf(dt * 60.0);

    let floor = GROUND_Y - radius;
    if position.y > floor {
        position.y = floor;
        velocity.y = 0.0;
    }

    let ceiling = radius;
    if position.y < ceiling {
        position.y = ceiling;
        velocity.y = 0.0;
    }
}

/// Integrates the bird's motion while the game is running.
///
/// Before the player starts the game the bird hangs motionless; the scroll
/// system still runs so the world drifts behind it.
pub fn physics_system(
    dt: Res<DeltaTime>,
    run_state: Res<RunState>,
    mut birds: Query<(&mut Position, &mut Velocity, &Collider), With<PlayerControlled>>,
) {
    if !run_state.running() {
        return;
    }

    for (mut position, mut velocity, collider) in birds.iter_mut() {
        step_bird(&mut position.0, &mut velocity.0, collider.radius, dt.0);
    }
}
