use bevy_ecs::system::{Query, Res};

use crate::constants::bird::{TILT_DEGREES_MAX, TILT_DEGREES_MIN, TILT_VELOCITY_MAX, TILT_VELOCITY_MIN};
use crate::helpers::remap;
use crate::systems::components::{Animated, DeltaTime, Renderable, Tilt, Velocity};

/// The bird's tilt for a given vertical velocity, in degrees clockwise.
///
/// Deliberately unclamped: past terminal fall speed the bird noses over
/// beyond 90 degrees, matching the arcade feel.
pub fn tilt_for_velocity(vertical_velocity: f32) -> f32 {
    remap(
        vertical_velocity,
        TILT_VELOCITY_MIN,
        TILT_VELOCITY_MAX,
        TILT_DEGREES_MIN,
        TILT_DEGREES_MAX,
    )
}

/// Ticks every animated texture and publishes the current frame.
///
/// Runs regardless of run state so the bird flaps on the title prompt.
pub fn animation_system(dt: Res<DeltaTime>, mut animated: Query<(&mut Animated, &mut Renderable)>) {
    for (mut animation, mut renderable) in animated.iter_mut() {
        animation.0.tick(dt.0);
        let tile = *animation.0.current_tile();
        if renderable.sprite != tile {
            renderable.sprite = tile;
        }
    }
}

/// Updates tilt from vertical velocity.
///
/// At exactly zero vertical velocity the previous tilt is retained, so the
/// bird keeps its attitude while resting on a clamp boundary or idling
/// before the start.
pub fn tilt_system(mut query: Query<(&Velocity, &mut Tilt)>) {
    for (velocity, mut tilt) in query.iter_mut() {
        if velocity.0.y != 0.0 {
            tilt.degrees = tilt_for_velocity(velocity.0.y);
        }
    }
}
