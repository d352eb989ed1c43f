//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::{UVec2, Vec2};

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The size of the window and the logical canvas, in pixels.
pub const CANVAS_SIZE: UVec2 = UVec2::new(1300, 768);

/// The scale factor applied to every atlas sprite when drawn.
pub const SPRITE_SCALE: f32 = 1.5;

pub mod physics {
    use super::Vec2;

    /// Downward acceleration applied to the bird, in pixels per second squared.
    pub const GRAVITY: Vec2 = Vec2::new(0.0, 980.0);

    /// Velocity assigned on a flap, replacing whatever velocity the bird had.
    pub const FLAP_VELOCITY: Vec2 = Vec2::new(0.0, -400.0);

    /// Vertical velocity bounds, in pixels per second. Negative is upward.
    pub const MIN_VERTICAL_VELOCITY: f32 = -1200.0;
    pub const MAX_VERTICAL_VELOCITY: f32 = 1500.0;

    /// Per-frame vertical damping factor, expressed at the reference tick
    /// rate of 60 Hz. Applied as `DAMPING.powf(dt * 60.0)` so the decay is
    /// the same regardless of the actual frame rate.
    pub const DAMPING: f32 = 0.99;

    /// The y coordinate of the top of the ground strip. The bird rests here.
    pub const GROUND_Y: f32 = 600.0;
}

pub mod bird {
    use super::Vec2;

    /// Where the bird spawns, center-anchored.
    pub const START_POSITION: Vec2 = Vec2::new(100.0, super::CANVAS_SIZE.y as f32 / 2.0);

    /// Seconds each wing-flap frame is shown.
    pub const FRAME_DURATION: f32 = 1.0 / 8.0;

    /// Input domain of the tilt remap: vertical velocity in px/s.
    pub const TILT_VELOCITY_MIN: f32 = -400.0;
    pub const TILT_VELOCITY_MAX: f32 = 800.0;

    /// Output range of the tilt remap, in degrees clockwise.
    pub const TILT_DEGREES_MIN: f32 = -30.0;
    pub const TILT_DEGREES_MAX: f32 = 90.0;
}

pub mod scroll {
    /// Horizontal speed of the far background, in pixels per second.
    pub const BACKGROUND_SPEED: f32 = 40.0;
    /// Horizontal speed of the ground strip. Three times the background.
    pub const GROUND_SPEED: f32 = BACKGROUND_SPEED * 3.0;

    /// The y position of each layer's top edge.
    pub const BACKGROUND_Y: f32 = 0.0;
    pub const GROUND_Y: f32 = super::physics::GROUND_Y;
}

/// Render layer ordering, drawn in ascending order.
pub mod layer {
    pub const BACKGROUND: u8 = 0;
    pub const BIRD: u8 = 1;
    pub const GROUND: u8 = 2;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_time() {
        // 60 FPS = 16.67ms per frame
        let expected_nanos = (1_000_000_000.0 / 60.0) as u64;
        assert_eq!(LOOP_TIME.as_nanos() as u64, expected_nanos);
    }

    #[test]
    fn test_canvas_size() {
        assert_eq!(CANVAS_SIZE.x, 1300);
        assert_eq!(CANVAS_SIZE.y, 768);
    }

    #[test]
    fn test_bird_spawns_at_vertical_center() {
        assert_eq!(bird::START_POSITION.y, CANVAS_SIZE.y as f32 / 2.0);
    }

    #[test]
    fn test_ground_strip_inside_canvas() {
        assert!(physics::GROUND_Y < CANVAS_SIZE.y as f32);
    }

    #[test]
    fn test_ground_scrolls_faster_than_background() {
        assert!(scroll::GROUND_SPEED > scroll::BACKGROUND_SPEED);
        assert_eq!(scroll::GROUND_SPEED, scroll::BACKGROUND_SPEED * 3.0);
    }

    #[test]
    fn test_velocity_bounds_ordered() {
        assert!(physics::MIN_VERTICAL_VELOCITY < 0.0);
        assert!(physics::MAX_VERTICAL_VELOCITY > 0.0);
        assert!(physics::MIN_VERTICAL_VELOCITY < physics::MAX_VERTICAL_VELOCITY);
    }

    #[test]
    fn test_flap_is_within_velocity_bounds() {
        assert!(physics::FLAP_VELOCITY.y >= physics::MIN_VERTICAL_VELOCITY);
        assert!(physics::FLAP_VELOCITY.y <= physics::MAX_VERTICAL_VELOCITY);
    }

    #[test]
    fn test_damping_decays() {
        assert!(physics::DAMPING > 0.0);
        assert!(physics::DAMPING < 1.0);
    }

    #[test]
    fn test_tilt_remap_ranges_ordered() {
        assert!(bird::TILT_VELOCITY_MIN < bird::TILT_VELOCITY_MAX);
        assert!(bird::TILT_DEGREES_MIN < bird::TILT_DEGREES_MAX);
    }

    #[test]
    fn test_layer_ordering() {
        assert!(layer::BACKGROUND < layer::BIRD);
        assert!(layer::BIRD < layer::GROUND);
    }
}
