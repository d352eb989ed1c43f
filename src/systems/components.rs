use bevy_ecs::{bundle::Bundle, component::Component, resource::Resource};
use glam::Vec2;

use crate::texture::{animated::AnimatedTexture, sprite::AtlasTile};

/// A tag component for entities that are controlled by the player.
#[derive(Default, Component)]
pub struct PlayerControlled;

/// Center-anchored position in canvas pixels.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Position(pub Vec2);

/// Velocity in pixels per second. Positive y is downward.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Velocity(pub Vec2);

/// Circular collision bounds, already scaled to canvas pixels.
#[derive(Component, Debug, Clone, Copy)]
pub struct Collider {
    pub radius: f32,
}

/// Clockwise rotation applied when drawing, in degrees.
///
/// Holds its last value while the entity's vertical velocity is zero.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Tilt {
    pub degrees: f32,
}

/// A component for entities that have a sprite, with a layer for ordering.
///
/// The sprite field is republished each frame by the animation system.
#[derive(Component)]
pub struct Renderable {
    pub sprite: AtlasTile,
    pub layer: u8,
}

/// A component wrapping an animated texture that cycles on its own clock.
#[derive(Component)]
pub struct Animated(pub AnimatedTexture);

/// A horizontally scrolling, endlessly tiled layer.
///
/// `offset_x` is the x position of the leftmost drawn tile and stays within
/// `(-scaled_width, 0]` once wrapped.
#[derive(Component, Debug, Clone, Copy)]
pub struct Scrolling {
    pub offset_x: f32,
    pub pos_y: f32,
    pub speed: f32,
}

#[derive(Bundle)]
pub struct BirdBundle {
    pub player: PlayerControlled,
    pub position: Position,
    pub velocity: Velocity,
    pub collider: Collider,
    pub tilt: Tilt,
    pub animated: Animated,
    pub sprite: Renderable,
}

#[derive(Bundle)]
pub struct LayerBundle {
    pub scrolling: Scrolling,
    pub sprite: Renderable,
}

#[derive(Resource)]
pub struct GlobalState {
    pub exit: bool,
}

#[derive(Resource)]
pub struct DeltaTime(pub f32);

/// Whether the simulation has been started by the player.
///
/// Transitions once, from `Idle` to `Running`; there is no way back.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running,
}

impl RunState {
    pub fn running(&self) -> bool {
        matches!(self, RunState::Running)
    }
}

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PauseState {
    #[default]
    Inactive,
    Active,
}

impl PauseState {
    pub fn active(&self) -> bool {
        matches!(self, PauseState::Active)
    }

    pub fn toggled(&self) -> Self {
        match self {
            PauseState::Inactive => PauseState::Active,
            PauseState::Active => PauseState::Inactive,
        }
    }
}

/// Whether the debug overlay (tile seams, bird center) is drawn.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct DebugState {
    pub enabled: bool,
}
