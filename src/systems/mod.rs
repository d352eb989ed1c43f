//! The Entity-Component-System (ECS) module.
//!
//! This module contains all the ECS-related logic, including components,
//! systems, and resources.

pub mod animation;
pub mod components;
pub mod control;
pub mod debug;
pub mod hud;
pub mod input;
pub mod physics;
pub mod render;
pub mod scroll;

pub use animation::{animation_system, tilt_system};
pub use components::{
    Animated, BirdBundle, Collider, DebugState, DeltaTime, GlobalState, LayerBundle, PauseState, PlayerControlled, Position,
    Renderable, RunState, Scrolling, Tilt, Velocity,
};
pub use control::{control_system, error_log_system};
pub use debug::debug_render_system;
pub use hud::hud_render_system;
pub use input::{input_system, Bindings};
pub use physics::physics_system;
pub use render::{present_system, render_system, BackbufferResource};
pub use scroll::scroll_system;
