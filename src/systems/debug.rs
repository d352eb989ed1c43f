//! Debug overlay rendering.

use bevy_ecs::event::EventWriter;
use bevy_ecs::query::With;
use bevy_ecs::system::{NonSendMut, Query, Res};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::constants::{CANVAS_SIZE, SPRITE_SCALE};
use crate::error::{GameError, TextureError};
use crate::systems::components::{DebugState, PlayerControlled, Position, Renderable, Scrolling};
use crate::systems::render::BackbufferResource;
use crate::systems::scroll::{tile_count, tile_offsets};

/// Draws tile seam markers and the bird's center point when enabled.
///
/// Runs after the scene and HUD so the markers sit on top of everything.
pub fn debug_render_system(
    debug: Res<DebugState>,
    mut canvas: NonSendMut<Canvas<Window>>,
    mut backbuffer: NonSendMut<BackbufferResource>,
    layers: Query<(&Scrolling, &Renderable)>,
    bird: Query<&Position, With<PlayerControlled>>,
    mut errors: EventWriter<GameError>,
) {
    if !debug.enabled {
        return;
    }

    let result = canvas.with_texture_canvas(&mut backbuffer.0, |target| {
        // Seam marker at the left edge of every drawn tile
        target.set_draw_color(Color::RED);
        for (layer_state, renderable) in layers.iter() {
            let scaled_width = renderable.sprite.size.x as f32 * SPRITE_SCALE;
            let count = tile_count(CANVAS_SIZE.x as f32, scaled_width);
            for x in tile_offsets(layer_state.offset_x, scaled_width, count) {
                let seam = Rect::new(x.round() as i32, layer_state.pos_y.round() as i32, 2, CANVAS_SIZE.y);
                let _ = target.fill_rect(seam);
            }
        }

        target.set_draw_color(Color::WHITE);
        for position in bird.iter() {
            let center = Rect::new(position.0.x as i32 - 2, position.0.y as i32 - 2, 4, 4);
            let _ = target.fill_rect(center);
        }
    });

    if let Err(e) = result {
        errors.write(TextureError::RenderFailed(e.to_string()).into());
    }
}
