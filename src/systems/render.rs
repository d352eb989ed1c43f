use bevy_ecs::event::EventWriter;
use bevy_ecs::query::With;
use bevy_ecs::system::{NonSendMut, Query};
use sdl2::pixels::Color;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

use crate::constants::{layer, CANVAS_SIZE, SPRITE_SCALE};
use crate::error::{GameError, TextureError};
use crate::helpers::centered_with_size;
use crate::systems::components::{PlayerControlled, Position, Renderable, Scrolling, Tilt};
use crate::systems::scroll::{tile_count, tile_offsets};
use crate::texture::sprite::SpriteAtlas;

/// A non-send resource wrapping the backbuffer texture so it can be
/// differentiated from other textures when exposed as a resource.
pub struct BackbufferResource(pub Texture);

/// Draws the frame into the backbuffer, back to front.
///
/// Scrolling layers tile horizontally; each one is drawn as many times as
/// needed to cover the canvas from its wrapped offset. The bird draws
/// between the background and ground layers, rotated by its tilt.
pub fn render_system(
    mut canvas: NonSendMut<Canvas<Window>>,
    mut backbuffer: NonSendMut<BackbufferResource>,
    mut atlas: NonSendMut<SpriteAtlas>,
    layers: Query<(&Scrolling, &Renderable)>,
    bird: Query<(&Position, &Tilt, &Renderable), With<PlayerControlled>>,
    mut errors: EventWriter<GameError>,
) {
    let mut scrolling: Vec<(&Scrolling, &Renderable)> = layers.iter().collect();
    scrolling.sort_by_key(|(_, renderable)| renderable.layer);

    let result = canvas.with_texture_canvas(&mut backbuffer.0, |target| {
        target.set_draw_color(Color::BLACK);
        target.clear();

        for (layer_state, renderable) in scrolling.iter().filter(|(_, r)| r.layer < layer::BIRD) {
            draw_layer(target, &mut atlas, layer_state, renderable, &mut errors);
        }

        for (position, tilt, renderable) in bird.iter() {
            let scaled = (renderable.sprite.size.as_vec2() * SPRITE_SCALE).as_uvec2();
            let dest = centered_with_size(position.0.as_ivec2(), scaled);
            if let Err(e) = renderable
                .sprite
                .render_rotated(target, &mut atlas, dest, tilt.degrees as f64)
            {
                errors.write(e.into());
            }
        }

        for (layer_state, renderable) in scrolling.iter().filter(|(_, r)| r.layer > layer::BIRD) {
            draw_layer(target, &mut atlas, layer_state, renderable, &mut errors);
        }
    });

    if let Err(e) = result {
        errors.write(TextureError::RenderFailed(e.to_string()).into());
    }
}

fn draw_layer(
    canvas: &mut Canvas<Window>,
    atlas: &mut SpriteAtlas,
    layer_state: &Scrolling,
    renderable: &Renderable,
    errors: &mut EventWriter<GameError>,
) {
    let scaled_width = renderable.sprite.size.x as f32 * SPRITE_SCALE;
    let scaled_height = renderable.sprite.size.y as f32 * SPRITE_SCALE;
    let count = tile_count(CANVAS_SIZE.x as f32, scaled_width);

    for x in tile_offsets(layer_state.offset_x, scaled_width, count) {
        let dest = sdl2::rect::Rect::new(
            x.round() as i32,
            layer_state.pos_y.round() as i32,
            scaled_width.round() as u32,
            scaled_height.round() as u32,
        );
        if let Err(e) = renderable.sprite.render(canvas, atlas, dest) {
            errors.write(e.into());
        }
    }
}

/// Copies the backbuffer to the window canvas and presents it.
pub fn present_system(
    mut canvas: NonSendMut<Canvas<Window>>,
    backbuffer: NonSendMut<BackbufferResource>,
    mut errors: EventWriter<GameError>,
) {
    if let Err(e) = canvas.copy(&backbuffer.0, None, None) {
        errors.write(TextureError::RenderFailed(e).into());
    }
    canvas.present();
}
