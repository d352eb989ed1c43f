use bevy_ecs::event::EventWriter;
use bevy_ecs::system::{NonSendMut, Res};
use glam::UVec2;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::constants::CANVAS_SIZE;
use crate::error::{GameError, TextureError};
use crate::systems::components::{PauseState, RunState};
use crate::systems::render::BackbufferResource;
use crate::texture::sprite::SpriteAtlas;
use crate::texture::text::TextTexture;

const PROMPT_SCALE: f32 = 2.0;

/// Draws the prompt and pause text on top of the scene.
pub fn hud_render_system(
    mut canvas: NonSendMut<Canvas<Window>>,
    mut backbuffer: NonSendMut<BackbufferResource>,
    mut atlas: NonSendMut<SpriteAtlas>,
    run_state: Res<RunState>,
    pause: Res<PauseState>,
    mut errors: EventWriter<GameError>,
) {
    let result = canvas.with_texture_canvas(&mut backbuffer.0, |target| {
        let mut text = TextTexture::new(PROMPT_SCALE);

        let prompt = if run_state.running() {
            "PRESS SPACE TO JUMP!"
        } else {
            "PRESS S TO START!"
        };
        if let Err(e) = text.render(target, &mut atlas, prompt, UVec2::new(10, 10)) {
            errors.write(TextureError::RenderFailed(format!("Failed to render prompt: {e}")).into());
        }

        if pause.active() {
            let paused = "PAUSED";
            let x = (CANVAS_SIZE.x - text.text_width(paused)) / 2;
            let y = (CANVAS_SIZE.y - text.text_height()) / 2;
            if let Err(e) = text.render_with_color(target, &mut atlas, paused, UVec2::new(x, y), Color::YELLOW) {
                errors.write(TextureError::RenderFailed(format!("Failed to render pause text: {e}")).into());
            }
        }
    });

    if let Err(e) = result {
        errors.write(TextureError::RenderFailed(e.to_string()).into());
    }
}
