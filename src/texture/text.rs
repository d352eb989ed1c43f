//! Text rendering from the texture atlas.
//!
//! Glyphs are 8x8 tiles packed into the atlas under `text/`. Only the
//! characters the atlas carries are renderable; anything else (including
//! spaces) still advances the cursor so alignment is preserved.

use glam::UVec2;
use sdl2::pixels::Color;
use sdl2::render::{Canvas, RenderTarget};
use std::collections::HashMap;

use crate::error::TextureError;
use crate::texture::sprite::{AtlasTile, SpriteAtlas};

const GLYPH_SIZE: f32 = 8.0;

/// Renders strings using glyph tiles from the sprite atlas.
pub struct TextTexture {
    char_map: HashMap<char, AtlasTile>,
    scale: f32,
}

impl TextTexture {
    pub fn new(scale: f32) -> Self {
        Self {
            char_map: HashMap::new(),
            scale,
        }
    }

    /// Maps a character to its atlas tile, caching the lookup.
    fn get_char_tile(&mut self, atlas: &SpriteAtlas, c: char) -> Option<AtlasTile> {
        if let Some(tile) = self.char_map.get(&c) {
            return Some(*tile);
        }

        let tile_name = self.char_to_tile_name(c)?;
        let tile = atlas.get_tile(&tile_name).ok()?;
        self.char_map.insert(c, tile);
        Some(tile)
    }

    /// Converts a character to its tile name in the atlas.
    fn char_to_tile_name(&self, c: char) -> Option<String> {
        match c {
            'A'..='Z' | '0'..='9' | '!' | '-' => Some(format!("text/{c}.png")),
            _ => None,
        }
    }

    /// Renders a string at the given position in white.
    pub fn render<C: RenderTarget>(
        &mut self,
        canvas: &mut Canvas<C>,
        atlas: &mut SpriteAtlas,
        text: &str,
        position: UVec2,
    ) -> Result<(), TextureError> {
        self.render_with_color(canvas, atlas, text, position, Color::WHITE)
    }

    /// Renders a string at the given position with a color modulation.
    pub fn render_with_color<C: RenderTarget>(
        &mut self,
        canvas: &mut Canvas<C>,
        atlas: &mut SpriteAtlas,
        text: &str,
        position: UVec2,
        color: Color,
    ) -> Result<(), TextureError> {
        let mut x_offset = 0;
        let char_width = (GLYPH_SIZE * self.scale) as u32;
        let char_height = (GLYPH_SIZE * self.scale) as u32;

        for c in text.chars() {
            if let Some(tile) = self.get_char_tile(atlas, c) {
                let dest = sdl2::rect::Rect::new(
                    (position.x + x_offset) as i32,
                    position.y as i32,
                    char_width,
                    char_height,
                );
                tile.render_with_color(canvas, atlas, dest, color)?;
            }
            // Unsupported characters (spaces included) still take a cell
            x_offset += char_width;
        }

        Ok(())
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Width of a string in pixels at the current scale, spaces included.
    pub fn text_width(&self, text: &str) -> u32 {
        let char_width = (GLYPH_SIZE * self.scale) as u32;
        text.chars().count() as u32 * char_width
    }

    /// Height of a line of text in pixels at the current scale.
    pub fn text_height(&self) -> u32 {
        (GLYPH_SIZE * self.scale) as u32
    }
}
