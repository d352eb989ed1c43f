use sdl2::rect::Rect;
use sdl2::render::{Canvas, RenderTarget};
use smallvec::SmallVec;

use crate::error::TextureError;
use crate::texture::sprite::{AtlasTile, SpriteAtlas};

#[derive(thiserror::Error, Debug)]
pub enum AnimatedTextureError {
    #[error("Animated texture requires at least one frame")]
    NoFrames,

    #[error("Invalid frame duration: {0}")]
    InvalidFrameDuration(f32),
}

/// A looping sequence of atlas tiles advanced by wall-clock time.
///
/// Accumulates delta time into a bank and advances whole frames out of it,
/// so a single large `dt` steps multiple frames instead of at most one.
#[derive(Clone, Debug)]
pub struct AnimatedTexture {
    tiles: SmallVec<[AtlasTile; 4]>,
    frame_duration: f32,
    current_frame: usize,
    time_bank: f32,
}

impl AnimatedTexture {
    pub fn new(tiles: Vec<AtlasTile>, frame_duration: f32) -> Result<Self, AnimatedTextureError> {
        if tiles.is_empty() {
            return Err(AnimatedTextureError::NoFrames);
        }
        if frame_duration <= 0.0 {
            return Err(AnimatedTextureError::InvalidFrameDuration(frame_duration));
        }

        Ok(Self {
            tiles: SmallVec::from_vec(tiles),
            frame_duration,
            current_frame: 0,
            time_bank: 0.0,
        })
    }

    /// Advances the animation by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        self.time_bank += dt;
        while self.time_bank >= self.frame_duration {
            self.time_bank -= self.frame_duration;
            self.current_frame = (self.current_frame + 1) % self.tiles.len();
        }
    }

    pub fn current_tile(&self) -> &AtlasTile {
        &self.tiles[self.current_frame]
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn frame_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn time_bank(&self) -> f32 {
        self.time_bank
    }

    pub fn render<T: RenderTarget>(
        &self,
        canvas: &mut Canvas<T>,
        atlas: &mut SpriteAtlas,
        dest: Rect,
    ) -> Result<(), TextureError> {
        self.current_tile().render(canvas, atlas, dest)
    }
}
