use bevy_ecs::system::{Query, Res};

use crate::systems::components::{DeltaTime, Scrolling};

/// Moves a layer offset left by `speed * dt`, wrapping so it stays within
/// `(-scaled_width, 0]`.
///
/// Wrapping is modular rather than a reset to zero, so the visible tile
/// phase is continuous across the wrap.
pub fn advance_offset(offset_x: f32, speed: f32, scaled_width: f32, dt: f32) -> f32 {
    let mut offset = offset_x - speed * dt;
    while offset <= -scaled_width {
        offset += scaled_width;
    }
    offset
}

/// How many tiles are needed to cover a viewport of `viewport_width` with
/// tiles of `scaled_width`, at any wrapped offset.
///
/// One extra tile covers the partial tile exposed on the right while the
/// leftmost tile hangs off-screen. The formula holds whether the tile is
/// narrower or wider than the viewport.
pub fn tile_count(viewport_width: f32, scaled_width: f32) -> usize {
    (viewport_width / scaled_width).ceil() as usize + 1
}

/// The x positions of each drawn tile for a layer at `offset_x`.
pub fn tile_offsets(offset_x: f32, scaled_width: f32, count: usize) -> impl Iterator<Item = f32> {
    (0..count).map(move |i| offset_x + i as f32 * scaled_width)
}

/// Advances every scrolling layer.
///
/// Runs whether or not the game has started; the world drifts behind the
/// idle bird on the title prompt too.
pub fn scroll_system(dt: Res<DeltaTime>, mut layers: Query<(&mut Scrolling, &crate::systems::components::Renderable)>) {
    for (mut scrolling, renderable) in layers.iter_mut() {
        let scaled_width = renderable.sprite.size.x as f32 * crate::constants::SPRITE_SCALE;
        scrolling.offset_x = advance_offset(scrolling.offset_x, scrolling.speed, scaled_width, dt.0);
    }
}
