use glam::{IVec2, UVec2};
use sdl2::rect::Rect;

/// Builds a rect of `size` centered on `pixel_pos`.
pub fn centered_with_size(pixel_pos: IVec2, size: UVec2) -> Rect {
    // Ensure the position doesn't cause integer overflow when centering
    let x = pixel_pos.x.saturating_sub(size.x as i32 / 2);
    let y = pixel_pos.y.saturating_sub(size.y as i32 / 2);

    Rect::new(x, y, size.x, size.y)
}

/// Linearly maps `value` from `[in_min, in_max]` to `[out_min, out_max]`.
///
/// The input is not clamped: values outside the domain extrapolate past the
/// output range.
pub fn remap(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    out_min + (value - in_min) * (out_max - out_min) / (in_max - in_min)
}
