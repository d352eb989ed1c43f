use flappy::constants::CANVAS_SIZE;
use flappy::systems::scroll::{advance_offset, tile_count, tile_offsets};

/// Asserts that tiles of `scaled_width` drawn from `offset_x` leave no
/// horizontal gap across the canvas.
fn assert_covered(offset_x: f32, scaled_width: f32) {
    let count = tile_count(CANVAS_SIZE.x as f32, scaled_width);
    let offsets: Vec<f32> = tile_offsets(offset_x, scaled_width, count).collect();

    assert!(offsets[0] <= 0.0, "leftmost tile starts past the left edge");
    let right_edge = offsets[offsets.len() - 1] + scaled_width;
    assert!(
        right_edge >= CANVAS_SIZE.x as f32,
        "tiles end at {right_edge}, short of the canvas width"
    );

    for pair in offsets.windows(2) {
        assert_eq!(pair[0] + scaled_width, pair[1], "tiles are not contiguous");
    }
}

#[test]
fn test_narrow_tiles_cover_canvas_at_any_offset() {
    let scaled_width = 300.0;
    for step in 0..30 {
        let offset = -(step as f32 * 10.0);
        assert_covered(advance_offset(offset, 0.0, scaled_width, 0.0), scaled_width);
    }
}

#[test]
fn test_wide_tiles_cover_canvas_at_any_offset() {
    // A single tile wider than the canvas still needs a second while the
    // first hangs off the left edge
    let scaled_width = 1500.0;
    assert_eq!(tile_count(CANVAS_SIZE.x as f32, scaled_width), 2);

    for step in 0..15 {
        let offset = -(step as f32 * 100.0);
        assert_covered(advance_offset(offset, 0.0, scaled_width, 0.0), scaled_width);
    }
}

#[test]
fn test_tile_count_for_standard_layers() {
    // 200px tile at 1.5x scale over a 1300px canvas
    assert_eq!(tile_count(1300.0, 300.0), 6);
    // Exact division still gets its extra tile
    assert_eq!(tile_count(1200.0, 300.0), 5);
}

#[test]
fn test_offset_stays_in_wrap_range() {
    let scaled_width = 300.0;
    let mut offset = 0.0;

    // Long simulated run at a high speed
    for _ in 0..1000 {
        offset = advance_offset(offset, 480.0, scaled_width, 1.0 / 60.0);
        assert!(offset <= 0.0, "offset drifted positive: {offset}");
        assert!(offset > -scaled_width, "offset escaped wrap range: {offset}");
    }
}

#[test]
fn test_wrap_preserves_phase() {
    // Crossing the boundary by 2px lands 2px in, not back at zero
    let offset = advance_offset(-299.0, 2.0, 300.0, 1.5);
    assert_eq!(offset, -2.0);
}

#[test]
fn test_wrap_boundary_is_exclusive() {
    // Landing exactly on -scaled_width wraps to zero
    let offset = advance_offset(-299.0, 1.0, 300.0, 1.0);
    assert_eq!(offset, 0.0);
}

#[test]
fn test_speed_scales_with_dt() {
    let half = advance_offset(0.0, 120.0, 10_000.0, 0.5);
    let full = advance_offset(0.0, 60.0, 10_000.0, 1.0);
    assert_eq!(half, full);
}
