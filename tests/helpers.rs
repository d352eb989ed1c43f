use flappy::helpers::{centered_with_size, remap};
use glam::{IVec2, UVec2};
use sdl2::rect::Rect;

#[test]
fn test_centered_with_size_even_dimensions() {
    let rect = centered_with_size(IVec2::new(100, 200), UVec2::new(50, 30));
    assert_eq!(rect, Rect::new(75, 185, 50, 30));
}

#[test]
fn test_centered_with_size_odd_dimensions() {
    // Integer division biases the center half a pixel toward the top-left
    let rect = centered_with_size(IVec2::new(10, 10), UVec2::new(5, 5));
    assert_eq!(rect, Rect::new(8, 8, 5, 5));
}

#[test]
fn test_centered_with_size_near_origin() {
    let rect = centered_with_size(IVec2::new(0, 0), UVec2::new(10, 10));
    assert_eq!(rect, Rect::new(-5, -5, 10, 10));
}

#[test]
fn test_remap_endpoints_and_midpoint() {
    assert_eq!(remap(0.0, 0.0, 10.0, 0.0, 100.0), 0.0);
    assert_eq!(remap(10.0, 0.0, 10.0, 0.0, 100.0), 100.0);
    assert_eq!(remap(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
}

#[test]
fn test_remap_inverted_output_range() {
    assert_eq!(remap(2.5, 0.0, 10.0, 100.0, 0.0), 75.0);
}

#[test]
fn test_remap_extrapolates_outside_domain() {
    assert_eq!(remap(20.0, 0.0, 10.0, 0.0, 100.0), 200.0);
    assert_eq!(remap(-10.0, 0.0, 10.0, 0.0, 100.0), -100.0);
}
