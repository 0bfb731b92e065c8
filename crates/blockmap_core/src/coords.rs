//! World <-> screen coordinate conversion
//!
//! Screen space is in pixels with the origin at the top-left of the viewport
//! and y pointing down. World space uses the same orientation; one world unit
//! equals one screen pixel at scale 1.0. The camera offset is the world point
//! shown at the top-left corner of the viewport.

use glam::{IVec2, Vec2};

use crate::camera::CameraState;
use crate::layer::Cell;

/// World position to screen pixels, truncated toward zero
pub fn world_to_screen(world: Vec2, offset: Vec2, scale: f32) -> IVec2 {
    world_to_screen_exact(world, offset, scale).as_ivec2()
}

/// Screen pixels to world position, truncated toward zero
pub fn screen_to_world(screen: Vec2, offset: Vec2, scale: f32) -> IVec2 {
    screen_to_world_exact(screen, offset, scale).as_ivec2()
}

pub fn world_to_screen_exact(world: Vec2, offset: Vec2, scale: f32) -> Vec2 {
    (world - offset) * scale
}

pub fn screen_to_world_exact(screen: Vec2, offset: Vec2, scale: f32) -> Vec2 {
    screen / scale + offset
}

/// Resolve a screen position to the grid cell under it.
///
/// Returns `None` when the position falls outside a `width x height` grid, so
/// an out-of-range cell never reaches the layer.
pub fn screen_to_cell(
    screen: Vec2,
    camera: &CameraState,
    cell_size: u32,
    width: u32,
    height: u32,
) -> Option<Cell> {
    let world = screen_to_world(screen, camera.offset, camera.scale);
    let size = cell_size.max(1) as i32;
    let x = world.x.div_euclid(size);
    let y = world.y.div_euclid(size);

    if x < 0 || y < 0 || x >= width as i32 || y >= height as i32 {
        return None;
    }
    Some((x as u32, y as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera(offset: Vec2, scale: f32) -> CameraState {
        CameraState {
            offset,
            scale,
            ..CameraState::default()
        }
    }

    #[test]
    fn test_exact_round_trip() {
        let offsets = [Vec2::ZERO, Vec2::new(-130.5, 42.25), Vec2::new(1000.0, -7.0)];
        let scales = [0.2, 0.5, 1.0, 1.3, 2.0];
        let points = [Vec2::ZERO, Vec2::new(12.0, 99.0), Vec2::new(-640.0, 480.5)];

        for offset in offsets {
            for scale in scales {
                for point in points {
                    let screen = world_to_screen_exact(point, offset, scale);
                    let back = screen_to_world_exact(screen, offset, scale);
                    assert!((back - point).abs().max_element() < 1e-3);
                }
            }
        }
    }

    #[test]
    fn test_truncated_round_trip_within_one_unit() {
        let offsets = [Vec2::ZERO, Vec2::new(33.0, -12.0), Vec2::new(250.0, 250.0)];
        let scales = [1.0, 2.0];
        let points = [Vec2::new(40.0, 60.0), Vec2::new(301.0, 17.0), Vec2::new(-55.0, 5.0)];

        for offset in offsets {
            for scale in scales {
                for point in points {
                    let screen = world_to_screen(point, offset, scale).as_vec2();
                    let back = screen_to_world(screen, offset, scale).as_vec2();
                    assert!((back - point).abs().max_element() <= 1.0);
                }
            }
        }
    }

    #[test]
    fn test_truncated_round_trip_fractional_camera() {
        // Truncating on screen loses under 1 pixel (1 / scale world units),
        // truncating back to world loses under 1 more unit
        let offsets = [Vec2::new(-130.5, 42.25), Vec2::new(0.75, -3.5)];
        let scales = [0.2, 0.3, 0.75, 1.3];
        let points = [Vec2::new(40.0, 60.0), Vec2::new(301.0, 17.0), Vec2::new(-55.0, 5.0)];

        for offset in offsets {
            for scale in scales {
                let bound = 1.0 / scale + 1.0;
                for point in points {
                    let screen = world_to_screen(point, offset, scale).as_vec2();
                    let back = screen_to_world(screen, offset, scale).as_vec2();
                    assert!((back - point).abs().max_element() < bound);
                }
            }
        }

        // Error above one unit really happens when zoomed out
        let offset = Vec2::new(-130.5, 42.25);
        let screen = world_to_screen(Vec2::new(40.0, 60.0), offset, 0.3).as_vec2();
        assert_eq!(screen, Vec2::new(51.0, 5.0));
        assert_eq!(screen_to_world(screen, offset, 0.3), IVec2::new(39, 58));
    }

    #[test]
    fn test_truncation_is_toward_zero() {
        assert_eq!(
            world_to_screen(Vec2::new(2.7, -2.7), Vec2::ZERO, 1.0),
            IVec2::new(2, -2)
        );
        assert_eq!(
            screen_to_world(Vec2::new(5.0, 5.0), Vec2::ZERO, 2.0),
            IVec2::new(2, 2)
        );
    }

    #[test]
    fn test_screen_to_cell() {
        let cam = camera(Vec2::ZERO, 1.0);
        assert_eq!(screen_to_cell(Vec2::new(0.0, 0.0), &cam, 50, 4, 4), Some((0, 0)));
        assert_eq!(screen_to_cell(Vec2::new(49.0, 51.0), &cam, 50, 4, 4), Some((0, 1)));
        assert_eq!(screen_to_cell(Vec2::new(199.0, 199.0), &cam, 50, 4, 4), Some((3, 3)));
        assert_eq!(screen_to_cell(Vec2::new(200.0, 10.0), &cam, 50, 4, 4), None);
    }

    #[test]
    fn test_screen_to_cell_follows_camera() {
        let cam = camera(Vec2::new(100.0, 50.0), 2.0);
        // 30 / 2 + 100 = 115 -> column 2, 10 / 2 + 50 = 55 -> row 1
        assert_eq!(screen_to_cell(Vec2::new(30.0, 10.0), &cam, 50, 4, 4), Some((2, 1)));

        let far = camera(Vec2::new(-500.0, -500.0), 1.0);
        assert_eq!(screen_to_cell(Vec2::new(10.0, 10.0), &far, 50, 4, 4), None);
    }
}
