use std::f32::consts::PI;

use crate::map::GridMap;
use crate::math::distance;

/// Sentinel distance for a ray that found no wall within its depth budget.
/// Projection turns it into a zero-height slice.
pub const NO_HIT: f32 = f32::MAX;

/// Nudge onto the near side of a grid line when stepping towards negative
/// coordinates, so the first probe does not land in the cell we are leaving.
const EDGE_EPSILON: f32 = 1e-6;

/// Which grid-line family the ray struck. Only used to pick a shade tier,
/// giving N/S faces a different brightness than E/W faces.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HitAxis {
    Horizontal,
    Vertical,
}

/// Result of one cast. Lives for a single frame inside the reusable column
/// buffer.
#[derive(Clone, Copy, Debug)]
pub struct RayHit {
    /// Cast angle, normalized into `(0, 2π]`.
    pub angle: f32,
    /// Euclidean distance from the viewer to the wall.
    pub raw: f32,
    /// Fisheye-corrected depth, `raw * cos(viewer - angle)`. This is what
    /// projection consumes.
    pub corrected: f32,
    pub axis: HitAxis,
}

impl RayHit {
    pub fn none() -> Self {
        Self {
            angle: 0.0,
            raw: NO_HIT,
            corrected: NO_HIT,
            axis: HitAxis::Horizontal,
        }
    }
}

/// Casts one ray from `(px, py)` at `ray_angle` and returns the nearer of the
/// horizontal-line and vertical-line hits. `ray_angle` must already be
/// normalized into `(0, 2π]`; the quadrant tests below rely on it.
pub fn cast_ray(
    map: &GridMap,
    px: f32,
    py: f32,
    viewer_angle: f32,
    ray_angle: f32,
    max_depth: u32,
) -> RayHit {
    let horizontal = horizontal_hit(map, px, py, ray_angle, max_depth);
    let vertical = vertical_hit(map, px, py, ray_angle, max_depth);

    let (raw, axis) = if horizontal < vertical {
        (horizontal, HitAxis::Horizontal)
    } else {
        (vertical, HitAxis::Vertical)
    };

    let corrected = if raw < NO_HIT {
        raw * (viewer_angle - ray_angle).cos()
    } else {
        NO_HIT
    };

    RayHit {
        angle: ray_angle,
        raw,
        corrected,
        axis,
    }
}

/// Distance to the nearest wall along horizontal grid lines: start at the
/// first line in the facing direction, then step one tile vertically with the
/// matching tangent step horizontally until a wall or the depth budget.
fn horizontal_hit(map: &GridMap, px: f32, py: f32, angle: f32, max_depth: u32) -> f32 {
    let tan_a = angle.tan();
    // An exactly horizontal ray never crosses a horizontal grid line; bail
    // out before the division below turns into infinities.
    if tan_a == 0.0 {
        return NO_HIT;
    }

    let facing_up = angle > PI;

    let mut ray_y = if facing_up {
        py.floor() - EDGE_EPSILON
    } else {
        py.floor() + 1.0
    };
    let mut ray_x = (ray_y - py) / tan_a + px;

    let step_y: f32 = if facing_up { -1.0 } else { 1.0 };
    let step_x = step_y / tan_a;

    for _ in 0..max_depth {
        if map.is_wall(ray_x, ray_y) {
            return distance(px, py, ray_x, ray_y);
        }
        ray_x += step_x;
        ray_y += step_y;
    }

    NO_HIT
}

/// The vertical-line twin: step one tile horizontally, `tan` vertically.
fn vertical_hit(map: &GridMap, px: f32, py: f32, angle: f32, max_depth: u32) -> f32 {
    let tan_a = angle.tan();
    if !tan_a.is_finite() {
        return NO_HIT;
    }

    let facing_left = angle > 0.5 * PI && angle < 1.5 * PI;

    let mut ray_x = if facing_left {
        px.floor() - EDGE_EPSILON
    } else {
        px.floor() + 1.0
    };
    let mut ray_y = (ray_x - px) * tan_a + py;

    let step_x: f32 = if facing_left { -1.0 } else { 1.0 };
    let step_y = step_x * tan_a;

    for _ in 0..max_depth {
        if map.is_wall(ray_x, ray_y) {
            return distance(px, py, ray_x, ray_y);
        }
        ray_x += step_x;
        ray_y += step_y;
    }

    NO_HIT
}
