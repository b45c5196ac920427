use crate::caster::{HitAxis, NO_HIT};
use crate::config::Config;
use crate::framebuffer::pack_rgb;
use crate::math::{degrees_to_radians, normalize_angle, radians_to_degrees};

// Shade tiers for the two wall-face families.
const HORIZONTAL_SHADE: f32 = 255.0;
const VERTICAL_SHADE: f32 = 180.0;

// Distance attenuation: full brightness inside SHADE_FALLOFF tiles, dimming
// beyond it, floored so distant walls stay visible against the background.
const SHADE_FALLOFF: f32 = 5.0;
const SHADE_FLOOR: f32 = 30.0;

// Depth below which the slice-height division would blow up.
const MIN_DEPTH: f32 = 1e-4;

/// Projection-plane geometry, derived once from the configuration.
///
/// The plane sits `distance_to_plane` in front of the viewer; its width and
/// height come from the horizontal FOV and the aspect-derived vertical FOV.
/// All of this is fixed for the process lifetime.
pub struct Projection {
    screen_width: f32,
    screen_height: f32,
    hfov: f32,
    distance_to_plane: f32,
    half_plane_width: f32,
    plane_height: f32,
    half_wall: f32,
    ray_resolution: u32,
}

impl Projection {
    pub fn new(config: &Config) -> Self {
        let width = config.screen_width as f32;
        let height = config.screen_height as f32;
        let hfov = degrees_to_radians(config.hfov_degrees);

        let distance_to_plane = (width * 0.5) / (hfov * 0.5).tan();
        let plane_width = distance_to_plane * (hfov * 0.5).tan() * 2.0;

        let vfov = 2.0 * ((hfov * 0.5).tan() * (height / width)).atan();
        let plane_height = distance_to_plane * (vfov * 0.5).tan() * 2.0;

        log::debug!(
            "projection plane at {distance_to_plane:.1}, vfov {:.1} deg",
            radians_to_degrees(vfov)
        );

        Self {
            screen_width: width,
            screen_height: height,
            hfov,
            distance_to_plane,
            half_plane_width: plane_width * 0.5,
            plane_height,
            half_wall: config.tile_size * 0.5,
            ray_resolution: config.ray_resolution,
        }
    }

    pub fn ray_resolution(&self) -> u32 {
        self.ray_resolution
    }

    /// Cast angle for a screen column, normalized into `(0, 2π]`.
    ///
    /// Columns map through `atan2` of their projection-plane offset rather
    /// than a linear angle increment; the linear version compresses slices
    /// towards the screen edges and reads as fisheye once the slices are
    /// drawn at uniform width. Column 0 is pinned to the left edge of the
    /// view cone.
    pub fn column_angle(&self, column: usize, viewer_angle: f32) -> f32 {
        if column == 0 {
            return normalize_angle(viewer_angle - self.hfov * 0.5);
        }

        let max_x = self.screen_width - 1.0;
        let screen_x = (column as u32 * self.ray_resolution) as f32;
        let plane_x = (screen_x * 2.0 - max_x) / max_x * self.half_plane_width;

        normalize_angle(plane_x.atan2(self.distance_to_plane) + viewer_angle)
    }

    /// On-screen height of a wall slice at the given corrected depth.
    ///
    /// Sentinel and non-finite depths collapse to a zero-height slice instead
    /// of reaching the division.
    pub fn wall_height(&self, depth: f32) -> f32 {
        if !depth.is_finite() || depth >= NO_HIT {
            return 0.0;
        }
        let depth = depth.max(MIN_DEPTH);

        let plane_y = self.distance_to_plane * (self.half_wall / depth);
        self.screen_height * (plane_y * 2.0) / self.plane_height
    }

    /// Flat shade for a slice: a base tier from the struck axis family,
    /// attenuated with distance.
    pub fn shade(&self, axis: HitAxis, depth: f32) -> u32 {
        let base = match axis {
            HitAxis::Horizontal => HORIZONTAL_SHADE,
            HitAxis::Vertical => VERTICAL_SHADE,
        };

        let lit = if depth <= SHADE_FALLOFF {
            base
        } else {
            base * (SHADE_FALLOFF / depth)
        };

        let level = lit.clamp(SHADE_FLOOR, 255.0) as u8;
        pack_rgb(level, level, level)
    }
}
