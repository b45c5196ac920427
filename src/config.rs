/// Startup configuration. Built once in `main`, never mutated afterwards;
/// everything downstream (projection constants, buffer sizes) derives from it.
#[derive(Debug, Clone)]
pub struct Config {
    /// Internal render resolution. The window opens at this size but may be
    /// resized freely; the scene is always rendered at this resolution and
    /// stretch-blitted, so FOV math never depends on the live window size.
    pub screen_width: u32,
    pub screen_height: u32,
    /// Horizontal field of view in degrees, split evenly about the facing angle.
    pub hfov_degrees: f32,
    /// World units per grid tile. World coordinates are in tile units.
    pub tile_size: f32,
    /// Pixels per ray column. Higher values cast fewer, wider slices.
    pub ray_resolution: u32,
    /// Tiles per second.
    pub move_speed: f32,
    /// Radians per second.
    pub rotation_speed: f32,
    /// Grid-line steps per axis before a ray reports no hit.
    pub max_ray_depth: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: 1280,
            screen_height: 720,
            hfov_degrees: 90.0,
            tile_size: 1.0,
            ray_resolution: 2,
            move_speed: 2.0,
            rotation_speed: 3.0,
            max_ray_depth: 20,
        }
    }
}

impl Config {
    pub fn num_rays(&self) -> usize {
        (self.screen_width / self.ray_resolution) as usize
    }
}
