use crate::caster::{self, NO_HIT, RayHit};
use crate::framebuffer::{Framebuffer, pack_rgb};
use crate::map::{Cell, GridMap};
use crate::player::Player;
use crate::projection::Projection;

const CEILING_COLOR: u32 = pack_rgb(56, 56, 56);
const FLOOR_COLOR: u32 = pack_rgb(112, 112, 112);

// Top-down overlay.
const OVERLAY_TILE: i32 = 8;
const OVERLAY_WALL: u32 = pack_rgb(200, 200, 200);
const OVERLAY_OPEN: u32 = pack_rgb(20, 20, 20);
const OVERLAY_RAY: u32 = pack_rgb(90, 160, 90);
const OVERLAY_PLAYER: u32 = pack_rgb(220, 80, 80);
const OVERLAY_RAY_STRIDE: usize = 16;

/// One frame: cast every column into the reusable `rays` buffer, then draw
/// the split background, the wall slices, and optionally the top-down
/// overlay.
pub fn render_frame(
    fb: &mut Framebuffer,
    map: &GridMap,
    player: &Player,
    projection: &Projection,
    rays: &mut [RayHit],
    max_ray_depth: u32,
    overlay: bool,
) {
    cast_columns(map, player, projection, rays, max_ray_depth);

    fb.clear(0);
    draw_background(fb);
    draw_walls(fb, projection, rays);

    if overlay {
        draw_overlay(fb, map, player, rays, max_ray_depth);
    }
}

fn cast_columns(
    map: &GridMap,
    player: &Player,
    projection: &Projection,
    rays: &mut [RayHit],
    max_ray_depth: u32,
) {
    for (column, ray) in rays.iter_mut().enumerate() {
        let angle = projection.column_angle(column, player.angle);
        *ray = caster::cast_ray(map, player.x, player.y, player.angle, angle, max_ray_depth);
    }
}

fn draw_background(fb: &mut Framebuffer) {
    let width = fb.width() as i32;
    let height = fb.height() as i32;
    fb.fill_rect(0, 0, width, height / 2, CEILING_COLOR);
    fb.fill_rect(0, height / 2, width, height - height / 2, FLOOR_COLOR);
}

fn draw_walls(fb: &mut Framebuffer, projection: &Projection, rays: &[RayHit]) {
    let slice_width = projection.ray_resolution() as i32;
    let mid = fb.height() as f32 * 0.5;

    for (column, ray) in rays.iter().enumerate() {
        let height = projection.wall_height(ray.corrected);
        if height <= 0.0 {
            continue;
        }
        let color = projection.shade(ray.axis, ray.corrected);
        let top = mid - height * 0.5;

        fb.fill_rect(
            column as i32 * slice_width,
            top.floor() as i32,
            slice_width,
            height.ceil() as i32,
            color,
        );
    }
}

/// Minimap in the top-left corner: grid cells, a subsample of the cast rays,
/// and the player marker.
fn draw_overlay(
    fb: &mut Framebuffer,
    map: &GridMap,
    player: &Player,
    rays: &[RayHit],
    max_ray_depth: u32,
) {
    for row in 0..map.height() {
        for column in 0..map.width() {
            let color = match map.cell(column, row) {
                Cell::Solid => OVERLAY_WALL,
                Cell::Open => OVERLAY_OPEN,
            };
            fb.fill_rect(
                column as i32 * OVERLAY_TILE,
                row as i32 * OVERLAY_TILE,
                OVERLAY_TILE - 1,
                OVERLAY_TILE - 1,
                color,
            );
        }
    }

    let scale = OVERLAY_TILE as f32;
    let px = (player.x * scale) as i32;
    let py = (player.y * scale) as i32;

    for ray in rays.iter().step_by(OVERLAY_RAY_STRIDE) {
        // Rays that missed are clipped to the depth budget.
        let reach = if ray.raw < NO_HIT {
            ray.raw
        } else {
            max_ray_depth as f32
        };
        let hx = ((player.x + ray.angle.cos() * reach) * scale) as i32;
        let hy = ((player.y + ray.angle.sin() * reach) * scale) as i32;
        fb.draw_line(px, py, hx, hy, OVERLAY_RAY);
    }

    fb.fill_rect(px - 2, py - 2, 4, 4, OVERLAY_PLAYER);
}
