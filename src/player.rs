use crate::input::InputState;
use crate::map::GridMap;
use crate::math::normalize_angle;

/// How far ahead of the player a move probes for walls, in tiles. Keeps the
/// viewer a quarter tile away from any face it is walking into.
const WALL_PROBE: f32 = 0.25;

/// Viewer state: world position in tile units, facing angle in `(0, 2π]`,
/// and the heading vector derived from it. The heading is only ever written
/// by `set_angle` so it can never go stale against the angle.
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub angle: f32,
    pub dir_x: f32,
    pub dir_y: f32,
}

impl Player {
    pub fn new(x: f32, y: f32, angle: f32) -> Self {
        let mut player = Self {
            x,
            y,
            angle: 0.0,
            dir_x: 0.0,
            dir_y: 0.0,
        };
        player.set_angle(angle);
        player
    }

    pub fn set_angle(&mut self, angle: f32) {
        self.angle = normalize_angle(angle);
        self.dir_x = self.angle.cos();
        self.dir_y = self.angle.sin();
    }

    /// One frame of movement. Walking tests collision per axis; turning never
    /// does.
    pub fn update(
        &mut self,
        input: &InputState,
        map: &GridMap,
        move_speed: f32,
        rotation_speed: f32,
        dt: f32,
    ) {
        if input.forward {
            self.walk(map, move_speed * dt);
        }
        if input.backward {
            self.walk(map, -(move_speed * dt));
        }
        if input.turn_left {
            self.set_angle(self.angle - rotation_speed * dt);
        }
        if input.turn_right {
            self.set_angle(self.angle + rotation_speed * dt);
        }
    }

    /// Displace along the heading by `step` tiles (negative walks backwards).
    ///
    /// Each axis is gated independently: the probe point leads the player in
    /// the direction of travel on that axis while holding the other axis at
    /// its current value. A wall on one axis therefore suppresses only that
    /// axis' displacement, which is what lets the player slide along a face
    /// on diagonal contact instead of stopping dead.
    fn walk(&mut self, map: &GridMap, step: f32) {
        let dx = self.dir_x * step;
        let dy = self.dir_y * step;

        let probe_x = if dx < 0.0 { -WALL_PROBE } else { WALL_PROBE };
        let probe_y = if dy < 0.0 { -WALL_PROBE } else { WALL_PROBE };

        if !map.is_wall(self.x + probe_x, self.y) {
            self.x += dx;
        }
        if !map.is_wall(self.x, self.y + probe_y) {
            self.y += dy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    const EPS: f32 = 1e-5;

    fn open_arena() -> GridMap {
        let mut rows = [[1u8; 13]; 13];
        for row in rows.iter_mut().take(12).skip(1) {
            for cell in row.iter_mut().take(12).skip(1) {
                *cell = 0;
            }
        }
        GridMap::from_rows(rows)
    }

    fn held(forward: bool, backward: bool, left: bool, right: bool) -> InputState {
        InputState {
            forward,
            backward,
            turn_left: left,
            turn_right: right,
        }
    }

    #[test]
    fn heading_tracks_angle() {
        let mut player = Player::new(1.5, 1.5, FRAC_PI_2);
        assert!(player.dir_x.abs() < EPS);
        assert!((player.dir_y - 1.0).abs() < EPS);

        player.set_angle(PI);
        assert!((player.dir_x + 1.0).abs() < EPS);
        assert!(player.dir_y.abs() < 1e-4);

        let len = (player.dir_x * player.dir_x + player.dir_y * player.dir_y).sqrt();
        assert!((len - 1.0).abs() < EPS);
    }

    #[test]
    fn set_angle_normalizes() {
        let mut player = Player::new(1.5, 1.5, 0.0);
        assert_eq!(player.angle, TAU);

        player.set_angle(TAU + 0.25);
        assert!((player.angle - 0.25).abs() < EPS);
    }

    #[test]
    fn movement_never_enters_a_wall() {
        let map = open_arena();
        // Facing east, straight at the far border.
        let mut player = Player::new(1.5, 6.5, 0.0);
        let input = held(true, false, false, false);

        for _ in 0..200 {
            player.update(&input, &map, 2.0, 3.0, 0.1);
            assert!(
                !map.is_wall(player.x, player.y),
                "player inside wall at ({}, {})",
                player.x,
                player.y
            );
        }
        // It actually travelled and then stopped short of the border face.
        assert!(player.x > 10.0);
        assert!(player.x < 12.0);
    }

    #[test]
    fn backward_movement_is_contained_too() {
        let map = open_arena();
        let mut player = Player::new(10.5, 6.5, PI); // facing west, walking east
        let input = held(false, true, false, false);

        for _ in 0..200 {
            player.update(&input, &map, 2.0, 3.0, 0.1);
            assert!(!map.is_wall(player.x, player.y));
        }
        assert!(player.x > 10.5);
    }

    #[test]
    fn blocked_axis_slides_along_the_face() {
        let map = open_arena();
        // Close under the north wall, heading up-and-right at 45 degrees.
        // The y probe is already inside the wall, the x probe is clear.
        let mut player = Player::new(5.5, 1.2, -std::f32::consts::FRAC_PI_4);
        let input = held(true, false, false, false);

        let start_x = player.x;
        let start_y = player.y;
        player.update(&input, &map, 2.0, 3.0, 0.05);

        assert!(player.x > start_x, "open axis keeps moving");
        assert!((player.y - start_y).abs() < EPS, "blocked axis is suppressed");
    }

    #[test]
    fn turning_ignores_walls() {
        let map = open_arena();
        // Wedged in a corner; rotation must still apply.
        let mut player = Player::new(1.3, 1.3, PI);
        let input = held(false, false, false, true);

        let before = player.angle;
        player.update(&input, &map, 2.0, 3.0, 0.1);
        assert!((player.angle - before).abs() > 0.2);
        assert!((player.x - 1.3).abs() < EPS);
        assert!((player.y - 1.3).abs() < EPS);
    }
}
