use std::f32::consts::TAU;

/// Wraps `angle` into `(0, 2π]` by applying at most one full turn.
///
/// Callers must not pass values more than one turn outside the range. The
/// half-open boundary (`<= 0` wraps up, `> 2π` wraps down) is load-bearing:
/// the caster classifies quadrants with strict comparisons against π and
/// π/2, and a 0-vs-2π mixup would flip the facing of cardinal-axis rays.
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    if angle <= 0.0 {
        angle + TAU
    } else if angle > TAU {
        angle - TAU
    } else {
        angle
    }
}

#[inline]
pub fn distance(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    (dx * dx + dy * dy).sqrt()
}

#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * (std::f32::consts::PI / 180.0)
}

#[inline]
pub fn radians_to_degrees(radians: f32) -> f32 {
    radians * (180.0 / std::f32::consts::PI)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    const EPS: f32 = 1e-5;

    #[test]
    fn normalize_lands_in_range() {
        for a in [-PI, -0.1, 0.0, 0.5, PI, TAU, TAU + 0.5] {
            let n = normalize_angle(a);
            assert!(n > 0.0 && n <= TAU + EPS, "normalize({a}) = {n}");
        }
    }

    #[test]
    fn normalize_is_idempotent() {
        for a in [-1.0, 0.0, 0.1, PI, TAU, TAU + 1.0] {
            let once = normalize_angle(a);
            let twice = normalize_angle(once);
            assert!((twice - once).abs() < EPS, "normalize({a}): {once} vs {twice}");
        }
    }

    #[test]
    fn normalize_leaves_in_range_values_alone() {
        assert_eq!(normalize_angle(1.0), 1.0);
        assert_eq!(normalize_angle(TAU), TAU);
    }

    #[test]
    fn distance_is_symmetric() {
        let d1 = distance(1.0, 2.0, -3.5, 7.0);
        let d2 = distance(-3.5, 7.0, 1.0, 2.0);
        assert!((d1 - d2).abs() < EPS);
    }

    #[test]
    fn distance_of_coincident_points_is_zero() {
        assert_eq!(distance(4.25, -1.5, 4.25, -1.5), 0.0);
    }

    #[test]
    fn distance_matches_pythagoras() {
        assert!((distance(0.0, 0.0, 3.0, 4.0) - 5.0).abs() < EPS);
    }

    #[test]
    fn degree_radian_conversions() {
        assert!((degrees_to_radians(180.0) - PI).abs() < EPS);
        assert!((radians_to_degrees(PI) - 180.0).abs() < 1e-3);
        assert!((radians_to_degrees(degrees_to_radians(37.5)) - 37.5).abs() < 1e-3);
    }
}
