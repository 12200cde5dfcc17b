use glam::{Vec2, Vec3};

/// Clamp `val` to the closed interval [`min`, `max`]
pub fn clamp<T: PartialOrd>(val: T, min: T, max: T) -> T {
    if val > max {
        max
    } else if val < min {
        min
    } else {
        val
    }
}

/// Degrees to radians
pub fn radians(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}

/// Radians to degrees
pub fn degrees(radians: f32) -> f32 {
    radians * 180.0 / std::f32::consts::PI
}

/// Horizontal (XY-plane) length of a world vector
pub fn length_2d(v: Vec3) -> f32 {
    Vec2::new(v.x, v.y).length()
}

/// View angles pointing from `from` to `to`, as (pitch, yaw) in degrees
///
/// Pitch is negated so looking up is negative, matching the host's angle
/// convention. Roll is always zero and is omitted.
pub fn angles_to(from: Vec3, to: Vec3) -> Vec2 {
    let d = to - from;
    let pitch = degrees(-f32::atan2(d.z, length_2d(d)));
    let yaw = degrees(f32::atan2(d.y, d.x));

    Vec2::new(pitch, yaw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5, 0, 10), 5);
        assert_eq!(clamp(-1, 0, 10), 0);
        assert_eq!(clamp(11, 0, 10), 10);
        assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
    }

    #[test]
    fn test_angle_conversions_round_trip() {
        assert!((radians(180.0) - std::f32::consts::PI).abs() < 1e-6);
        assert!((degrees(std::f32::consts::PI) - 180.0).abs() < 1e-4);
        assert!((degrees(radians(37.5)) - 37.5).abs() < 1e-4);
    }

    #[test]
    fn test_length_2d_ignores_height() {
        assert_eq!(length_2d(Vec3::new(3.0, 4.0, 100.0)), 5.0);
    }

    #[test]
    fn test_angles_to() {
        let origin = Vec3::ZERO;

        // Straight along +X: level pitch, zero yaw
        let ahead = angles_to(origin, Vec3::new(10.0, 0.0, 0.0));
        assert!(ahead.x.abs() < 1e-4);
        assert!(ahead.y.abs() < 1e-4);

        // Straight up: pitch -90
        let up = angles_to(origin, Vec3::new(0.0, 0.0, 10.0));
        assert!((up.x + 90.0).abs() < 1e-4);

        // Along +Y: yaw 90
        let left = angles_to(origin, Vec3::new(0.0, 10.0, 0.0));
        assert!((left.y - 90.0).abs() < 1e-4);
    }
}
