use super::*;
use crate::math::*;

/// Direction towards the single light, pointing along the view axis.
pub const LIGHT_DIRECTION: Vec3 = Vec3::new(0.0, 0.0, 1.0);

/// Componentwise weighted sum of the three vertex normals.
pub fn interpolate_normal(normals: [Vec4; 3], weights: Vec3) -> Vec3 {
    weights.x * normals[0].xyz() + weights.y * normals[1].xyz() + weights.z * normals[2].xyz()
}

/// Lambert term of `normal` against [`LIGHT_DIRECTION`], clamped to [0, 1].
///
/// A zero-length or non-finite normal has no defined direction and contributes nothing: 0.
pub fn intensity(normal: Vec3) -> f32 {
    let length = normal.length();
    if length == 0.0 || !length.is_finite() {
        return 0.0;
    }
    let unit = normal / length;
    let lambert = dot(unit, LIGHT_DIRECTION);
    if lambert.is_nan() { 0.0 } else { lambert.clamp(0.0, 1.0) }
}

/// Maps an intensity in [0, 1] onto a byte, rounding to the nearest step.
pub fn intensity_to_byte(intensity: f32) -> u8 {
    (intensity.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Grayscale, fully opaque color of a fragment with the given interpolated normal.
pub fn shade(normal: Vec3) -> RGBA {
    RGBA::gray(intensity_to_byte(intensity(normal)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Vec3::new(0.0, 0.0, 1.0), 255)]
    #[case(Vec3::new(0.0, 0.0, 5.0), 255)]
    #[case(Vec3::new(0.0, 0.0, -1.0), 0)]
    #[case(Vec3::new(1.0, 0.0, 0.0), 0)]
    #[case(Vec3::new(0.0, 1.0, 1.0), 180)] // cos 45° * 255 = 180.3
    #[case(Vec3::new(0.0, 3.0, 4.0), 204)] // 0.8 * 255
    #[case(Vec3::new(1.0, 0.0, -1.0), 0)]
    fn shade_directional_light(#[case] normal: Vec3, #[case] expected: u8) {
        assert_eq!(shade(normal), RGBA::gray(expected));
    }

    #[test]
    fn test_zero_normal_has_no_contribution() {
        assert_eq!(intensity(Vec3::zero()), 0.0);
        assert_eq!(shade(Vec3::zero()), RGBA::new(0, 0, 0, 255));
    }

    #[test]
    fn test_non_finite_normal_has_no_contribution() {
        assert_eq!(shade(Vec3::new(f32::NAN, 0.0, 1.0)), RGBA::BLACK);
        assert_eq!(shade(Vec3::new(f32::INFINITY, 0.0, 1.0)), RGBA::BLACK);
    }

    #[test]
    fn test_intensity_to_byte_rounds() {
        assert_eq!(intensity_to_byte(0.0), 0);
        assert_eq!(intensity_to_byte(1.0), 255);
        assert_eq!(intensity_to_byte(0.5), 128); // 127.5 rounds half away from zero
        assert_eq!(intensity_to_byte(1.0 / 255.0 * 0.49), 0);
        assert_eq!(intensity_to_byte(-3.0), 0);
        assert_eq!(intensity_to_byte(7.0), 255);
    }

    #[test]
    fn test_interpolating_identical_unit_normals_round_trips() {
        let n = Vec3::new(0.0, 0.6, 0.8);
        let normals = [Vec4::new(n.x, n.y, n.z, 1.0); 3];
        for weights in [Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.25, 0.25, 0.5), Vec3::new(0.2, 0.3, 0.5)] {
            let interpolated = interpolate_normal(normals, weights).normalized();
            assert!((interpolated - n).length() < 1e-6, "{:?}", interpolated);
        }
    }

    #[test]
    fn test_opposite_normals_cancel_to_no_contribution() {
        let normals = [Vec4::new(0.0, 0.0, 1.0, 1.0), Vec4::new(0.0, 0.0, -1.0, 1.0), Vec4::new(0.0, 0.0, 0.0, 1.0)];
        let interpolated = interpolate_normal(normals, Vec3::new(0.5, 0.5, 0.0));
        assert_eq!(interpolated, Vec3::zero());
        assert_eq!(shade(interpolated), RGBA::BLACK);
    }
}
