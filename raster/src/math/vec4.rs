use crate::math::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const ZERO: Vec4 = Vec4::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    pub fn length(self) -> f32 {
        dot(self, self).sqrt()
    }

    pub fn xy(self) -> Vec2 {
        Vec2 { x: self.x, y: self.y }
    }

    pub fn xyz(self) -> Vec3 {
        Vec3 { x: self.x, y: self.y, z: self.z }
    }
}

// a * b
impl Dot for Vec4 {
    fn dot(self, rhs: Vec4) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }
}

// -Vec4
impl std::ops::Neg for Vec4 {
    type Output = Vec4;
    fn neg(self) -> Vec4 {
        Vec4 { x: -self.x, y: -self.y, z: -self.z, w: -self.w }
    }
}

// Vec4 + Vec4
impl std::ops::Add for Vec4 {
    type Output = Vec4;
    fn add(self, other: Vec4) -> Vec4 {
        Vec4 { x: self.x + other.x, y: self.y + other.y, z: self.z + other.z, w: self.w + other.w }
    }
}

// Vec4 - Vec4
impl std::ops::Sub for Vec4 {
    type Output = Vec4;
    fn sub(self, other: Vec4) -> Vec4 {
        Vec4 { x: self.x - other.x, y: self.y - other.y, z: self.z - other.z, w: self.w - other.w }
    }
}

// Vec4 * Vec4, elementwise
impl std::ops::Mul for Vec4 {
    type Output = Vec4;
    fn mul(self, other: Vec4) -> Vec4 {
        Vec4 { x: self.x * other.x, y: self.y * other.y, z: self.z * other.z, w: self.w * other.w }
    }
}

// Vec4 * f32
impl std::ops::Mul<f32> for Vec4 {
    type Output = Vec4;
    fn mul(self, scalar: f32) -> Vec4 {
        Vec4 { x: self.x * scalar, y: self.y * scalar, z: self.z * scalar, w: self.w * scalar }
    }
}

// f32 * Vec4
impl std::ops::Mul<Vec4> for f32 {
    type Output = Vec4;
    fn mul(self, vec: Vec4) -> Vec4 {
        Vec4 { x: vec.x * self, y: vec.y * self, z: vec.z * self, w: vec.w * self }
    }
}

// Vec4 / Vec4, elementwise
impl std::ops::Div for Vec4 {
    type Output = Vec4;
    fn div(self, other: Vec4) -> Vec4 {
        Vec4 { x: self.x / other.x, y: self.y / other.y, z: self.z / other.z, w: self.w / other.w }
    }
}

// Vec4 / f32
impl std::ops::Div<f32> for Vec4 {
    type Output = Vec4;
    fn div(self, scalar: f32) -> Vec4 {
        Vec4 { x: self.x / scalar, y: self.y / scalar, z: self.z / scalar, w: self.w / scalar }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec4_addition() {
        let v1 = Vec4 { x: 1.0, y: 2.0, z: 3.0, w: 4.0 };
        let v2 = Vec4 { x: 5.0, y: 6.0, z: 7.0, w: 8.0 };
        assert_eq!(v1 + v2, Vec4::new(6.0, 8.0, 10.0, 12.0));
    }

    #[test]
    fn test_vec4_subtraction() {
        let v1 = Vec4 { x: 5.0, y: 7.0, z: 9.0, w: 11.0 };
        let v2 = Vec4 { x: 2.0, y: 3.0, z: 4.0, w: 5.0 };
        assert_eq!(v1 - v2, Vec4::new(3.0, 4.0, 5.0, 6.0));
    }

    #[test]
    fn test_vec4_elementwise_multiplication_and_division() {
        let v1 = Vec4 { x: 2.0, y: 3.0, z: 4.0, w: 5.0 };
        let v2 = Vec4 { x: 4.0, y: 6.0, z: 8.0, w: 10.0 };
        assert_eq!(v1 * v2, Vec4::new(8.0, 18.0, 32.0, 50.0));
        assert_eq!(v2 / v1, Vec4::new(2.0, 2.0, 2.0, 2.0));
    }

    #[test]
    fn test_vec4_scalar_operations() {
        let v = Vec4 { x: 2.0, y: 3.0, z: 4.0, w: 5.0 };
        assert_eq!(v * 2.0, Vec4::new(4.0, 6.0, 8.0, 10.0));
        assert_eq!(2.0 * v, Vec4::new(4.0, 6.0, 8.0, 10.0));
        assert_eq!(v / 2.0, Vec4::new(1.0, 1.5, 2.0, 2.5));
        assert_eq!(-v, Vec4::new(-2.0, -3.0, -4.0, -5.0));
    }

    #[test]
    fn test_division_by_zero() {
        // Division by zero for f32 results in infinity
        let result = Vec4::new(1.0, 2.0, 3.0, 4.0) / 0.0;
        assert!(result.x.is_infinite());
        assert!(result.y.is_infinite());
        assert!(result.z.is_infinite());
        assert!(result.w.is_infinite());
    }

    #[test]
    fn test_dot_product() {
        // 1.0 * 5.0 + 2.0 * 6.0 + 3.0 * 7.0 + 4.0 * 8.0 = 70.0
        assert_eq!(dot(Vec4::new(1.0, 2.0, 3.0, 4.0), Vec4::new(5.0, 6.0, 7.0, 8.0)), 70.0);
        assert_eq!(Vec4::new(3.0, 4.0, 0.0, 0.0).length(), 5.0);
    }

    #[test]
    fn test_swizzles() {
        let v = Vec4 { x: 1.0, y: 2.0, z: 3.0, w: 4.0 };
        assert_eq!(v.xy(), Vec2::new(1.0, 2.0));
        assert_eq!(v.xyz(), Vec3::new(1.0, 2.0, 3.0));
    }
}
