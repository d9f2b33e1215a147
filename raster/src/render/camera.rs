use crate::math::*;

/// The transforms applied by the vertex stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub projection: Mat44,
    pub view: Mat44,
    pub normal_matrix: Mat44,
}

impl Camera {
    /// 90° vertical FOV, 16:9 perspective looking at a model placed 55 units down -Z,
    /// scaled by 0.5 and flipped vertically. Normals pass through unchanged.
    pub fn fixed() -> Self {
        let projection = Mat44::from_rows(
            [0.347270, 0.0, 0.0, 0.0],
            [0.0, 0.617370, 0.0, 0.0],
            [0.0, 0.0, -1.0, -0.2],
            [0.0, 0.0, -1.0, 0.0],
        );
        let view = Mat44::translate(Vec3::new(5.0, 30.0, -55.0)) * Mat44::scale_non_uniform(Vec3::new(0.5, -0.5, 0.5));
        Self { projection, view, normal_matrix: Mat44::identity() }
    }

    /// Positions go straight to NDC: handy for placing geometry on screen by hand.
    pub fn identity() -> Self {
        Self { projection: Mat44::identity(), view: Mat44::identity(), normal_matrix: Mat44::identity() }
    }

    pub fn model_view_projection(&self) -> Mat44 {
        self.projection * self.view
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::fixed()
    }
}
