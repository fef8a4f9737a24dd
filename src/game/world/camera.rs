use glam::{Mat4, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    /// Vertical field of view, degrees.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Behind and above the runner, looking down the track.
    pub fn new() -> Self {
        Self {
            position: Vec3::new(0.0, 5.0, 10.0),
            target: Vec3::ZERO,
            fov_y: 60.0,
            near: 0.1,
            far: 200.0,
        }
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    pub fn view_proj_mat(&self, aspect: f32) -> Mat4 {
        let view = Mat4::look_at_rh(self.position, self.target, Vec3::Y);
        let proj = Mat4::perspective_rh(self.fov_y.to_radians(), aspect, self.near, self.far);
        proj * view
    }

    pub fn create_view_proj(&self, aspect: f32) -> [[f32; 4]; 4] {
        self.view_proj_mat(aspect).to_cols_array_2d()
    }
}
