// Perspective camera parked on the +z axis looking at the origin. The scene spin
// is applied as a model rotation about Y on top of view and projection.

use crate::config::CameraConfig;
use crate::error::{Error, Result};
use glm::TMat4;

pub struct Camera {
    config: CameraConfig,
    pub aspect: f32,
    pub projection_mat: TMat4<f32>,
    pub view_mat: TMat4<f32>,
}

impl Camera {
    pub fn new(config: CameraConfig, width: u32, height: u32) -> Result<Self> {
        config.validate()?;
        let eye = glm::vec3(0.0, 0.0, config.distance);
        let view_mat = glm::look_at(&eye, &glm::vec3(0.0, 0.0, 0.0), &glm::vec3(0.0, 1.0, 0.0));
        let mut camera = Camera {
            config,
            aspect: 1.0,
            projection_mat: glm::identity(),
            view_mat,
        };
        camera.resize(width, height)?;
        Ok(camera)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidParam(format!(
                "viewport must be non-empty, got {}x{}",
                width, height
            )));
        }
        self.aspect = width as f32 / height as f32;
        self.projection_mat = glm::perspective(
            self.aspect,
            self.config.fov_deg.to_radians(),
            self.config.near,
            self.config.far,
        );
        Ok(())
    }

    // View matrix with the scene rotated by `rotation_y` radians
    pub fn model_view(&self, rotation_y: f32) -> TMat4<f32> {
        self.view_mat * glm::rotation(rotation_y, &glm::vec3(0.0, 1.0, 0.0))
    }
}
