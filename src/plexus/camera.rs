use glam::{Mat4, Vec2, Vec3, Vec4Swizzles};

use crate::config::CameraConfig;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub screen: Vec2,
    pub point_size: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneCamera {
    position: Vec3,
    sway: f32,
    gain: f32,
    fov_y: f32,
    near: f32,
    far: f32,
    point_size: f32,
}

impl SceneCamera {
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, config.distance),
            sway: config.sway,
            gain: config.gain,
            fov_y: config.fov_degrees.to_radians(),
            near: config.near,
            far: config.far,
            point_size: config.point_size,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn target_for(&self, normalized: Option<Vec2>) -> Vec2 {
        match normalized {
            Some(point) if point.is_finite() => point * self.sway,
            _ => Vec2::ZERO,
        }
    }

    pub fn ease_toward(&mut self, target: Vec2) {
        self.position.x += (target.x - self.position.x) * self.gain;
        self.position.y += (target.y - self.position.y) * self.gain;
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        let projection = Mat4::perspective_rh_gl(self.fov_y, aspect, self.near, self.far);
        let view = Mat4::look_at_rh(self.position, Vec3::ZERO, Vec3::Y);
        projection * view
    }

    pub fn project(&self, view_projection: &Mat4, point: Vec3, size: Vec2) -> Option<Projected> {
        if !point.is_finite() {
            return None;
        }

        let clip = *view_projection * point.extend(1.0);
        if clip.w <= f32::EPSILON {
            return None;
        }

        let ndc = clip.xyz() / clip.w;
        if !ndc.is_finite() || ndc.z < -1.0 || ndc.z > 1.0 {
            return None;
        }

        let screen = Vec2::new((ndc.x + 1.0) * 0.5 * size.x, (1.0 - ndc.y) * 0.5 * size.y);
        let focal = (size.y * 0.5) / (self.fov_y * 0.5).tan();
        Some(Projected {
            screen,
            point_size: self.point_size * focal / clip.w,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> SceneCamera {
        SceneCamera::new(&CameraConfig::default())
    }

    fn assert_close(actual: f32, expected: f32, epsilon: f32) {
        assert!(
            (actual - expected).abs() < epsilon,
            "expected {expected} +/- {epsilon}, got {actual}"
        );
    }

    #[test]
    fn away_pointer_targets_origin() {
        assert_eq!(camera().target_for(None), Vec2::ZERO);
        assert_eq!(
            camera().target_for(Some(Vec2::new(0.5, -1.0))),
            Vec2::new(50.0, -100.0)
        );
    }

    #[test]
    fn easing_closes_a_fixed_fraction_of_the_gap() {
        let mut camera = camera();
        camera.ease_toward(Vec2::new(100.0, -100.0));
        assert_close(camera.position().x, 5.0, 1e-5);
        assert_close(camera.position().y, -5.0, 1e-5);
        assert_eq!(camera.position().z, 600.0);

        for _ in 0..500 {
            camera.ease_toward(Vec2::new(100.0, -100.0));
        }
        assert_close(camera.position().x, 100.0, 1e-2);
        assert_close(camera.position().y, -100.0, 1e-2);
    }

    #[test]
    fn origin_projects_to_surface_center() {
        let camera = camera();
        let size = Vec2::new(1200.0, 800.0);
        let vp = camera.view_projection(size.x / size.y);
        let projected = camera.project(&vp, Vec3::ZERO, size).expect("origin is visible");

        assert_close(projected.screen.x, 600.0, 1e-3);
        assert_close(projected.screen.y, 400.0, 1e-3);
        assert!(projected.point_size > 0.0);
    }

    #[test]
    fn points_behind_the_camera_are_culled() {
        let camera = camera();
        let size = Vec2::new(800.0, 800.0);
        let vp = camera.view_projection(1.0);

        assert_eq!(camera.project(&vp, Vec3::new(0.0, 0.0, 700.0), size), None);
        assert_eq!(camera.project(&vp, Vec3::splat(f32::NAN), size), None);
    }

    #[test]
    fn nearer_points_draw_larger() {
        let camera = camera();
        let size = Vec2::new(800.0, 800.0);
        let vp = camera.view_projection(1.0);
        let near = camera.project(&vp, Vec3::new(0.0, 0.0, 300.0), size).expect("visible");
        let far = camera.project(&vp, Vec3::new(0.0, 0.0, -300.0), size).expect("visible");
        assert!(near.point_size > far.point_size);
    }
}
