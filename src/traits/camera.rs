use glam::{Mat4, Vec3};

use crate::camera::FreeLookCamera;
use crate::transform::RigidTransform;

/// Read-only camera view consumed by a renderer
pub trait CameraRig {
    /// Get the camera placement in world space
    fn transform(&self) -> RigidTransform;

    /// Get the camera position in world space
    fn eye(&self) -> Vec3;

    /// Get the camera look direction
    fn direction(&self) -> Vec3;

    /// Get the view matrix for rendering
    fn view_matrix(&self) -> Mat4 {
        self.transform().view_matrix()
    }
}

impl CameraRig for FreeLookCamera {
    fn transform(&self) -> RigidTransform {
        FreeLookCamera::transform(self)
    }

    fn eye(&self) -> Vec3 {
        FreeLookCamera::eye(self)
    }

    fn direction(&self) -> Vec3 {
        FreeLookCamera::direction(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mock rig for testing the default view matrix
    struct FixedRig {
        transform: RigidTransform,
    }

    impl CameraRig for FixedRig {
        fn transform(&self) -> RigidTransform {
            self.transform
        }

        fn eye(&self) -> Vec3 {
            self.transform.position
        }

        fn direction(&self) -> Vec3 {
            self.transform.forward()
        }
    }

    #[test]
    fn test_default_view_matrix() {
        let rig = FixedRig {
            transform: RigidTransform::from_position(Vec3::new(0.0, 0.0, 5.0)),
        };
        let p = rig.view_matrix().transform_point3(Vec3::ZERO);
        assert!(p.abs_diff_eq(Vec3::new(0.0, 0.0, -5.0), 1e-5));
    }

    #[test]
    fn test_free_look_camera_as_rig() {
        let camera = FreeLookCamera::new(Vec3::new(1.0, 2.0, 3.0), Vec3::NEG_Z);
        let rig: &dyn CameraRig = &camera;
        assert_eq!(rig.eye(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(rig.direction(), Vec3::NEG_Z);
        assert_eq!(rig.view_matrix(), camera.transform().view_matrix());
    }

    #[test]
    fn test_view_matrix_points_target_down_negative_z() {
        let camera = FreeLookCamera::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));
        let target = camera.view_matrix().transform_point3(Vec3::new(10.0, 0.0, 0.0));
        assert!(target.abs_diff_eq(Vec3::new(0.0, 0.0, -10.0), 1e-4), "got {}", target);
    }
}
