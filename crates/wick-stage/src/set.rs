//! The set - the composition surface roles attach to

use std::sync::Arc;

use wick_cast::Role;
use wick_core::{look_at, perspective, Mat4, Vec3};

/// A set owns the roles composed together for one presentation surface,
/// plus the camera that views them.
///
/// A role receives the set's view and projection matrices once when it is
/// attached; `refresh_cameras` re-pushes them after camera motion.
pub struct Set {
    roles: Vec<Arc<dyn Role>>,
    eye: Vec3,
    target: Vec3,
    up: Vec3,
    view: Mat4,
    projection: Mat4,
}

impl Set {
    /// A set with the default camera: eye pulled back on +z, looking at
    /// the origin, 45 degree vertical field of view.
    pub fn new(aspect: f32) -> Self {
        let eye = Vec3::new(0.0, 0.0, 6.0);
        let target = Vec3::ZERO;
        let up = Vec3::UP;
        Self {
            roles: Vec::new(),
            eye,
            target,
            up,
            view: look_at(eye, target, up),
            projection: perspective(45.0, aspect, 1.0, 20.0),
        }
    }

    /// Attach a role, handing it the current camera block.
    pub fn attach_role(&mut self, role: Arc<dyn Role>) {
        role.set_camera(self.view, self.projection);
        self.roles.push(role);
    }

    /// Detach a previously attached role. Detaching an unknown role is a
    /// no-op.
    pub fn detach_role(&mut self, role: &Arc<dyn Role>) {
        self.roles.retain(|attached| !Arc::ptr_eq(attached, role));
    }

    pub fn role_count(&self) -> usize {
        self.roles.len()
    }

    /// Move the camera eye/target, recomputing the view matrix.
    pub fn move_camera(&mut self, eye: Vec3, target: Vec3) {
        self.eye = eye;
        self.target = target;
        self.view = look_at(self.eye, self.target, self.up);
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.view
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    /// Re-push the camera block into every attached role.
    pub fn refresh_cameras(&self) {
        for role in &self.roles {
            role.set_camera(self.view, self.projection);
        }
    }

    /// Compose every attached role for this frame.
    pub fn render(&self) {
        for role in &self.roles {
            role.render();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::CubeRole;

    #[test]
    fn test_attach_pushes_camera() {
        let mut set = Set::new(1.0);
        let role = Arc::new(CubeRole::new());
        set.attach_role(role.clone());

        assert_eq!(role.view_matrix(), set.view_matrix());
        assert_eq!(role.projection_matrix(), set.projection_matrix());
    }

    #[test]
    fn test_camera_motion_reaches_roles_on_refresh() {
        let mut set = Set::new(1.0);
        let role = Arc::new(CubeRole::new());
        set.attach_role(role.clone());

        set.move_camera(Vec3::new(0.0, 2.0, 8.0), Vec3::ZERO);
        assert_ne!(role.view_matrix(), set.view_matrix());

        set.refresh_cameras();
        assert_eq!(role.view_matrix(), set.view_matrix());
    }

    #[test]
    fn test_detach_role() {
        let mut set = Set::new(1.0);
        let role: Arc<dyn Role> = Arc::new(CubeRole::new());
        set.attach_role(role.clone());
        assert_eq!(set.role_count(), 1);

        set.detach_role(&role);
        assert_eq!(set.role_count(), 0);

        // Detaching again is a no-op.
        set.detach_role(&role);
        assert_eq!(set.role_count(), 0);
    }

    #[test]
    fn test_render_composes_attached_roles() {
        let mut set = Set::new(1.0);
        let role = Arc::new(CubeRole::new());
        role.init().unwrap();
        set.attach_role(role.clone());

        set.render();
        assert_ne!(role.mvp_matrix(), wick_core::mat4_identity());
    }
}
