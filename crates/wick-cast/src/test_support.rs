//! Minimal role and actor doubles shared by this crate's tests

use std::sync::{Arc, Mutex};

use wick_core::{Mat4, Result};

use crate::actor::Actor;
use crate::property::PropPart;
use crate::role::{Colorable, Role, Rotatable, Scalable, Translatable};

/// A role exposing every capability, recording what carriers write.
#[derive(Default)]
pub struct TestRole {
    pub translation: Mutex<[f32; 3]>,
    pub rotation: Mutex<[f32; 4]>,
    pub scale: Mutex<[f32; 3]>,
    pub color: Mutex<[f32; 4]>,
}

impl Role for TestRole {
    fn init(&self) -> Result<()> {
        Ok(())
    }

    fn dispose(&self) {}

    fn set_camera(&self, _view: Mat4, _projection: Mat4) {}

    fn render(&self) {}

    fn as_translatable(&self) -> Option<&dyn Translatable> {
        Some(self)
    }

    fn as_rotatable(&self) -> Option<&dyn Rotatable> {
        Some(self)
    }

    fn as_scalable(&self) -> Option<&dyn Scalable> {
        Some(self)
    }

    fn as_colorable(&self) -> Option<&dyn Colorable> {
        Some(self)
    }
}

impl Translatable for TestRole {
    fn set_translation(&self, values: [f32; 3]) {
        *self.translation.lock().unwrap() = values;
    }

    fn translation(&self) -> [f32; 3] {
        *self.translation.lock().unwrap()
    }
}

impl Rotatable for TestRole {
    fn set_rotation(&self, values: [f32; 4]) {
        *self.rotation.lock().unwrap() = values;
    }

    fn rotation(&self) -> [f32; 4] {
        *self.rotation.lock().unwrap()
    }
}

impl Scalable for TestRole {
    fn set_scale(&self, values: [f32; 3]) {
        *self.scale.lock().unwrap() = values;
    }

    fn scale(&self) -> [f32; 3] {
        *self.scale.lock().unwrap()
    }
}

impl Colorable for TestRole {
    fn set_color(&self, values: [f32; 4]) {
        *self.color.lock().unwrap() = values;
    }

    fn color(&self) -> [f32; 4] {
        *self.color.lock().unwrap()
    }
}

/// A role that understands no property kind at all.
pub struct BareRole;

impl Role for BareRole {
    fn init(&self) -> Result<()> {
        Ok(())
    }

    fn dispose(&self) {}

    fn set_camera(&self, _view: Mat4, _projection: Mat4) {}

    fn render(&self) {}
}

/// An actor double that only provides the role binding.
pub struct TestActor {
    role: Option<Arc<dyn Role>>,
}

impl TestActor {
    pub fn bound(role: Arc<dyn Role>) -> Self {
        Self { role: Some(role) }
    }

    pub fn unbound() -> Self {
        Self { role: None }
    }
}

impl Actor for TestActor {
    fn role(&self) -> Option<&dyn Role> {
        self.role.as_ref().map(|role| role.as_ref() as &dyn Role)
    }

    fn bind_role(&mut self, role: Arc<dyn Role>) {
        self.role = Some(role);
    }

    fn set_property(&mut self, name: &str, _data: &[u8]) -> Result<()> {
        Err(wick_core::WickError::UnknownProperty(name.to_string()))
    }

    fn get_property(&self, name: &str) -> Result<&dyn PropPart> {
        Err(wick_core::WickError::UnknownProperty(name.to_string()))
    }

    fn update(&mut self) {}
}
