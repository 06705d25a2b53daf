//! The sample cube role

use parking_lot::Mutex;

use wick_cast::{Colorable, Role, Rotatable, Scalable, Translatable};
use wick_core::{
    mat4_identity, mat4_mul, mat4_rotation, mat4_scaling, mat4_translation, AxisAngle, Color,
    Mat4, Result, Vec3,
};

/// 6 faces x 2 triangles x 3 vertices.
pub const CUBE_VERTEX_COUNT: usize = 36;

/// Unit-cube position data, two counter-clockwise triangles per face.
#[rustfmt::skip]
const CUBE_POSITIONS: [f32; CUBE_VERTEX_COUNT * 3] = [
    // Front face
    -1.0,  1.0,  1.0,
    -1.0, -1.0,  1.0,
     1.0,  1.0,  1.0,
    -1.0, -1.0,  1.0,
     1.0, -1.0,  1.0,
     1.0,  1.0,  1.0,

    // Right face
     1.0,  1.0,  1.0,
     1.0, -1.0,  1.0,
     1.0,  1.0, -1.0,
     1.0, -1.0,  1.0,
     1.0, -1.0, -1.0,
     1.0,  1.0, -1.0,

    // Back face
     1.0,  1.0, -1.0,
     1.0, -1.0, -1.0,
    -1.0,  1.0, -1.0,
     1.0, -1.0, -1.0,
    -1.0, -1.0, -1.0,
    -1.0,  1.0, -1.0,

    // Left face
    -1.0,  1.0, -1.0,
    -1.0, -1.0, -1.0,
    -1.0,  1.0,  1.0,
    -1.0, -1.0, -1.0,
    -1.0, -1.0,  1.0,
    -1.0,  1.0,  1.0,

    // Top face
    -1.0,  1.0, -1.0,
    -1.0,  1.0,  1.0,
     1.0,  1.0, -1.0,
    -1.0,  1.0,  1.0,
     1.0,  1.0,  1.0,
     1.0,  1.0, -1.0,

    // Bottom face
     1.0, -1.0, -1.0,
     1.0, -1.0,  1.0,
    -1.0, -1.0, -1.0,
     1.0, -1.0,  1.0,
    -1.0, -1.0,  1.0,
    -1.0, -1.0, -1.0,
];

/// Startup per-face colors (red, green, blue, yellow, cyan, magenta), one
/// RGBA entry per vertex. A color push replaces all of these with the
/// actor's uniform color.
const CUBE_FACE_COLORS: [[f32; 4]; 6] = [
    [1.0, 0.0, 0.0, 1.0],
    [0.0, 1.0, 0.0, 1.0],
    [0.0, 0.0, 1.0, 1.0],
    [1.0, 1.0, 0.0, 1.0],
    [0.0, 1.0, 1.0, 1.0],
    [1.0, 0.0, 1.0, 1.0],
];

/// Transform and appearance state the carriers write.
struct CubeProps {
    translation: Vec3,
    rotation: AxisAngle,
    scale: Vec3,
    color: Color,
}

impl Default for CubeProps {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: AxisAngle::default(),
            scale: Vec3::ONE,
            color: Color::WHITE,
        }
    }
}

/// CPU-side geometry block standing in for backend vertex buffers.
struct CubeMesh {
    positions: Vec<f32>,
    colors: Vec<f32>,
}

impl CubeMesh {
    fn new() -> Self {
        let mut colors = Vec::with_capacity(CUBE_VERTEX_COUNT * 4);
        for face in &CUBE_FACE_COLORS {
            for _ in 0..6 {
                colors.extend_from_slice(face);
            }
        }
        Self {
            positions: CUBE_POSITIONS.to_vec(),
            colors,
        }
    }
}

/// Camera block consumed at render time.
struct CameraBlock {
    view: Mat4,
    projection: Mat4,
    mvp: Mat4,
}

impl Default for CameraBlock {
    fn default() -> Self {
        Self {
            view: mat4_identity(),
            projection: mat4_identity(),
            mvp: mat4_identity(),
        }
    }
}

/// The presentation-side cube.
///
/// Property state, geometry and the camera block each sit behind their own
/// lock so the render side can read a field without tearing it across a
/// concurrent carrier write; no lock is held beyond a single field copy.
pub struct CubeRole {
    props: Mutex<CubeProps>,
    mesh: Mutex<Option<CubeMesh>>,
    camera: Mutex<CameraBlock>,
}

impl Default for CubeRole {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeRole {
    pub fn new() -> Self {
        Self {
            props: Mutex::new(CubeProps::default()),
            mesh: Mutex::new(None),
            camera: Mutex::new(CameraBlock::default()),
        }
    }

    /// `translate . rotate . scale`, applied right-to-left to column
    /// vectors.
    pub fn model_matrix(&self) -> Mat4 {
        let (translation, rotation, scale) = {
            let props = self.props.lock();
            (props.translation, props.rotation, props.scale)
        };
        mat4_mul(
            &mat4_mul(&mat4_translation(translation), &mat4_rotation(rotation)),
            &mat4_scaling(scale),
        )
    }

    /// The matrix composed by the last `render()` call.
    pub fn mvp_matrix(&self) -> Mat4 {
        self.camera.lock().mvp
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.camera.lock().view
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.camera.lock().projection
    }

    /// The per-vertex position buffer, empty before `init()`.
    pub fn vertex_positions(&self) -> Vec<f32> {
        self.mesh
            .lock()
            .as_ref()
            .map(|mesh| mesh.positions.clone())
            .unwrap_or_default()
    }

    /// The per-vertex color buffer, empty before `init()`.
    pub fn vertex_colors(&self) -> Vec<f32> {
        self.mesh
            .lock()
            .as_ref()
            .map(|mesh| mesh.colors.clone())
            .unwrap_or_default()
    }
}

impl Role for CubeRole {
    fn init(&self) -> Result<()> {
        *self.mesh.lock() = Some(CubeMesh::new());
        Ok(())
    }

    fn dispose(&self) {
        *self.mesh.lock() = None;
    }

    fn set_camera(&self, view: Mat4, projection: Mat4) {
        let mut camera = self.camera.lock();
        camera.view = view;
        camera.projection = projection;
    }

    fn render(&self) {
        if self.mesh.lock().is_none() {
            log::debug!("cube role rendered before init");
            return;
        }

        let model = self.model_matrix();
        let mut camera = self.camera.lock();
        camera.mvp = mat4_mul(&camera.projection, &mat4_mul(&camera.view, &model));
    }

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

impl Translatable for CubeRole {
    fn set_translation(&self, values: [f32; 3]) {
        self.props.lock().translation = Vec3::from_array(values);
    }

    fn translation(&self) -> [f32; 3] {
        self.props.lock().translation.to_array()
    }
}

impl Rotatable for CubeRole {
    fn set_rotation(&self, values: [f32; 4]) {
        self.props.lock().rotation = AxisAngle::from_array(values);
    }

    fn rotation(&self) -> [f32; 4] {
        self.props.lock().rotation.to_array()
    }
}

impl Scalable for CubeRole {
    fn set_scale(&self, values: [f32; 3]) {
        self.props.lock().scale = Vec3::from_array(values);
    }

    fn scale(&self) -> [f32; 3] {
        self.props.lock().scale.to_array()
    }
}

impl Colorable for CubeRole {
    fn set_color(&self, values: [f32; 4]) {
        self.props.lock().color = Color::from_array(values);

        // Fan the uniform color out across every vertex slot.
        if let Some(mesh) = self.mesh.lock().as_mut() {
            for chunk in mesh.colors.chunks_exact_mut(4) {
                chunk.copy_from_slice(&values);
            }
        }
    }

    fn color(&self) -> [f32; 4] {
        self.props.lock().color.to_array()
    }
}
