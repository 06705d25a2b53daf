//! Spatial value types and column-major 4x4 matrix helpers

use serde::{Deserialize, Serialize};

/// A 3D vector
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
    pub const ONE: Self = Self {
        x: 1.0,
        y: 1.0,
        z: 1.0,
    };
    pub const UP: Self = Self {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn from_array(arr: [f32; 3]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }

    pub fn to_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len > 0.0 {
            Self {
                x: self.x / len,
                y: self.y / len,
                z: self.z / len,
            }
        } else {
            Self::ZERO
        }
    }

    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }
}

/// RGBA color
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_array(arr: [f32; 4]) -> Self {
        Self {
            r: arr[0],
            g: arr[1],
            b: arr[2],
            a: arr[3],
        }
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Rotation around an arbitrary axis.
///
/// The wire layout is `[angle, x, y, z]` with the angle in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisAngle {
    /// Angle in degrees
    pub angle: f32,
    pub axis: Vec3,
}

impl AxisAngle {
    pub const fn new(angle: f32, axis: Vec3) -> Self {
        Self { angle, axis }
    }

    pub fn from_array(arr: [f32; 4]) -> Self {
        Self {
            angle: arr[0],
            axis: Vec3::new(arr[1], arr[2], arr[3]),
        }
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.angle, self.axis.x, self.axis.y, self.axis.z]
    }
}

impl Default for AxisAngle {
    fn default() -> Self {
        Self {
            angle: 0.0,
            axis: Vec3::UP,
        }
    }
}

/// A 4x4 column-major matrix: `m[column][row]`, translation in `m[3]`.
pub type Mat4 = [[f32; 4]; 4];

pub fn mat4_identity() -> Mat4 {
    let mut m = [[0.0; 4]; 4];
    for (i, col) in m.iter_mut().enumerate() {
        col[i] = 1.0;
    }
    m
}

/// Multiply two 4x4 column-major matrices. `mat4_mul(a, b)` applies `b`
/// first when transforming column vectors.
pub fn mat4_mul(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut result = [[0.0; 4]; 4];
    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[k][j] * b[i][k];
            }
        }
    }
    result
}

pub fn mat4_translation(t: Vec3) -> Mat4 {
    let mut m = mat4_identity();
    m[3][0] = t.x;
    m[3][1] = t.y;
    m[3][2] = t.z;
    m
}

pub fn mat4_scaling(s: Vec3) -> Mat4 {
    let mut m = mat4_identity();
    m[0][0] = s.x;
    m[1][1] = s.y;
    m[2][2] = s.z;
    m
}

/// Rotation matrix from an axis-angle pair. The axis is normalized here;
/// a degenerate zero axis yields the identity.
pub fn mat4_rotation(r: AxisAngle) -> Mat4 {
    let axis = r.axis.normalized();
    if axis == Vec3::ZERO {
        return mat4_identity();
    }

    let (x, y, z) = (axis.x, axis.y, axis.z);
    let rad = r.angle.to_radians();
    let (s, c) = rad.sin_cos();
    let t = 1.0 - c;

    [
        [t * x * x + c, t * x * y + s * z, t * x * z - s * y, 0.0],
        [t * x * y - s * z, t * y * y + c, t * y * z + s * x, 0.0],
        [t * x * z + s * y, t * y * z - s * x, t * z * z + c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Right-handed look-at view matrix.
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let f = Vec3::new(target.x - eye.x, target.y - eye.y, target.z - eye.z).normalized();
    let s = f.cross(&up).normalized();
    let u = s.cross(&f);

    [
        [s.x, u.x, -f.x, 0.0],
        [s.y, u.y, -f.y, 0.0],
        [s.z, u.z, -f.z, 0.0],
        [-s.dot(&eye), -u.dot(&eye), f.dot(&eye), 1.0],
    ]
}

/// Right-handed perspective projection with a [-1, 1] clip-space depth
/// range. `fov_y` is in degrees.
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y.to_radians() * 0.5).tan();
    let mut m = [[0.0; 4]; 4];
    m[0][0] = f / aspect;
    m[1][1] = f;
    m[2][2] = (far + near) / (near - far);
    m[2][3] = -1.0;
    m[3][2] = (2.0 * far * near) / (near - far);
    m
}

/// Transform a 3D point by a 4x4 column-major matrix (with perspective divide).
pub fn mat4_transform_point(m: &Mat4, p: [f32; 3]) -> [f32; 3] {
    let x = m[0][0] * p[0] + m[1][0] * p[1] + m[2][0] * p[2] + m[3][0];
    let y = m[0][1] * p[0] + m[1][1] * p[1] + m[2][1] * p[2] + m[3][1];
    let z = m[0][2] * p[0] + m[1][2] * p[1] + m[2][2] * p[2] + m[3][2];
    let w = m[0][3] * p[0] + m[1][3] * p[1] + m[2][3] * p[2] + m[3][3];

    if w.abs() < 1e-10 {
        [x, y, z]
    } else {
        [x / w, y / w, z / w]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec_near(a: [f32; 3], b: [f32; 3]) {
        for i in 0..3 {
            assert!((a[i] - b[i]).abs() < 1e-5, "{a:?} != {b:?}");
        }
    }

    #[test]
    fn test_vec3_roundtrip() {
        let v = Vec3::from_array([1.0, 2.0, 3.0]);
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_axis_angle_wire_layout() {
        let r = AxisAngle::from_array([90.0, 0.0, 1.0, 0.0]);
        assert_eq!(r.angle, 90.0);
        assert_eq!(r.axis, Vec3::UP);
        assert_eq!(r.to_array(), [90.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_identity_multiply() {
        let t = mat4_translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(mat4_mul(&mat4_identity(), &t), t);
        assert_eq!(mat4_mul(&t, &mat4_identity()), t);
    }

    #[test]
    fn test_translation_applies() {
        let t = mat4_translation(Vec3::new(1.0, -2.0, 0.5));
        assert_vec_near(mat4_transform_point(&t, [0.0, 0.0, 0.0]), [1.0, -2.0, 0.5]);
    }

    #[test]
    fn test_rotation_quarter_turn_about_z() {
        // +x rotates onto +y
        let r = mat4_rotation(AxisAngle::new(90.0, Vec3::new(0.0, 0.0, 1.0)));
        assert_vec_near(mat4_transform_point(&r, [1.0, 0.0, 0.0]), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_rotation_zero_axis_is_identity() {
        let r = mat4_rotation(AxisAngle::new(45.0, Vec3::ZERO));
        assert_eq!(r, mat4_identity());
    }

    #[test]
    fn test_compose_right_to_left() {
        // translate . scale: scaling happens first on column vectors
        let m = mat4_mul(
            &mat4_translation(Vec3::new(1.0, 0.0, 0.0)),
            &mat4_scaling(Vec3::new(2.0, 2.0, 2.0)),
        );
        assert_vec_near(mat4_transform_point(&m, [1.0, 1.0, 1.0]), [3.0, 2.0, 2.0]);
    }

    #[test]
    fn test_look_at_centers_target() {
        let view = look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::UP);
        // The target lands on the -z view axis at its eye distance.
        assert_vec_near(mat4_transform_point(&view, [0.0, 0.0, 0.0]), [0.0, 0.0, -5.0]);
    }
}
