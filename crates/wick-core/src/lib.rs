//! Wick Core - Foundational types for the Wick title runtime
//!
//! This crate provides the types every other Wick crate depends on:
//! - `WickError` / `Result` - error enum and result alias
//! - `Vec3`, `Color`, `AxisAngle` - spatial value types
//! - Column-major 4x4 matrix helpers
//! - The big-endian property wire codec

mod error;
mod math;
mod wire;

pub use error::{Result, WickError};
pub use math::{
    look_at, mat4_identity, mat4_mul, mat4_rotation, mat4_scaling, mat4_translation,
    mat4_transform_point, perspective, AxisAngle, Color, Mat4, Vec3,
};
pub use wire::{decode_floats, encode_floats};
