//! Stateless carriers that copy property values into and out of roles
//!
//! One carrier per semantic property kind. A carrier validates that the
//! role exposes the matching capability and that the value slice has the
//! exact expected arity before anything is copied; a failed call never
//! leaves the role partially written. Each carrier is a pure `set`/`get`
//! function pair with no state of its own.

use wick_core::{Result, WickError};

use crate::role::Role;

fn missing(kind: &str) -> WickError {
    WickError::InvalidArgument(format!("no role with a {kind} capability"))
}

fn arity(kind: &str, expected: usize, got: usize) -> WickError {
    WickError::InvalidArgument(format!("{kind} expects {expected} values, got {got}"))
}

/// Moves `(x, y, z)` translation values.
pub struct TranslationCarrier;

impl TranslationCarrier {
    pub fn set(role: Option<&dyn Role>, values: &[f32]) -> Result<()> {
        let target = role
            .and_then(Role::as_translatable)
            .ok_or_else(|| missing("translation"))?;
        let values: [f32; 3] = values
            .try_into()
            .map_err(|_| arity("translation", 3, values.len()))?;
        target.set_translation(values);
        Ok(())
    }

    pub fn get(role: Option<&dyn Role>, out: &mut [f32]) -> Result<()> {
        let target = role
            .and_then(Role::as_translatable)
            .ok_or_else(|| missing("translation"))?;
        if out.len() != 3 {
            return Err(arity("translation", 3, out.len()));
        }
        out.copy_from_slice(&target.translation());
        Ok(())
    }
}

/// Moves `(angle deg, x, y, z)` axis-angle rotation values.
pub struct RotationCarrier;

impl RotationCarrier {
    pub fn set(role: Option<&dyn Role>, values: &[f32]) -> Result<()> {
        let target = role
            .and_then(Role::as_rotatable)
            .ok_or_else(|| missing("rotation"))?;
        let values: [f32; 4] = values
            .try_into()
            .map_err(|_| arity("rotation", 4, values.len()))?;
        target.set_rotation(values);
        Ok(())
    }

    pub fn get(role: Option<&dyn Role>, out: &mut [f32]) -> Result<()> {
        let target = role
            .and_then(Role::as_rotatable)
            .ok_or_else(|| missing("rotation"))?;
        if out.len() != 4 {
            return Err(arity("rotation", 4, out.len()));
        }
        out.copy_from_slice(&target.rotation());
        Ok(())
    }
}

/// Moves `(x, y, z)` scale values.
pub struct ScaleCarrier;

impl ScaleCarrier {
    pub fn set(role: Option<&dyn Role>, values: &[f32]) -> Result<()> {
        let target = role
            .and_then(Role::as_scalable)
            .ok_or_else(|| missing("scale"))?;
        let values: [f32; 3] = values
            .try_into()
            .map_err(|_| arity("scale", 3, values.len()))?;
        target.set_scale(values);
        Ok(())
    }

    pub fn get(role: Option<&dyn Role>, out: &mut [f32]) -> Result<()> {
        let target = role
            .and_then(Role::as_scalable)
            .ok_or_else(|| missing("scale"))?;
        if out.len() != 3 {
            return Err(arity("scale", 3, out.len()));
        }
        out.copy_from_slice(&target.scale());
        Ok(())
    }
}

/// Moves RGBA uniform color values.
pub struct ColorCarrier;

impl ColorCarrier {
    pub fn set(role: Option<&dyn Role>, values: &[f32]) -> Result<()> {
        let target = role
            .and_then(Role::as_colorable)
            .ok_or_else(|| missing("color"))?;
        let values: [f32; 4] = values
            .try_into()
            .map_err(|_| arity("color", 4, values.len()))?;
        target.set_color(values);
        Ok(())
    }

    pub fn get(role: Option<&dyn Role>, out: &mut [f32]) -> Result<()> {
        let target = role
            .and_then(Role::as_colorable)
            .ok_or_else(|| missing("color"))?;
        if out.len() != 4 {
            return Err(arity("color", 4, out.len()));
        }
        out.copy_from_slice(&target.color());
        Ok(())
    }
}
