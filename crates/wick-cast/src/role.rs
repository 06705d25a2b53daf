//! The role trait and per-kind capability interfaces

use wick_core::{Mat4, Result};

/// Presentation-side object driven by an actor's properties.
///
/// A role owns the authoritative transform/appearance state the renderer
/// consumes. Values arrive one field at a time through carriers, so a
/// renderer reading mid-update may observe a partially updated transform;
/// callers needing atomicity push everything in a phase that runs before
/// the role/stage phases. Field state is shared with the render side and
/// must sit behind the role's lock, held only for a single field copy.
pub trait Role: Send + Sync {
    /// Allocate render-side state. A second call replaces the previous
    /// allocation; there is no use-count tracking.
    fn init(&self) -> Result<()>;

    /// Release render-side state so it can be reclaimed.
    fn dispose(&self);

    /// Receive the owning set's camera block. Called at attach time and
    /// again whenever the set's camera moves.
    fn set_camera(&self, view: Mat4, projection: Mat4);

    /// Compose this frame's model and camera matrices for the backend.
    fn render(&self);

    /// Capability accessors. A role variant exposes the property kinds it
    /// understands and leaves the rest at the default `None`.
    fn as_translatable(&self) -> Option<&dyn Translatable> {
        None
    }

    fn as_rotatable(&self) -> Option<&dyn Rotatable> {
        None
    }

    fn as_scalable(&self) -> Option<&dyn Scalable> {
        None
    }

    fn as_colorable(&self) -> Option<&dyn Colorable> {
        None
    }
}

/// Roles that carry a translation: `(x, y, z)`.
pub trait Translatable {
    fn set_translation(&self, values: [f32; 3]);
    fn translation(&self) -> [f32; 3];
}

/// Roles that carry an axis-angle rotation: `(angle deg, x, y, z)`.
pub trait Rotatable {
    fn set_rotation(&self, values: [f32; 4]);
    fn rotation(&self) -> [f32; 4];
}

/// Roles that carry a scale: `(x, y, z)`.
pub trait Scalable {
    fn set_scale(&self, values: [f32; 3]);
    fn scale(&self) -> [f32; 3];
}

/// Roles that carry a uniform RGBA color.
///
/// Setting the color fans the single value out across every per-vertex
/// color slot the role's geometry holds.
pub trait Colorable {
    fn set_color(&self, values: [f32; 4]);
    fn color(&self) -> [f32; 4];
}
