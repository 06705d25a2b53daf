//! The actor trait - behavior-side property owner

use std::sync::Arc;

use wick_core::Result;

use crate::property::PropPart;
use crate::role::Role;

/// Behavior-side object: owns typed properties, binds to exactly one role,
/// and drives it by pushing property values.
///
/// The error policy is asymmetric. Setup paths (`set_property`, init-time
/// pushes) surface typed errors the caller must check; the steady-state
/// [`update`](Actor::update) re-push logs failures and keeps going, so one
/// bad push cannot stop the frame loop.
pub trait Actor {
    /// The bound role, if one has been attached.
    fn role(&self) -> Option<&dyn Role>;

    /// Bind the presentation role this actor drives.
    fn bind_role(&mut self, role: Arc<dyn Role>);

    /// Decode a big-endian float buffer into the named property.
    ///
    /// Fails with `WickError::UnknownProperty` for an unrecognized name
    /// and `WickError::Decode` for a buffer whose length does not match
    /// the property's arity.
    fn set_property(&mut self, name: &str, data: &[u8]) -> Result<()>;

    /// The named property. Fails with `WickError::UnknownProperty` when
    /// the name is unrecognized or nothing has been assigned under it.
    fn get_property(&self, name: &str) -> Result<&dyn PropPart>;

    /// Re-push the transform-affecting properties to the role: scale,
    /// rotation, position, in that fixed order. Best effort: failures
    /// are logged and swallowed.
    fn update(&mut self);
}
