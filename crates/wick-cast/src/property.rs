//! Typed property holders and the push/pull protocol
//!
//! Each holder owns one fixed-arity float vector and knows which carrier
//! moves it. `push` copies the actor-side value into the bound role;
//! `pull` reads the role's current value back. A holder never touches the
//! role directly, so actors stay independent of concrete role types.

use wick_core::{decode_floats, Result, WickError};

use crate::actor::Actor;
use crate::carrier::{ColorCarrier, RotationCarrier, ScaleCarrier, TranslationCarrier};

/// A fixed-arity float vector an actor owns and propagates to its role.
pub trait PropPart {
    /// The current values.
    fn values(&self) -> &[f32];

    /// Replace the values wholesale. The arity is fixed per kind and
    /// validated on every set.
    fn set_values(&mut self, values: &[f32]) -> Result<()>;

    /// Copy the values into the actor's bound role through the matching
    /// carrier.
    fn push(&self, actor: &dyn Actor) -> Result<()>;

    /// Read the bound role's current values back into this property.
    fn pull(&mut self, actor: &dyn Actor) -> Result<()>;
}

/// Position property: `(x, y, z)` translation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PositionProperty {
    values: [f32; 3],
}

impl PositionProperty {
    pub fn new(values: [f32; 3]) -> Self {
        Self { values }
    }

    /// Decode from the big-endian property wire format.
    pub fn decode(data: &[u8]) -> Result<Self> {
        Ok(Self {
            values: decode_floats(data)?,
        })
    }
}

impl PropPart for PositionProperty {
    fn values(&self) -> &[f32] {
        &self.values
    }

    fn set_values(&mut self, values: &[f32]) -> Result<()> {
        self.values = values
            .try_into()
            .map_err(|_| WickError::InvalidArgument(format!(
                "position expects 3 values, got {}",
                values.len()
            )))?;
        Ok(())
    }

    fn push(&self, actor: &dyn Actor) -> Result<()> {
        TranslationCarrier::set(actor.role(), &self.values)
    }

    fn pull(&mut self, actor: &dyn Actor) -> Result<()> {
        TranslationCarrier::get(actor.role(), &mut self.values)
    }
}

/// Rotation property: `(angle deg, x, y, z)` about an arbitrary axis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RotationProperty {
    values: [f32; 4],
}

impl RotationProperty {
    pub fn new(values: [f32; 4]) -> Self {
        Self { values }
    }

    pub fn decode(data: &[u8]) -> Result<Self> {
        Ok(Self {
            values: decode_floats(data)?,
        })
    }

    /// The angle component in degrees.
    pub fn angle(&self) -> f32 {
        self.values[0]
    }

    /// Overwrite only the angle component, leaving the axis untouched.
    pub fn set_angle(&mut self, degrees: f32) {
        self.values[0] = degrees;
    }
}

impl PropPart for RotationProperty {
    fn values(&self) -> &[f32] {
        &self.values
    }

    fn set_values(&mut self, values: &[f32]) -> Result<()> {
        self.values = values
            .try_into()
            .map_err(|_| WickError::InvalidArgument(format!(
                "rotation expects 4 values, got {}",
                values.len()
            )))?;
        Ok(())
    }

    fn push(&self, actor: &dyn Actor) -> Result<()> {
        RotationCarrier::set(actor.role(), &self.values)
    }

    fn pull(&mut self, actor: &dyn Actor) -> Result<()> {
        RotationCarrier::get(actor.role(), &mut self.values)
    }
}

/// Scale property: `(x, y, z)`.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleProperty {
    values: [f32; 3],
}

impl ScaleProperty {
    pub fn new(values: [f32; 3]) -> Self {
        Self { values }
    }

    pub fn decode(data: &[u8]) -> Result<Self> {
        Ok(Self {
            values: decode_floats(data)?,
        })
    }
}

impl Default for ScaleProperty {
    fn default() -> Self {
        Self {
            values: [1.0, 1.0, 1.0],
        }
    }
}

impl PropPart for ScaleProperty {
    fn values(&self) -> &[f32] {
        &self.values
    }

    fn set_values(&mut self, values: &[f32]) -> Result<()> {
        self.values = values
            .try_into()
            .map_err(|_| WickError::InvalidArgument(format!(
                "scale expects 3 values, got {}",
                values.len()
            )))?;
        Ok(())
    }

    fn push(&self, actor: &dyn Actor) -> Result<()> {
        ScaleCarrier::set(actor.role(), &self.values)
    }

    fn pull(&mut self, actor: &dyn Actor) -> Result<()> {
        ScaleCarrier::get(actor.role(), &mut self.values)
    }
}

/// Color property: RGBA, applied uniformly across the role's geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorProperty {
    values: [f32; 4],
}

impl ColorProperty {
    pub fn new(values: [f32; 4]) -> Self {
        Self { values }
    }

    pub fn decode(data: &[u8]) -> Result<Self> {
        Ok(Self {
            values: decode_floats(data)?,
        })
    }
}

impl Default for ColorProperty {
    fn default() -> Self {
        Self {
            values: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

impl PropPart for ColorProperty {
    fn values(&self) -> &[f32] {
        &self.values
    }

    fn set_values(&mut self, values: &[f32]) -> Result<()> {
        self.values = values
            .try_into()
            .map_err(|_| WickError::InvalidArgument(format!(
                "color expects 4 values, got {}",
                values.len()
            )))?;
        Ok(())
    }

    fn push(&self, actor: &dyn Actor) -> Result<()> {
        ColorCarrier::set(actor.role(), &self.values)
    }

    fn pull(&mut self, actor: &dyn Actor) -> Result<()> {
        ColorCarrier::get(actor.role(), &mut self.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{TestActor, TestRole};
    use std::sync::Arc;
    use wick_core::encode_floats;

    #[test]
    fn test_decode_roundtrip() {
        let prop = PositionProperty::decode(&encode_floats(&[1.5, -2.0, 0.25])).unwrap();
        assert_eq!(prop.values(), [1.5, -2.0, 0.25]);
    }

    #[test]
    fn test_decode_wrong_length_fails() {
        assert!(matches!(
            RotationProperty::decode(&[0u8; 12]),
            Err(WickError::Decode(_))
        ));
    }

    #[test]
    fn test_set_values_validates_arity() {
        let mut prop = ScaleProperty::default();
        assert!(matches!(
            prop.set_values(&[1.0, 2.0]),
            Err(WickError::InvalidArgument(_))
        ));
        // A failed set leaves the previous values intact.
        assert_eq!(prop.values(), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_push_lands_in_role() {
        let role = Arc::new(TestRole::default());
        let actor = TestActor::bound(role.clone());

        let prop = PositionProperty::new([3.0, 4.0, 5.0]);
        prop.push(&actor).unwrap();
        assert_eq!(*role.translation.lock().unwrap(), [3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_pull_reads_role_back() {
        let role = Arc::new(TestRole::default());
        *role.rotation.lock().unwrap() = [90.0, 0.0, 1.0, 0.0];
        let actor = TestActor::bound(role);

        let mut prop = RotationProperty::default();
        prop.pull(&actor).unwrap();
        assert_eq!(prop.values(), [90.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_push_without_role_is_invalid_argument() {
        let actor = TestActor::unbound();
        let prop = ColorProperty::default();
        assert!(matches!(
            prop.push(&actor),
            Err(WickError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_equality_is_exact() {
        let a = RotationProperty::new([45.0, 1.0, 1.0, 1.0]);
        let b = RotationProperty::new([45.0, 1.0, 1.0, 1.0]);
        let c = RotationProperty::new([45.000001, 1.0, 1.0, 1.0]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_set_angle_leaves_axis() {
        let mut prop = RotationProperty::new([0.0, 1.0, 1.0, 1.0]);
        prop.set_angle(180.0);
        assert_eq!(prop.values(), [180.0, 1.0, 1.0, 1.0]);
    }
}
