//! The spinning-cube actor

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use wick_cast::{
    Actor, ColorProperty, PositionProperty, PropPart, Role, RotationProperty, ScaleProperty,
};
use wick_core::{Result, WickError};
use wick_runtime::{PhaseId, Scheduler, Task, TaskId, TitleClock};

/// Default milliseconds per full revolution.
pub const DEFAULT_SPIN_PERIOD_MS: u64 = 10_000;

/// The behavior side of the sample title.
///
/// Owns four optional properties keyed `"position"`, `"orientation"`,
/// `"scale"` and `"color"`, drives its bound role by pushing them, and
/// spins: once per frame the behavior task recomputes the rotation angle
/// from the title clock and pushes only the rotation.
pub struct CubeActor {
    position: Option<PositionProperty>,
    orientation: Option<RotationProperty>,
    scale: Option<ScaleProperty>,
    color: Option<ColorProperty>,
    role: Option<Arc<dyn Role>>,
    behave_task: Option<TaskId>,
    spin_period_ms: u64,
}

impl Default for CubeActor {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeActor {
    pub fn new() -> Self {
        Self::with_spin_period(DEFAULT_SPIN_PERIOD_MS)
    }

    /// An actor completing one revolution every `spin_period_ms`
    /// milliseconds.
    pub fn with_spin_period(spin_period_ms: u64) -> Self {
        Self {
            position: None,
            orientation: None,
            scale: None,
            color: None,
            role: None,
            behave_task: None,
            spin_period_ms: spin_period_ms.max(1),
        }
    }

    /// The rotation angle for a given uptime: a linear ramp that wraps
    /// exactly at the period.
    fn spin_angle(period_ms: u64, now_ms: u64) -> f32 {
        (360.0 / period_ms as f32) * ((now_ms % period_ms) as f32)
    }

    /// Advance the simulation one step: recompute the rotation angle from
    /// the sampled clock, then propagate only what changed.
    ///
    /// Without an orientation property there is nothing to spin and the
    /// call is a no-op. The push is best effort; a failure is logged and
    /// swallowed.
    pub fn behave(&mut self, now_ms: u64) {
        let angle = Self::spin_angle(self.spin_period_ms, now_ms);
        let Some(orientation) = self.orientation.as_mut() else {
            return;
        };
        orientation.set_angle(angle);

        if let Some(orientation) = self.orientation.as_ref() {
            if let Err(err) = orientation.push(&*self) {
                log::warn!("rotation push failed: {err}");
            }
        }
    }

    /// Push every assigned property to the bound role, then register the
    /// behavior task into the actor phase.
    ///
    /// Init-time pushes are strict: the first failure aborts setup and
    /// surfaces to the caller. Fails with a configuration error when the
    /// actor phase has not been created. Re-initializing replaces any
    /// previous behavior task, so at most one is ever outstanding.
    pub fn init(
        actor: &Rc<RefCell<CubeActor>>,
        scheduler: &mut Scheduler,
        actor_phase: PhaseId,
        clock: TitleClock,
    ) -> Result<()> {
        {
            let this = actor.borrow();
            if let Some(color) = &this.color {
                color.push(&*this)?;
            }
            if let Some(scale) = &this.scale {
                scale.push(&*this)?;
            }
            if let Some(orientation) = &this.orientation {
                orientation.push(&*this)?;
            }
            if let Some(position) = &this.position {
                position.push(&*this)?;
            }
        }

        let phase = scheduler
            .phase_mut(actor_phase)
            .ok_or_else(|| WickError::Configuration("actor phase does not exist".into()))?;

        if let Some(previous) = actor.borrow_mut().behave_task.take() {
            phase.delete_task(previous);
        }

        let behaving = Rc::clone(actor);
        let task = Task::new(
            "cube behave",
            Box::new(move || {
                behaving.borrow_mut().behave(clock.uptime_millis());
                Ok(())
            }),
        );
        actor.borrow_mut().behave_task = Some(phase.add_task(task));
        Ok(())
    }

    /// Remove the behavior task from the actor phase. Fails with a
    /// configuration error when the phase does not exist.
    pub fn dispose(&mut self, scheduler: &mut Scheduler, actor_phase: PhaseId) -> Result<()> {
        let phase = scheduler
            .phase_mut(actor_phase)
            .ok_or_else(|| WickError::Configuration("actor phase does not exist".into()))?;

        if let Some(task) = self.behave_task.take() {
            phase.delete_task(task);
        }
        Ok(())
    }
}

impl Actor for CubeActor {
    fn role(&self) -> Option<&dyn Role> {
        self.role.as_ref().map(|role| role.as_ref() as &dyn Role)
    }

    fn bind_role(&mut self, role: Arc<dyn Role>) {
        self.role = Some(role);
    }

    fn set_property(&mut self, name: &str, data: &[u8]) -> Result<()> {
        match name {
            "position" => self.position = Some(PositionProperty::decode(data)?),
            "orientation" => self.orientation = Some(RotationProperty::decode(data)?),
            "scale" => self.scale = Some(ScaleProperty::decode(data)?),
            "color" => self.color = Some(ColorProperty::decode(data)?),
            _ => return Err(WickError::UnknownProperty(name.to_string())),
        }
        Ok(())
    }

    fn get_property(&self, name: &str) -> Result<&dyn PropPart> {
        let part: Option<&dyn PropPart> = match name {
            "position" => self.position.as_ref().map(|p| p as &dyn PropPart),
            "orientation" => self.orientation.as_ref().map(|p| p as &dyn PropPart),
            "scale" => self.scale.as_ref().map(|p| p as &dyn PropPart),
            "color" => self.color.as_ref().map(|p| p as &dyn PropPart),
            _ => None,
        };
        part.ok_or_else(|| WickError::UnknownProperty(name.to_string()))
    }

    fn update(&mut self) {
        // Transform-affecting properties only, in a fixed order; failures
        // must not stop the frame loop.
        let pushes: [(&str, Option<&dyn PropPart>); 3] = [
            ("scale", self.scale.as_ref().map(|p| p as &dyn PropPart)),
            (
                "orientation",
                self.orientation.as_ref().map(|p| p as &dyn PropPart),
            ),
            ("position", self.position.as_ref().map(|p| p as &dyn PropPart)),
        ];
        for (name, part) in pushes {
            if let Some(part) = part {
                if let Err(err) = part.push(&*self) {
                    log::warn!("{name} push failed: {err}");
                }
            }
        }
    }
}
