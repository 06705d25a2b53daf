//! The stage - presentation driver owning the set

use std::cell::RefCell;
use std::rc::Rc;

use wick_core::{Result, WickError};
use wick_runtime::{PhaseId, Scheduler, Task, TaskId};

use crate::set::Set;

/// The stage owns the presentation surface dimensions and the set, and
/// contributes the render-side phase work: a set-phase task that refreshes
/// role cameras and a stage-phase task that composes every role.
///
/// The actual draw submission belongs to the rendering backend; the stage
/// stops at handing each role a fresh MVP.
pub struct Stage {
    width: u32,
    height: u32,
    set: Rc<RefCell<Set>>,
}

impl Stage {
    pub fn new(width: u32, height: u32) -> Self {
        let aspect = width as f32 / height as f32;
        Self {
            width,
            height,
            set: Rc::new(RefCell::new(Set::new(aspect))),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Shared handle to the set, for attaching roles and moving the
    /// camera.
    pub fn set(&self) -> Rc<RefCell<Set>> {
        self.set.clone()
    }

    /// Register the stage's per-frame work into the scheduler.
    ///
    /// Fails with a configuration error when either phase has not been
    /// created yet; phases must exist before presentation wires itself
    /// in, the same contract actors follow.
    pub fn register_phase_tasks(
        &self,
        scheduler: &mut Scheduler,
        set_phase: PhaseId,
        stage_phase: PhaseId,
    ) -> Result<(TaskId, TaskId)> {
        // Validate both phases up front so a failure registers nothing.
        if scheduler.phase(set_phase).is_none() {
            return Err(WickError::Configuration("set phase does not exist".into()));
        }
        if scheduler.phase(stage_phase).is_none() {
            return Err(WickError::Configuration(
                "stage phase does not exist".into(),
            ));
        }

        let set = self.set.clone();
        let camera_task = Task::new(
            "refresh set cameras",
            Box::new(move || {
                set.borrow().refresh_cameras();
                Ok(())
            }),
        );
        let camera_id = scheduler
            .phase_mut(set_phase)
            .ok_or_else(|| WickError::Configuration("set phase does not exist".into()))?
            .add_task(camera_task);

        let set = self.set.clone();
        let render_task = Task::new(
            "compose roles",
            Box::new(move || {
                set.borrow().render();
                Ok(())
            }),
        );
        let render_id = scheduler
            .phase_mut(stage_phase)
            .ok_or_else(|| WickError::Configuration("stage phase does not exist".into()))?
            .add_task(render_task);

        log::debug!("stage registered set/stage phase tasks");
        Ok((camera_id, render_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::CubeRole;
    use std::sync::Arc;
    use wick_cast::Role;
    use wick_core::mat4_identity;
    use wick_runtime::Phase;

    #[test]
    fn test_registered_tasks_compose_roles() {
        let mut scheduler = Scheduler::new(2);
        let set_phase = scheduler.add_phase(Phase::new("set")).unwrap();
        let stage_phase = scheduler.add_phase(Phase::new("stage")).unwrap();

        let stage = Stage::new(320, 480);
        let role = Arc::new(CubeRole::new());
        role.init().unwrap();
        stage.set().borrow_mut().attach_role(role.clone());
        stage
            .register_phase_tasks(&mut scheduler, set_phase, stage_phase)
            .unwrap();

        scheduler.run().unwrap();
        assert_ne!(role.mvp_matrix(), mat4_identity());
    }

    #[test]
    fn test_missing_phase_is_configuration_error() {
        let mut scheduler = Scheduler::new(6);
        let only = scheduler.add_phase(Phase::new("set")).unwrap();
        let stage = Stage::new(320, 480);

        // Only one phase registered; the stage phase handle is bogus.
        let missing = {
            let mut other = Scheduler::new(2);
            other.add_phase(Phase::new("a")).unwrap();
            other.add_phase(Phase::new("b")).unwrap()
        };
        assert!(matches!(
            stage.register_phase_tasks(&mut scheduler, only, missing),
            Err(WickError::Configuration(_))
        ));
        // The failure registered nothing.
        assert_eq!(scheduler.phase(only).unwrap().task_count(), 0);
    }

    #[test]
    fn test_aspect_follows_dimensions() {
        let stage = Stage::new(320, 480);
        assert!((stage.aspect() - 320.0 / 480.0).abs() < 1e-6);
    }
}
