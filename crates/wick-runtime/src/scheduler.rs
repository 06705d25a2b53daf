//! The fixed-capacity phase scheduler

use std::fmt;

use wick_core::{Result, WickError};

use crate::phase::Phase;

/// Identifies a phase slot within one scheduler.
///
/// Handles are handed out by [`Scheduler::add_phase`] in registration
/// order; the frame driver passes them to whoever needs to register tasks
/// (actors, the stage), so nothing reaches for a global phase.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct PhaseId(usize);

impl PhaseId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Debug for PhaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PhaseId({})", self.0)
    }
}

/// An ordered sequence of phases, fixed in capacity at construction.
///
/// One `run()` call executes every task in every registered phase, in
/// phase order, once. Structural changes (tasks added or removed) made
/// while a phase is mid-run apply from the next `run()` call.
pub struct Scheduler {
    capacity: usize,
    phases: Vec<Phase>,
}

impl Scheduler {
    /// Create a scheduler with `capacity` empty phase slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            phases: Vec::with_capacity(capacity),
        }
    }

    /// Append a phase, failing once the fixed capacity is exhausted.
    pub fn add_phase(&mut self, phase: Phase) -> Result<PhaseId> {
        if self.phases.len() >= self.capacity {
            return Err(WickError::Configuration(format!(
                "scheduler already holds {} phases, cannot add '{}'",
                self.capacity,
                phase.name()
            )));
        }

        log::debug!("registered phase '{}'", phase.name());
        self.phases.push(phase);
        Ok(PhaseId(self.phases.len() - 1))
    }

    pub fn phase_mut(&mut self, id: PhaseId) -> Option<&mut Phase> {
        self.phases.get_mut(id.0)
    }

    pub fn phase(&self, id: PhaseId) -> Option<&Phase> {
        self.phases.get(id.0)
    }

    pub fn phase_count(&self) -> usize {
        self.phases.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Execute every registered phase in registration order.
    ///
    /// Running with fewer phases than the declared capacity is not an
    /// error; unfilled slots are a no-op pass. A task failure propagates
    /// out immediately: the failing phase skips its remaining tasks,
    /// later phases do not run this call, and the frame driver decides
    /// whether to keep going next frame.
    pub fn run(&mut self) -> Result<()> {
        for phase in &mut self.phases {
            phase.run()?;
        }
        Ok(())
    }
}
