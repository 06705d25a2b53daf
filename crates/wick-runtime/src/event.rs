//! Title events and the cooperative exit flag

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// An event delivered through the delayed dispatch queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TitleEvent {
    /// Request a clean shutdown of the title.
    Quit,
    /// Title-defined event code.
    Custom(u32),
}

/// Cloneable "exit requested" flag observed by the frame driver.
///
/// The title installs a [`TitleEvent::Quit`] callback that flips this; the
/// frame loop terminates once it observes the flag set.
#[derive(Clone, Debug, Default)]
pub struct ExitFlag(Arc<AtomicBool>);

impl ExitFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_exit(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn should_exit(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_flag_starts_clear() {
        let flag = ExitFlag::new();
        assert!(!flag.should_exit());
    }

    #[test]
    fn test_clones_observe_request() {
        let flag = ExitFlag::new();
        let observer = flag.clone();
        flag.request_exit();
        assert!(observer.should_exit());
    }
}
