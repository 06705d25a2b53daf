//! A named unit of per-frame work, owned by exactly one phase

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use wick_core::Result;

/// Global counter for generating unique task IDs
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// A stable handle for a registered task.
///
/// Handed back by [`Phase::add_task`](crate::Phase::add_task) so the owner
/// can remove the task later without keeping a reference to it.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct TaskId(u64);

impl TaskId {
    pub(crate) fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TaskId({})", self.0)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The invocable body of a task.
pub type TaskFn = Box<dyn FnMut() -> Result<()>>;

/// A unit of work with a name and an invocable body.
///
/// A task either completes or fails within one call; there is no yield
/// point inside a body.
pub struct Task {
    id: TaskId,
    name: String,
    body: TaskFn,
}

impl Task {
    pub fn new(name: impl Into<String>, body: TaskFn) -> Self {
        Self {
            id: TaskId::next(),
            name: name.into(),
            body,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn invoke(&mut self) -> Result<()> {
        (self.body)()
    }
}

impl fmt::Debug for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = Task::new("a", Box::new(|| Ok(())));
        let b = Task::new("b", Box::new(|| Ok(())));
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_invoke_runs_body() {
        use std::cell::Cell;
        use std::rc::Rc;

        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let mut task = Task::new(
            "count",
            Box::new(move || {
                counter.set(counter.get() + 1);
                Ok(())
            }),
        );

        task.invoke().unwrap();
        task.invoke().unwrap();
        assert_eq!(hits.get(), 2);
    }
}
