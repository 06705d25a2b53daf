//! An ordered, named bucket of tasks

use wick_core::Result;

use crate::task::{Task, TaskId};

/// An ordered collection of tasks executed together within a frame.
///
/// Insertion order is execution order. All tasks in a phase run before any
/// task in the next phase of the owning scheduler.
pub struct Phase {
    name: String,
    tasks: Vec<Task>,
}

impl Phase {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tasks: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a task, returning its handle.
    pub fn add_task(&mut self, task: Task) -> TaskId {
        let id = task.id();
        self.tasks.push(task);
        id
    }

    /// Remove a task if it is present. Removing an absent task is a no-op;
    /// actor disposal relies on these remove-if-present semantics.
    pub fn delete_task(&mut self, id: TaskId) {
        self.tasks.retain(|task| task.id() != id);
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Invoke every task body once, in insertion order.
    ///
    /// The first failing task aborts the remaining tasks of this call and
    /// its error is returned as-is; nothing is caught or retried here.
    pub fn run(&mut self) -> Result<()> {
        log::trace!("phase '{}': {} task(s)", self.name, self.tasks.len());
        for task in &mut self.tasks {
            task.invoke()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wick_core::WickError;

    fn recording_task(name: &str, trace: &Rc<RefCell<Vec<String>>>) -> Task {
        let trace = trace.clone();
        let label = name.to_string();
        Task::new(
            name,
            Box::new(move || {
                trace.borrow_mut().push(label.clone());
                Ok(())
            }),
        )
    }

    #[test]
    fn test_tasks_run_in_insertion_order() {
        let trace = Rc::new(RefCell::new(Vec::new()));
        let mut phase = Phase::new("actor");
        phase.add_task(recording_task("first", &trace));
        phase.add_task(recording_task("second", &trace));
        phase.add_task(recording_task("third", &trace));

        phase.run().unwrap();
        assert_eq!(*trace.borrow(), ["first", "second", "third"]);
    }

    #[test]
    fn test_deleted_task_never_runs_again() {
        let trace = Rc::new(RefCell::new(Vec::new()));
        let mut phase = Phase::new("actor");
        let keep = recording_task("keep", &trace);
        let drop = recording_task("drop", &trace);
        let drop_id = drop.id();
        phase.add_task(keep);
        phase.add_task(drop);

        phase.run().unwrap();
        phase.delete_task(drop_id);
        phase.run().unwrap();

        assert_eq!(*trace.borrow(), ["keep", "drop", "keep"]);
    }

    #[test]
    fn test_delete_absent_task_is_noop() {
        let trace = Rc::new(RefCell::new(Vec::new()));
        let mut phase = Phase::new("actor");
        phase.add_task(recording_task("only", &trace));

        let unrelated = Task::new("unrelated", Box::new(|| Ok(())));
        phase.delete_task(unrelated.id());

        assert_eq!(phase.task_count(), 1);
    }

    #[test]
    fn test_failing_task_aborts_rest_of_phase() {
        let trace = Rc::new(RefCell::new(Vec::new()));
        let mut phase = Phase::new("actor");
        phase.add_task(recording_task("before", &trace));
        phase.add_task(Task::new(
            "boom",
            Box::new(|| Err(WickError::InvalidArgument("boom".into()))),
        ));
        phase.add_task(recording_task("after", &trace));

        assert!(phase.run().is_err());
        assert_eq!(*trace.borrow(), ["before"]);
    }
}
