//! Cancellable timer bookkeeping for host-scheduled work.

use std::collections::HashMap;

/// Logical owner of a scheduled task. Each slot holds at most one live task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskSlot {
    BootTicker,
    BootCompletion,
    ToastDismiss,
}

pub trait CancelTask {
    fn cancel(&self);
}

impl CancelTask for leptos::leptos_dom::helpers::TimeoutHandle {
    fn cancel(&self) {
        self.clear();
    }
}

impl CancelTask for leptos::leptos_dom::helpers::IntervalHandle {
    fn cancel(&self) {
        self.clear();
    }
}

/// Slot-keyed set of live tasks. Dropping the scope cancels everything it still holds.
#[derive(Default)]
pub struct TaskScope {
    tasks: HashMap<TaskSlot, Box<dyn CancelTask>>,
}

impl TaskScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `task` in `slot`, cancelling whatever occupied it.
    pub fn replace(&mut self, slot: TaskSlot, task: impl CancelTask + 'static) {
        if let Some(previous) = self.tasks.insert(slot, Box::new(task)) {
            previous.cancel();
        }
    }

    pub fn cancel(&mut self, slot: TaskSlot) -> bool {
        match self.tasks.remove(&slot) {
            Some(task) => {
                task.cancel();
                true
            }
            None => false,
        }
    }

    pub fn cancel_all(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.cancel();
        }
    }

    #[cfg(test)]
    fn is_active(&self, slot: TaskSlot) -> bool {
        self.tasks.contains_key(&slot)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.tasks.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl Drop for TaskScope {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
