use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// Lifecycle of a single cancellable task (stored in state, mutated only by the reducer).
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
    pub cancel: Option<CancellationToken>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Marks `id` as the active task, returning the token of the one it replaces.
    pub fn replace(&mut self, id: TaskId, cancel: CancellationToken) -> Option<CancellationToken> {
        self.active = Some(id);
        self.cancel.replace(cancel)
    }

    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.clear();
        }
        ok
    }

    /// Clears the task, returning its token so the caller can cancel it.
    pub fn take(&mut self) -> Option<CancellationToken> {
        self.active = None;
        self.cancel.take()
    }

    pub fn clear(&mut self) {
        self.active = None;
        self.cancel = None;
    }
}
