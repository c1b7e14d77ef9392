//! Share feedback state.

use crate::common::TaskState;

/// What the share button currently shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CopyStatus {
    #[default]
    Idle,
    /// Last copy succeeded; reverts when the feedback timer fires.
    Copied,
    /// Last copy failed; reverts the same way.
    Failed,
}

/// Transient copy feedback for one raid card.
///
/// At most one revert timer is pending per card. A newer copy replaces it.
#[derive(Debug, Default)]
pub struct CopyFeedback {
    pub status: CopyStatus,
    pub timer: TaskState,
}

impl CopyFeedback {
    pub fn is_copied(&self) -> bool {
        self.status == CopyStatus::Copied
    }

    pub fn label(&self) -> &'static str {
        match self.status {
            CopyStatus::Idle => "공유",
            CopyStatus::Copied => "복사됨",
            CopyStatus::Failed => "복사 실패",
        }
    }
}
