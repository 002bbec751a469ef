//! Work deferred until after the next render
//!
//! Scrolling needs the list geometry of the frame that shows the change, so
//! those tasks queue here and run from `Combobox::flush_frame`.

use std::collections::VecDeque;

use crate::suggestions::SuggestionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameTask {
    ScrollIntoView(SuggestionId),
    /// Keep the loading row in view
    ScrollToBottom,
    FocusInput,
}

#[derive(Debug, Default)]
pub struct FrameQueue {
    tasks: VecDeque<FrameTask>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `task`; a task already waiting for the same frame is not repeated
    pub fn schedule(&mut self, task: FrameTask) {
        if let FrameTask::ScrollIntoView(_) = task {
            self.tasks
                .retain(|queued| !matches!(queued, FrameTask::ScrollIntoView(_)));
        } else if self.tasks.contains(&task) {
            return;
        }
        self.tasks.push_back(task);
    }

    pub fn take(&mut self) -> Vec<FrameTask> {
        self.tasks.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
