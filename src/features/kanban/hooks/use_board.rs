use leptos::prelude::*;
use crate::core::models::{ColumnId, DragItem, DragSession, TaskId};
use crate::core::services::{Board, BoardConfig};

/// Reactive owner of the board. The methods here are the only mutation
/// entry points the components get.
#[derive(Clone, Copy)]
pub struct BoardHook {
    pub board: RwSignal<Board>,
}

pub fn use_board(config: &BoardConfig) -> BoardHook {
    let board = RwSignal::new(Board::from_config(config));
    if !config.initial_columns.is_empty() {
        web_sys::console::log_1(&format!("Seeded board with {} columns", config.initial_columns.len()).into());
    }
    BoardHook { board }
}

impl BoardHook {
    pub fn column_ids(&self) -> Vec<ColumnId> {
        self.board.with(|b| b.column_ids())
    }

    pub fn create_column(&self) {
        if let Some(id) = self.board.try_update(|b| b.create_column()) {
            web_sys::console::log_1(&format!("Created column {}", id).into());
        }
    }

    pub fn rename_column(&self, id: ColumnId, title: String) {
        self.board.maybe_update(|b| b.rename_column(id, title));
    }

    pub fn delete_column(&self, id: ColumnId) {
        let mut removed_tasks = 0;
        let mut deleted = false;
        self.board.maybe_update(|b| {
            removed_tasks = b.task_count(id);
            deleted = b.delete_column(id);
            deleted
        });
        if deleted {
            web_sys::console::log_1(&format!("Deleted column {} and {} tasks", id, removed_tasks).into());
        } else {
            web_sys::console::warn_1(&format!("Column {} not found, nothing deleted", id).into());
        }
    }

    pub fn create_task(&self, column_id: ColumnId) {
        let mut created = None;
        self.board.maybe_update(|b| {
            created = b.create_task(column_id);
            created.is_some()
        });
        match created {
            Some(id) => web_sys::console::log_1(&format!("Created task {} in column {}", id, column_id).into()),
            None => web_sys::console::warn_1(&format!("Column {} not found, task not created", column_id).into()),
        }
    }

    pub fn update_task(&self, id: TaskId, content: String) {
        self.board.maybe_update(|b| b.update_task(id, content));
    }

    pub fn delete_task(&self, id: TaskId) {
        let mut deleted = false;
        self.board.maybe_update(|b| {
            deleted = b.delete_task(id);
            deleted
        });
        if deleted {
            web_sys::console::log_1(&format!("Deleted task {}", id).into());
        }
    }

    pub fn drag_over(&self, active: &DragItem, over: Option<&DragItem>) {
        self.board.maybe_update(|b| b.drag_over(active, over));
    }

    /// Ends the drag in `session`; the session is idle afterwards.
    pub fn drag_end(&self, session: &mut DragSession, over: Option<&DragItem>) -> bool {
        let mut moved = false;
        self.board.maybe_update(|b| {
            moved = b.drag_end(session, over);
            moved
        });
        moved
    }
}
