use crate::core::models::{Column, ColumnId, Task, TaskId};
use crate::core::services::BoardConfig;

/// Columns and tasks of one board, both in display order.
///
/// Every mutation is total: an unknown id is a silent no-op. Mutations report
/// whether anything changed so callers can skip redundant notifications.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    pub(crate) columns: Vec<Column>,
    pub(crate) tasks: Vec<Task>,
    column_title_prefix: String,
    task_content_prefix: String,
}

impl Default for Board {
    fn default() -> Self {
        Self::from_config(&BoardConfig::default())
    }
}

impl Board {
    /// Empty board using the configured default names, seeded with the
    /// configured initial columns.
    pub fn from_config(config: &BoardConfig) -> Self {
        let mut board = Self {
            columns: Vec::new(),
            tasks: Vec::new(),
            column_title_prefix: config.column_title_prefix.clone(),
            task_content_prefix: config.task_content_prefix.clone(),
        };
        for title in &config.initial_columns {
            board.columns.push(Column::new(title.clone()));
        }
        board
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn column_ids(&self) -> Vec<ColumnId> {
        self.columns.iter().map(|c| c.id).collect()
    }

    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub(crate) fn column_index(&self, id: ColumnId) -> Option<usize> {
        self.columns.iter().position(|c| c.id == id)
    }

    pub(crate) fn task_index(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Tasks belonging to `column_id`, in task-list order.
    pub fn tasks_for_column(&self, column_id: ColumnId) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.column_id == column_id)
            .cloned()
            .collect()
    }

    pub fn task_ids_for_column(&self, column_id: ColumnId) -> Vec<TaskId> {
        self.tasks
            .iter()
            .filter(|t| t.column_id == column_id)
            .map(|t| t.id)
            .collect()
    }

    pub fn task_count(&self, column_id: ColumnId) -> usize {
        self.tasks.iter().filter(|t| t.column_id == column_id).count()
    }

    /// Appends a column titled "<prefix> N", N being the new column count.
    pub fn create_column(&mut self) -> ColumnId {
        let title = format!("{} {}", self.column_title_prefix, self.columns.len() + 1);
        let column = Column::new(title);
        let id = column.id;
        self.columns.push(column);
        id
    }

    pub fn rename_column(&mut self, id: ColumnId, title: String) -> bool {
        match self.columns.iter_mut().find(|c| c.id == id) {
            Some(column) => {
                column.update_title(title);
                true
            }
            None => false,
        }
    }

    /// Removes the column and every task that belonged to it.
    pub fn delete_column(&mut self, id: ColumnId) -> bool {
        let before = self.columns.len();
        self.columns.retain(|c| c.id != id);
        if self.columns.len() == before {
            return false;
        }
        self.tasks.retain(|t| t.column_id != id);
        true
    }

    /// Appends a task titled "<prefix> N", N being the task count before the
    /// insert. Returns `None` when the column does not exist.
    pub fn create_task(&mut self, column_id: ColumnId) -> Option<TaskId> {
        self.column(column_id)?;
        let content = format!("{} {}", self.task_content_prefix, self.tasks.len());
        let task = Task::new(column_id, content);
        let id = task.id;
        self.tasks.push(task);
        Some(id)
    }

    pub fn update_task(&mut self, id: TaskId, content: String) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.update_content(content);
                true
            }
            None => false,
        }
    }

    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }
}
