use super::{Column, ColumnId, Task, TaskId};

/// Something that can be dragged or hovered: the type tag plus its record.
#[derive(Debug, Clone, PartialEq)]
pub enum DragItem {
    Column(Column),
    Task(Task),
}

/// Typed identity of a drag item. Column and task ids never compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragId {
    Column(ColumnId),
    Task(TaskId),
}

impl DragItem {
    pub fn id(&self) -> DragId {
        match self {
            DragItem::Column(column) => DragId::Column(column.id),
            DragItem::Task(task) => DragId::Task(task.id),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            DragItem::Column(_) => "Column",
            DragItem::Task(_) => "Task",
        }
    }
}

/// The item being dragged, if any. Lives for exactly one drag gesture.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragSession {
    active: Option<DragItem>,
}

impl DragSession {
    pub fn start(&mut self, item: DragItem) {
        self.active = Some(item);
    }

    pub fn active(&self) -> Option<&DragItem> {
        self.active.as_ref()
    }

    pub fn active_id(&self) -> Option<DragId> {
        self.active.as_ref().map(DragItem::id)
    }

    pub fn active_column(&self) -> Option<&Column> {
        match &self.active {
            Some(DragItem::Column(column)) => Some(column),
            _ => None,
        }
    }

    pub fn active_task(&self) -> Option<&Task> {
        match &self.active {
            Some(DragItem::Task(task)) => Some(task),
            _ => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Ends the gesture, returning what was being dragged. Always leaves the
    /// session idle.
    pub fn finish(&mut self) -> Option<DragItem> {
        std::mem::take(&mut self.active)
    }
}
