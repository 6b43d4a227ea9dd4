pub mod column;
pub mod drag;
pub mod task;

pub use column::{Column, ColumnId};
pub use drag::{DragId, DragItem, DragSession};
pub use task::{Task, TaskId};
