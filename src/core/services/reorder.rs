use crate::core::models::{DragItem, DragSession};
use crate::core::services::Board;

/// Moves the element at `from` to `to`, shifting everything in between by
/// one. Out-of-range indices leave the list untouched.
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from >= items.len() || to >= items.len() || from == to {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

impl Board {
    /// Live task repositioning while the pointer moves over targets.
    ///
    /// Only tasks are handled here. A task hovering another task takes that
    /// task's column and index; a task hovering a column's empty area takes
    /// the column and keeps its index. Changes are committed immediately and
    /// survive a cancelled drag.
    pub fn drag_over(&mut self, active: &DragItem, over: Option<&DragItem>) -> bool {
        let Some(over) = over else {
            return false;
        };
        if active.id() == over.id() {
            return false;
        }
        let DragItem::Task(active_task) = active else {
            return false;
        };
        let Some(active_index) = self.task_index(active_task.id) else {
            return false;
        };

        match over {
            DragItem::Task(over_task) => {
                let Some(over_index) = self.task_index(over_task.id) else {
                    return false;
                };
                let target_column = self.tasks[over_index].column_id;
                let reparented = self.tasks[active_index].column_id != target_column;
                self.tasks[active_index].column_id = target_column;
                array_move(&mut self.tasks, active_index, over_index);
                reparented || active_index != over_index
            }
            DragItem::Column(over_column) => {
                if self.column_index(over_column.id).is_none() {
                    return false;
                }
                let task = &mut self.tasks[active_index];
                if task.column_id == over_column.id {
                    return false;
                }
                task.column_id = over_column.id;
                true
            }
        }
    }

    /// Finishes the drag gesture and commits a column move.
    ///
    /// The session is reset on every path. Tasks were already settled by
    /// `drag_over`, so only a dragged column can change anything here. A
    /// column released over a task lands at that task's column.
    pub fn drag_end(&mut self, session: &mut DragSession, over: Option<&DragItem>) -> bool {
        let Some(active) = session.finish() else {
            return false;
        };
        let Some(over) = over else {
            return false;
        };
        if active.id() == over.id() {
            return false;
        }
        let DragItem::Column(active_column) = active else {
            return false;
        };

        let target_column = match over {
            DragItem::Column(column) => column.id,
            DragItem::Task(task) => match self.task(task.id) {
                Some(current) => current.column_id,
                None => return false,
            },
        };
        let (Some(from), Some(to)) = (
            self.column_index(active_column.id),
            self.column_index(target_column),
        ) else {
            return false;
        };
        if from == to {
            return false;
        }
        array_move(&mut self.columns, from, to);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{ColumnId, Task, TaskId};

    fn column_item(board: &Board, id: ColumnId) -> DragItem {
        DragItem::Column(board.column(id).cloned().unwrap())
    }

    fn task_item(board: &Board, id: TaskId) -> DragItem {
        DragItem::Task(board.task(id).cloned().unwrap())
    }

    fn task_order(board: &Board) -> Vec<TaskId> {
        board.tasks().iter().map(|t| t.id).collect()
    }

    #[test]
    fn array_move_shifts_intervening_elements() {
        let mut items = vec!['a', 'b', 'c', 'd', 'e'];
        array_move(&mut items, 0, 3);
        assert_eq!(items, vec!['b', 'c', 'd', 'a', 'e']);

        array_move(&mut items, 4, 1);
        assert_eq!(items, vec!['b', 'e', 'c', 'd', 'a']);
    }

    #[test]
    fn array_move_ignores_out_of_range() {
        let mut items = vec![1, 2, 3];
        array_move(&mut items, 5, 0);
        array_move(&mut items, 0, 3);
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn column_drop_moves_to_target_index() {
        let mut board = Board::default();
        let ids: Vec<ColumnId> = (0..4).map(|_| board.create_column()).collect();
        let mut session = DragSession::default();
        session.start(column_item(&board, ids[0]));
        let over = column_item(&board, ids[2]);

        assert!(board.drag_end(&mut session, Some(&over)));

        assert_eq!(board.column_ids(), vec![ids[1], ids[2], ids[0], ids[3]]);
        assert!(!session.is_dragging());
    }

    #[test]
    fn column_drop_backwards() {
        let mut board = Board::default();
        let ids: Vec<ColumnId> = (0..3).map(|_| board.create_column()).collect();
        let mut session = DragSession::default();
        session.start(column_item(&board, ids[2]));
        let over = column_item(&board, ids[0]);

        assert!(board.drag_end(&mut session, Some(&over)));
        assert_eq!(board.column_ids(), vec![ids[2], ids[0], ids[1]]);
    }

    #[test]
    fn column_drop_over_task_uses_task_column() {
        let mut board = Board::default();
        let ids: Vec<ColumnId> = (0..3).map(|_| board.create_column()).collect();
        let task = board.create_task(ids[2]).unwrap();
        let mut session = DragSession::default();
        session.start(column_item(&board, ids[0]));
        let over = task_item(&board, task);

        assert!(board.drag_end(&mut session, Some(&over)));
        assert_eq!(board.column_ids(), vec![ids[1], ids[2], ids[0]]);
    }

    #[test]
    fn drop_on_self_or_nothing_changes_nothing() {
        let mut board = Board::default();
        let a = board.create_column();
        board.create_column();
        let task = board.create_task(a).unwrap();
        let snapshot = board.clone();

        let mut session = DragSession::default();
        session.start(column_item(&board, a));
        let same = column_item(&board, a);
        assert!(!board.drag_end(&mut session, Some(&same)));
        assert!(!session.is_dragging());

        session.start(column_item(&board, a));
        assert!(!board.drag_end(&mut session, None));
        assert!(!session.is_dragging());

        let dragged = task_item(&board, task);
        assert!(!board.drag_over(&dragged, None));
        assert!(!board.drag_over(&dragged, Some(&dragged.clone())));

        assert_eq!(board, snapshot);
    }

    #[test]
    fn task_drop_does_not_touch_columns() {
        let mut board = Board::default();
        let a = board.create_column();
        let b = board.create_column();
        let task = board.create_task(a).unwrap();
        let mut session = DragSession::default();
        session.start(task_item(&board, task));
        let over = column_item(&board, b);

        assert!(!board.drag_end(&mut session, Some(&over)));
        assert_eq!(board.column_ids(), vec![a, b]);
        assert!(!session.is_dragging());
    }

    #[test]
    fn drag_end_without_session_is_noop() {
        let mut board = Board::default();
        let a = board.create_column();
        let b = board.create_column();
        let mut session = DragSession::default();
        let over = column_item(&board, b);

        assert!(!board.drag_end(&mut session, Some(&over)));
        assert_eq!(board.column_ids(), vec![a, b]);
    }

    #[test]
    fn task_over_task_takes_column_and_index() {
        let mut board = Board::default();
        let a = board.create_column();
        let b = board.create_column();
        let t0 = board.create_task(a).unwrap();
        let t1 = board.create_task(a).unwrap();
        let u0 = board.create_task(b).unwrap();
        let u1 = board.create_task(b).unwrap();

        let active = task_item(&board, t0);
        let over = task_item(&board, u1);
        assert!(board.drag_over(&active, Some(&over)));

        assert_eq!(board.task(t0).map(|t| t.column_id), Some(b));
        assert_eq!(task_order(&board), vec![t1, u0, u1, t0]);
        assert_eq!(board.task_ids_for_column(b), vec![u0, u1, t0]);
        assert_eq!(board.task_ids_for_column(a), vec![t1]);
    }

    #[test]
    fn task_over_task_within_column_reorders() {
        let mut board = Board::default();
        let a = board.create_column();
        let t0 = board.create_task(a).unwrap();
        let t1 = board.create_task(a).unwrap();
        let t2 = board.create_task(a).unwrap();

        let active = task_item(&board, t2);
        let over = task_item(&board, t0);
        assert!(board.drag_over(&active, Some(&over)));

        assert_eq!(task_order(&board), vec![t2, t0, t1]);
        assert!(board.tasks().iter().all(|t| t.column_id == a));
    }

    #[test]
    fn task_over_column_reparents_without_reordering() {
        let mut board = Board::default();
        let a = board.create_column();
        let b = board.create_column();
        let t0 = board.create_task(a).unwrap();
        let t1 = board.create_task(a).unwrap();
        let t2 = board.create_task(b).unwrap();

        let active = task_item(&board, t1);
        let over = column_item(&board, b);
        assert!(board.drag_over(&active, Some(&over)));

        assert_eq!(task_order(&board), vec![t0, t1, t2]);
        assert_eq!(board.task(t1).map(|t| t.column_id), Some(b));
        assert_eq!(board.task_ids_for_column(b), vec![t1, t2]);

        // Hovering the same column again is a no-op.
        let active = task_item(&board, t1);
        assert!(!board.drag_over(&active, Some(&over)));
    }

    #[test]
    fn task_over_unknown_column_is_ignored() {
        let mut board = Board::default();
        let a = board.create_column();
        let task = board.create_task(a).unwrap();
        let snapshot = board.clone();
        let ghost = DragItem::Column(crate::core::models::Column::new("Ghost".to_string()));

        assert!(!board.drag_over(&task_item(&board, task), Some(&ghost)));
        assert_eq!(board, snapshot);
    }

    #[test]
    fn column_drag_over_is_ignored() {
        let mut board = Board::default();
        let a = board.create_column();
        let b = board.create_column();
        let snapshot = board.clone();

        let active = column_item(&board, a);
        let over = column_item(&board, b);
        assert!(!board.drag_over(&active, Some(&over)));
        assert_eq!(board, snapshot);
    }

    #[test]
    fn reparenting_survives_cancelled_drag() {
        let mut board = Board::default();
        let a = board.create_column();
        let b = board.create_column();
        let task = board.create_task(a).unwrap();
        let mut session = DragSession::default();
        session.start(task_item(&board, task));

        let over = column_item(&board, b);
        let active = session.active().cloned().unwrap();
        assert!(board.drag_over(&active, Some(&over)));
        assert!(!board.drag_end(&mut session, None));

        assert_eq!(board.task(task).map(|t| t.column_id), Some(b));
    }

    #[test]
    fn stale_active_record_still_resolves_by_id() {
        let mut board = Board::default();
        let a = board.create_column();
        let b = board.create_column();
        let c = board.create_column();
        let task = board.create_task(a).unwrap();
        let captured = task_item(&board, task);

        assert!(board.drag_over(&captured, Some(&column_item(&board, b))));
        assert!(board.drag_over(&captured, Some(&column_item(&board, c))));
        assert_eq!(board.task(task).map(|t| t.column_id), Some(c));
    }

    #[test]
    fn create_task_then_drag_to_new_column() {
        let mut board = Board::default();
        let a = board.create_column();
        let x = board.create_task(a).unwrap();
        assert_eq!(
            board.tasks(),
            &[Task {
                id: x,
                column_id: a,
                content: "Task 0".to_string()
            }]
        );

        let b = board.create_column();
        assert_eq!(board.column_ids(), vec![a, b]);

        let active = task_item(&board, x);
        let over = column_item(&board, b);
        assert!(board.drag_over(&active, Some(&over)));

        assert_eq!(board.tasks().len(), 1);
        assert_eq!(board.tasks()[0].column_id, b);
        assert_eq!(board.tasks()[0].content, "Task 0");
    }
}
