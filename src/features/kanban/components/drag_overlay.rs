use leptos::prelude::*;
use crate::core::models::DragItem;
use crate::features::kanban::hooks::{BoardHook, DragHook};

/// Floating copy of the dragged column or task that follows the pointer.
#[component]
pub fn DragOverlay() -> impl IntoView {
    let board = use_context::<BoardHook>().expect("board context");
    let drag = use_context::<DragHook>().expect("drag context");

    let position = move || {
        let (x, y) = drag.pointer.get();
        format!("left: {}px; top: {}px;", x, y)
    };

    move || {
        drag.session.with(|s| s.active().cloned()).map(|item| match item {
            DragItem::Column(column) => {
                let column_id = column.id;
                let title = move || {
                    board.board.with(|b| b.column(column_id).map(|c| c.title.clone()))
                        .unwrap_or_else(|| column.title.clone())
                };
                let tasks = move || board.board.with(|b| b.tasks_for_column(column_id));
                view! {
                    <div class="drag-overlay kanban-column" style=position>
                        <div class="column-header">
                            <span class="task-count">{move || tasks().len()}</span>
                            <h3 class="column-title">{title}</h3>
                        </div>
                        <div class="column-content">
                            {move || tasks().into_iter().map(|task| view! {
                                <div class="task-card">
                                    <p class="task-content">{task.content}</p>
                                </div>
                            }).collect::<Vec<_>>()}
                        </div>
                    </div>
                }.into_any()
            }
            DragItem::Task(task) => {
                let task_id = task.id;
                let content = move || {
                    board.board.with(|b| b.task(task_id).map(|t| t.content.clone()))
                        .unwrap_or_else(|| task.content.clone())
                };
                view! {
                    <div class="drag-overlay task-card" style=position>
                        <p class="task-content">{content}</p>
                    </div>
                }.into_any()
            }
        })
    }
}
