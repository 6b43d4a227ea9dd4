use leptos::prelude::*;
use leptos::html::Input;
use crate::core::models::{ColumnId, DragId, DragItem};
use crate::features::kanban::components::TaskCard;
use crate::features::kanban::hooks::{BoardHook, DragHook};

#[component]
pub fn KanbanColumn(column_id: ColumnId) -> impl IntoView {
    let board = use_context::<BoardHook>().expect("board context");
    let drag = use_context::<DragHook>().expect("drag context");

    let column = Memo::new(move |_| board.board.with(|b| b.column(column_id).cloned()));
    let title = Memo::new(move |_| column.with(|c| c.as_ref().map(|c| c.title.clone()).unwrap_or_default()));
    let task_ids = Memo::new(move |_| board.board.with(|b| b.task_ids_for_column(column_id)));
    let task_count = move || task_ids.with(|ids| ids.len());

    let (edit_mode, set_edit_mode) = signal(false);
    let is_placeholder = move || drag.is_active(DragId::Column(column_id));

    let title_ref: NodeRef<Input> = NodeRef::new();
    Effect::new(move |_| {
        if let Some(input) = title_ref.get() {
            let _ = input.focus();
        }
    });

    view! {
        <div
            class="kanban-column"
            class:dragging-placeholder=is_placeholder
            on:mouseover=move |ev| {
                ev.stop_propagation();
                if let Some(column) = column.get_untracked() {
                    drag.hover(Some(DragItem::Column(column)));
                }
            }
        >
            <div
                class="column-header"
                on:mousedown=move |ev| {
                    if edit_mode.get_untracked() {
                        return;
                    }
                    if let Some(column) = column.get_untracked() {
                        drag.press(DragItem::Column(column), &ev);
                    }
                }
                on:click=move |_| {
                    if !drag.drag_just_ended.get_untracked() {
                        set_edit_mode.set(true);
                    }
                }
            >
                <span class="task-count">{task_count}</span>
                {move || if edit_mode.get() {
                    view! {
                        <input
                            node_ref=title_ref
                            class="column-title-input"
                            type="text"
                            prop:value=move || title.get()
                            on:input=move |ev| board.rename_column(column_id, event_target_value(&ev))
                            on:blur=move |_| set_edit_mode.set(false)
                            on:keydown=move |ev| {
                                if ev.key() == "Enter" {
                                    set_edit_mode.set(false);
                                }
                            }
                        />
                    }.into_any()
                } else {
                    view! { <h3 class="column-title">{move || title.get()}</h3> }.into_any()
                }}
                <button
                    class="column-delete-btn"
                    title="Delete column"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        board.delete_column(column_id);
                    }
                >"🗑"</button>
            </div>
            <div class="column-content">
                <For
                    each=move || task_ids.get()
                    key=|id| *id
                    let:task_id
                >
                    <TaskCard task_id=task_id />
                </For>
            </div>
            <button class="add-task-btn" on:click=move |_| board.create_task(column_id)>
                "🞦 Add task"
            </button>
        </div>
    }
}
