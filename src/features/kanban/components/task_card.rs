use leptos::prelude::*;
use leptos::html::Textarea;
use crate::core::models::{DragId, DragItem, TaskId};
use crate::features::kanban::hooks::{BoardHook, DragHook};

#[component]
pub fn TaskCard(task_id: TaskId) -> impl IntoView {
    let board = use_context::<BoardHook>().expect("board context");
    let drag = use_context::<DragHook>().expect("drag context");

    let task = Memo::new(move |_| board.board.with(|b| b.task(task_id).cloned()));
    let content = Memo::new(move |_| task.with(|t| t.as_ref().map(|t| t.content.clone()).unwrap_or_default()));

    let (edit_mode, set_edit_mode) = signal(false);
    let (mouse_is_over, set_mouse_is_over) = signal(false);
    let is_placeholder = move || drag.is_active(DragId::Task(task_id));

    let enter_edit_mode = move || {
        set_edit_mode.set(true);
        set_mouse_is_over.set(false);
    };
    let leave_edit_mode = move || set_edit_mode.set(false);

    let editor_ref: NodeRef<Textarea> = NodeRef::new();
    Effect::new(move |_| {
        if let Some(editor) = editor_ref.get() {
            let _ = editor.focus();
        }
    });

    view! {
        <div
            class="task-card"
            class:dragging-placeholder=is_placeholder
            class:editing=move || edit_mode.get()
            on:mouseenter=move |_| set_mouse_is_over.set(true)
            on:mouseleave=move |_| set_mouse_is_over.set(false)
            on:mouseover=move |ev| {
                ev.stop_propagation();
                if let Some(task) = task.get_untracked() {
                    drag.hover(Some(DragItem::Task(task)));
                }
            }
            on:mousedown=move |ev| {
                if edit_mode.get_untracked() {
                    return;
                }
                if let Some(task) = task.get_untracked() {
                    drag.press(DragItem::Task(task), &ev);
                }
            }
            on:click=move |_| {
                if drag.drag_just_ended.get_untracked() || edit_mode.get_untracked() {
                    return;
                }
                enter_edit_mode();
            }
        >
            {move || if edit_mode.get() {
                view! {
                    <textarea
                        node_ref=editor_ref
                        class="task-editor"
                        placeholder="Task content here"
                        prop:value=move || content.get()
                        on:input=move |ev| board.update_task(task_id, event_target_value(&ev))
                        on:blur=move |_| leave_edit_mode()
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" && ev.shift_key() {
                                ev.prevent_default();
                                leave_edit_mode();
                            }
                        }
                    ></textarea>
                }.into_any()
            } else {
                view! {
                    <p class="task-content">{move || content.get()}</p>
                    <Show when=move || mouse_is_over.get() && !drag.is_dragging()>
                        <button
                            class="task-delete-btn"
                            title="Delete task"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                board.delete_task(task_id);
                            }
                        >"🗑"</button>
                    </Show>
                }.into_any()
            }}
        </div>
    }
}
