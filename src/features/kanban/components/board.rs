use leptos::prelude::*;
use crate::core::services::BoardConfig;
use crate::features::kanban::components::{DragOverlay, KanbanColumn};
use crate::features::kanban::hooks::{use_board, use_drag};

#[component]
pub fn KanbanBoard() -> impl IntoView {
    let config = use_context::<BoardConfig>().unwrap_or_default();

    let board = use_board(&config);
    let drag = use_drag(board, config.drag_activation_distance);
    provide_context(board);
    provide_context(drag);

    let column_ids = Memo::new(move |_| board.column_ids());

    view! {
        <div
            class="kanban-board"
            class:is-dragging=move || drag.is_dragging()
            on:mouseover=move |_| drag.hover(None)
            on:mouseleave=move |_| drag.hover(None)
        >
            <div class="kanban-columns">
                <For
                    each=move || column_ids.get()
                    key=|id| *id
                    let:column_id
                >
                    <KanbanColumn column_id=column_id />
                </For>
            </div>
            <button class="add-column-btn" on:click=move |_| board.create_column()>
                "🞦 Add Column"
            </button>
            <DragOverlay />
        </div>
    }
}
