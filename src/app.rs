use leptos::prelude::*;
use crate::core::services::BoardConfig;
use crate::features::kanban::KanbanBoard;

#[component]
pub fn App() -> impl IntoView {
    provide_context(BoardConfig::load_from_document());

    view! {
        <main class="app">
            <KanbanBoard />
        </main>
    }
}
