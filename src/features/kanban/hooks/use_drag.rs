//! Pointer-driven drag-and-drop for the board.
//!
//! A press on a draggable only records a pending item. The drag starts once
//! the pointer has travelled past the activation distance, so a plain click
//! still reaches the element. Hover targets report themselves on `mouseover`
//! and the document-level `mouseup` ends the gesture.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::core::models::{DragId, DragItem, DragSession};
use crate::features::kanban::hooks::BoardHook;

/// How long clicks are swallowed after a drop.
const CLICK_SUPPRESS_MS: u32 = 100;

#[derive(Clone, Copy)]
pub struct DragHook {
    board: BoardHook,
    pub session: RwSignal<DragSession>,
    /// Current drop target, `None` when over nothing droppable.
    pub over: RwSignal<Option<DragItem>>,
    /// Pressed item that has not moved far enough to count as a drag yet.
    pending: RwSignal<Option<DragItem>>,
    press_origin: RwSignal<(i32, i32)>,
    /// Pointer position while dragging, for the overlay.
    pub pointer: RwSignal<(i32, i32)>,
    pub drag_just_ended: RwSignal<bool>,
    activation_distance: i32,
}

pub fn use_drag(board: BoardHook, activation_distance: i32) -> DragHook {
    let hook = DragHook {
        board,
        session: RwSignal::new(DragSession::default()),
        over: RwSignal::new(None),
        pending: RwSignal::new(None),
        press_origin: RwSignal::new((0, 0)),
        pointer: RwSignal::new((0, 0)),
        drag_just_ended: RwSignal::new(false),
        activation_distance,
    };
    hook.bind_document_listeners();
    hook
}

impl DragHook {
    pub fn is_dragging(&self) -> bool {
        self.session.with(|s| s.is_dragging())
    }

    /// True while `id` is the item under the pointer's grip.
    pub fn is_active(&self, id: DragId) -> bool {
        self.session.with(|s| s.active_id() == Some(id))
    }

    /// Mousedown on a draggable. Inputs and buttons inside it never start a drag.
    pub fn press(&self, item: DragItem, ev: &web_sys::MouseEvent) {
        if ev.button() != 0 {
            return;
        }
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
            {
                return;
            }
        }
        self.pending.set(Some(item));
        self.press_origin.set((ev.client_x(), ev.client_y()));
    }

    /// Reports the element under the pointer. Fires a drag-over whenever the
    /// target changes.
    pub fn hover(&self, target: Option<DragItem>) {
        let Some(active) = self.session.with_untracked(|s| s.active().cloned()) else {
            return;
        };
        let current = self.over.with_untracked(|o| o.as_ref().map(DragItem::id));
        if current == target.as_ref().map(DragItem::id) {
            return;
        }
        self.board.drag_over(&active, target.as_ref());
        self.over.set(target);
    }

    fn begin(&self, item: DragItem) {
        web_sys::console::log_1(&format!("Drag started: {} {:?}", item.kind(), item.id()).into());
        self.pending.set(None);
        self.over.set(None);
        self.session.update(|s| s.start(item));
    }

    fn on_pointer_move(&self, ev: &web_sys::MouseEvent) {
        let position = (ev.client_x(), ev.client_y());
        if self.session.with_untracked(|s| s.is_dragging()) {
            self.pointer.set(position);
            return;
        }
        let Some(item) = self.pending.get_untracked() else {
            return;
        };
        let (start_x, start_y) = self.press_origin.get_untracked();
        let dx = (position.0 - start_x).abs();
        let dy = (position.1 - start_y).abs();
        if dx > self.activation_distance || dy > self.activation_distance {
            self.pointer.set(position);
            self.begin(item);
        }
    }

    fn on_release(&self) {
        self.pending.set(None);
        if !self.session.with_untracked(|s| s.is_dragging()) {
            return;
        }

        let over = self.over.get_untracked();
        let mut session = self.session.get_untracked();
        let moved = self.board.drag_end(&mut session, over.as_ref());
        self.session.set(session);
        self.over.set(None);
        web_sys::console::log_1(&format!("Drag ended (columns reordered: {})", moved).into());

        self.drag_just_ended.set(true);
        let flag = self.drag_just_ended;
        Timeout::new(CLICK_SUPPRESS_MS, move || flag.set(false)).forget();
    }

    fn bind_document_listeners(&self) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            web_sys::console::error_1(&"No document available, drag-and-drop disabled".into());
            return;
        };

        let hook = *self;
        let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
            hook.on_pointer_move(&ev);
        });
        let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
            hook.on_release();
        });

        if let Err(e) = document.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref()) {
            web_sys::console::error_1(&format!("Failed to bind mousemove: {:?}", e).into());
        }
        if let Err(e) = document.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref()) {
            web_sys::console::error_1(&format!("Failed to bind mouseup: {:?}", e).into());
        }
        // The board lives for the whole page session.
        on_mousemove.forget();
        on_mouseup.forget();
    }
}
