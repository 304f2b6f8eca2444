use contracts::shared::overlay::{actions_enabled, backdrop_dismisses, BackdropPointer};
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Backdrop + positioned surface shared by `Modal` and `ConfirmModal`.
///
/// Renders no header or actions. Emits `on_close` for a backdrop click or
/// Escape, unless `can_close` is false.
#[component]
pub fn ModalFrame(
    /// Called when the overlay asks to be closed.
    on_close: Callback<()>,
    /// While false, backdrop and Escape do nothing (default: always closable).
    #[prop(optional, into)]
    can_close: MaybeProp<bool>,
    /// Extra classes for the surface (`div.modal`).
    #[prop(optional, into)]
    modal_class: MaybeProp<String>,
    /// `aria-labelledby` target inside the surface.
    #[prop(optional, into)]
    labelled_by: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let locked = move || !can_close.get().unwrap_or(true);
    let pressed_on_backdrop = RwSignal::new(false);

    let is_direct_backdrop_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Defer to next tick: closing removes the backdrop while its own click
    // handler is still being dispatched.
    let close_deferred = move || {
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            on_close.run(());
        });
    };

    let handle_mouse_down = move |ev: ev::MouseEvent| {
        pressed_on_backdrop.set(is_direct_backdrop_event(&ev));
    };

    let handle_click = move |ev: ev::MouseEvent| {
        let pointer = BackdropPointer {
            pressed_on_backdrop: pressed_on_backdrop.get_untracked(),
            clicked_on_backdrop: is_direct_backdrop_event(&ev),
        };
        pressed_on_backdrop.set(false);
        if backdrop_dismisses(pointer, locked()) {
            close_deferred();
        }
    };

    let escape = window_event_listener(ev::keydown, move |ev: ev::KeyboardEvent| {
        if ev.key() == "Escape" && actions_enabled(locked()) {
            close_deferred();
        }
    });
    on_cleanup(move || escape.remove());

    let surface_class = move || match modal_class.get() {
        Some(cls) if !cls.is_empty() => format!("modal {cls}"),
        _ => "modal".to_string(),
    };

    view! {
        <div
            class="modal-overlay"
            on:mousedown=handle_mouse_down
            on:click=handle_click
        >
            <div
                class=surface_class
                role="dialog"
                aria-modal="true"
                aria-labelledby=move || labelled_by.get()
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                {children()}
            </div>
        </div>
    }
}
