use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use contracts::shared::overlay::{
    actions_enabled, route_confirm_action, ConfirmAction, ConfirmCallback, ConfirmVariant,
    ModalSize,
};
use leptos::prelude::*;

/// Confirmation dialog with a fixed cancel/confirm pair.
///
/// While `is_loading` is true both buttons, the backdrop and Escape are inert.
/// That is the only protection against a double submit.
#[component]
pub fn ConfirmModal(
    #[prop(into)]
    is_open: Signal<bool>,
    /// Cancel, backdrop, Escape
    on_close: Callback<()>,
    on_confirm: Callback<()>,
    #[prop(into)]
    title: Signal<String>,
    #[prop(into)]
    message: Signal<String>,
    #[prop(optional)]
    variant: ConfirmVariant,
    #[prop(optional, into)]
    confirm_text: MaybeProp<String>,
    #[prop(optional, into)]
    cancel_text: MaybeProp<String>,
    #[prop(optional, into)]
    is_loading: MaybeProp<bool>,
) -> impl IntoView {
    let loading = Signal::derive(move || is_loading.get().unwrap_or(false));
    let can_close = Signal::derive(move || actions_enabled(loading.get()));

    let route = move |action: ConfirmAction| {
        match route_confirm_action(action, loading.get_untracked()) {
            Some(ConfirmCallback::Close) => on_close.run(()),
            Some(ConfirmCallback::Confirm) => on_confirm.run(()),
            None => log::debug!("confirm dialog busy, {:?} ignored", action),
        }
    };
    let cancel = Callback::new(move |_: leptos::ev::MouseEvent| route(ConfirmAction::Cancel));
    let confirm = Callback::new(move |_: leptos::ev::MouseEvent| route(ConfirmAction::Confirm));
    let dismiss = Callback::new(move |_| route(ConfirmAction::Dismiss));

    view! {
        <Show when=move || is_open.get()>
            <ModalFrame
                on_close=dismiss
                can_close=can_close
                modal_class=format!("{} confirm-modal {}", ModalSize::Sm.class(), variant.class())
            >
                <div class="confirm-modal__body">
                    <div class="confirm-modal__icon">{icon(variant.icon())}</div>
                    <h2 class="confirm-modal__title">{move || title.get()}</h2>
                    <p class="confirm-modal__message">{move || message.get()}</p>
                </div>
                <div class="confirm-modal__actions">
                    <Button variant="secondary" disabled=loading on_click=cancel>
                        {move || cancel_text.get().unwrap_or_else(|| "Cancel".to_string())}
                    </Button>
                    <Button
                        variant=variant.confirm_button_variant()
                        is_loading=loading
                        on_click=confirm
                    >
                        {move || confirm_text.get().unwrap_or_else(|| "Confirm".to_string())}
                    </Button>
                </div>
            </ModalFrame>
        </Show>
    }
}
