use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use contracts::shared::overlay::ModalSize;
use leptos::prelude::*;
use uuid::Uuid;

/// Controlled modal: the caller owns `is_open` and flips it in `on_close`.
///
/// Nothing is mounted while closed, so content built from `children` starts
/// fresh on every open.
#[component]
pub fn Modal(
    /// Open flag owned by the caller
    #[prop(into)]
    is_open: Signal<bool>,
    /// Close request (backdrop, Escape, header close button)
    on_close: Callback<()>,
    /// Title of the modal
    #[prop(into)]
    title: Signal<String>,
    /// Width of the body, layout only
    #[prop(optional)]
    size: ModalSize,
    /// While false the modal cannot be closed (default: closable)
    #[prop(optional, into)]
    can_close: MaybeProp<bool>,
    /// Optional footer (action buttons)
    #[prop(optional)]
    footer: Option<ChildrenFn>,
    /// Modal content
    children: ChildrenFn,
) -> impl IntoView {
    let title_id = format!("modal-title-{}", Uuid::new_v4());
    let children = StoredValue::new(children);
    let footer = StoredValue::new(footer);
    let closable = Signal::derive(move || can_close.get().unwrap_or(true));

    view! {
        <Show when=move || is_open.get()>
            {
                let title_id = title_id.clone();
                view! {
                    <ModalFrame
                        on_close=on_close
                        can_close=closable
                        modal_class=size.class().to_string()
                        labelled_by=title_id.clone()
                    >
                        <div class="modal-header">
                            <h2 class="modal-title" id=title_id>{move || title.get()}</h2>
                            <button
                                class="modal-close"
                                aria-label="Close"
                                disabled=move || !closable.get()
                                on:click=move |_| {
                                    if closable.get_untracked() {
                                        on_close.run(());
                                    }
                                }
                            >
                                {icon("x")}
                            </button>
                        </div>
                        <div class="modal-body">
                            {children.with_value(|children| children())}
                        </div>
                        {footer.with_value(|footer| footer.as_ref().map(|footer| view! {
                            <div class="modal-footer">{footer()}</div>
                        }))}
                    </ModalFrame>
                }
            }
        </Show>
    }
}
