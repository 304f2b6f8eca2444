use contracts::shared::form_field::{button_disabled, LOADING_LABEL};
use leptos::prelude::*;

/// Button component with variants (primary, secondary, ghost, danger, warning) and sizes (sm, md)
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "secondary", "ghost", "danger" or "warning"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Button size: "md" (default) or "sm"
    #[prop(optional, into)]
    size: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Button type attribute
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Loading state: disables the button and swaps the content for a loading label
    #[prop(optional, into)]
    is_loading: MaybeProp<bool>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: ChildrenFn,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button--secondary",
        "ghost" => "button--ghost",
        "danger" => "button--danger",
        "warning" => "button--warning",
        _ => "button--primary",
    };

    let size_class = move || {
        if size.get().as_deref() == Some("sm") {
            "button--small"
        } else {
            ""
        }
    };

    let loading = move || is_loading.get().unwrap_or(false);
    let is_disabled = move || button_disabled(disabled.get().unwrap_or(false), loading());
    let additional_class = move || class.get().unwrap_or_default();
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=move || format!("button {} {} {}", variant_class(), size_class(), additional_class())
            class:button--loading=loading
            disabled=is_disabled
            aria-busy=move || loading().to_string()
            on:click=move |ev| {
                if is_disabled() {
                    return;
                }
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {move || if loading() {
                view! {
                    <span class="button__spinner" aria-hidden="true"></span>
                    <span>{LOADING_LABEL}</span>
                }.into_any()
            } else {
                children().into_any()
            }}
        </button>
    }
}
