use leptos::prelude::*;
use uuid::Uuid;

/// Checkbox component
#[component]
pub fn Checkbox(
    /// Label text
    #[prop(into)]
    label: Signal<String>,
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    /// Disabled state
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Validation message supplied by the caller
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// ID for the checkbox element (generated when omitted)
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes for wrapper
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let checkbox_id = id
        .get_untracked()
        .unwrap_or_else(|| format!("checkbox-{}", Uuid::new_v4()));
    let error_id = format!("{checkbox_id}-error");
    let described_by = error_id.clone();
    let has_error = move || error.get().is_some_and(|e| !e.is_empty());
    let is_disabled = move || disabled.get().unwrap_or(false);
    let additional_class = move || class.get().unwrap_or_default();
    let wrapper_class = move || {
        if is_disabled() {
            format!(
                "form__checkbox-wrapper form__checkbox-wrapper--disabled {}",
                additional_class()
            )
        } else {
            format!("form__checkbox-wrapper {}", additional_class())
        }
    };

    view! {
        <div class=wrapper_class>
            <label class="form__checkbox-label" for=checkbox_id.clone()>
                <input
                    id=checkbox_id.clone()
                    type="checkbox"
                    class="form__checkbox"
                    prop:checked=move || checked.get()
                    disabled=is_disabled
                    aria-invalid=move || has_error().to_string()
                    aria-describedby=move || has_error().then(|| described_by.clone())
                    on:change=move |ev| {
                        if let Some(handler) = on_change {
                            handler.run(event_target_checked(&ev));
                        }
                    }
                />
                {label}
            </label>
            {move || error.get().filter(|e| !e.is_empty()).map(|e| view! {
                <p class="form__error" id=error_id.clone()>{e}</p>
            })}
        </div>
    }
}
