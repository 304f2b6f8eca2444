use contracts::shared::form_field::options_with_placeholder;
use leptos::prelude::*;
use uuid::Uuid;

/// Select component with label support.
///
/// Always leads with a disabled placeholder option (value `""`), so an
/// untouched select never reads as filled.
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value (`""` = nothing chosen)
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Placeholder text (default: "Select an option")
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Validation message supplied by the caller
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// Disabled state
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// ID for the select element (generated when omitted)
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let select_id = id
        .get_untracked()
        .unwrap_or_else(|| format!("select-{}", Uuid::new_v4()));
    let label_for = select_id.clone();
    let additional_class = move || class.get().unwrap_or_default();
    let has_error = move || error.get().is_some_and(|e| !e.is_empty());
    let all_options = move || {
        let placeholder = placeholder
            .get()
            .unwrap_or_else(|| "Select an option".to_string());
        options_with_placeholder(&placeholder, options.get())
    };

    view! {
        <div class="form__group" class:form__group--error=has_error>
            {move || label.get().map(|l| view! {
                <label class="form__label" for=label_for.clone()>
                    {l}
                    {required.then(|| view! { <span class="form__required">"*"</span> })}
                </label>
            })}
            <select
                id=select_id
                class=move || format!("form__select {}", additional_class())
                disabled=move || disabled.get().unwrap_or(false)
                required=required
                aria-invalid=move || has_error().to_string()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                <For
                    each=all_options
                    key=|opt| opt.value.clone()
                    children=move |opt| {
                        let opt_value = opt.value.clone();
                        let is_selected = move || value.get() == opt_value;
                        view! {
                            <option
                                value=opt.value
                                disabled=opt.disabled
                                hidden=opt.disabled
                                selected=is_selected
                            >
                                {opt.label}
                            </option>
                        }
                    }
                />
            </select>
            {move || error.get().filter(|e| !e.is_empty()).map(|e| view! {
                <p class="form__error">{e}</p>
            })}
        </div>
    }
}
