use crate::shared::icons::icon;
use contracts::shared::form_field::resolved_input_type;
use leptos::prelude::*;
use uuid::Uuid;

/// Input component with label, error text and a password visibility toggle
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "password", "email", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Validation message supplied by the caller
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// Disabled state
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// ID for the input element (generated when omitted)
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Autocomplete attribute
    #[prop(optional, into)]
    autocomplete: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    // Local to this instance, never lifted
    let password_visible = RwSignal::new(false);

    let input_id = id
        .get_untracked()
        .unwrap_or_else(|| format!("input-{}", Uuid::new_v4()));
    let error_id = format!("{input_id}-error");
    let described_by = error_id.clone();
    let base_type = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let is_password = move || base_type() == "password";
    let effective_type =
        move || resolved_input_type(&base_type(), password_visible.get()).to_string();
    let has_error = move || error.get().is_some_and(|e| !e.is_empty());
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_autocomplete = move || autocomplete.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class="form__group" class:form__group--error=has_error>
            {
                let input_id = input_id.clone();
                move || label.get().map(|l| view! {
                    <label class="form__label" for=input_id.clone()>
                        {l}
                        {required.then(|| view! { <span class="form__required">"*"</span> })}
                    </label>
                })
            }
            <div class="form__input-wrapper">
                <input
                    id=input_id.clone()
                    class=move || format!("form__input {}", additional_class())
                    type=effective_type
                    prop:value=move || value.get()
                    placeholder=input_placeholder
                    disabled=move || disabled.get().unwrap_or(false)
                    required=required
                    autocomplete=input_autocomplete
                    aria-invalid=move || has_error().to_string()
                    aria-describedby=move || has_error().then(|| described_by.clone())
                    on:input=move |ev| {
                        if let Some(handler) = on_input {
                            handler.run(event_target_value(&ev));
                        }
                    }
                />
                <Show when=is_password>
                    <button
                        type="button"
                        class="form__password-toggle"
                        aria-label=move || if password_visible.get() { "Hide password" } else { "Show password" }
                        on:click=move |_| password_visible.update(|v| *v = !*v)
                    >
                        {move || if password_visible.get() { icon("eye-off") } else { icon("eye") }}
                    </button>
                </Show>
            </div>
            {move || error.get().filter(|e| !e.is_empty()).map(|e| view! {
                <p class="form__error" id=error_id.clone()>{e}</p>
            })}
        </div>
    }
}
