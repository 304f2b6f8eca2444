//! Controlled form field contract.
//!
//! Callers own value, error, disabled and loading. Nothing here validates;
//! `error` is opaque text supplied by whoever does.

/// Text shown in place of a button's children while it is loading.
pub const LOADING_LABEL: &str = "Loading...";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldState<T = String> {
    pub value: T,
    pub error: Option<String>,
    pub disabled: bool,
    pub loading: bool,
}

impl<T> FieldState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            error: None,
            disabled: false,
            loading: false,
        }
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error.filter(|e| !e.is_empty());
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Effective disabled flag: loading always disables.
    pub fn is_disabled(&self) -> bool {
        button_disabled(self.disabled, self.loading)
    }
}

/// Loading overrides whatever the caller passed for `disabled`.
pub fn button_disabled(disabled: bool, is_loading: bool) -> bool {
    disabled || is_loading
}

/// `type` attribute for an input, honouring the password visibility toggle.
pub fn resolved_input_type(input_type: &str, password_visible: bool) -> &str {
    if input_type == "password" && password_visible {
        "text"
    } else {
        input_type
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }
}

/// Options for a `<select>`, led by a non-selectable placeholder whose value is
/// empty. Real options with an empty value are dropped so the placeholder stays
/// the only "nothing chosen" entry.
pub fn options_with_placeholder(
    placeholder: &str,
    options: impl IntoIterator<Item = (String, String)>,
) -> Vec<SelectOption> {
    let mut out = vec![SelectOption {
        value: String::new(),
        label: placeholder.to_string(),
        disabled: true,
    }];
    out.extend(
        options
            .into_iter()
            .filter(|(value, _)| !value.is_empty())
            .map(|(value, label)| SelectOption::new(value, label)),
    );
    out
}

/// A select counts as filled only when a real option was chosen.
pub fn select_is_filled(value: &str) -> bool {
    !value.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_forces_disabled() {
        assert!(button_disabled(false, true));
        assert!(button_disabled(true, false));
        assert!(!button_disabled(false, false));

        let mut field = FieldState::new("x".to_string());
        field.loading = true;
        assert!(field.is_disabled());
    }

    #[test]
    fn test_error_is_passthrough() {
        let mut field = FieldState::new(String::new());
        field.set_error(Some("Email is required".to_string()));
        assert_eq!(field.error.as_deref(), Some("Email is required"));

        field.set_error(Some(String::new()));
        assert!(!field.has_error());
    }

    #[test]
    fn test_password_toggle_type() {
        assert_eq!(resolved_input_type("password", false), "password");
        assert_eq!(resolved_input_type("password", true), "text");
        assert_eq!(resolved_input_type("email", true), "email");
    }

    #[test]
    fn test_placeholder_is_first_and_disabled() {
        let options = options_with_placeholder(
            "Choose a plan",
            vec![
                ("basic".to_string(), "Basic".to_string()),
                (String::new(), "Broken".to_string()),
                ("premium".to_string(), "Premium".to_string()),
            ],
        );
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].value, "");
        assert!(options[0].disabled);
        assert!(options[1..].iter().all(|o| !o.disabled && !o.value.is_empty()));
        assert!(!select_is_filled(&options[0].value));
        assert!(select_is_filled(&options[1].value));
    }
}
